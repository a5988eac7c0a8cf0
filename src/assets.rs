//! Asset resolution
//!
//! Assets are looked up by walking from the working directory toward the
//! filesystem root, so the game finds its font whether it is launched from
//! the repo root, `target/debug`, or an installed location. A missing font is
//! recoverable: overlays degrade to the default egui fonts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// How many ancestor directories to try before giving up
const MAX_ANCESTOR_DEPTH: usize = 10;

pub const GAME_FONT_FILE: &str = "bahnschrift.ttf";
const GAME_FONT_NAME: &str = "bahnschrift";

/// Search for `file_name` in `start` and up to [`MAX_ANCESTOR_DEPTH`]
/// ancestors. Subdirectories are not searched.
pub fn find_from(start: &Path, file_name: &str) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..MAX_ANCESTOR_DEPTH {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// [`find_from`] starting at the current working directory
pub fn find_in_ancestors(file_name: &str) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_from(&cwd, file_name)
}

/// Load the game font into an egui font definition set.
///
/// Fails if the font file cannot be found or read; callers log the error and
/// keep the default fonts, the simulation is unaffected either way.
pub fn load_game_font() -> Result<egui::FontDefinitions> {
    let path = find_in_ancestors(GAME_FONT_FILE)
        .with_context(|| format!("{GAME_FONT_FILE} not found near the working directory"))?;
    let bytes =
        std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
    log::info!("Loaded font from {}", path.display());

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(GAME_FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, GAME_FONT_NAME.to_owned());
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "brickrush_assets_{tag}_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_from_walks_ancestors() {
        let root = unique_temp_dir("walk");
        std::fs::write(root.join("marker.ttf"), b"x").unwrap();
        let nested = root.join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_from(&nested, "marker.ttf").unwrap();
        assert_eq!(found, root.join("marker.ttf"));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_from_missing_file() {
        let root = unique_temp_dir("miss");
        assert!(find_from(&root, "definitely_not_here.ttf").is_none());
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_from_depth_bound() {
        let root = unique_temp_dir("deep");
        std::fs::write(root.join("deep.ttf"), b"x").unwrap();

        // Eleven levels below the marker: one past the search bound
        let mut nested = root.clone();
        for i in 0..11 {
            nested = nested.join(format!("d{i}"));
        }
        std::fs::create_dir_all(&nested).unwrap();

        assert!(find_from(&nested, "deep.ttf").is_none());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
