//! Game settings and collision tuning
//!
//! Persisted as JSON next to the executable's working directory (or any
//! ancestor, found with the same upward search the font loader uses).

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assets;

/// Empirical collision constants.
///
/// These are tuned values, not derived physical constants, so they are
/// exposed here instead of being baked into the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Extra reach on the brick axis checks. Catches corner hits that a fast
    /// ball would otherwise tunnel past within one step.
    pub corner_slop: f32,
    /// Fraction of the paddle width, each side of center, that redirects the
    /// ball along the aim indicator instead of reflecting it.
    pub aim_zone_frac: f32,
    /// Fraction of the paddle width kept as an outer edge band; a ball hit
    /// there while moving inward is forced back out.
    pub edge_zone_frac: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            corner_slop: 10.0,
            aim_zone_frac: 0.25,
            edge_zone_frac: 1.0 / 16.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run fullscreen at the desktop resolution
    pub fullscreen: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Collision tuning knobs
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            show_fps: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "brickrush_settings.json";

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", Self::FILE_NAME);
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("Failed to load settings, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Option<Self>> {
        let Some(path) = assets::find_in_ancestors(Self::FILE_NAME) else {
            return Ok(None);
        };
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Save settings into the current working directory
    pub fn save(&self) -> Result<PathBuf> {
        let path = std::env::current_dir()
            .context("resolving working directory")?
            .join(Self::FILE_NAME);
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(path)
    }
}
