//! Scan configuration and config-file loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Tunables for one scan engine instance.
///
/// Loaded once at startup and replaced wholesale on reconfiguration;
/// fields are never mutated individually while a scan runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Seconds between scans
    pub interval_secs: f32,
    /// Scan range in meters
    pub range: f32,
    /// Only scan while the observer holds a repair-capable item
    pub only_with_repair_tool: bool,
    /// Damage fraction a block must strictly exceed to be highlighted
    pub damage_threshold: f32,
    /// Skip blocks classified as terrain
    pub ignore_terrain: bool,
    /// Highlight RGBA color
    pub highlight_color: [f32; 4],
    /// Scale factor for cube-proxy highlights
    pub highlight_scale: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval_secs: 0.2,
            range: 15.0,
            only_with_repair_tool: true,
            damage_threshold: 0.0,
            ignore_terrain: false,
            highlight_color: [1.0, 0.0, 1.0, 0.5],
            highlight_scale: 1.01,
        }
    }
}

impl ScanConfig {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed. Never fails.
    pub fn load(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("config load from {} failed ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from a JSON file, surfacing IO and parse errors
    pub fn load_strict(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Clamp out-of-range values back to usable ones
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.interval_secs.is_finite() || self.interval_secs <= 0.0 {
            self.interval_secs = defaults.interval_secs;
        }
        if !self.range.is_finite() || self.range <= 0.0 {
            self.range = defaults.range;
        }
        self.damage_threshold = if self.damage_threshold.is_finite() {
            self.damage_threshold.clamp(0.0, 0.999)
        } else {
            defaults.damage_threshold
        };
        if !self.highlight_scale.is_finite() || self.highlight_scale <= 0.0 {
            self.highlight_scale = defaults.highlight_scale;
        }
        self
    }
}
