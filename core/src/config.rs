//! Engine configuration.
//!
//! Loaded from a TOML file via confy; a missing or invalid file logs a
//! warning and falls back to defaults so the hosting session keeps running.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::compendium::PackKind;

const APP_NAME: &str = "grimoire";
const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 500;

/// Pack-name suffix markers for index classification.
///
/// Defaults match the shipped compendium naming convention; worlds with
/// renamed packs can extend the lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackMarkers {
    pub class_abilities: Vec<String>,
    pub racial_abilities: Vec<String>,
    pub spell_like: Vec<String>,
    pub materials: Vec<String>,
    pub damage_types: Vec<String>,
}

impl Default for PackMarkers {
    fn default() -> Self {
        Self {
            class_abilities: vec![".class-abilities".to_string()],
            racial_abilities: vec![".racial-abilities".to_string()],
            spell_like: vec![
                ".spelllike-abilities".to_string(),
                ".spell-like-abilities".to_string(),
                ".spelllike".to_string(),
            ],
            materials: vec![".materials".to_string()],
            damage_types: vec![".damage-types".to_string()],
        }
    }
}

impl PackMarkers {
    /// Classify a pack name against these markers.
    pub fn classify(&self, pack_name: &str) -> Option<PackKind> {
        let matches = |suffixes: &[String]| suffixes.iter().any(|s| pack_name.ends_with(s.as_str()));
        if matches(&self.class_abilities) {
            Some(PackKind::ClassAbilities)
        } else if matches(&self.racial_abilities) {
            Some(PackKind::RacialAbilities)
        } else if matches(&self.spell_like) {
            Some(PackKind::SpellLike)
        } else if matches(&self.materials) {
            Some(PackKind::Materials)
        } else if matches(&self.damage_types) {
            Some(PackKind::DamageTypes)
        } else {
            None
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quiescence window for aura collation debouncing, in milliseconds.
    pub debounce_window_ms: u64,
    pub packs: PackMarkers,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
            packs: PackMarkers::default(),
        }
    }
}

impl EngineConfig {
    /// Load from the platform config location, falling back to defaults.
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load engine config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match confy::load_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load engine config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist to the platform config location.
    pub fn save(&self) {
        if let Err(e) = confy::store(APP_NAME, None, self) {
            tracing::warn!(error = %e, "failed to save engine config");
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }
}
