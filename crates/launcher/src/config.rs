use std::path::Path;

use bevy::prelude::{Resource, info, warn};
use serde::{Deserialize, Serialize};

use player_control::MovementConfig;
use player_control::weapons::Gun;

/// Everything the launcher needs to spawn a player.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub movement: MovementConfig,
    pub gun: Gun,
}

impl LaunchConfig {
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Read a RON launch file, falling back to defaults when it is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("⚠️ Could not read config {}: {}, using defaults", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_ron(&text) {
            Ok(config) => {
                info!("📄 Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("⚠️ Invalid config {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }
}
