//! GameConfig - starting position and reward settings

use crate::color::Color;
use crate::game::{GameState, RewardPolicy};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a new game starts and how terminal states are scored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_player: Color,
    pub variant: Variant,
    pub reward: RewardPolicy,
}

impl GameConfig {
    /// Empty board with the configured player to move
    pub fn initial_state(&self) -> GameState {
        GameState::initial(self.starting_player, self.variant)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;

        if !config.reward.is_valid() {
            anyhow::bail!(
                "Reward policy must value a win ({}) above a stalemate ({})",
                config.reward.win,
                config.reward.stalemate
            );
        }

        tracing::debug!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved game config to {}", path.display());
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: Color::Red,
            variant: Variant::Mry,
            reward: RewardPolicy::default(),
        }
    }
}
