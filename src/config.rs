use std::path::Path;

use crate::ai::{Agent, AlphaBetaAgent, MinimaxAgent, RandomAgent};
use crate::error::ConfigError;
use crate::game::Player;

/// Which policy drives an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
    Random,
}

/// Per-color agent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub agent: AgentKind,
    pub depth: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            agent: AgentKind::AlphaBeta,
            depth: 5,
        }
    }
}

impl AgentConfig {
    /// Construct the configured agent. Depth is ignored by the random agent.
    pub fn build(&self) -> Box<dyn Agent> {
        match self.agent {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(self.depth)),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(self.depth)),
            AgentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}

/// Game-level settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: Player::Red,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub red: AgentConfig,
    pub yellow: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            red: AgentConfig::default(),
            yellow: AgentConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, agent) in [("red", &self.red), ("yellow", &self.yellow)] {
            if agent.agent != AgentKind::Random && agent.depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "{label}.depth must be > 0"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
