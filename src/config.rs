//! Session configuration
//!
//! Configuration is layered: defaults, then an optional TOML file, then any
//! command-line overrides applied through the builder methods.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Symbol};

/// How the automated player picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move
    Random,
    /// Exhaustive minimax search
    #[default]
    Optimal,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Difficulty::Random),
            "optimal" | "hard" => Ok(Difficulty::Optimal),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

/// Parameters of one game session.
///
/// # Examples
///
/// ```
/// use noughts::config::{Difficulty, SessionConfig};
/// use noughts::tictactoe::Symbol;
///
/// let config = SessionConfig::default()
///     .with_difficulty(Difficulty::Random)
///     .with_human_symbol(Symbol::O)
///     .with_seed(42);
/// assert_eq!(config.automated_symbol(), Symbol::X);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Strategy of the automated player
    pub difficulty: Difficulty,
    /// Symbol controlled by the human; the automated player takes the other
    pub human_symbol: Symbol,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_symbol: Symbol::X,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the automated player's difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the symbol the human plays.
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn automated_symbol(&self) -> Symbol {
        self.human_symbol.opponent()
    }
}
