//! Environment configuration for the ledger binary.
//!
//! Values come from the process environment, optionally primed from
//! `.env.local` / `.env` at the repository root. Anything that is set but
//! cannot be parsed is an error rather than a silent default.

use std::path::{Path, PathBuf};

use questledger_domain::{DomainError, ProgressionRules};

pub const SEED_PATH_VAR: &str = "LEDGER_SEED_PATH";
pub const EXP_INCREMENT_VAR: &str = "LEDGER_EXP_INCREMENT";
pub const HEALTH_PER_LEVEL_VAR: &str = "LEDGER_HEALTH_PER_LEVEL";
pub const MANA_PER_LEVEL_VAR: &str = "LEDGER_MANA_PER_LEVEL";
pub const ATTACK_PER_LEVEL_VAR: &str = "LEDGER_ATTACK_PER_LEVEL";
pub const DEFENCE_PER_LEVEL_VAR: &str = "LEDGER_DEFENCE_PER_LEVEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("Invalid progression rules: {0}")]
    Rules(#[from] DomainError),
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// JSON file with an array of characters to load into the store at startup.
    pub seed_path: Option<PathBuf>,
    pub rules: ProgressionRules,
}

impl LedgerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ProgressionRules::default();

        let rules = ProgressionRules {
            exp_increment: parse_or(&lookup, EXP_INCREMENT_VAR, defaults.exp_increment)?,
            health_per_level: parse_or(&lookup, HEALTH_PER_LEVEL_VAR, defaults.health_per_level)?,
            mana_per_level: parse_or(&lookup, MANA_PER_LEVEL_VAR, defaults.mana_per_level)?,
            attack_per_level: parse_or(&lookup, ATTACK_PER_LEVEL_VAR, defaults.attack_per_level)?,
            defence_per_level: parse_or(
                &lookup,
                DEFENCE_PER_LEVEL_VAR,
                defaults.defence_per_level,
            )?,
        }
        .validate()?;

        let seed_path = lookup(SEED_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self { seed_path, rules })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        value: raw.clone(),
        reason: e.to_string(),
    })
}

/// Load `.env.local` then `.env` from `root`, ignoring files that are absent.
///
/// Variables already present in the environment win. Files that exist but
/// fail to load are returned so the caller can report them once logging is
/// up.
pub fn load_dotenv_from(root: &Path) -> Vec<ConfigError> {
    // Prefer local overrides.
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| root.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(source) => Some(ConfigError::EnvFile { path, source }),
        })
        .collect()
}
