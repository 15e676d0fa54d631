//! Errors for the fallible boundaries around the engine.
//!
//! The reducer itself never fails: rejected actions return the input state.
//! These types cover loading rules, decoding snapshots and parsing ids.

use thiserror::Error;

/// Errors raised while loading or validating a `RulesConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// The configuration parsed but describes an unplayable game
    #[error("Invalid rules config: {0}")]
    Invalid(String),
}

/// Errors raised while encoding or decoding a stored game state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Decoded fine but the board, stones or labels disagree with each other.
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// A stone identifier that is not of the form `S<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid stone id: {0:?}")]
pub struct ParseStoneIdError(pub String);
