//! Error types for the hub scene core.
//!
//! This module provides a unified error type [`SceneError`] and a convenient
//! [`Result`] alias.

use std::fmt;

/// Main error type for the simulation core.
///
/// Recoverable introduction outcomes (excluded identifiers, unresolved
/// assets, degenerate bounds) are reported through
/// [`Introduction`](crate::scene::sequencer::Introduction) instead; this type
/// covers the conditions that must stop or redirect the frame loop.
#[derive(Debug)]
pub enum SceneError {
    /// A constraint attachment ran before the hub object was installed.
    MissingHub,
    /// The hub model has not been resolved by the asset provider yet.
    AssetNotReady(String),
    /// A mesh produced a zero-size bounding box during shape derivation.
    DegenerateBounds(String),
    /// A body reached a non-finite position or velocity while advancing.
    NonFiniteState(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingHub => write!(f, "hub object is not installed"),
            Self::AssetNotReady(id) => write!(f, "asset not ready: {id}"),
            Self::DegenerateBounds(name) => write!(f, "degenerate mesh bounds: {name}"),
            Self::NonFiniteState(what) => write!(f, "non-finite simulation state: {what}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Convenient Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SceneError>;
