//! Error taxonomy. Every variant is recovered locally; none ends a session.

use std::fmt;

use crate::enums::EntityKind;

/// Errors raised by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The handle (by `to_bits` id) no longer names a live entity. Treated as a no-op.
    StaleEntityReference(u64),
    /// A collision between kinds no handler is registered for.
    InvalidCollisionPair {
        first: EntityKind,
        second: EntityKind,
    },
}

/// Errors raised by high-score storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No record has been saved yet.
    MissingSaveData,
    /// The record exists but could not be decoded.
    CorruptSaveData(String),
    /// Reading or writing the store failed.
    Io(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::StaleEntityReference(id) => write!(f, "stale entity reference {id}"),
            SimError::InvalidCollisionPair { first, second } => {
                write!(f, "no collision handler for {first:?} / {second:?}")
            }
        }
    }
}

impl std::error::Error for SimError {}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::MissingSaveData => write!(f, "no saved high score"),
            PersistenceError::CorruptSaveData(e) => write!(f, "corrupt save data: {e}"),
            PersistenceError::Io(e) => write!(f, "save storage failure: {e}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
