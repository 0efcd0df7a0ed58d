use thiserror::Error;

/// Failures surfaced by the strict construction paths.
///
/// Facet accessors never return these; a facet that cannot be resolved
/// falls back to its documented default or reports absence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid locale identifier: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
