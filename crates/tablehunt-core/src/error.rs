//! Errors surfaced by the hunting engine.
//!
//! Most of the failure modes spec'd for the original (allocation failure,
//! "no grid found", "candidate too small") are not `Err` cases here: a
//! failed allocation aborts the process in Rust, and a candidate that
//! doesn't look like a table is simply not a table — `hunt` walks past it
//! and leaves the block tree untouched. The one genuinely exceptional case
//! is running out of room in the block arena itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuntError {
    #[error(transparent)]
    Arena(#[from] tablehunt_types::ArenaError),
}

pub type HuntResult<T> = Result<T, HuntError>;
