//! Errors intrinsic to the arena itself, as opposed to the hunting
//! algorithm built on top of it (see `tablehunt_core::error`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("block arena exhausted: cannot allocate more than {0} blocks on a single page")]
    Capacity(u32),
}
