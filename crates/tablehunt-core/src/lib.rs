//! Table hunting: infers table grids from a page's block tree (no prior
//! tagging or hints) and rewrites the tree in place to represent them as
//! standard `Table`/`TR`/`TD` structural blocks.
//!
//! The entry point is [`hunt`], which walks a [`tablehunt_types::Page`]
//! depth-first, looking for groups of sibling blocks whose text extents
//! and, where present, drawn rules line up into a plausible grid.

mod config;
mod content;
mod emit;
mod error;
mod events;
mod grid;
mod hunt;
mod matrix;
mod reduce;
mod rules;
mod surgery;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use config::HuntOptions;
pub use error::{HuntError, HuntResult};
pub use hunt::{hunt, hunt_with_options};
