//! Data model shared by the table-hunting engine: page geometry, the
//! arena-backed block tree, and the grid-position types table hunting
//! ultimately attaches back onto it.

pub mod block;
pub mod error;
pub mod geom;
pub mod grid;
pub mod page;

pub use block::{
    Arena, Block, BlockId, Char, Direction, GridBlock, Line, StandardStructure, StructuralBlock,
    TextBlock, VectorBlock, WriteMode,
};
pub use error::ArenaError;
pub use geom::{Point, Quad, Rect};
pub use grid::{GridPosition, GridPositions};
pub use page::Page;
