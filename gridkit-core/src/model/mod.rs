//! Row, column, and cell models for the table engine.

mod cell;
mod column;
mod row;

pub use cell::{Cell, CellDisplay, CellHandler, EffectiveValue, RichCell, Scalar};
pub use column::Column;
pub use row::Row;
