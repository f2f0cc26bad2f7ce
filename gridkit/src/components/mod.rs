//! Stateful components built on the pure engine.

pub mod suggest;
pub mod table;
