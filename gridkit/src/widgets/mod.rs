//! Presentation-agnostic widgets.

mod spinner;

pub use spinner::Spinner;
