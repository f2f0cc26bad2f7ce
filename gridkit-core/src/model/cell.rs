//! Cell and scalar value types for table rows.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::row::Row;

/// A scalar value a cell can carry.
///
/// This is the value domain shared by plain cells and the explicit
/// comparison value of rich cells. Booleans are never treated as numbers:
/// they stringify to `"true"`/`"false"` for filtering and sorting.
///
/// # Example
///
/// ```
/// use gridkit_core::model::Scalar;
///
/// let name = Scalar::from("Contoso");
/// let age = Scalar::from(30);
/// let active = Scalar::from(true);
/// let empty = Scalar::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Str(String),
}

impl Scalar {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Number(_) => "number",
            Scalar::Str(_) => "string",
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Null
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Scalar::Null,
        }
    }
}

/// The single scalar a cell exposes for filtering and sorting.
///
/// Numeric values stay numeric so relational filters and numeric sorting
/// work; everything else is text. Extraction is total — every cell, present
/// or absent, yields exactly one effective value.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveValue {
    /// Compared numerically.
    Number(f64),
    /// Compared as text.
    Text(String),
}

impl EffectiveValue {
    /// Returns `true` for the numeric variant.
    pub fn is_number(&self) -> bool {
        matches!(self, EffectiveValue::Number(_))
    }

    /// Stringifies the value the way it displays.
    ///
    /// Integral numbers render without a decimal point (`30`, not `30.0`),
    /// matching what a user sees in the table.
    pub fn to_text(&self) -> String {
        match self {
            EffectiveValue::Text(s) => s.clone(),
            EffectiveValue::Number(n) => format_number(*n),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn scalar_effective(scalar: &Scalar) -> EffectiveValue {
    match scalar {
        Scalar::Null => EffectiveValue::Text(String::new()),
        Scalar::Bool(b) => EffectiveValue::Text(b.to_string()),
        Scalar::Number(n) => EffectiveValue::Number(*n),
        Scalar::Str(s) => EffectiveValue::Text(s.clone()),
    }
}

/// Click handler attached to a rich cell.
///
/// Invoked by the rendering layer with the clicked row and cell.
pub type CellHandler = Arc<dyn Fn(&Row, &Cell) + Send + Sync>;

/// Display content of a rich cell.
///
/// The engine never looks inside `Custom` payloads — they exist for the
/// rendering layer, which downcasts them to whatever it draws.
#[derive(Clone)]
pub enum CellDisplay {
    /// Plain scalar content, shown as text.
    Scalar(Scalar),
    /// Type-erased renderer payload, opaque to the engine.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellDisplay::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            CellDisplay::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A cell with display content separated from its comparison value.
///
/// # Example
///
/// ```
/// use gridkit_core::model::RichCell;
///
/// // Shows "1.2 MB" but filters and sorts by the byte count.
/// let cell = RichCell::new("1.2 MB").value(1_258_291i64).class("size");
/// ```
#[derive(Clone)]
pub struct RichCell {
    /// What the renderer paints.
    pub display: CellDisplay,
    /// Value used for filtering and sorting instead of the display.
    pub value: Option<Scalar>,
    /// Click handler wired up by the rendering layer.
    pub on_click: Option<CellHandler>,
    /// Style tag passed through to the renderer.
    pub class: Option<String>,
}

impl RichCell {
    /// Creates a rich cell with scalar display content.
    pub fn new(display: impl Into<Scalar>) -> Self {
        Self {
            display: CellDisplay::Scalar(display.into()),
            value: None,
            on_click: None,
            class: None,
        }
    }

    /// Creates a rich cell with a type-erased renderer payload.
    pub fn custom(payload: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            display: CellDisplay::Custom(payload),
            value: None,
            on_click: None,
            class: None,
        }
    }

    /// Sets the explicit comparison/filter value.
    pub fn value(mut self, value: impl Into<Scalar>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attaches a click handler.
    pub fn on_click(mut self, handler: impl Fn(&Row, &Cell) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Sets the style tag.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl fmt::Debug for RichCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichCell")
            .field("display", &self.display)
            .field("value", &self.value)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .field("class", &self.class)
            .finish()
    }
}

/// A single table cell: either a plain scalar or a rich cell.
#[derive(Debug, Clone)]
pub enum Cell {
    /// Plain scalar cell.
    Scalar(Scalar),
    /// Rich cell with separate display and comparison value.
    Rich(RichCell),
}

impl Cell {
    /// Extracts the scalar used for filtering and sorting.
    ///
    /// Rules, in order:
    /// 1. null scalar → empty text
    /// 2. plain string/number → itself; plain bool → `"true"`/`"false"`
    /// 3. rich cell with explicit string/number value → that value, untouched
    /// 4. rich cell with bool value, or no value but scalar display → stringified
    /// 5. otherwise → empty text
    pub fn effective_value(&self) -> EffectiveValue {
        match self {
            Cell::Scalar(scalar) => scalar_effective(scalar),
            Cell::Rich(rich) => match &rich.value {
                Some(Scalar::Str(s)) => EffectiveValue::Text(s.clone()),
                Some(Scalar::Number(n)) => EffectiveValue::Number(*n),
                Some(Scalar::Bool(b)) => EffectiveValue::Text(b.to_string()),
                Some(Scalar::Null) => EffectiveValue::Text(String::new()),
                None => match &rich.display {
                    CellDisplay::Scalar(scalar) => {
                        EffectiveValue::Text(scalar_effective(scalar).to_text())
                    }
                    CellDisplay::Custom(_) => EffectiveValue::Text(String::new()),
                },
            },
        }
    }

    /// Returns the style tag, if any.
    pub fn class(&self) -> Option<&str> {
        match self {
            Cell::Scalar(_) => None,
            Cell::Rich(rich) => rich.class.as_deref(),
        }
    }

    /// Returns the click handler, if any.
    pub fn on_click(&self) -> Option<&CellHandler> {
        match self {
            Cell::Scalar(_) => None,
            Cell::Rich(rich) => rich.on_click.as_ref(),
        }
    }
}

impl From<Scalar> for Cell {
    fn from(v: Scalar) -> Self {
        Cell::Scalar(v)
    }
}

impl From<RichCell> for Cell {
    fn from(v: RichCell) -> Self {
        Cell::Rich(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Scalar(v.into())
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Scalar(v.into())
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Scalar(v.into())
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Scalar(v.into())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Scalar(v.into())
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Scalar(v.into())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Scalar(Scalar::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalars() {
        assert_eq!(
            Cell::from("abc").effective_value(),
            EffectiveValue::Text("abc".into())
        );
        assert_eq!(Cell::from(30).effective_value(), EffectiveValue::Number(30.0));
        assert_eq!(
            Cell::from(true).effective_value(),
            EffectiveValue::Text("true".into())
        );
        assert_eq!(
            Cell::Scalar(Scalar::Null).effective_value(),
            EffectiveValue::Text(String::new())
        );
    }

    #[test]
    fn test_rich_value_wins_over_display() {
        let cell = Cell::from(RichCell::new("1.2 MB").value(1_258_291i64));
        assert_eq!(cell.effective_value(), EffectiveValue::Number(1_258_291.0));
    }

    #[test]
    fn test_rich_display_fallback_is_text() {
        // A numeric display with no explicit value stringifies.
        let cell = Cell::from(RichCell::new(5i64));
        assert_eq!(cell.effective_value(), EffectiveValue::Text("5".into()));
    }

    #[test]
    fn test_rich_null_value_is_empty() {
        let cell = Cell::from(RichCell::new("shown").value(Scalar::Null));
        assert_eq!(cell.effective_value(), EffectiveValue::Text(String::new()));
    }

    #[test]
    fn test_custom_display_without_value_is_empty() {
        let cell = Cell::from(RichCell::custom(Arc::new(42u8)));
        assert_eq!(cell.effective_value(), EffectiveValue::Text(String::new()));
    }

    #[test]
    fn test_number_text_form() {
        assert_eq!(EffectiveValue::Number(30.0).to_text(), "30");
        assert_eq!(EffectiveValue::Number(30.5).to_text(), "30.5");
        assert_eq!(EffectiveValue::Number(-7.0).to_text(), "-7");
    }
}
