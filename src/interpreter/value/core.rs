use crate::{interpreter::lexer::Number, util::num::i64_to_f64};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, be printed as, or
/// be stored under a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.). In arithmetic
    /// it counts as the integer `0` or `1`.
    Bool(bool),
    /// Text from a string literal, without its quotes.
    Text(String),
    /// The result of a statement with nothing to print, such as `info`.
    Unit,
}

/// Two numeric operands brought to a common kind.
///
/// Integer with integer stays integral; any float operand turns both into
/// floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands are integral (booleans included).
    Integers(i64, i64),
    /// At least one operand was a float.
    Floats(f64, f64),
}

impl Operands {
    /// Returns `true` when the right-hand operand is zero.
    #[must_use]
    pub fn divisor_is_zero(self) -> bool {
        match self {
            Self::Integers(_, b) => b == 0,
            Self::Floats(_, b) => b == 0.0,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(n) => Self::Integer(n),
            Number::Float(x) => Self::Float(x),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// The value substituted for an operation that failed with a soft error.
    pub const FALLBACK: Self = Self::Integer(0);

    /// Returns a short name for the kind of the value, used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "int");
    /// assert_eq!(Value::from("a").kind(), "str");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "str",
            Self::Unit => "unit",
        }
    }

    /// Reads the value as an integer. Booleans count as `0` and `1`; floats,
    /// text and unit are not integral.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Reads the value as a float, converting integers and booleans.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => self.as_integer().map(i64_to_f64),
        }
    }

    /// Promotes two values to a common numeric kind.
    ///
    /// Returns `None` if either value is not numeric.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::{Operands, Value};
    ///
    /// let pair = Value::Integer(2).promote(&Value::Float(0.5));
    /// assert_eq!(pair, Some(Operands::Floats(2.0, 0.5)));
    ///
    /// assert_eq!(Value::Integer(2).promote(&Value::Unit), None);
    /// ```
    #[must_use]
    pub fn promote(&self, other: &Self) -> Option<Operands> {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => Some(Operands::Integers(a, b)),
            _ => Some(Operands::Floats(self.as_float()?, other.as_float()?)),
        }
    }

    /// Returns `true` for every value except [`Value::Unit`].
    #[must_use]
    pub const fn is_printable(&self) -> bool {
        !matches!(self, Self::Unit)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug formatting keeps the decimal point on whole floats.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Unit => Ok(()),
        }
    }
}
