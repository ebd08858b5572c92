/// The `Value` enum and numeric promotion.
///
/// Declares the runtime values (integers, floats, booleans, text and unit),
/// their printed form, and the promotion rule shared by every arithmetic
/// operator.
pub mod core;
