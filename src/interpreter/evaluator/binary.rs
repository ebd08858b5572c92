/// Dispatch of a binary operator to its handler.
pub mod core;
/// `+ - * / // %` on numbers, and text concatenation.
pub mod scalar;
/// Exponentiation.
pub mod power;
/// `== != < <= > >=`.
pub mod comparison;
