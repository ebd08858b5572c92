/// Numeric helpers.
///
/// Conversions between `i64` and `f64`, and the floor-rounding division and
/// modulo used by `//` and `%`. Integer helpers return `None` on overflow so
/// the evaluator can report it instead of panicking.
pub mod num;
/// Tracing setup for the binary.
///
/// Installs a `tracing-subscriber` that writes to stderr, only when `RUST_LOG`
/// is set, so calculator output stays clean by default.
pub mod logging;
