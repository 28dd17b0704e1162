/// The base module defines which numeral systems a conversion can use.
///
/// A conversion endpoint is either a positional numeral base between 2 and
/// 16, or literal text. This module declares the `Base` enum, its validating
/// constructor, and the string parsing used by the command line.
///
/// # Responsibilities
/// - Defines the `Base` enum with its `Radix` range invariant.
/// - Parses base selectors such as `"10"` or `"text"` with typed errors.
/// - Renders bases for user-facing messages.
pub mod base;
/// The numerical module converts digit sequences to and from magnitudes.
///
/// A magnitude is an arbitrary-precision unsigned integer. Parsing reads a
/// digit string under a source base using positional (Horner) accumulation;
/// rendering writes a magnitude out under a target base using the shared
/// digit alphabet. This is the arithmetic half of the engine.
///
/// # Responsibilities
/// - Validates every character against the digit alphabet and the base.
/// - Accumulates magnitudes without any fixed-width overflow.
/// - Renders magnitudes with uppercase digits for values ten and above.
pub mod numerical;
/// The router module selects and executes one of the conversion paths.
///
/// The router compares the source and target of a conversion against the
/// text sentinel and dispatches to the numerical and text modules, applying
/// per-path input splitting and output formatting. It is the public face of
/// the engine.
///
/// # Responsibilities
/// - Routes between text-to-radix, radix-to-text, and radix-to-radix paths.
/// - Applies whitespace handling and binary quartet grouping per path.
/// - Propagates typed conversion errors untouched.
pub mod router;
/// The text module converts strings to and from Unicode scalar values.
///
/// Text decomposes into one code point per character, including characters
/// outside the basic multilingual plane. Reassembly validates every integer
/// before it becomes a character, so out-of-range values surface as typed
/// errors instead of corrupt output.
///
/// # Responsibilities
/// - Decomposes strings into scalar values in order.
/// - Rebuilds strings from untrusted integer sequences.
/// - Rejects values that do not identify a scalar value.
pub mod text;

pub use base::Base;
