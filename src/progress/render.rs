//! Formatting of the progress line.
//!
//! A rendered line always has the same shape:
//!
//! ```text
//! [===================================>                                  ]  50% \r
//! ```
//!
//! The functions here are pure so the exact bytes can be checked without a
//! terminal.
//!
//! ```rust
//! use linebar::progress::render::{render_line, BAR_LINE_LEN};
//!
//! let line = render_line(42);
//! assert!(line.ends_with(" 42% \r"));
//! assert_eq!(line.len(), BAR_LINE_LEN + 1);
//! ```

/// Number of cells between the brackets.
pub const BAR_WIDTH: usize = 70;

/// Printable length of a rendered line, without the trailing carriage return.
pub const BAR_LINE_LEN: usize = BAR_WIDTH + 8;

/// Percentage that never matches a real render, so the next pass always draws.
pub const SENTINEL_PERCENT: u64 = 100 + 1;

/// Compute `floor(100 * done / max)`.
///
/// The product is taken in `u128`, so sizes beyond `max` show up as more than
/// 100% instead of wrapping. A zero `max` has no meaningful percentage and
/// yields 0.
pub fn percent_of(done: u64, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    let percent = 100 * u128::from(done) / u128::from(max);
    u64::try_from(percent).unwrap_or(u64::MAX)
}

/// Number of `=` cells for a percentage.
pub fn filled_len(percent: u64) -> usize {
    let cells = u128::from(percent) * BAR_WIDTH as u128 / 100;
    usize::try_from(cells).unwrap_or(usize::MAX)
}

/// Build the full progress line for `percent`, ending in `\r`.
pub fn render_line(percent: u64) -> String {
    let filled = filled_len(percent);
    let mut line = String::with_capacity(BAR_LINE_LEN + 1);

    line.push('[');
    if filled >= BAR_WIDTH {
        line.extend(std::iter::repeat('=').take(BAR_WIDTH));
    } else {
        line.extend(std::iter::repeat('=').take(filled));
        line.push('>');
        line.extend(std::iter::repeat(' ').take(BAR_WIDTH - filled - 1));
    }
    line.push_str("] ");
    line.push_str(&format!("{percent:>3}% \r"));
    line
}

/// A line of blanks covering a rendered bar, ending in `\r`.
pub fn blank_line() -> String {
    let mut line = " ".repeat(BAR_LINE_LEN);
    line.push('\r');
    line
}
