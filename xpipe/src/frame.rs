//! Line framing for values sent over the channel.
//!
//! Each value travels as its decimal text followed by a single `\n`:
//!
//! ```text
//! +------------------------+----+
//! |  decimal digits (1-10) | \n |
//! +------------------------+----+
//! ```

use core::fmt::Write as _;

use heapless::String;

use crate::error::{Error, ErrorKind, Result};

/// Line terminator.
pub const LINE_TERMINATOR: char = '\n';

/// Longest encoded line: `u32::MAX` has 10 digits, plus the terminator.
pub const MAX_LINE_SIZE: usize = 11;

/// Encoded line, borrowed by the writer as bytes.
pub type Line = String<MAX_LINE_SIZE>;

/// Formats `value` followed by the line terminator.
pub fn encode_line(value: u32) -> Result<Line> {
    let mut line = Line::new();
    write!(line, "{}{}", value, LINE_TERMINATOR).map_err(|_| Error::new(ErrorKind::Encode))?;
    Ok(line)
}

/// Strips surrounding whitespace, including the terminator, from a read line.
pub fn trim_line(line: &str) -> &str {
    line.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_appends_terminator() {
        assert_eq!(encode_line(1).unwrap().as_str(), "1\n");
        assert_eq!(encode_line(0).unwrap().as_str(), "0\n");
    }

    #[test]
    fn test_encode_largest_value_fits() {
        let line = encode_line(u32::MAX).unwrap();
        assert_eq!(line.len(), MAX_LINE_SIZE);
        assert_eq!(line.as_str(), "4294967295\n");
    }

    #[test]
    fn test_trim_strips_terminator_and_padding() {
        assert_eq!(trim_line("5\n"), "5");
        assert_eq!(trim_line("  42\r\n"), "42");
        assert_eq!(trim_line("\n"), "");
        assert_eq!(trim_line(" 3 \n"), "3");
    }
}
