//! # Printer Control Commands
//!
//! Parameterless commands whose payload is fixed by the protocol.
//! These are the commands reachable from the outputter's literal codes.

use super::frame::{impl_encode, ControlCodes, Encode, SEPARATOR};
use super::Kind;

/// # Feed (ESC T)
///
/// Feeds one label. The payload `20C32` selects sensor type, cut, feed mode
/// and speed; it never varies.
///
/// ```
/// use label_printer::protocol::{control::Feed, Encode};
///
/// assert_eq!(Feed.formatted(), "T20C32");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Feed;

impl Feed {
    pub fn command() -> Vec<u8> {
        Feed.output()
    }
}

impl ControlCodes for Feed {
    const KIND: Kind = Kind::Feed;
    const SEPARATOR: Option<&'static str> = None;

    fn control_codes(&self) -> String {
        "20C32".to_string()
    }
}

/// # Clear Image Buffer (ESC C)
///
/// Prefix only. The formatted command is just `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearImageBuffer;

impl ClearImageBuffer {
    pub fn command() -> Vec<u8> {
        ClearImageBuffer.output()
    }
}

impl ControlCodes for ClearImageBuffer {
    const KIND: Kind = Kind::ClearImageBuffer;
    const SEPARATOR: Option<&'static str> = None;

    fn control_codes(&self) -> String {
        String::new()
    }
}

/// # Issue (ESC XS)
///
/// Prints the image buffer: one label, one copy, with the cut, sensor,
/// mode, speed and ribbon settings fixed as `I,0001,0002C3201`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Issue;

impl Issue {
    pub fn command() -> Vec<u8> {
        Issue.output()
    }
}

impl ControlCodes for Issue {
    const KIND: Kind = Kind::Issue;
    const SEPARATOR: Option<&'static str> = Some(SEPARATOR);

    fn control_codes(&self) -> String {
        "I,0001,0002C3201".to_string()
    }
}

impl_encode!(control_codes: Feed, ClearImageBuffer, Issue);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed() {
        assert_eq!(Feed.prefix(), "T");
        assert!(Feed.is(Kind::Feed));
        assert_eq!(Feed.control_codes(), "20C32");
        assert_eq!(Feed::command(), b"\x1bT20C32\n\x00".to_vec());
    }

    #[test]
    fn test_clear_image_buffer() {
        assert_eq!(ClearImageBuffer.formatted(), "C");
        assert!(ClearImageBuffer.is(Kind::ClearImageBuffer));
        assert_eq!(ClearImageBuffer::command(), vec![0x1B, b'C', 0x0A, 0x00]);
    }

    #[test]
    fn test_issue() {
        assert_eq!(Issue.prefix(), "XS");
        assert!(Issue.is(Kind::Issue));
        assert!(!Issue.is(Kind::Feed));
        assert_eq!(Issue.control_codes(), "I,0001,0002C3201");
        assert_eq!(Issue.formatted(), "XS;I,0001,0002C3201");
    }
}
