//! # Command Framing
//!
//! Every command sent to the printer is one framed unit:
//!
//! ```text
//! ESC <prefix> [<id>] [<separator>] <control codes> LF NUL
//! ```
//!
//! Framing is identical for every command kind. Variants only decide what
//! goes between `ESC` and `LF`.
//!
//! ## Traits
//!
//! - [`Encode`]: the framing capability (prefix, formatted text, wire bytes)
//! - [`ControlCodes`]: commands whose payload is computed from typed fields
//!
//! Draw commands implement [`Drawing`](super::Drawing) instead of
//! [`ControlCodes`]; both reach [`Encode`] through [`impl_encode!`].

use super::Kind;

/// ESC (Escape) - Command start byte
pub const ESC: u8 = 0x1B;

/// LF (Line Feed) - Command end byte
pub const LF: u8 = 0x0A;

/// NUL - Terminator following LF
pub const NUL: u8 = 0x00;

/// Default separator between the prefix (or id) and the control codes.
pub const SEPARATOR: &str = ";";

/// Wrap formatted command text in `ESC … LF NUL`.
///
/// ## Example
///
/// ```
/// use label_printer::protocol::frame::frame;
///
/// assert_eq!(frame("C"), vec![0x1B, b'C', 0x0A, 0x00]);
/// ```
pub fn frame(formatted: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(formatted.len() + 3);
    out.push(ESC);
    out.extend_from_slice(formatted.as_bytes());
    out.push(LF);
    out.push(NUL);
    out
}

/// Framing capability shared by every command.
pub trait Encode {
    /// The command kind.
    fn kind(&self) -> Kind;

    /// Command text between `ESC` and `LF`.
    fn formatted(&self) -> String;

    /// The fixed ASCII prefix.
    fn prefix(&self) -> &'static str {
        self.kind().prefix()
    }

    /// The complete wire unit for this command.
    fn output(&self) -> Vec<u8> {
        frame(&self.formatted())
    }

    /// Whether this command is of the given kind.
    fn is(&self, kind: Kind) -> bool {
        self.kind() == kind
    }
}

/// Commands whose payload is built from typed fields.
pub trait ControlCodes {
    /// The command kind.
    const KIND: Kind;

    /// Separator placed after the prefix (and id). `None` for commands
    /// written back-to-back with their prefix.
    const SEPARATOR: Option<&'static str>;

    /// Field id written straight after the prefix (format commands only).
    fn id(&self) -> Option<&str> {
        None
    }

    /// The comma-separated field payload.
    fn control_codes(&self) -> String;

    /// Format with an explicit separator, overriding [`Self::SEPARATOR`].
    fn formatted_with(&self, separator: Option<&str>) -> String {
        let mut out = String::from(Self::KIND.prefix());
        if let Some(id) = self.id() {
            out.push_str(id);
        }
        if let Some(separator) = separator {
            out.push_str(separator);
        }
        out.push_str(&self.control_codes());
        out
    }
}

/// Implement [`Encode`] for a type that implements [`ControlCodes`] or
/// [`Drawing`](super::Drawing).
macro_rules! impl_encode {
    (control_codes: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::protocol::frame::Encode for $ty {
                fn kind(&self) -> $crate::protocol::Kind {
                    <$ty as $crate::protocol::frame::ControlCodes>::KIND
                }

                fn formatted(&self) -> String {
                    $crate::protocol::frame::ControlCodes::formatted_with(
                        self,
                        <$ty as $crate::protocol::frame::ControlCodes>::SEPARATOR,
                    )
                }
            }
        )+
    };
    (drawing: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::protocol::frame::Encode for $ty {
                fn kind(&self) -> $crate::protocol::Kind {
                    <$ty as $crate::protocol::drawing::Drawing>::KIND
                }

                fn formatted(&self) -> String {
                    $crate::protocol::drawing::Drawing::draw_formatted(self)
                }
            }
        )+
    };
}

pub(crate) use impl_encode;

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal command used to exercise the provided trait methods.
    struct Probe;

    impl ControlCodes for Probe {
        const KIND: Kind = Kind::Feed;
        const SEPARATOR: Option<&'static str> = None;

        fn control_codes(&self) -> String {
            "CC12345".to_string()
        }
    }

    impl_encode!(control_codes: Probe);

    #[test]
    fn test_frame() {
        assert_eq!(frame("TX"), vec![0x1B, b'T', b'X', 0x0A, 0x00]);
        assert_eq!(frame(""), vec![0x1B, 0x0A, 0x00]);
    }

    #[test]
    fn test_formatted_without_separator() {
        assert_eq!(Probe.formatted(), "TCC12345");
    }

    #[test]
    fn test_separator_override() {
        assert_eq!(Probe.formatted_with(Some(";")), "T;CC12345");
        assert_eq!(Probe.formatted_with(None), Probe.formatted());
    }

    #[test]
    fn test_output() {
        assert_eq!(Probe.output(), b"\x1bTCC12345\n\x00".to_vec());
    }

    #[test]
    fn test_is() {
        assert!(Probe.is(Kind::Feed));
        assert!(!Probe.is(Kind::Issue));
    }
}
