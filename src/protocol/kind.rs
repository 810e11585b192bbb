//! # Command Kinds
//!
//! Every command the printer understands is identified by a short ASCII
//! prefix. [`Kind`] enumerates the prefixes this crate can encode.

use std::fmt;
use std::str::FromStr;

use crate::error::LabelPrinterError;

/// Command kind, carrying its fixed wire prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `D` - label pitch, print width and print length
    SetLabelSize,
    /// `AX` - feed, cut and back-feed fine adjustment
    AdjustPosition,
    /// `AY` - print density fine adjustment
    AdjustPrintDensity,
    /// `T` - feed one label
    Feed,
    /// `C` - clear the image buffer
    ClearImageBuffer,
    /// `XS` - issue (print) the buffer
    Issue,
    /// `PC` - bitmap font field format
    BitmapFormat,
    /// `RC` - bitmap font field data
    BitmapDraw,
    /// `XB` - barcode field format
    BarcodeFormat,
    /// `RB` - barcode field data
    BarcodeDraw,
}

impl Kind {
    /// All kinds, in protocol manual order.
    pub const ALL: [Kind; 10] = [
        Kind::SetLabelSize,
        Kind::AdjustPosition,
        Kind::AdjustPrintDensity,
        Kind::Feed,
        Kind::ClearImageBuffer,
        Kind::Issue,
        Kind::BitmapFormat,
        Kind::BitmapDraw,
        Kind::BarcodeFormat,
        Kind::BarcodeDraw,
    ];

    /// The wire prefix for this kind.
    ///
    /// ```
    /// use label_printer::protocol::Kind;
    ///
    /// assert_eq!(Kind::BarcodeFormat.prefix(), "XB");
    /// ```
    pub const fn prefix(self) -> &'static str {
        match self {
            Kind::SetLabelSize => "D",
            Kind::AdjustPosition => "AX",
            Kind::AdjustPrintDensity => "AY",
            Kind::Feed => "T",
            Kind::ClearImageBuffer => "C",
            Kind::Issue => "XS",
            Kind::BitmapFormat => "PC",
            Kind::BitmapDraw => "RC",
            Kind::BarcodeFormat => "XB",
            Kind::BarcodeDraw => "RB",
        }
    }

    /// Human-readable name, used by the CLI listing.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::SetLabelSize => "set label size",
            Kind::AdjustPosition => "adjust position",
            Kind::AdjustPrintDensity => "adjust print density",
            Kind::Feed => "feed",
            Kind::ClearImageBuffer => "clear image buffer",
            Kind::Issue => "issue",
            Kind::BitmapFormat => "bitmap format",
            Kind::BitmapDraw => "bitmap draw",
            Kind::BarcodeFormat => "barcode format",
            Kind::BarcodeDraw => "barcode draw",
        }
    }

    /// Look up a kind by its wire prefix.
    pub fn from_prefix(prefix: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Kind {
    type Err = LabelPrinterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_prefix(s)
            .ok_or_else(|| LabelPrinterError::UnknownCommandReference(format!("\"{}\"", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_unique() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }

    #[test]
    fn test_from_prefix() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_prefix(kind.prefix()), Some(kind));
        }
        assert_eq!(Kind::from_prefix("PF"), None);
        assert_eq!(Kind::from_prefix("xs"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(matches!(
            "ZZ".parse::<Kind>(),
            Err(LabelPrinterError::UnknownCommandReference(_))
        ));
        assert_eq!("RB".parse::<Kind>().unwrap(), Kind::BarcodeDraw);
    }
}
