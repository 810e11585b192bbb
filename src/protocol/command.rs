//! # Command Enum
//!
//! [`Command`] holds any one encodable command. It is what the outputter
//! resolves references into and what print jobs are assembled from.

use super::barcode::{BarcodeDraw, BarcodeFormat};
use super::bitmap::{BitmapDraw, BitmapFormat};
use super::control::{ClearImageBuffer, Feed, Issue};
use super::frame::Encode;
use super::layout::{AdjustPosition, AdjustPrintDensity, SetLabelSize};
use super::Kind;

/// Any printer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetLabelSize(SetLabelSize),
    AdjustPosition(AdjustPosition),
    AdjustPrintDensity(AdjustPrintDensity),
    Feed(Feed),
    ClearImageBuffer(ClearImageBuffer),
    Issue(Issue),
    BitmapFormat(BitmapFormat),
    BitmapDraw(BitmapDraw),
    BarcodeFormat(BarcodeFormat),
    BarcodeDraw(BarcodeDraw),
}

impl Command {
    fn as_encode(&self) -> &dyn Encode {
        match self {
            Command::SetLabelSize(c) => c,
            Command::AdjustPosition(c) => c,
            Command::AdjustPrintDensity(c) => c,
            Command::Feed(c) => c,
            Command::ClearImageBuffer(c) => c,
            Command::Issue(c) => c,
            Command::BitmapFormat(c) => c,
            Command::BitmapDraw(c) => c,
            Command::BarcodeFormat(c) => c,
            Command::BarcodeDraw(c) => c,
        }
    }
}

impl Encode for Command {
    fn kind(&self) -> Kind {
        self.as_encode().kind()
    }

    fn formatted(&self) -> String {
        self.as_encode().formatted()
    }
}

macro_rules! impl_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(command: $variant) -> Self {
                    Command::$variant(command)
                }
            }
        )+
    };
}

impl_from!(
    SetLabelSize,
    AdjustPosition,
    AdjustPrintDensity,
    Feed,
    ClearImageBuffer,
    Issue,
    BitmapFormat,
    BitmapDraw,
    BarcodeFormat,
    BarcodeDraw,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let commands: Vec<Command> = vec![
            SetLabelSize::new("1", "2", "3").unwrap().into(),
            AdjustPosition::new("1").unwrap().into(),
            AdjustPrintDensity::new("1").unwrap().into(),
            Feed.into(),
            ClearImageBuffer.into(),
            Issue.into(),
            BitmapFormat::new("1", "2", "3").unwrap().into(),
            BitmapDraw::new("1", "x").unwrap().into(),
            BarcodeFormat::new("1", "2", "3").unwrap().into(),
            BarcodeDraw::new("1", "x").unwrap().into(),
        ];

        let kinds: Vec<Kind> = commands.iter().map(Encode::kind).collect();
        assert_eq!(kinds, Kind::ALL.to_vec());
    }

    #[test]
    fn test_output_is_framed() {
        let commands: Vec<Command> = vec![
            Feed.into(),
            ClearImageBuffer.into(),
            BarcodeDraw::new("1", "").unwrap().into(),
            BitmapFormat::new("1", "2", "3").unwrap().into(),
        ];
        for command in &commands {
            let out = command.output();
            assert_eq!(out.first(), Some(&0x1B));
            assert!(out.ends_with(&[0x0A, 0x00]));
        }
    }

    #[test]
    fn test_delegates_formatting() {
        let inner = AdjustPosition::new("004").unwrap();
        let command = Command::from(inner.clone());
        assert_eq!(command.formatted(), inner.formatted());
        assert_eq!(command.output(), inner.output());
        assert!(command.is(Kind::AdjustPosition));
        assert_eq!(command.prefix(), "AX");
    }
}
