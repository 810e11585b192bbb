//! # Bitmap Font Commands
//!
//! Text on a label is printed in two steps:
//!
//! 1. [`BitmapFormat`] (`PC`) declares a text field: id, origin, size, font
//! 2. [`BitmapDraw`] (`RC`) fills that field with a string
//!
//! ```
//! use label_printer::protocol::{bitmap::{BitmapDraw, BitmapFormat}, Encode};
//!
//! let format = BitmapFormat::new("001", "0020", "0035")?;
//! let draw = BitmapDraw::new("001", "SAMPLE-42")?;
//!
//! assert_eq!(format.formatted(), "PC001;0020,0035,1,1,G,+00,00,B");
//! assert_eq!(draw.formatted(), "RC001;SAMPLE-42");
//! # Ok::<(), label_printer::LabelPrinterError>(())
//! ```

use super::drawing::{DrawData, Drawing, ID_WIDTH};
use super::fields;
use super::frame::{impl_encode, ControlCodes, Encode, SEPARATOR};
use super::Kind;
use crate::error::LabelPrinterError;

// ============================================================================
// BITMAP FORMAT (PC)
// ============================================================================

/// # Bitmap Font Format (ESC PC)
///
/// ## Protocol Details
///
/// ```text
/// ESC PCaaa;bbbb,cccc,d,e,f,±gg,hh,B LF NUL
/// ```
///
/// | Field | Meaning | Default |
/// |-------|---------|---------|
/// | aaa | Field id (3 digits) | required |
/// | bbbb | X origin (4 digits) | required |
/// | cccc | Y origin (4 digits) | required |
/// | d | Horizontal magnification (1-2 digits) | `1` |
/// | e | Vertical magnification (1-2 digits) | `1` |
/// | f | Font | `G` |
/// | ±gg | Character spacing adjustment | `+00` |
/// | hh | Rotational angle / character direction | `00` |
/// | B | Fixed trailing field | `B` |
///
/// The trailing `B` is part of the command and does not follow the font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFormat {
    id: String,
    x_origin: String,
    y_origin: String,
    horizontal_magnification: String,
    vertical_magnification: String,
    font: String,
    space_adjustment: String,
    rotational_angles: String,
}

impl BitmapFormat {
    /// Format with every optional field at its default.
    pub fn new(id: &str, x_origin: &str, y_origin: &str) -> Result<Self, LabelPrinterError> {
        Self::builder()
            .id(id)
            .x_origin(x_origin)
            .y_origin(y_origin)
            .build()
    }

    pub fn builder() -> BitmapFormatBuilder {
        BitmapFormatBuilder::default()
    }

    /// Build and encode in one step.
    pub fn command(id: &str, x_origin: &str, y_origin: &str) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(id, x_origin, y_origin)?.output())
    }
}

impl ControlCodes for BitmapFormat {
    const KIND: Kind = Kind::BitmapFormat;
    const SEPARATOR: Option<&'static str> = Some(SEPARATOR);

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn control_codes(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},B",
            self.x_origin,
            self.y_origin,
            self.horizontal_magnification,
            self.vertical_magnification,
            self.font,
            self.space_adjustment,
            self.rotational_angles,
        )
    }
}

/// Builder for [`BitmapFormat`], for callers holding optional parameters.
#[derive(Debug, Clone, Default)]
pub struct BitmapFormatBuilder {
    id: Option<String>,
    x_origin: Option<String>,
    y_origin: Option<String>,
    horizontal_magnification: Option<String>,
    vertical_magnification: Option<String>,
    font: Option<String>,
    space_adjustment: Option<String>,
    rotational_angles: Option<String>,
}

macro_rules! setters {
    ($($field:ident),+ $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

impl BitmapFormatBuilder {
    setters!(
        id,
        x_origin,
        y_origin,
        horizontal_magnification,
        vertical_magnification,
        font,
        space_adjustment,
        rotational_angles,
    );

    /// Validate every field and build the command.
    pub fn build(self) -> Result<BitmapFormat, LabelPrinterError> {
        let kind = Kind::BitmapFormat;
        let required = |value: Option<String>, field: &'static str| {
            value.ok_or(LabelPrinterError::MissingRequiredField {
                command: kind,
                field,
            })
        };

        let id = required(self.id, "id")?;
        let x_origin = required(self.x_origin, "x_origin")?;
        let y_origin = required(self.y_origin, "y_origin")?;

        Ok(BitmapFormat {
            id: fields::digits(kind, "id", &id, ID_WIDTH)?,
            x_origin: fields::digits(kind, "x_origin", &x_origin, 4)?,
            y_origin: fields::digits(kind, "y_origin", &y_origin, 4)?,
            horizontal_magnification: fields::verbatim_digits(
                kind,
                "horizontal_magnification",
                self.horizontal_magnification.as_deref().unwrap_or("1"),
                2,
            )?,
            vertical_magnification: fields::verbatim_digits(
                kind,
                "vertical_magnification",
                self.vertical_magnification.as_deref().unwrap_or("1"),
                2,
            )?,
            font: fields::code(kind, "font", self.font.as_deref().unwrap_or("G"), 1)?,
            space_adjustment: fields::signed(
                kind,
                "space_adjustment",
                self.space_adjustment.as_deref().unwrap_or("00"),
                2,
            )?,
            rotational_angles: fields::digits(
                kind,
                "rotational_angles",
                self.rotational_angles.as_deref().unwrap_or("00"),
                2,
            )?,
        })
    }

    /// Build and encode in one step.
    pub fn command(self) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(self.build()?.output())
    }
}

pub(crate) use setters;

// ============================================================================
// BITMAP DRAW (RC)
// ============================================================================

/// # Bitmap Font Data (ESC RC)
///
/// ```text
/// ESC RCaaa;bbb…bbb LF NUL
/// ```
///
/// `aaa` is the id of a field declared with [`BitmapFormat`]; the data
/// string is printed as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapDraw(DrawData);

impl BitmapDraw {
    pub fn new(id: &str, data: impl Into<String>) -> Result<Self, LabelPrinterError> {
        Ok(Self(DrawData::new(Kind::BitmapDraw, id, data)?))
    }

    /// Build and encode in one step.
    pub fn command(id: &str, data: impl Into<String>) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(id, data)?.output())
    }
}

impl Drawing for BitmapDraw {
    const KIND: Kind = Kind::BitmapDraw;

    fn id(&self) -> &str {
        self.0.id()
    }

    fn data(&self) -> &str {
        self.0.data()
    }
}

impl_encode!(control_codes: BitmapFormat);
impl_encode!(drawing: BitmapDraw);

#[cfg(test)]
mod tests {
    use super::*;

    fn with_options() -> BitmapFormat {
        BitmapFormat::builder()
            .id("001")
            .x_origin("0020")
            .y_origin("0035")
            .horizontal_magnification("05")
            .vertical_magnification("05")
            .font("B")
            .space_adjustment("12")
            .rotational_angles("11")
            .build()
            .unwrap()
    }

    #[test]
    fn test_prefix() {
        let command = BitmapFormat::new("001", "0020", "0035").unwrap();
        assert_eq!(command.prefix(), "PC");
        assert!(command.is(Kind::BitmapFormat));
    }

    #[test]
    fn test_default_control_codes() {
        let command = BitmapFormat::new("001", "0020", "0035").unwrap();
        assert_eq!(command.control_codes(), "0020,0035,1,1,G,+00,00,B");
    }

    #[test]
    fn test_control_codes_with_options() {
        assert_eq!(with_options().control_codes(), "0020,0035,05,05,B,+12,11,B");
    }

    #[test]
    fn test_id_in_formatting() {
        let command = BitmapFormat::new("001", "0020", "0035").unwrap();
        assert!(command.formatted().starts_with("PC001;"));
        assert!(with_options().formatted().starts_with("PC001;"));
    }

    #[test]
    fn test_origins_are_padded() {
        let command = BitmapFormat::new("1", "20", "35").unwrap();
        assert_eq!(command.formatted(), "PC001;0020,0035,1,1,G,+00,00,B");
    }

    #[test]
    fn test_missing_required_field() {
        let err = BitmapFormat::builder()
            .id("001")
            .y_origin("0035")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LabelPrinterError::MissingRequiredField {
                command: Kind::BitmapFormat,
                field: "x_origin",
            }
        ));
    }

    #[test]
    fn test_malformed_font() {
        let err = BitmapFormat::builder()
            .id("001")
            .x_origin("0020")
            .y_origin("0035")
            .font("GG")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LabelPrinterError::MalformedControlValue { field: "font", .. }
        ));
    }

    #[test]
    fn test_builder_command() {
        let bytes = BitmapFormat::builder()
            .id("002")
            .x_origin("0020")
            .y_origin("0070")
            .font("B")
            .command()
            .unwrap();
        assert_eq!(bytes, b"\x1bPC002;0020,0070,1,1,B,+00,00,B\n\x00".to_vec());
    }

    #[test]
    fn test_idempotent() {
        let command = with_options();
        assert_eq!(command.control_codes(), command.control_codes());
        assert_eq!(command.output(), command.output());
    }
}
