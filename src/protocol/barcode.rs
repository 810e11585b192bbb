//! # Barcode Commands
//!
//! Like bitmap text, barcodes are declared with a format command and filled
//! with a draw command:
//!
//! 1. [`BarcodeFormat`] (`XB`) declares a barcode field
//! 2. [`BarcodeDraw`] (`RB`) supplies the data to encode
//!
//! ## 1D and 2D Layouts
//!
//! The format command has two distinct layouts. The barcode type code picks
//! one; the field counts differ and must not be merged.
//!
//! ```text
//! 1D: ESC XBaaa;bbbb,cccc,d,3,ff,0,hhhh,+0000000000,002,0,00 LF NUL
//! 2D: ESC XBaaa;bbbb,cccc,Q,20,ff,05,g LF NUL
//! ```
//!
//! | Field | 1D | 2D |
//! |-------|----|----|
//! | d | barcode type (default `5`) | `Q` |
//! | ff | one module width (default `02`) | one cell width (default `04`) |
//! | hhhh | bar height (default `0070`) | - |
//! | g | - | rotational angle (default `0`) |
//!
//! Every other field is fixed.

use super::bitmap::setters;
use super::drawing::{DrawData, Drawing, ID_WIDTH};
use super::fields;
use super::frame::{impl_encode, ControlCodes, Encode, SEPARATOR};
use super::Kind;
use crate::error::LabelPrinterError;

/// Barcode type codes using the 2D layout.
pub const TWO_DIMENSIONAL_TYPES: &[&str] = &["Q"];

/// Default 1D barcode type.
pub const DEFAULT_BARCODE_TYPE: &str = "5";

/// Field layout of a [`BarcodeFormat`], selected by the barcode type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbology {
    Linear {
        barcode_type: String,
        one_module_width: String,
        height: String,
    },
    Matrix {
        barcode_type: String,
        one_cell_width: String,
        rotational_angle: String,
    },
}

// ============================================================================
// BARCODE FORMAT (XB)
// ============================================================================

/// # Barcode Format (ESC XB)
///
/// ## Example
///
/// ```
/// use label_printer::protocol::{barcode::BarcodeFormat, ControlCodes};
///
/// let linear = BarcodeFormat::new("001", "0300", "0000")?;
/// assert_eq!(
///     linear.control_codes(),
///     "0300,0000,5,3,02,0,0070,+0000000000,002,0,00"
/// );
///
/// let qr = BarcodeFormat::builder()
///     .id("001")
///     .x_origin("0300")
///     .y_origin("0000")
///     .barcode_type("Q")
///     .one_cell_width("50")
///     .rotational_angle("3")
///     .build()?;
/// assert_eq!(qr.control_codes(), "0300,0000,Q,20,50,05,3");
/// # Ok::<(), label_printer::LabelPrinterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeFormat {
    id: String,
    x_origin: String,
    y_origin: String,
    symbology: Symbology,
}

impl BarcodeFormat {
    /// Format a default 1D barcode.
    pub fn new(id: &str, x_origin: &str, y_origin: &str) -> Result<Self, LabelPrinterError> {
        Self::builder()
            .id(id)
            .x_origin(x_origin)
            .y_origin(y_origin)
            .build()
    }

    pub fn builder() -> BarcodeFormatBuilder {
        BarcodeFormatBuilder::default()
    }

    /// Build and encode in one step.
    pub fn command(id: &str, x_origin: &str, y_origin: &str) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(id, x_origin, y_origin)?.output())
    }

    pub fn symbology(&self) -> &Symbology {
        &self.symbology
    }

    /// Whether this format uses the 2D layout.
    pub fn is_two_dimensional(&self) -> bool {
        matches!(self.symbology, Symbology::Matrix { .. })
    }
}

impl ControlCodes for BarcodeFormat {
    const KIND: Kind = Kind::BarcodeFormat;
    const SEPARATOR: Option<&'static str> = Some(SEPARATOR);

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn control_codes(&self) -> String {
        match &self.symbology {
            Symbology::Linear {
                barcode_type,
                one_module_width,
                height,
            } => format!(
                "{},{},{},3,{},0,{},+0000000000,002,0,00",
                self.x_origin, self.y_origin, barcode_type, one_module_width, height
            ),
            Symbology::Matrix {
                barcode_type,
                one_cell_width,
                rotational_angle,
            } => format!(
                "{},{},{},20,{},05,{}",
                self.x_origin, self.y_origin, barcode_type, one_cell_width, rotational_angle
            ),
        }
    }
}

/// Builder for [`BarcodeFormat`].
///
/// Parameters that belong to the other layout are ignored: a 1D barcode
/// never reads `one_cell_width`, a 2D one never reads `height`.
#[derive(Debug, Clone, Default)]
pub struct BarcodeFormatBuilder {
    id: Option<String>,
    x_origin: Option<String>,
    y_origin: Option<String>,
    barcode_type: Option<String>,
    one_module_width: Option<String>,
    height: Option<String>,
    one_cell_width: Option<String>,
    rotational_angle: Option<String>,
}

impl BarcodeFormatBuilder {
    setters!(
        id,
        x_origin,
        y_origin,
        barcode_type,
        one_module_width,
        height,
        one_cell_width,
        rotational_angle,
    );

    /// Validate every field and build the command.
    pub fn build(self) -> Result<BarcodeFormat, LabelPrinterError> {
        let kind = Kind::BarcodeFormat;
        let required = |value: Option<String>, field: &'static str| {
            value.ok_or(LabelPrinterError::MissingRequiredField {
                command: kind,
                field,
            })
        };

        let id = required(self.id, "id")?;
        let x_origin = required(self.x_origin, "x_origin")?;
        let y_origin = required(self.y_origin, "y_origin")?;

        let barcode_type = fields::code(
            kind,
            "barcode_type",
            self.barcode_type.as_deref().unwrap_or(DEFAULT_BARCODE_TYPE),
            1,
        )?;

        let symbology = if TWO_DIMENSIONAL_TYPES.contains(&barcode_type.as_str()) {
            Symbology::Matrix {
                barcode_type,
                one_cell_width: fields::digits(
                    kind,
                    "one_cell_width",
                    self.one_cell_width.as_deref().unwrap_or("04"),
                    2,
                )?,
                rotational_angle: fields::digits(
                    kind,
                    "rotational_angle",
                    self.rotational_angle.as_deref().unwrap_or("0"),
                    1,
                )?,
            }
        } else {
            Symbology::Linear {
                barcode_type,
                one_module_width: fields::digits(
                    kind,
                    "one_module_width",
                    self.one_module_width.as_deref().unwrap_or("02"),
                    2,
                )?,
                height: fields::digits(kind, "height", self.height.as_deref().unwrap_or("0070"), 4)?,
            }
        };

        Ok(BarcodeFormat {
            id: fields::digits(kind, "id", &id, ID_WIDTH)?,
            x_origin: fields::digits(kind, "x_origin", &x_origin, 4)?,
            y_origin: fields::digits(kind, "y_origin", &y_origin, 4)?,
            symbology,
        })
    }

    /// Build and encode in one step.
    pub fn command(self) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(self.build()?.output())
    }
}

// ============================================================================
// BARCODE DRAW (RB)
// ============================================================================

/// # Barcode Data (ESC RB)
///
/// ```text
/// ESC RBaaa;bbb…bbb LF NUL
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeDraw(DrawData);

impl BarcodeDraw {
    pub fn new(id: &str, data: impl Into<String>) -> Result<Self, LabelPrinterError> {
        Ok(Self(DrawData::new(Kind::BarcodeDraw, id, data)?))
    }

    /// Build and encode in one step.
    pub fn command(id: &str, data: impl Into<String>) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(id, data)?.output())
    }
}

impl Drawing for BarcodeDraw {
    const KIND: Kind = Kind::BarcodeDraw;

    fn id(&self) -> &str {
        self.0.id()
    }

    fn data(&self) -> &str {
        self.0.data()
    }
}

impl_encode!(control_codes: BarcodeFormat);
impl_encode!(drawing: BarcodeDraw);

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BarcodeFormatBuilder {
        BarcodeFormat::builder()
            .id("001")
            .x_origin("0300")
            .y_origin("0000")
    }

    #[test]
    fn test_prefix() {
        let command = base().build().unwrap();
        assert_eq!(command.prefix(), "XB");
        assert!(command.is(Kind::BarcodeFormat));
    }

    #[test]
    fn test_default_control_codes() {
        let command = base().build().unwrap();
        assert!(!command.is_two_dimensional());
        assert_eq!(
            command.control_codes(),
            "0300,0000,5,3,02,0,0070,+0000000000,002,0,00"
        );
    }

    #[test]
    fn test_linear_options() {
        let command = base()
            .barcode_type("9")
            .one_module_width("01")
            .height("0100")
            .build()
            .unwrap();
        assert_eq!(
            command.control_codes(),
            "0300,0000,9,3,01,0,0100,+0000000000,002,0,00"
        );
    }

    #[test]
    fn test_two_dimensional_options() {
        let command = base()
            .barcode_type("Q")
            .one_cell_width("50")
            .rotational_angle("3")
            .build()
            .unwrap();
        assert!(command.is_two_dimensional());
        assert_eq!(
            command.symbology(),
            &Symbology::Matrix {
                barcode_type: "Q".to_string(),
                one_cell_width: "50".to_string(),
                rotational_angle: "3".to_string(),
            }
        );
        assert_eq!(command.control_codes(), "0300,0000,Q,20,50,05,3");
    }

    #[test]
    fn test_default_symbology() {
        let command = base().build().unwrap();
        assert_eq!(
            command.symbology(),
            &Symbology::Linear {
                barcode_type: "5".to_string(),
                one_module_width: "02".to_string(),
                height: "0070".to_string(),
            }
        );
    }

    #[test]
    fn test_builder_command() {
        assert_eq!(
            base().barcode_type("Q").command().unwrap(),
            b"\x1bXB001;0300,0000,Q,20,04,05,0\n\x00".to_vec()
        );
        assert!(matches!(
            base().height("00700").command(),
            Err(LabelPrinterError::MalformedControlValue { field: "height", .. })
        ));
    }

    #[test]
    fn test_two_dimensional_defaults() {
        let command = base().barcode_type("Q").build().unwrap();
        assert_eq!(command.control_codes(), "0300,0000,Q,20,04,05,0");
    }

    #[test]
    fn test_layouts_ignore_foreign_fields() {
        let linear = base().one_cell_width("50").rotational_angle("3").build().unwrap();
        assert_eq!(linear, base().build().unwrap());

        let matrix = base().barcode_type("Q").height("0100").build().unwrap();
        assert_eq!(matrix, base().barcode_type("Q").build().unwrap());
    }

    #[test]
    fn test_id_in_formatting() {
        let command = base().build().unwrap();
        assert!(command.formatted().starts_with("XB001;"));
    }

    #[test]
    fn test_missing_id() {
        let err = BarcodeFormat::builder()
            .x_origin("0300")
            .y_origin("0000")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LabelPrinterError::MissingRequiredField {
                command: Kind::BarcodeFormat,
                field: "id",
            }
        ));
    }

    #[test]
    fn test_malformed_height() {
        let err = base().height("00700").build().unwrap_err();
        assert!(matches!(
            err,
            LabelPrinterError::MalformedControlValue { field: "height", .. }
        ));
    }

    #[test]
    fn test_barcode_draw_command() {
        assert_eq!(
            BarcodeDraw::command("123", "ABC").unwrap(),
            b"\x1bRB123;ABC\n\x00".to_vec()
        );
    }
}
