//! # Label Layout Commands
//!
//! Commands describing the label stock and fine adjustments to where and how
//! dark the printer prints on it. These are sent once at the start of a job.
//!
//! | Command | Prefix | Format |
//! |---------|--------|--------|
//! | [`SetLabelSize`] | `D` | `ESC Daaaa,bbbb,cccc LF NUL` |
//! | [`AdjustPosition`] | `AX` | `ESC AX;±bbb,±ddd,±ff LF NUL` |
//! | [`AdjustPrintDensity`] | `AY` | `ESC AY;±aa,b LF NUL` |

use super::fields;
use super::frame::{impl_encode, ControlCodes, Encode, SEPARATOR};
use super::Kind;
use crate::error::LabelPrinterError;

// ============================================================================
// LABEL SIZE (D)
// ============================================================================

/// # Set Label Size (ESC D)
///
/// Tells the printer the pitch of the label stock and the printable area.
///
/// ## Protocol Details
///
/// | Field | Width | Meaning |
/// |-------|-------|---------|
/// | aaaa | ≤4 | Label pitch length (0.1mm) |
/// | bbbb | ≤4 | Effective print width (0.1mm) |
/// | cccc | ≤4 | Effective print length (0.1mm) |
///
/// Values are written exactly as supplied, without padding.
///
/// ## Example
///
/// ```
/// use label_printer::protocol::{layout::SetLabelSize, ControlCodes};
///
/// let size = SetLabelSize::new("0110", "0920", "0080")?;
/// assert_eq!(size.control_codes(), "0110,0920,0080");
/// # Ok::<(), label_printer::LabelPrinterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLabelSize {
    pitch_length: String,
    print_width: String,
    print_length: String,
}

impl SetLabelSize {
    const WIDTH: usize = 4;

    pub fn new(
        pitch_length: &str,
        print_width: &str,
        print_length: &str,
    ) -> Result<Self, LabelPrinterError> {
        let kind = Self::KIND;
        Ok(Self {
            pitch_length: fields::verbatim_digits(kind, "pitch_length", pitch_length, Self::WIDTH)?,
            print_width: fields::verbatim_digits(kind, "print_width", print_width, Self::WIDTH)?,
            print_length: fields::verbatim_digits(kind, "print_length", print_length, Self::WIDTH)?,
        })
    }

    /// Build and encode in one step.
    pub fn command(
        pitch_length: &str,
        print_width: &str,
        print_length: &str,
    ) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(pitch_length, print_width, print_length)?.output())
    }
}

impl ControlCodes for SetLabelSize {
    const KIND: Kind = Kind::SetLabelSize;
    const SEPARATOR: Option<&'static str> = None;

    fn control_codes(&self) -> String {
        format!(
            "{},{},{}",
            self.pitch_length, self.print_width, self.print_length
        )
    }
}

// ============================================================================
// POSITION FINE ADJUSTMENT (AX)
// ============================================================================

/// # Adjust Position (ESC AX)
///
/// Fine-adjusts the feed amount, the cut/strip position and the back feed.
///
/// ## Protocol Details
///
/// | Field | Width | Default |
/// |-------|-------|---------|
/// | ±bbb | feed value, 3 digits | required |
/// | ±ddd | cut position, 3 digits | `+000` |
/// | ±ff | back feed, 2 digits | `+00` |
///
/// A value without a sign is treated as positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustPosition {
    feed_value: String,
    cut_position: String,
    back_feed: String,
}

impl AdjustPosition {
    pub fn new(feed_value: &str) -> Result<Self, LabelPrinterError> {
        Self::with_offsets(feed_value, None, None)
    }

    /// Adjust feed, with optional cut position and back feed offsets.
    pub fn with_offsets(
        feed_value: &str,
        cut_position: Option<&str>,
        back_feed: Option<&str>,
    ) -> Result<Self, LabelPrinterError> {
        let kind = Self::KIND;
        Ok(Self {
            feed_value: fields::signed(kind, "feed_value", feed_value, 3)?,
            cut_position: fields::signed(kind, "cut_position", cut_position.unwrap_or("0"), 3)?,
            back_feed: fields::signed(kind, "back_feed", back_feed.unwrap_or("0"), 2)?,
        })
    }

    /// Build and encode in one step.
    pub fn command(feed_value: &str) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(feed_value)?.output())
    }
}

impl ControlCodes for AdjustPosition {
    const KIND: Kind = Kind::AdjustPosition;
    const SEPARATOR: Option<&'static str> = Some(SEPARATOR);

    fn control_codes(&self) -> String {
        format!("{},{},{}", self.feed_value, self.cut_position, self.back_feed)
    }
}

// ============================================================================
// PRINT DENSITY FINE ADJUSTMENT (AY)
// ============================================================================

/// # Adjust Print Density (ESC AY)
///
/// `±aa` is the signed two-digit density step. The trailing field selects
/// the print method and is always `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustPrintDensity {
    fine_adjustment: String,
}

impl AdjustPrintDensity {
    const PRINT_METHOD: &'static str = "0";

    pub fn new(fine_adjustment: &str) -> Result<Self, LabelPrinterError> {
        Ok(Self {
            fine_adjustment: fields::signed(Self::KIND, "fine_adjustment", fine_adjustment, 2)?,
        })
    }

    /// Build and encode in one step.
    pub fn command(fine_adjustment: &str) -> Result<Vec<u8>, LabelPrinterError> {
        Ok(Self::new(fine_adjustment)?.output())
    }
}

impl ControlCodes for AdjustPrintDensity {
    const KIND: Kind = Kind::AdjustPrintDensity;
    const SEPARATOR: Option<&'static str> = Some(SEPARATOR);

    fn control_codes(&self) -> String {
        format!("{},{}", self.fine_adjustment, Self::PRINT_METHOD)
    }
}

impl_encode!(control_codes: SetLabelSize, AdjustPosition, AdjustPrintDensity);

// ============================================================================
// TESTS
// ============================================================================
