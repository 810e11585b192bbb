//! # Label Printer Command Protocol
//!
//! This module provides command encoders for the TEC-style label printer
//! command language: every command is an ASCII prefix followed by
//! comma-separated fixed-width fields, framed as `ESC … LF NUL`.
//!
//! ## Module Structure
//!
//! - [`frame`]: Framing bytes and the traits every command implements
//! - [`fields`]: Fixed-width, signed and verbatim field formatting
//! - [`layout`]: Label size, position and print density adjustment
//! - [`control`]: Feed, clear image buffer and issue
//! - [`bitmap`]: Bitmap font format and draw commands
//! - [`barcode`]: Barcode format and draw commands
//! - [`drawing`]: The shared "prefix + id + raw data" draw form
//! - [`command`]: The [`Command`] enum tying every variant together
//!
//! ## Usage Example
//!
//! ```
//! use label_printer::protocol::{control, layout, Encode};
//!
//! let mut data = Vec::new();
//!
//! // Describe the label stock
//! data.extend(layout::SetLabelSize::command("0110", "0920", "0080")?);
//! data.extend(layout::AdjustPosition::command("004")?);
//!
//! // Clear, then issue one label
//! data.extend(control::ClearImageBuffer.output());
//! data.extend(control::Issue.output());
//!
//! assert_eq!(&data[..7], b"\x1bD0110,");
//! # Ok::<(), label_printer::LabelPrinterError>(())
//! ```

pub mod barcode;
pub mod bitmap;
pub mod command;
pub mod control;
pub mod drawing;
pub mod fields;
pub mod frame;
pub mod kind;
pub mod layout;

pub use barcode::{BarcodeDraw, BarcodeFormat};
pub use bitmap::{BitmapDraw, BitmapFormat};
pub use command::Command;
pub use control::{ClearImageBuffer, Feed, Issue};
pub use drawing::Drawing;
pub use frame::{ControlCodes, Encode, ESC, LF, NUL};
pub use kind::Kind;
pub use layout::{AdjustPosition, AdjustPrintDensity, SetLabelSize};
