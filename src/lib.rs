//! # label-printer - Label Printer Command Encoder
//!
//! label-printer turns label templates into the byte stream understood by
//! TEC-style thermal label printers. It provides:
//!
//! - **Protocol implementation**: one encoder per printer command
//! - **Outputter**: ordered command lists resolved into a single print job
//! - **Templates**: JSON label templates and print jobs
//! - **Server**: an HTTP endpoint that encodes print jobs
//!
//! Sending the bytes to a printer (LPD, IPP, a file) is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use label_printer::protocol::{BarcodeDraw, BarcodeFormat, SetLabelSize};
//! use label_printer::outputter::{CommandRef, Outputter};
//!
//! let job = Outputter::new(vec![
//!     SetLabelSize::new("0110", "0920", "0080")?.into(),
//!     BarcodeFormat::new("001", "0300", "0000")?.into(),
//!     CommandRef::literal("C"),
//!     BarcodeDraw::new("001", "1234567")?.into(),
//!     CommandRef::literal("XS"),
//! ]);
//!
//! let bytes = job.output()?;
//! assert_eq!(bytes[0], 0x1B);
//! assert!(bytes.ends_with(&[0x0A, 0x00]));
//!
//! // Send `bytes` to the printer...
//! # Ok::<(), label_printer::error::LabelPrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command encoders and framing |
//! | [`outputter`] | Command reference resolution |
//! | [`template`] | Label templates and print jobs |
//! | [`server`] | HTTP encoder endpoint |
//! | [`error`] | Error types |

pub mod error;
pub mod outputter;
pub mod protocol;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use error::LabelPrinterError;
pub use outputter::{CommandRef, Outputter};
pub use protocol::{Command, Encode, Kind};
pub use template::{LabelTemplate, PrintJob};
