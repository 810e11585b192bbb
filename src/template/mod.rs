//! # Label Templates
//!
//! JSON data model for label stock, templates and print jobs, and the
//! conversion of a print job into printer commands.
//!
//! ## Model
//!
//! ```text
//! LabelTemplate
//! ├── label_type: LabelType      (stock size, feed and density tuning)
//! └── labels: [Label]
//!     ├── bitmaps: [BitmapField]  (text fields, PC/RC)
//!     └── barcodes: [BarcodeField] (barcode fields, XB/RB)
//! ```
//!
//! A [`PrintJob`] pairs a template with the values to print, one map per
//! printed label.
//!
//! ## Example
//!
//! ```
//! use label_printer::template::PrintJob;
//!
//! let json = r#"{
//!     "template": {
//!         "name": "tube",
//!         "label_type": {
//!             "name": "tube",
//!             "pitch_length": "0110",
//!             "print_width": "0920",
//!             "print_length": "0080"
//!         },
//!         "labels": [{
//!             "name": "main_label",
//!             "bitmaps": [{"field_name": "name", "x_origin": "0020", "y_origin": "0035"}],
//!             "barcodes": [{"field_name": "barcode", "x_origin": "0300", "y_origin": "0000"}]
//!         }]
//!     },
//!     "body": [{"main_label": {"name": "SAMPLE-1", "barcode": "1234567"}}]
//! }"#;
//!
//! let job: PrintJob = serde_json::from_str(json).unwrap();
//! let bytes = job.output()?;
//! assert!(bytes.starts_with(b"\x1bD0110,0920,0080\n\x00"));
//! # Ok::<(), label_printer::LabelPrinterError>(())
//! ```

mod job;

pub use job::{LabelValues, PrintJob};

use serde::{Deserialize, Serialize};

/// Label stock: physical size plus fine adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelType {
    pub name: String,
    pub pitch_length: String,
    pub print_width: String,
    pub print_length: String,
    /// Feed fine adjustment; `AX` is only sent when present.
    #[serde(default)]
    pub feed_value: Option<String>,
    /// Print density fine adjustment; `AY` is only sent when present.
    #[serde(default)]
    pub fine_adjustment: Option<String>,
}

/// A named layout of text and barcode fields on one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub bitmaps: Vec<BitmapField>,
    #[serde(default)]
    pub barcodes: Vec<BarcodeField>,
}

impl Label {
    /// Whether any bitmap or barcode on this label is named `field_name`.
    pub fn has_field(&self, field_name: &str) -> bool {
        self.bitmaps.iter().any(|field| field.field_name == field_name)
            || self.barcodes.iter().any(|field| field.field_name == field_name)
    }
}

/// Text field. Origins are required by the printer but optional here so a
/// template missing one reports which field it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitmapField {
    pub field_name: String,
    pub x_origin: Option<String>,
    pub y_origin: Option<String>,
    pub horizontal_magnification: Option<String>,
    pub vertical_magnification: Option<String>,
    pub font: Option<String>,
    pub space_adjustment: Option<String>,
    pub rotational_angles: Option<String>,
}

/// Barcode field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeField {
    pub field_name: String,
    pub x_origin: Option<String>,
    pub y_origin: Option<String>,
    pub barcode_type: Option<String>,
    pub one_module_width: Option<String>,
    pub height: Option<String>,
    pub one_cell_width: Option<String>,
    pub rotational_angle: Option<String>,
}

/// A label type with the labels printed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTemplate {
    pub name: String,
    pub label_type: LabelType,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl LabelTemplate {
    /// Find a label by name.
    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.name == name)
    }
}
