//! # Draw Commands
//!
//! Bitmap and barcode data commands do not carry structured fields. They
//! name a previously formatted field by id and append the caller's payload
//! untouched:
//!
//! ```text
//! ESC <prefix> <id (3 digits)> ; <raw data> LF NUL
//! ```

use super::fields;
use super::Kind;
use crate::error::LabelPrinterError;

/// Width of the field id in draw and format commands.
pub const ID_WIDTH: usize = 3;

/// Pass-through capability for the draw commands.
pub trait Drawing {
    /// The command kind.
    const KIND: Kind;

    /// The zero-padded field id.
    fn id(&self) -> &str;

    /// The raw payload, exactly as supplied.
    fn data(&self) -> &str;

    /// For draw commands the control codes are just the id.
    fn control_codes(&self) -> String {
        self.id().to_string()
    }

    /// `prefix + id + ";" + data`
    fn draw_formatted(&self) -> String {
        let prefix = Self::KIND.prefix();
        let mut out = String::with_capacity(prefix.len() + ID_WIDTH + 1 + self.data().len());
        out.push_str(prefix);
        out.push_str(&self.control_codes());
        out.push(';');
        out.push_str(self.data());
        out
    }
}

/// Validated id and opaque payload, shared by both draw commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawData {
    id: String,
    data: String,
}

impl DrawData {
    /// Pad and validate `id`. `data` is stored as-is.
    pub fn new(kind: Kind, id: &str, data: impl Into<String>) -> Result<Self, LabelPrinterError> {
        Ok(Self {
            id: fields::digits(kind, "id", id, ID_WIDTH)?,
            data: data.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}
