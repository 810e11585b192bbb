//! Print jobs: a template plus the values for each printed label.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{BarcodeField, BitmapField, LabelTemplate, LabelType};
use crate::error::LabelPrinterError;
use crate::outputter::{CommandRef, Outputter};
use crate::protocol::{
    AdjustPosition, AdjustPrintDensity, BarcodeDraw, BarcodeFormat, BitmapDraw, BitmapFormat,
    Command, SetLabelSize,
};

/// Values for one printed label: label name → field name → data.
pub type LabelValues = BTreeMap<String, BTreeMap<String, String>>;

/// A template and the labels to print with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub template: LabelTemplate,
    /// One entry per printed label, in print order.
    #[serde(default)]
    pub body: Vec<LabelValues>,
}

/// Format ids assigned to one label's fields, in template order.
struct LabelIds {
    bitmaps: Vec<String>,
    barcodes: Vec<String>,
}

impl PrintJob {
    pub fn new(template: LabelTemplate, body: Vec<LabelValues>) -> Self {
        Self { template, body }
    }

    /// Build the outputter for this job.
    ///
    /// The job is laid out as:
    ///
    /// ```text
    /// D, [AY], [AX], T, <formats…>, { C, <draws…>, XS } per body entry
    /// ```
    pub fn outputter(&self) -> Result<Outputter<'_>, LabelPrinterError> {
        let (formats, ids) = self.formats()?;
        let labels = self.labels(&ids)?;

        debug!(
            "print job '{}': {} formats, {} labels",
            self.template.name,
            formats.len(),
            self.body.len()
        );

        let label_type = &self.template.label_type;
        Ok(Outputter::new(vec![
            CommandRef::provider("set_label_size"),
            CommandRef::provider("adjust_print_density"),
            CommandRef::provider("adjust_position"),
            CommandRef::literal("T"),
            CommandRef::Many(formats),
            CommandRef::Many(labels),
        ])
        .with_provider("set_label_size", move || set_label_size(label_type))
        .with_provider("adjust_print_density", move || {
            label_type
                .fine_adjustment
                .as_deref()
                .map(|value| AdjustPrintDensity::new(value).map(Command::from))
                .transpose()
        })
        .with_provider("adjust_position", move || {
            label_type
                .feed_value
                .as_deref()
                .map(|value| AdjustPosition::new(value).map(Command::from))
                .transpose()
        }))
    }

    /// Encode the whole job.
    pub fn output(&self) -> Result<Vec<u8>, LabelPrinterError> {
        self.outputter()?.output()
    }

    /// Format commands for every field of every label. Bitmap and barcode
    /// ids are numbered independently, starting at `001`.
    fn formats(&self) -> Result<(Vec<CommandRef>, Vec<LabelIds>), LabelPrinterError> {
        let mut formats: Vec<CommandRef> = Vec::new();
        let mut ids = Vec::with_capacity(self.template.labels.len());
        let mut bitmap_count = 0;
        let mut barcode_count = 0;

        for label in &self.template.labels {
            let mut label_ids = LabelIds {
                bitmaps: Vec::with_capacity(label.bitmaps.len()),
                barcodes: Vec::with_capacity(label.barcodes.len()),
            };
            for field in &label.bitmaps {
                bitmap_count += 1;
                let id = format!("{:03}", bitmap_count);
                formats.push(bitmap_format(&id, field)?.into());
                label_ids.bitmaps.push(id);
            }
            for field in &label.barcodes {
                barcode_count += 1;
                let id = format!("{:03}", barcode_count);
                formats.push(barcode_format(&id, field)?.into());
                label_ids.barcodes.push(id);
            }
            ids.push(label_ids);
        }

        Ok((formats, ids))
    }

    /// Clear, draw and issue commands for each body entry.
    fn labels(&self, ids: &[LabelIds]) -> Result<Vec<CommandRef>, LabelPrinterError> {
        let mut refs = Vec::new();

        for entry in &self.body {
            if let Some(unknown) = entry.keys().find(|name| self.template.label(name).is_none()) {
                return Err(LabelPrinterError::UnknownLabel(unknown.clone()));
            }

            for (label, label_ids) in self.template.labels.iter().zip(ids) {
                let Some(values) = entry.get(&label.name) else {
                    continue;
                };
                if let Some(unknown) = values.keys().find(|name| !label.has_field(name)) {
                    return Err(LabelPrinterError::UnknownField {
                        label: label.name.clone(),
                        field: unknown.clone(),
                    });
                }

                let mut draws: Vec<CommandRef> = Vec::new();
                for (field, id) in label.bitmaps.iter().zip(&label_ids.bitmaps) {
                    if let Some(data) = values.get(&field.field_name) {
                        draws.push(BitmapDraw::new(id, data.as_str())?.into());
                    }
                }
                for (field, id) in label.barcodes.iter().zip(&label_ids.barcodes) {
                    if let Some(data) = values.get(&field.field_name) {
                        draws.push(BarcodeDraw::new(id, data.as_str())?.into());
                    }
                }

                refs.push(CommandRef::Many(vec![
                    CommandRef::literal("C"),
                    CommandRef::Many(draws),
                    CommandRef::literal("XS"),
                ]));
            }
        }

        Ok(refs)
    }
}

fn set_label_size(label_type: &LabelType) -> Result<Option<Command>, LabelPrinterError> {
    let command = SetLabelSize::new(
        &label_type.pitch_length,
        &label_type.print_width,
        &label_type.print_length,
    )?;
    Ok(Some(command.into()))
}

fn bitmap_format(id: &str, field: &BitmapField) -> Result<BitmapFormat, LabelPrinterError> {
    let mut builder = BitmapFormat::builder().id(id);
    if let Some(v) = &field.x_origin {
        builder = builder.x_origin(v);
    }
    if let Some(v) = &field.y_origin {
        builder = builder.y_origin(v);
    }
    if let Some(v) = &field.horizontal_magnification {
        builder = builder.horizontal_magnification(v);
    }
    if let Some(v) = &field.vertical_magnification {
        builder = builder.vertical_magnification(v);
    }
    if let Some(v) = &field.font {
        builder = builder.font(v);
    }
    if let Some(v) = &field.space_adjustment {
        builder = builder.space_adjustment(v);
    }
    if let Some(v) = &field.rotational_angles {
        builder = builder.rotational_angles(v);
    }
    builder.build()
}

fn barcode_format(id: &str, field: &BarcodeField) -> Result<BarcodeFormat, LabelPrinterError> {
    let mut builder = BarcodeFormat::builder().id(id);
    if let Some(v) = &field.x_origin {
        builder = builder.x_origin(v);
    }
    if let Some(v) = &field.y_origin {
        builder = builder.y_origin(v);
    }
    if let Some(v) = &field.barcode_type {
        builder = builder.barcode_type(v);
    }
    if let Some(v) = &field.one_module_width {
        builder = builder.one_module_width(v);
    }
    if let Some(v) = &field.height {
        builder = builder.height(v);
    }
    if let Some(v) = &field.one_cell_width {
        builder = builder.one_cell_width(v);
    }
    if let Some(v) = &field.rotational_angle {
        builder = builder.rotational_angle(v);
    }
    builder.build()
}
