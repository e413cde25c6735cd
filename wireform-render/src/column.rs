/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Fixed-width positional rendering.
//!
//! This module provides:
//! - [`ColumnLayout`]: Field order plus per-field column widths
//! - [`ColumnLayoutRenderer`]: Renders a record into one positional line
//!
//! Each field occupies exactly its declared width: text is right-justified,
//! left-padded with spaces, and truncated to its leftmost characters when it
//! overflows. Columns are concatenated with no separator, so the line length
//! is the sum of the declared widths — independent of content.

use crate::builder::{MessageBuilder, format_value};
use crate::decimal::{DecimalFormatter, RoundingMode};
use std::collections::HashMap;
use wireform_core::{DynamicRecord, FieldValue, FormatError, Locale, Result, WireRecord};

/// Reserved field name that always renders an all-space column.
pub const BLANK_FIELD: &str = "Blank";

/// Declarative column layout: field order and per-field widths.
///
/// A field named in the order but missing from the width map is skipped
/// silently; the reserved [`BLANK_FIELD`] name renders pure padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    field_order: Vec<String>,
    widths: HashMap<String, usize>,
}

impl ColumnLayout {
    /// Creates a layout from a field order and width map.
    ///
    /// # Errors
    /// Returns `FormatError::EmptyFieldOrder` or `FormatError::EmptyWidthMap`
    /// when either input is empty, and `FormatError::ZeroColumnWidth` when a
    /// declared width is zero.
    pub fn new(field_order: Vec<String>, widths: HashMap<String, usize>) -> Result<Self> {
        if field_order.is_empty() {
            return Err(FormatError::EmptyFieldOrder);
        }
        if widths.is_empty() {
            return Err(FormatError::EmptyWidthMap);
        }
        for (field, width) in &widths {
            if *width == 0 {
                return Err(FormatError::ZeroColumnWidth {
                    field: field.clone(),
                });
            }
        }
        Ok(Self {
            field_order,
            widths,
        })
    }

    /// The container-status wire layout.
    ///
    /// Weight 10, Volume 9, Barcode 12, blank 9, Length 10, Width 10,
    /// Height 10 — 70 characters per line.
    #[must_use]
    pub fn container_status() -> Self {
        let field_order = [
            "Weight",
            "Volume",
            "Barcode",
            BLANK_FIELD,
            "Length",
            "Width",
            "Height",
        ]
        .map(String::from)
        .to_vec();
        let widths = HashMap::from([
            ("Weight".to_string(), 10),
            ("Volume".to_string(), 9),
            ("Barcode".to_string(), 12),
            (BLANK_FIELD.to_string(), 9),
            ("Length".to_string(), 10),
            ("Width".to_string(), 10),
            ("Height".to_string(), 10),
        ]);
        Self {
            field_order,
            widths,
        }
    }

    /// Returns the field names in rendering order.
    #[inline]
    #[must_use]
    pub fn field_order(&self) -> &[String] {
        &self.field_order
    }

    /// Returns the declared width for a field, if mapped.
    #[must_use]
    pub fn width_of(&self, field: &str) -> Option<usize> {
        self.widths.get(field).copied()
    }

    /// Total line width: the sum of widths for fields present in both the
    /// order and the width map.
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.field_order
            .iter()
            .filter_map(|field| self.width_of(field))
            .sum()
    }
}

/// Renders records into fixed-width positional lines.
#[derive(Debug, Clone)]
pub struct ColumnLayoutRenderer {
    layout: ColumnLayout,
    formatter: DecimalFormatter,
    locale: Locale,
}

impl ColumnLayoutRenderer {
    /// Creates a renderer over a layout with the given decimal policy.
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDecimalPlaces` if `decimal_places` is
    /// out of range.
    pub fn new(layout: ColumnLayout, decimal_places: u32, mode: RoundingMode) -> Result<Self> {
        Ok(Self {
            layout,
            formatter: DecimalFormatter::new(decimal_places, mode)?,
            locale: Locale::INVARIANT,
        })
    }

    /// Replaces the rendering locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the layout this renderer is bound to.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Renders a fixed-shape record into one positional line.
    #[must_use]
    pub fn render<R: WireRecord>(&self, record: &R) -> String {
        self.render_fields(|name| record.field(name))
    }

    /// Renders a dynamic record into one positional line.
    ///
    /// Fields absent from the record render as blank columns.
    #[must_use]
    pub fn render_dynamic(&self, record: &DynamicRecord) -> String {
        self.render_fields(|name| record.get(name).cloned())
    }

    fn render_fields(&self, mut resolve: impl FnMut(&str) -> Option<FieldValue>) -> String {
        let mut out = String::with_capacity(self.layout.total_width());
        for name in self.layout.field_order() {
            let Some(width) = self.layout.width_of(name) else {
                // named in the order but not mapped: skipped, not an error
                continue;
            };
            if name == BLANK_FIELD {
                push_blank(&mut out, width);
                continue;
            }
            match resolve(name) {
                Some(value) => {
                    let text = format_value(&value, Some(&self.formatter), &self.locale);
                    push_column(&mut out, &text, width);
                }
                None => push_blank(&mut out, width),
            }
        }
        out
    }
}

impl<R: WireRecord> MessageBuilder<R> for ColumnLayoutRenderer {
    fn build_message(&self, record: &R) -> String {
        self.render(record)
    }
}

fn push_column(out: &mut String, text: &str, width: usize) {
    if text.is_empty() {
        push_blank(out, width);
        return;
    }
    let len = text.chars().count();
    if len > width {
        // overflow keeps the leftmost characters
        out.extend(text.chars().take(width));
    } else {
        push_blank(out, width - len);
        out.push_str(text);
    }
}

fn push_blank(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(' ');
    }
}
