/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Delimited rendering of fixed-shape records.

use crate::builder::{MessageBuilder, format_value};
use crate::decimal::DecimalFormatter;
use wireform_core::{Locale, WireRecord};

/// Renders a fixed-shape record by joining its declared fields with a
/// delimiter.
///
/// Fields render in the order declared by [`WireRecord::FIELDS`]. Decimal
/// fields go through the configured [`DecimalFormatter`]; without one they
/// use the locale-default conversion. Delimiter characters inside string
/// values are emitted uninterpreted — the format has no escaping.
#[derive(Debug, Clone)]
pub struct DelimitedRenderer {
    delimiter: String,
    formatter: Option<DecimalFormatter>,
    locale: Locale,
}

impl DelimitedRenderer {
    /// Creates a renderer with no decimal formatter.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            formatter: None,
            locale: Locale::INVARIANT,
        }
    }

    /// Creates a renderer that routes decimal fields through a formatter.
    #[must_use]
    pub fn with_formatter(
        delimiter: impl Into<String>,
        formatter: DecimalFormatter,
        locale: Locale,
    ) -> Self {
        Self {
            delimiter: delimiter.into(),
            formatter: Some(formatter),
            locale,
        }
    }

    /// Returns the configured delimiter.
    #[inline]
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Renders the record's fields, in declared order, joined by the
    /// delimiter.
    #[must_use]
    pub fn render<R: WireRecord>(&self, record: &R) -> String {
        let mut out = String::new();
        for (index, def) in R::FIELDS.iter().enumerate() {
            if index > 0 {
                out.push_str(&self.delimiter);
            }
            if let Some(value) = record.field(def.name) {
                out.push_str(&format_value(&value, self.formatter.as_ref(), &self.locale));
            }
        }
        out
    }
}

impl<R: WireRecord> MessageBuilder<R> for DelimitedRenderer {
    fn build_message(&self, record: &R) -> String {
        self.render(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::RoundingMode;
    use rust_decimal::Decimal;
    use wireform_core::{ContainerStatusRecord, ItemRecord};

    #[test]
    fn test_item_record_comma_delimited() {
        let renderer = DelimitedRenderer::new(",");
        let record = ItemRecord::new(1, "TestItem", "123.45".parse().unwrap());
        assert_eq!(renderer.render(&record), "1,TestItem,123.45");
    }

    #[test]
    fn test_container_record_pipe_delimited_whole_numbers() {
        let formatter = DecimalFormatter::new(0, RoundingMode::Truncate).unwrap();
        let renderer = DelimitedRenderer::with_formatter("|", formatter, Locale::INVARIANT);
        let record = ContainerStatusRecord {
            status_type: "CONTAINERSTATUS".to_string(),
            barcode: "317164239".to_string(),
            status: "SCANNED".to_string(),
            dimension_type: "DIMS".to_string(),
            length: "44".parse().unwrap(),
            width: "35".parse().unwrap(),
            height: "38".parse().unwrap(),
            volume: "57910.4".parse().unwrap(),
            weight: "13.9".parse().unwrap(),
        };
        assert_eq!(
            renderer.render(&record),
            "CONTAINERSTATUS|317164239|SCANNED|DIMS|44|35|38|57910|13"
        );
    }

    #[test]
    fn test_delimiter_inside_value_is_not_escaped() {
        let renderer = DelimitedRenderer::new(",");
        let record = ItemRecord::new(7, "a,b", Decimal::ONE);
        assert_eq!(renderer.render(&record), "7,a,b,1");
    }

    #[test]
    fn test_build_message_matches_render() {
        let renderer = DelimitedRenderer::new(",");
        let record = ItemRecord::new(2, "Widget", "9.5".parse().unwrap());
        assert_eq!(renderer.build_message(&record), renderer.render(&record));
    }
}
