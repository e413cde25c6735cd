/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! The message-building contract consumed by transport collaborators.

use crate::decimal::{DecimalFormatter, localize};
use wireform_core::{FieldValue, Locale};

/// Builds a wire message string from a record.
///
/// This is the narrow seam between the rendering engine and its
/// collaborators (byte-payload wrapping, file export): a collaborator only
/// needs `build_message`, never the renderer configuration behind it.
pub trait MessageBuilder<R: ?Sized> {
    /// Renders the record into its complete wire text.
    fn build_message(&self, record: &R) -> String;
}

/// Renders a single field value to text.
///
/// Decimal values route through the formatter when one is configured and
/// fall back to the locale-default conversion otherwise. Every other kind
/// uses its default textual form.
pub(crate) fn format_value(
    value: &FieldValue,
    formatter: Option<&DecimalFormatter>,
    locale: &Locale,
) -> String {
    match value {
        FieldValue::Decimal(v) => match formatter {
            Some(formatter) => formatter.format(*v, locale),
            None => localize(v.to_string(), locale),
        },
        FieldValue::Int(v) => itoa::Buffer::new().format(*v).to_owned(),
        other => other.to_string(),
    }
}
