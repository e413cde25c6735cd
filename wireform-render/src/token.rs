/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Schema-driven rendering of dynamic records.

use crate::builder::{MessageBuilder, format_value};
use crate::decimal::DecimalFormatter;
use crate::schema::{FormatToken, MessageSchema};
use smallvec::SmallVec;
use std::sync::Arc;
use wireform_core::{DynamicRecord, Locale};

/// Renders a [`DynamicRecord`] against a [`MessageSchema`].
///
/// Tokens resolve in schema order: literals emit their fixed text, keys
/// emit the looked-up value. A key absent from the record renders as an
/// empty field, never an error, so one record can be rendered under any
/// client's schema regardless of which fields it carries.
#[derive(Debug, Clone)]
pub struct TokenRenderer {
    schema: Arc<MessageSchema>,
    formatter: Option<DecimalFormatter>,
    locale: Locale,
}

impl TokenRenderer {
    /// Creates a renderer with no decimal formatter.
    #[must_use]
    pub fn new(schema: Arc<MessageSchema>) -> Self {
        Self {
            schema,
            formatter: None,
            locale: Locale::INVARIANT,
        }
    }

    /// Creates a renderer that routes decimal values through a formatter.
    #[must_use]
    pub fn with_formatter(
        schema: Arc<MessageSchema>,
        formatter: DecimalFormatter,
        locale: Locale,
    ) -> Self {
        Self {
            schema,
            formatter: Some(formatter),
            locale,
        }
    }

    /// Returns the schema this renderer is bound to.
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &MessageSchema {
        &self.schema
    }

    /// Renders the record under the bound schema.
    #[must_use]
    pub fn render(&self, record: &DynamicRecord) -> String {
        let mut pieces: SmallVec<[String; 16]> = SmallVec::new();
        for token in self.schema.tokens() {
            match token {
                FormatToken::Literal(text) => pieces.push(text.clone()),
                FormatToken::Key(name) => match record.get(name) {
                    Some(value) => {
                        pieces.push(format_value(value, self.formatter.as_ref(), &self.locale));
                    }
                    None => pieces.push(String::new()),
                },
            }
        }
        pieces.join(self.schema.delimiter())
    }
}

impl MessageBuilder<DynamicRecord> for TokenRenderer {
    fn build_message(&self, record: &DynamicRecord) -> String {
        self.render(record)
    }
}
