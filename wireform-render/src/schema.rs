/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Message schema definitions.
//!
//! This module defines the declarative description of a client's message
//! shape:
//! - [`FormatToken`]: One unit of the message — a fixed literal or a lookup
//!   key resolved against a record
//! - [`MessageSchema`]: An ordered token sequence plus the delimiter that
//!   joins the rendered pieces
//!
//! Schemas are immutable value objects; share them behind an `Arc` when
//! several owners need the same one.

use serde::{Deserialize, Serialize};
use wireform_core::{FormatError, Result};

/// Atomic unit of a message schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatToken {
    /// Fixed text emitted verbatim.
    Literal(String),
    /// Field name resolved against the rendered record.
    Key(String),
}

impl FormatToken {
    /// Creates a literal token.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a key token.
    #[must_use]
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Returns true if this token is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Ordered token sequence plus delimiter defining one client's message
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSchema {
    tokens: Vec<FormatToken>,
    delimiter: String,
}

impl MessageSchema {
    /// Creates a schema from tokens and a delimiter.
    ///
    /// The delimiter may be empty; the token sequence may not.
    ///
    /// # Errors
    /// Returns `FormatError::EmptyTokens` if `tokens` is empty.
    pub fn new(tokens: Vec<FormatToken>, delimiter: impl Into<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(FormatError::EmptyTokens);
        }
        Ok(Self {
            tokens,
            delimiter: delimiter.into(),
        })
    }

    /// Returns the tokens in schema order.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    /// Returns the delimiter joining rendered pieces.
    #[inline]
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}
