/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! # WireForm Render
//!
//! Numeric formatting, message schemas, and text renderers for the WireForm
//! engine.
//!
//! This crate turns records into wire text:
//! - **Decimal formatting**: [`DecimalFormatter`] with truncate / ceiling /
//!   floor rounding at 0..=3 decimal places
//! - **Schemas**: [`MessageSchema`] token sequences and the concurrent
//!   [`FormatRegistry`] mapping client ids to schemas
//! - **Renderers**: [`DelimitedRenderer`] for fixed-shape records,
//!   [`TokenRenderer`] for schema-driven dynamic records, and
//!   [`ColumnLayoutRenderer`] for fixed-width positional text
//!
//! Every render call is synchronous, single-pass, and pure: the record and
//! schema are only read, and the rendered `String` is the whole result.

pub mod builder;
pub mod column;
pub mod decimal;
pub mod delimited;
pub mod registry;
pub mod schema;
pub mod token;

pub use builder::MessageBuilder;
pub use column::{BLANK_FIELD, ColumnLayout, ColumnLayoutRenderer};
pub use decimal::{DecimalFormatter, MAX_DECIMAL_PLACES, RoundingMode};
pub use delimited::DelimitedRenderer;
pub use registry::FormatRegistry;
pub use schema::{FormatToken, MessageSchema};
pub use token::TokenRenderer;
