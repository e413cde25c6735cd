/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! # WireForm
//!
//! A record-to-text rendering engine for Rust.
//!
//! WireForm renders in-memory records into delimited or fixed-width text
//! messages for downstream transport — file export or byte-stream
//! transmission. Different consumers can render the same logical record
//! with different field order, delimiters, and literal markers by
//! registering per-client message schemas.
//!
//! ## Features
//!
//! - **Explicit rounding**: Truncate, ceiling, and floor formatting at
//!   0..=3 decimal places, identical across platforms via `rust_decimal`
//! - **Schema-driven**: Token sequences (literals and lookup keys) joined
//!   by per-client delimiters
//! - **Fixed-width**: Right-justified, space-padded positional columns
//! - **Concurrent registry**: Client schemas registered and replaced from
//!   any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use wireform::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(FormatRegistry::new());
//! registry
//!     .register(
//!         "client-a",
//!         MessageSchema::new(
//!             vec![
//!                 FormatToken::literal("CONTAINERSTATUS"),
//!                 FormatToken::key("ContainerId"),
//!                 FormatToken::key("Weight"),
//!             ],
//!             "|",
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mut record = DynamicRecord::new();
//! record.set("ContainerId", "317164239");
//! record.set("Weight", 13i64);
//!
//! let service = ClientMessageService::new(registry);
//! let message = service.message("client-a", &record).unwrap();
//! assert_eq!(message, "CONTAINERSTATUS|317164239|13");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Field values, record shapes, locale, and error definitions
//! - [`render`]: Decimal formatting, schemas, registry, and renderers
//! - [`export`]: Byte payloads, file export, and high-level services

pub mod core {
    //! Field values, record shapes, locale, and error definitions.
    pub use wireform_core::*;
}

pub mod render {
    //! Decimal formatting, schemas, registry, and renderers.
    pub use wireform_render::*;
}

pub mod export {
    //! Byte payloads, file export, and high-level services.
    pub use wireform_export::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use wireform_core::{
        ContainerStatusRecord, DynamicRecord, FieldDef, FieldValue, FormatError, ItemRecord,
        Locale, Result, ValueKind, WireRecord,
    };

    // Rendering
    pub use wireform_render::{
        BLANK_FIELD, ColumnLayout, ColumnLayoutRenderer, DecimalFormatter, DelimitedRenderer,
        FormatRegistry, FormatToken, MessageBuilder, MessageSchema, RoundingMode, TokenRenderer,
    };

    // Export
    pub use wireform_export::{
        ClientMessageService, ContainerStatusService, DelimitedFileWriter, ExportService,
    };
}
