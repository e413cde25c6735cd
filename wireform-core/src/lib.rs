/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! # WireForm Core
//!
//! Core types, record shapes, and error definitions for the WireForm
//! rendering engine.
//!
//! This crate provides the fundamental building blocks used across all
//! WireForm crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field values**: The [`FieldValue`] tagged union and [`ValueKind`] tags
//! - **Record shapes**: The [`WireRecord`] trait, fixed record types, and
//!   the data-driven [`DynamicRecord`]
//! - **Locale**: Decimal and grouping separator conventions for rendering
//!
//! ## Typed Field Model
//!
//! Record fields carry one of five semantic types (string, integer, decimal,
//! boolean, timestamp). Renderers dispatch on the [`FieldValue`] variant
//! explicitly, so adding a type is a compile-time-checked change rather than
//! a runtime type inspection.

pub mod dynamic;
pub mod error;
pub mod locale;
pub mod record;
pub mod value;

pub use dynamic::DynamicRecord;
pub use error::{FormatError, Result};
pub use locale::Locale;
pub use record::{ContainerStatusRecord, FieldDef, ItemRecord, WireRecord};
pub use value::{FieldValue, TIMESTAMP_FORMAT, ValueKind};
