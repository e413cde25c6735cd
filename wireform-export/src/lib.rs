/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! # WireForm Export
//!
//! Transport payloads, file export, and high-level services for the
//! WireForm rendering engine.
//!
//! The rendering core produces plain `String`s; this crate turns them into
//! transport artifacts:
//! - **File export**: [`DelimitedFileWriter`] writes a header row plus one
//!   rendered line per record
//! - **Byte payloads**: rendered messages wrapped as UTF-8 [`bytes::Bytes`]
//! - **Services**: [`ExportService`], [`ClientMessageService`], and
//!   [`ContainerStatusService`] wire renderers, registry, and writer
//!   together for callers

pub mod service;
pub mod writer;

pub use service::{ClientMessageService, ContainerStatusService, ExportService};
pub use writer::{DelimitedFileWriter, FILE_HEADER};
