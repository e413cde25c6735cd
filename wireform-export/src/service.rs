/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! High-level export services.
//!
//! Services wire the rendering engine to its collaborators: a rendered
//! message becomes a UTF-8 byte payload for stream transmission or a line
//! in a delimited export file. Rendering stays synchronous and pure; the
//! services add only payload wrapping, registry lookup, and file I/O.

use crate::writer::DelimitedFileWriter;
use bytes::Bytes;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use wireform_core::{ContainerStatusRecord, DynamicRecord, FormatError, ItemRecord, Locale, Result};
use wireform_render::{
    ColumnLayout, ColumnLayoutRenderer, DecimalFormatter, DelimitedRenderer, FormatRegistry,
    MessageBuilder, RoundingMode, TokenRenderer,
};

/// Wraps rendered text as a UTF-8 transport payload.
fn payload_bytes(message: String) -> Bytes {
    Bytes::from(message.into_bytes())
}

/// Payload and file export for item records.
#[derive(Debug, Clone)]
pub struct ExportService<B> {
    builder: B,
    writer: DelimitedFileWriter<B>,
}

impl<B: MessageBuilder<ItemRecord> + Clone> ExportService<B> {
    /// Creates a service around a message builder.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self {
            writer: DelimitedFileWriter::new(builder.clone()),
            builder,
        }
    }
}

impl<B: MessageBuilder<ItemRecord>> ExportService<B> {
    /// Returns the UTF-8 payload for one record.
    #[must_use]
    pub fn payload(&self, record: &ItemRecord) -> Bytes {
        payload_bytes(self.builder.build_message(record))
    }

    /// Writes the records to a delimited file with a header row.
    ///
    /// # Errors
    /// Returns `FormatError::BlankPath` for an empty path and
    /// `FormatError::Io` for filesystem failures.
    pub fn write_file(&self, records: &[ItemRecord], path: impl AsRef<Path>) -> Result<()> {
        self.writer.write(records, path)
    }
}

/// Renders dynamic records under client-specific registered schemas.
#[derive(Debug)]
pub struct ClientMessageService {
    registry: Arc<FormatRegistry>,
    formatter: DecimalFormatter,
    locale: Locale,
}

impl ClientMessageService {
    /// Creates a service with whole-number truncation and the invariant
    /// locale.
    #[must_use]
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        Self {
            registry,
            formatter: DecimalFormatter::default(),
            locale: Locale::INVARIANT,
        }
    }

    /// Creates a service with an explicit formatter and locale.
    #[must_use]
    pub fn with_formatter(
        registry: Arc<FormatRegistry>,
        formatter: DecimalFormatter,
        locale: Locale,
    ) -> Self {
        Self {
            registry,
            formatter,
            locale,
        }
    }

    /// Returns the registry this service resolves schemas from.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Renders a record under the client's registered schema.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` for a blank id and
    /// `FormatError::SchemaNotFound` when the client has no schema.
    pub fn message(&self, client_id: &str, record: &DynamicRecord) -> Result<String> {
        let schema = self.registry.get(client_id)?.ok_or_else(|| {
            FormatError::SchemaNotFound {
                client_id: client_id.to_owned(),
            }
        })?;
        let renderer = TokenRenderer::with_formatter(schema, self.formatter, self.locale);
        Ok(renderer.render(record))
    }

    /// Returns the UTF-8 payload for a record under the client's schema.
    ///
    /// # Errors
    /// Same failure modes as [`Self::message`].
    pub fn payload(&self, client_id: &str, record: &DynamicRecord) -> Result<Bytes> {
        let payload = payload_bytes(self.message(client_id, record)?);
        debug!(client_id, bytes = payload.len(), "built client payload");
        Ok(payload)
    }

    /// Builds a container-status dynamic record from scanner measurements.
    ///
    /// Fills the standard scan markers and computes the volume from the
    /// three linear dimensions.
    #[must_use]
    pub fn container_status(
        container_id: &str,
        length: Decimal,
        width: Decimal,
        height: Decimal,
        weight: Decimal,
    ) -> DynamicRecord {
        let mut record = DynamicRecord::new();
        record.set("ContainerId", container_id);
        record.set("ScanAction", ContainerStatusRecord::STATUS_SCANNED);
        record.set("Format", ContainerStatusRecord::DIMENSION_TYPE);
        record.set("Length", length);
        record.set("Width", width);
        record.set("Height", height);
        record.set("Volume", length * width * height);
        record.set("Weight", weight);
        record
    }
}

/// Container-status export in both wire shapes.
///
/// The delimited shape is pipe-separated with whole-number dimensions; the
/// fixed-width shape uses the standard container column layout with
/// two-place truncation.
#[derive(Debug, Clone)]
pub struct ContainerStatusService {
    delimited: DelimitedRenderer,
    fixed_width: ColumnLayoutRenderer,
}

impl ContainerStatusService {
    /// Creates a service with the standard wire defaults.
    ///
    /// # Errors
    /// Propagates formatter construction failures.
    pub fn new() -> Result<Self> {
        Ok(Self {
            delimited: DelimitedRenderer::with_formatter(
                "|",
                DecimalFormatter::default(),
                Locale::INVARIANT,
            ),
            fixed_width: ColumnLayoutRenderer::new(
                ColumnLayout::container_status(),
                2,
                RoundingMode::Truncate,
            )?,
        })
    }

    /// Renders the pipe-delimited message for a record.
    #[must_use]
    pub fn delimited_message(&self, record: &ContainerStatusRecord) -> String {
        self.delimited.render(record)
    }

    /// Returns the UTF-8 payload of the pipe-delimited message.
    #[must_use]
    pub fn delimited_payload(&self, record: &ContainerStatusRecord) -> Bytes {
        payload_bytes(self.delimited_message(record))
    }

    /// Renders the fixed-width positional line for a record.
    #[must_use]
    pub fn fixed_width_message(&self, record: &ContainerStatusRecord) -> String {
        self.fixed_width.render(record)
    }

    /// Returns the UTF-8 payload of the fixed-width line.
    #[must_use]
    pub fn fixed_width_payload(&self, record: &ContainerStatusRecord) -> Bytes {
        payload_bytes(self.fixed_width_message(record))
    }
}
