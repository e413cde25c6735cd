/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Fixed-shape record types and the [`WireRecord`] trait.
//!
//! This module provides:
//! - [`FieldDef`]: Compile-time field descriptor (name and type tag)
//! - [`WireRecord`]: Trait tying a record shape to its declared field list
//! - [`ItemRecord`]: Simple id/name/value record for delimited export
//! - [`ContainerStatusRecord`]: Scanned-container measurement record
//!
//! A `WireRecord` declares its fields as a `const` slice, so renderers walk
//! an explicit field list instead of inspecting the type at runtime.

use crate::value::{FieldValue, ValueKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Compile-time descriptor for one field of a fixed-shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as it appears in width maps and header rows.
    pub name: &'static str,
    /// Semantic type of the field.
    pub kind: ValueKind,
}

impl FieldDef {
    /// Creates a new field descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }
}

/// A record whose field set is fixed at compile time.
///
/// Implementations declare their fields in rendering order and resolve a
/// field by name. Renderers only read; a record is never mutated during a
/// render call.
pub trait WireRecord {
    /// Declared fields, in rendering order.
    const FIELDS: &'static [FieldDef];

    /// Resolves a field value by name.
    ///
    /// Returns `None` for names not declared in [`Self::FIELDS`].
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Simple record with an id, a name, and a decimal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique identifier for the record.
    pub id: i64,
    /// Name of the record.
    pub name: String,
    /// Value associated with the record.
    pub value: Decimal,
}

impl ItemRecord {
    /// Creates a new item record.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, value: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }
}

impl WireRecord for ItemRecord {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("Id", ValueKind::Int),
        FieldDef::new("Name", ValueKind::String),
        FieldDef::new("Value", ValueKind::Decimal),
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Id" => Some(FieldValue::Int(self.id)),
            "Name" => Some(FieldValue::String(self.name.clone())),
            "Value" => Some(FieldValue::Decimal(self.value)),
            _ => None,
        }
    }
}

/// Status record for a scanned container with its measured dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStatusRecord {
    /// Status type marker (e.g. "CONTAINERSTATUS").
    pub status_type: String,
    /// Barcode identifier.
    pub barcode: String,
    /// Scan status (e.g. "SCANNED").
    pub status: String,
    /// Dimension type marker (e.g. "DIMS").
    pub dimension_type: String,
    /// Length measurement.
    pub length: Decimal,
    /// Width measurement.
    pub width: Decimal,
    /// Height measurement.
    pub height: Decimal,
    /// Volume, length x width x height.
    pub volume: Decimal,
    /// Weight measurement.
    pub weight: Decimal,
}

impl ContainerStatusRecord {
    /// Status type marker for container status messages.
    pub const STATUS_TYPE: &'static str = "CONTAINERSTATUS";
    /// Status marker for a scanned container.
    pub const STATUS_SCANNED: &'static str = "SCANNED";
    /// Dimension type marker for measured dimensions.
    pub const DIMENSION_TYPE: &'static str = "DIMS";

    /// Creates a container status record from scanner measurements.
    ///
    /// Fills the standard status markers and computes the volume from the
    /// three linear dimensions.
    #[must_use]
    pub fn measured(
        barcode: impl Into<String>,
        length: Decimal,
        width: Decimal,
        height: Decimal,
        weight: Decimal,
    ) -> Self {
        Self {
            status_type: Self::STATUS_TYPE.to_owned(),
            barcode: barcode.into(),
            status: Self::STATUS_SCANNED.to_owned(),
            dimension_type: Self::DIMENSION_TYPE.to_owned(),
            length,
            width,
            height,
            volume: length * width * height,
            weight,
        }
    }
}

impl WireRecord for ContainerStatusRecord {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("StatusType", ValueKind::String),
        FieldDef::new("Barcode", ValueKind::String),
        FieldDef::new("Status", ValueKind::String),
        FieldDef::new("DimensionType", ValueKind::String),
        FieldDef::new("Length", ValueKind::Decimal),
        FieldDef::new("Width", ValueKind::Decimal),
        FieldDef::new("Height", ValueKind::Decimal),
        FieldDef::new("Volume", ValueKind::Decimal),
        FieldDef::new("Weight", ValueKind::Decimal),
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "StatusType" => Some(FieldValue::String(self.status_type.clone())),
            "Barcode" => Some(FieldValue::String(self.barcode.clone())),
            "Status" => Some(FieldValue::String(self.status.clone())),
            "DimensionType" => Some(FieldValue::String(self.dimension_type.clone())),
            "Length" => Some(FieldValue::Decimal(self.length)),
            "Width" => Some(FieldValue::Decimal(self.width)),
            "Height" => Some(FieldValue::Decimal(self.height)),
            "Volume" => Some(FieldValue::Decimal(self.volume)),
            "Weight" => Some(FieldValue::Decimal(self.weight)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_record_fields() {
        let record = ItemRecord::new(1, "TestItem", "123.45".parse().unwrap());
        assert_eq!(ItemRecord::FIELDS.len(), 3);
        assert_eq!(record.field("Id"), Some(FieldValue::Int(1)));
        assert_eq!(record.field("Name").unwrap().as_str(), Some("TestItem"));
        assert_eq!(record.field("Nope"), None);
    }

    #[test]
    fn test_field_defs_carry_kinds() {
        assert_eq!(ItemRecord::FIELDS[0].kind, ValueKind::Int);
        assert_eq!(ItemRecord::FIELDS[1].kind, ValueKind::String);
        assert_eq!(ItemRecord::FIELDS[2].kind, ValueKind::Decimal);
    }

    #[test]
    fn test_measured_computes_volume() {
        let record = ContainerStatusRecord::measured(
            "317164239",
            "2.9".parse().unwrap(),
            "2.8".parse().unwrap(),
            "16.4".parse().unwrap(),
            "0.08".parse().unwrap(),
        );
        assert_eq!(record.status_type, "CONTAINERSTATUS");
        assert_eq!(record.status, "SCANNED");
        assert_eq!(record.dimension_type, "DIMS");
        assert_eq!(record.volume.to_string(), "133.168");
    }

    #[test]
    fn test_container_field_resolution_matches_declared_order() {
        let record = ContainerStatusRecord::measured(
            "B1",
            Decimal::ONE,
            Decimal::ONE,
            Decimal::ONE,
            Decimal::ONE,
        );
        for def in ContainerStatusRecord::FIELDS {
            assert!(record.field(def.name).is_some(), "missing {}", def.name);
        }
    }
}
