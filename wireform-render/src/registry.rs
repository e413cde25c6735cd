/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Client format registry.
//!
//! Maps client identifiers to their registered [`MessageSchema`]. The
//! registry is the one mutable shared resource in the engine: the map is
//! guarded by a `parking_lot::RwLock` so independent callers can register,
//! replace, look up, and remove schemas concurrently with linearizable map
//! semantics.

use crate::schema::MessageSchema;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use wireform_core::{FormatError, Result};

/// Concurrent mapping from client id to message schema.
///
/// Created empty and lives for the process. Schemas are handed out as
/// `Arc` clones; they are immutable, so readers never contend beyond the
/// map lookup itself.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    schemas: RwLock<HashMap<String, Arc<MessageSchema>>>,
}

impl FormatRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema for a client, failing softly if one exists.
    ///
    /// Returns `false` (and leaves the existing schema in place) if the
    /// client already has a schema.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` if `client_id` is empty or
    /// whitespace.
    pub fn register(&self, client_id: &str, schema: MessageSchema) -> Result<bool> {
        validate_client_id(client_id)?;
        let mut schemas = self.schemas.write();
        if schemas.contains_key(client_id) {
            return Ok(false);
        }
        schemas.insert(client_id.to_owned(), Arc::new(schema));
        Ok(true)
    }

    /// Binds a schema for a client, overwriting any existing one.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` if `client_id` is empty or
    /// whitespace.
    pub fn set(&self, client_id: &str, schema: MessageSchema) -> Result<()> {
        validate_client_id(client_id)?;
        self.schemas
            .write()
            .insert(client_id.to_owned(), Arc::new(schema));
        Ok(())
    }

    /// Returns the schema registered for a client, if any.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` if `client_id` is empty or
    /// whitespace.
    pub fn get(&self, client_id: &str) -> Result<Option<Arc<MessageSchema>>> {
        validate_client_id(client_id)?;
        Ok(self.schemas.read().get(client_id).cloned())
    }

    /// Returns true if the client has a registered schema.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` if `client_id` is empty or
    /// whitespace.
    pub fn has(&self, client_id: &str) -> Result<bool> {
        validate_client_id(client_id)?;
        Ok(self.schemas.read().contains_key(client_id))
    }

    /// Removes the client's schema, returning true if one was present.
    ///
    /// # Errors
    /// Returns `FormatError::BlankClientId` if `client_id` is empty or
    /// whitespace.
    pub fn remove(&self, client_id: &str) -> Result<bool> {
        validate_client_id(client_id)?;
        Ok(self.schemas.write().remove(client_id).is_some())
    }

    /// Returns the number of registered clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if no clients are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

fn validate_client_id(client_id: &str) -> Result<()> {
    if client_id.trim().is_empty() {
        return Err(FormatError::BlankClientId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormatToken;

    fn schema(delimiter: &str) -> MessageSchema {
        MessageSchema::new(vec![FormatToken::key("A")], delimiter).unwrap()
    }

    #[test]
    fn test_register_then_get() {
        let registry = FormatRegistry::new();
        assert!(registry.register("client-a", schema("|")).unwrap());
        let found = registry.get("client-a").unwrap().unwrap();
        assert_eq!(found.delimiter(), "|");
    }

    #[test]
    fn test_register_existing_is_a_soft_failure() {
        let registry = FormatRegistry::new();
        assert!(registry.register("client-a", schema("|")).unwrap());
        assert!(!registry.register("client-a", schema(",")).unwrap());
        // the original binding is untouched
        let found = registry.get("client-a").unwrap().unwrap();
        assert_eq!(found.delimiter(), "|");
    }

    #[test]
    fn test_set_overwrites() {
        let registry = FormatRegistry::new();
        registry.set("client-a", schema("|")).unwrap();
        registry.set("client-a", schema(",")).unwrap();
        let found = registry.get("client-a").unwrap().unwrap();
        assert_eq!(found.delimiter(), ",");
    }

    #[test]
    fn test_remove_then_has() {
        let registry = FormatRegistry::new();
        registry.set("client-a", schema("|")).unwrap();
        assert!(registry.has("client-a").unwrap());
        assert!(registry.remove("client-a").unwrap());
        assert!(!registry.has("client-a").unwrap());
        assert!(!registry.remove("client-a").unwrap());
    }

    #[test]
    fn test_blank_client_id_rejected_everywhere() {
        let registry = FormatRegistry::new();
        assert!(matches!(
            registry.register("", schema("|")),
            Err(FormatError::BlankClientId)
        ));
        assert!(matches!(
            registry.set("   ", schema("|")),
            Err(FormatError::BlankClientId)
        ));
        assert!(matches!(registry.get(""), Err(FormatError::BlankClientId)));
        assert!(matches!(registry.has(" "), Err(FormatError::BlankClientId)));
        assert!(matches!(
            registry.remove(""),
            Err(FormatError::BlankClientId)
        ));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let registry = Arc::new(FormatRegistry::new());
        let mut handles = Vec::new();

        for worker in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let id = format!("client-{}", worker % 4);
                for _ in 0..100 {
                    registry.set(&id, schema("|")).unwrap();
                    let _ = registry.get(&id).unwrap();
                    let _ = registry.has(&id).unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 4);
    }
}
