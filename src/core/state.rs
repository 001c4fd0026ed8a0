//! Console-wide collections and their reducer
//!
//! The hosting UI fetches collections from the backend and dispatches them
//! here; list views are then built over the stored records.

use crate::core::record::{ID_FIELD, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The collections the console keeps in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Issues,
    Officers,
    Inventory,
    InventoryRequests,
    SlaExtensions,
    Notifications,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Issues,
        Collection::Officers,
        Collection::Inventory,
        Collection::InventoryRequests,
        Collection::SlaExtensions,
        Collection::Notifications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Issues => "issues",
            Collection::Officers => "officers",
            Collection::Inventory => "inventory",
            Collection::InventoryRequests => "inventory_requests",
            Collection::SlaExtensions => "sla_extensions",
            Collection::Notifications => "notifications",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleState {
    pub issues: Vec<Record>,
    pub officers: Vec<Record>,
    pub inventory: Vec<Record>,
    pub inventory_requests: Vec<Record>,
    pub sla_extensions: Vec<Record>,
    pub notifications: Vec<Record>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleAction {
    SetLoading(bool),
    /// Record an error; also ends loading
    SetError(String),
    Set(Collection, Vec<Record>),
    /// Prepend a record, newest first
    AddRecord(Collection, Record),
    /// Merge fields into the record with the given `_id`
    UpdateRecord {
        collection: Collection,
        id: String,
        patch: Map<String, Value>,
    },
    DeleteRecord { collection: Collection, id: String },
    MarkNotificationRead(String),
}

impl ConsoleState {
    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Issues => &self.issues,
            Collection::Officers => &self.officers,
            Collection::Inventory => &self.inventory,
            Collection::InventoryRequests => &self.inventory_requests,
            Collection::SlaExtensions => &self.sla_extensions,
            Collection::Notifications => &self.notifications,
        }
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::Issues => &mut self.issues,
            Collection::Officers => &mut self.officers,
            Collection::Inventory => &mut self.inventory,
            Collection::InventoryRequests => &mut self.inventory_requests,
            Collection::SlaExtensions => &mut self.sla_extensions,
            Collection::Notifications => &mut self.notifications,
        }
    }

    /// Find a record by `_id`
    pub fn find(&self, collection: Collection, id: &str) -> Option<&Record> {
        self.collection(collection)
            .iter()
            .find(|r| r.id().as_deref() == Some(id))
    }

    /// Apply one action
    pub fn reduce(mut self, action: ConsoleAction) -> Self {
        match action {
            ConsoleAction::SetLoading(is_loading) => self.is_loading = is_loading,
            ConsoleAction::SetError(message) => {
                self.error = Some(message);
                self.is_loading = false;
            }
            ConsoleAction::Set(collection, records) => {
                *self.collection_mut(collection) = records;
            }
            ConsoleAction::AddRecord(collection, record) => {
                self.collection_mut(collection).insert(0, record);
            }
            ConsoleAction::UpdateRecord {
                collection,
                id,
                patch,
            } => {
                let found = self
                    .collection_mut(collection)
                    .iter_mut()
                    .find(|r| r.id().as_deref() == Some(id.as_str()));
                match found {
                    Some(record) => record.merge(&patch),
                    None => tracing::debug!(
                        collection = collection.as_str(),
                        id = %id,
                        "update for unknown record ignored"
                    ),
                }
            }
            ConsoleAction::DeleteRecord { collection, id } => {
                self.collection_mut(collection)
                    .retain(|r| r.id().as_deref() != Some(id.as_str()));
            }
            ConsoleAction::MarkNotificationRead(id) => {
                if let Some(notification) = self
                    .notifications
                    .iter_mut()
                    .find(|r| r.id().as_deref() == Some(id.as_str()))
                {
                    notification.insert("read", Value::Bool(true));
                }
            }
        }
        self
    }
}

/// Build a record with the given `_id` and extra fields; handy for patches and fixtures
pub fn record_with_id(id: &str, fields: Value) -> Record {
    let mut record = Record::from_value(fields).unwrap_or_default();
    record.insert(ID_FIELD, Value::String(id.to_string()));
    record
}
