//! Relationship payload types
//!
//! These mirror the shape returned by the upstream relationship query. They
//! are plain data: the graph builder reads them and never mutates them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Deserialize a value, falling back to `T::default()` when it is `null` or
/// has the wrong shape
///
/// One malformed element must not reject the whole payload. The default
/// value carries an empty id, which the graph builder skips.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient_value(Value::deserialize(deserializer)?))
}

/// Like [`lenient`] for lists, applied element by element
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(lenient_value).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            debug!(value = %other, "Ignoring relationship list that is not an array");
            Ok(Vec::new())
        }
    }
}

fn lenient_value<T: Default + DeserializeOwned>(value: Value) -> T {
    if value.is_null() {
        return T::default();
    }

    T::deserialize(value).unwrap_or_else(|e| {
        debug!(error = %e, "Replacing malformed payload element with an empty one");
        T::default()
    })
}

/// Ids must be strings; anything else reads as a missing id
fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Null => Ok(String::new()),
        other => {
            debug!(id = %other, "Ignoring non-string id");
            Ok(String::new())
        }
    }
}

/// Label used when a participant has neither a display name nor a slug
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Minimal identity of a service taking part in a relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    #[serde(default, deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_kind: Option<String>,
}

impl ServiceRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_service_kind(mut self, service_kind: impl Into<String>) -> Self {
        self.service_kind = Some(service_kind.into());
        self
    }

    /// A reference without a usable id cannot become a node
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Human label: display name, then slug, then [`UNKNOWN_LABEL`]
    pub fn label(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.slug.as_deref()))
            .unwrap_or(UNKNOWN_LABEL)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Identity of a contract exchanged between two services
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRef {
    #[serde(default, deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl ContractRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            operation_name: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// The subject provides `contract`; `consumers` use it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub contract: ContractRef,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub consumers: Vec<ServiceRef>,
}

impl ProvisionEntry {
    pub fn new(contract: ContractRef, consumers: Vec<ServiceRef>) -> Self {
        Self {
            contract,
            consumers,
        }
    }
}

/// The subject consumes `contract`; `providers` supply it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub contract: ContractRef,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub providers: Vec<ServiceRef>,
}

impl ConsumptionEntry {
    pub fn new(contract: ContractRef, providers: Vec<ServiceRef>) -> Self {
        Self {
            contract,
            providers,
        }
    }
}

/// Raw relationship payload for one subject service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub subject: Option<ServiceRef>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub provides: Vec<ProvisionEntry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub consumes: Vec<ConsumptionEntry>,
}

impl RelationshipPayload {
    pub fn new(subject: Option<ServiceRef>) -> Self {
        Self {
            subject,
            ..Self::default()
        }
    }

    pub fn with_provision(mut self, entry: ProvisionEntry) -> Self {
        self.provides.push(entry);
        self
    }

    pub fn with_consumption(mut self, entry: ConsumptionEntry) -> Self {
        self.consumes.push(entry);
        self
    }

    /// Number of edges the builder would emit if every entry were well formed
    pub fn relationship_count(&self) -> usize {
        let provided: usize = self.provides.iter().map(|e| e.consumers.len()).sum();
        let consumed: usize = self.consumes.iter().map(|e| e.providers.len()).sum();
        provided + consumed
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.provides.is_empty() && self.consumes.is_empty()
    }
}
