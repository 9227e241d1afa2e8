//! # Relationship Payload Module
//!
//! The raw input of the engine: one subject service, the contracts it
//! provides (with their consumers) and the contracts it consumes (with their
//! providers).
//!
//! Payloads are produced by the upstream relationship query and are read
//! here from JSON. Field names follow the query API (`displayName`,
//! `operationName`, ...). Missing or `null` collections deserialize as empty,
//! and references with a missing id still deserialize so the graph builder
//! can skip them individually instead of rejecting the whole payload.
//!
//! ## Example
//!
//! ```
//! use service_orbit::payload::RelationshipPayload;
//!
//! let payload = RelationshipPayload::from_json_str(
//!     r#"{
//!         "subject": {"id": "svc-search", "displayName": "Search"},
//!         "provides": [
//!             {"contract": {"id": "c-query", "operationName": "query"},
//!              "consumers": [{"id": "svc-web", "slug": "web"}]}
//!         ],
//!         "consumes": []
//!     }"#,
//!     "inline",
//! )
//! .unwrap();
//!
//! assert_eq!(payload.subject.unwrap().label(), "Search");
//! assert_eq!(payload.provides[0].consumers[0].label(), "web");
//! ```

mod loader;
mod types;

pub use loader::STDIN_SOURCE_NAME;
pub use types::{
    ConsumptionEntry, ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef, UNKNOWN_LABEL,
};
