use serde::Deserialize;
use std::fmt::Display;

/// Type-safe identifier for Resources.
///
/// Assigned by the store as `count + 1`; rendered on the wire as its decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogued cloud resource.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// Records are immutable once stored.
///
/// See [`impl ActorEntity for Resource`](#impl-ActorEntity-for-Resource) for details on:
/// - Creation parameters ([`ResourceCreate`])
/// - Filtering ([`NameFilter`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    /// Category label, `type` on the wire.
    pub kind: String,
    pub region: String,
}

impl Resource {
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        kind: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            region: region.into(),
        }
    }
}

/// Payload for creating a new resource. Any strings are accepted, including empty ones.
///
/// Deserializes from `{ "name": ..., "type": ..., "region": ... }`, the shape used by seed files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
}

impl ResourceCreate {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            region: region.into(),
        }
    }
}

/// Case-insensitive substring match on [`Resource::name`].
///
/// Both sides are lower-cased before comparison. An empty needle matches every name,
/// which is why [`NameFilter::new`] maps it to "no filter" instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Builds a filter from user input. `None` when the input is empty.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            needle: raw.to_lowercase(),
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

/// The two records every fresh process starts with.
pub fn default_seed() -> Vec<ResourceCreate> {
    vec![
        ResourceCreate::new("Compute Engine", "VM", "us-central1"),
        ResourceCreate::new("Cloud Storage", "Storage", "europe-west1"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let filter = NameFilter::new("CLOUD").unwrap();
        assert_eq!(filter.needle(), "cloud");
        assert!(filter.matches("Cloud Storage"));
        assert!(filter.matches("my cloud"));
        assert!(!filter.matches("Compute Engine"));
    }

    #[test]
    fn test_empty_filter_means_no_filter() {
        assert_eq!(NameFilter::new(""), None);
    }

    #[test]
    fn test_id_renders_as_decimal() {
        assert_eq!(ResourceId(42).to_string(), "42");
    }

    #[test]
    fn test_create_payload_reads_wire_field_names() {
        let payload: ResourceCreate = serde_json::from_str(
            r#"{ "name": "Pub/Sub", "type": "Messaging", "region": "asia-east1" }"#,
        )
        .unwrap();
        assert_eq!(payload, ResourceCreate::new("Pub/Sub", "Messaging", "asia-east1"));
    }
}
