//! Correlation identifiers for the logical operation a telemetry item belongs to

use serde::{Deserialize, Serialize};

/// Correlation identity of a telemetry item
///
/// Groups telemetry items produced across a distributed or nested operation:
/// `id` is the root operation id shared by every item of the operation,
/// `parent_id` points at the enclosing span, and `name` is the human-readable
/// operation name. All three may be empty; enrichment fills empty fields but
/// never replaces populated ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    /// Root operation id shared by all items of the operation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Id of the span under which this item was produced
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    /// Operation name (e.g. the request route or command name)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl OperationContext {
    /// Create an empty operation context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all three correlation fields are populated
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.parent_id.is_empty() && !self.name.is_empty()
    }

    /// Whether no correlation field is populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.parent_id.is_empty() && self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let ctx = OperationContext::new();
        assert!(ctx.is_empty());
        assert!(!ctx.is_complete());
    }

    #[test]
    fn partially_filled_is_neither_empty_nor_complete() {
        let ctx = OperationContext {
            id: "op-1".to_string(),
            ..Default::default()
        };
        assert!(!ctx.is_empty());
        assert!(!ctx.is_complete());
    }

    #[test]
    fn fully_filled_is_complete() {
        let ctx = OperationContext {
            id: "op-1".to_string(),
            parent_id: "span-1".to_string(),
            name: "Checkout".to_string(),
        };
        assert!(ctx.is_complete());
    }

    #[test]
    fn empty_fields_are_skipped_in_serialization() {
        let ctx = OperationContext {
            id: "op-1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"id":"op-1"}"#);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let ctx: OperationContext = serde_json::from_str(r#"{"name":"Checkout"}"#).unwrap();
        assert_eq!(ctx.name, "Checkout");
        assert!(ctx.id.is_empty());
        assert!(ctx.parent_id.is_empty());
    }
}
