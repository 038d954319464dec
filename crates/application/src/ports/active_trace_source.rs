//! Port exposing the current distributed-trace activity

#[cfg(test)]
use mockall::automock;

/// Tag key under which producers record the operation name on an activity
pub const OPERATION_NAME_TAG: &str = "OperationName";

/// Snapshot of the distributed-trace activity for the calling operation
///
/// Captures the trace identity of the logical operation currently in
/// progress: the root id shared by the whole operation, the parent span id,
/// the current span id, plus the tags and propagated baggage recorded on the
/// activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    /// Root id shared by every span of the operation
    pub root_id: String,
    /// Id of the span that started the current one
    pub parent_id: String,
    /// Id of the current span
    pub id: String,
    /// Tags recorded on the activity, in recording order
    pub tags: Vec<(String, String)>,
    /// Propagated baggage, in recording order
    pub baggage: Vec<(String, String)>,
}

impl ActivitySnapshot {
    /// Create a snapshot with the three trace identifiers
    pub fn new(
        root_id: impl Into<String>,
        parent_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            root_id: root_id.into(),
            parent_id: parent_id.into(),
            id: id.into(),
            tags: Vec::new(),
            baggage: Vec::new(),
        }
    }

    /// Append a tag
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Append a baggage pair
    #[must_use]
    pub fn with_baggage(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.baggage.push((key.into(), value.into()));
        self
    }

    /// Convenience for tagging the operation name
    #[must_use]
    pub fn with_operation_name(self, name: impl Into<String>) -> Self {
        self.with_tag(OPERATION_NAME_TAG, name)
    }

    /// Value of the first `OperationName` tag, if any
    #[must_use]
    pub fn operation_name(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key == OPERATION_NAME_TAG)
            .map(|(_, value)| value.as_str())
    }
}

/// Port exposing the trace activity of the calling logical operation
///
/// `current` returns `None` when no operation is in progress. Reads are
/// scoped to the caller; concurrent operations never observe each other's
/// activity.
#[cfg_attr(test, automock)]
pub trait ActiveTraceSource: Send + Sync {
    /// Snapshot of the current activity, if one is in progress
    fn current(&self) -> Option<ActivitySnapshot>;
}
