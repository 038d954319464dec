//! Port exposing the legacy stack-scoped operation context

#[cfg(test)]
use mockall::automock;

/// Snapshot of the legacy correlation context for the calling operation
///
/// Fallback representation of the same concept as an activity snapshot, used
/// by code paths that predate distributed-trace activities. `correlation_context`
/// is `None` when the producer attached no propagated pairs at all, as opposed
/// to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContextSnapshot {
    /// Id of the enclosing span
    pub parent_operation_id: String,
    /// Root id shared by the whole operation
    pub root_operation_id: String,
    /// Name of the root operation
    pub root_operation_name: String,
    /// Propagated key/value pairs, in recording order
    pub correlation_context: Option<Vec<(String, String)>>,
}

impl OperationContextSnapshot {
    /// Create a snapshot with the three correlation fields
    pub fn new(
        parent_operation_id: impl Into<String>,
        root_operation_id: impl Into<String>,
        root_operation_name: impl Into<String>,
    ) -> Self {
        Self {
            parent_operation_id: parent_operation_id.into(),
            root_operation_id: root_operation_id.into(),
            root_operation_name: root_operation_name.into(),
            correlation_context: None,
        }
    }

    /// Append a propagated key/value pair
    #[must_use]
    pub fn with_correlation_pair(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.correlation_context
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }
}

/// Port exposing the stack-scoped operation context of the caller
///
/// Consulted only when no trace activity is in progress; the two sources are
/// never merged.
#[cfg_attr(test, automock)]
pub trait AmbientContextSource: Send + Sync {
    /// Snapshot of the current operation context, if any
    fn current(&self) -> Option<OperationContextSnapshot>;
}
