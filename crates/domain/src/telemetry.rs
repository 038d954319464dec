//! Traits implemented by telemetry items
//!
//! Telemetry processors (enrichment, for instance) work against these traits
//! rather than concrete item types, so one processor serves every item kind.

use crate::value_objects::{OperationContext, PropertyBag};

/// A telemetry item that can be enriched before emission
///
/// Every item carries an [`OperationContext`] (its correlation identity) and
/// a [`PropertyBag`] (its custom dimensions). Items that represent an
/// operation themselves additionally implement [`OperationTelemetry`] and are
/// reachable through [`Telemetry::as_operation_telemetry_mut`].
pub trait Telemetry: Send {
    /// Correlation identity of this item
    fn operation(&self) -> &OperationContext;

    /// Mutable correlation identity of this item
    fn operation_mut(&mut self) -> &mut OperationContext;

    /// Custom dimensions attached to this item
    fn properties(&self) -> &PropertyBag;

    /// Mutable custom dimensions attached to this item
    fn properties_mut(&mut self) -> &mut PropertyBag;

    /// Downcast to an operation-level item, if this item is one
    ///
    /// The default implementation returns `None`; items with their own span
    /// id override it.
    fn as_operation_telemetry_mut(&mut self) -> Option<&mut dyn OperationTelemetry> {
        None
    }
}

/// A telemetry item that represents an operation (request, dependency call)
///
/// Such items carry their own span-level `id`, distinct from
/// `operation().id` which names the root of the whole operation.
pub trait OperationTelemetry: Telemetry {
    /// Span-level id of this item
    fn id(&self) -> &str;

    /// Replace the span-level id of this item
    fn set_id(&mut self, id: String);
}
