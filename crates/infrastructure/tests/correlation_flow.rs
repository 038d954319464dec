//! End-to-end correlation enrichment through the thread-scoped adapters
//!
//! Exercises the full path a host pipeline uses: a producer enters a context
//! scope, creates telemetry items, and runs them through the correlation
//! initializer before emission.

use std::sync::Arc;

use application::{
    ActivitySnapshot, CorrelationConfig, CorrelationInitializer, InitializerChain,
    OperationContextSnapshot,
};
use domain::{EventTelemetry, RequestTelemetry};
use infrastructure::{
    ActivityScope, OperationContextScope, ScopedActivitySource, ScopedOperationContextSource,
};

fn scoped_initializer() -> CorrelationInitializer {
    CorrelationInitializer::new(
        Arc::new(ScopedActivitySource::new()),
        Arc::new(ScopedOperationContextSource::new()),
    )
}

#[test]
fn request_inside_an_activity_scope_is_fully_correlated() {
    let _scope = ActivityScope::enter(
        ActivitySnapshot::new("R1", "P1", "A1")
            .with_operation_name("Checkout")
            .with_baggage("user", "42"),
    );

    let mut request = RequestTelemetry::new("GET /checkout");
    scoped_initializer().initialize(&mut request);

    assert_eq!(request.operation.id, "R1");
    assert_eq!(request.operation.parent_id, "P1");
    assert_eq!(request.operation.name, "Checkout");
    assert_eq!(request.id, "A1");
    assert_eq!(request.properties.get("user"), Some("42"));
}

#[test]
fn plain_event_gets_correlation_without_span_id() {
    let _scope = ActivityScope::enter(
        ActivitySnapshot::new("R1", "P1", "A1").with_operation_name("Checkout"),
    );

    let mut event = EventTelemetry::new("cart-emptied");
    scoped_initializer().initialize(&mut event);

    assert_eq!(event.operation.id, "R1");
    assert_eq!(event.operation.name, "Checkout");
}

#[test]
fn no_scopes_leave_the_item_untouched() {
    let mut event = EventTelemetry::new("cart-emptied").with_property("k", "v");
    let before = event.clone();

    scoped_initializer().initialize(&mut event);

    assert_eq!(event, before);
}

#[test]
fn operation_scope_drives_the_fallback_path() {
    let _scope = OperationContextScope::enter(
        OperationContextSnapshot::new("P1", "R1", "NightlyImport")
            .with_correlation_pair("tenant", "acme"),
    );

    let mut event = EventTelemetry::new("rows-written");
    scoped_initializer().initialize(&mut event);

    assert_eq!(event.operation.parent_id, "P1");
    assert_eq!(event.operation.id, "R1");
    assert_eq!(event.operation.name, "NightlyImport");
    assert_eq!(event.properties.get("tenant"), Some("acme"));
}

#[test]
fn activity_scope_wins_over_operation_scope() {
    let _activity = ActivityScope::enter(ActivitySnapshot::new("R-act", "P-act", "A1"));
    let _operation =
        OperationContextScope::enter(OperationContextSnapshot::new("P-amb", "R-amb", "Ambient"));

    let mut event = EventTelemetry::new("cart-emptied");
    scoped_initializer().initialize(&mut event);

    assert_eq!(event.operation.id, "R-act");
    // The activity carried no OperationName tag; the ambient name must not
    // leak in because the fallback is skipped entirely.
    assert!(event.operation.name.is_empty());
}

#[test]
fn disabled_activity_tracking_uses_the_operation_scope() {
    let _activity = ActivityScope::enter(ActivitySnapshot::new("R-act", "P-act", "A1"));
    let _operation =
        OperationContextScope::enter(OperationContextSnapshot::new("P-amb", "R-amb", "Ambient"));

    let initializer = CorrelationInitializer::with_config(
        CorrelationConfig {
            activity_tracking: false,
        },
        Arc::new(ScopedActivitySource::new()),
        Arc::new(ScopedOperationContextSource::new()),
    );

    let mut event = EventTelemetry::new("cart-emptied");
    initializer.initialize(&mut event);

    assert_eq!(event.operation.id, "R-amb");
    assert_eq!(event.operation.name, "Ambient");
}

#[test]
fn chain_applies_correlation_before_emission() {
    let _scope = ActivityScope::enter(
        ActivitySnapshot::new("R1", "P1", "A1").with_operation_name("Checkout"),
    );

    let chain = InitializerChain::new().with(Arc::new(scoped_initializer()));

    let mut request = RequestTelemetry::new("GET /checkout");
    chain.apply(&mut request);

    assert_eq!(request.operation.id, "R1");
    assert_eq!(request.id, "A1");
}
