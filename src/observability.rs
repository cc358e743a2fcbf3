use std::net::SocketAddr;

use crate::engine::EngineError;
use crate::model::Booking;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: booking admission attempts. Labels: outcome.
pub const ADMISSIONS_TOTAL: &str = "innkeep_admissions_total";

/// Counter: demo bookings persisted through the unchecked path.
pub const DEMO_BOOKINGS_TOTAL: &str = "innkeep_demo_bookings_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: listings currently stored.
pub const LISTINGS_ACTIVE: &str = "innkeep_listings_active";

/// Counter: users registered.
pub const USERS_REGISTERED_TOTAL: &str = "innkeep_users_registered_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map an admission result to a short outcome label for metrics.
pub fn admission_outcome(result: &Result<Booking, EngineError>) -> &'static str {
    match result {
        Ok(_) => "admitted",
        Err(EngineError::NotFound(_)) => "not_found",
        Err(EngineError::EmailTaken(_)) => "email_taken",
        Err(EngineError::InvalidDateRange { .. }) => "invalid_date_range",
        Err(EngineError::DateNotAvailable(_)) => "date_not_available",
        Err(EngineError::OverlapConflict(_)) => "overlap_conflict",
        Err(EngineError::LimitExceeded(_)) => "limit_exceeded",
    }
}
