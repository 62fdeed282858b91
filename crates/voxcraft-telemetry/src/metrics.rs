//! Vendor call metrics

use std::time::Instant;

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};

/// Number of outbound vendor calls
pub const VENDOR_REQUEST_COUNT: &str = "voxcraft.vendor.request.count";
/// Duration of outbound vendor calls in seconds
pub const VENDOR_REQUEST_DURATION: &str = "voxcraft.vendor.request.duration";

/// Instruments for one kind of vendor call (speech or content)
///
/// Without a configured exporter the global meter is a no-op, so recording
/// is always safe.
#[derive(Clone)]
pub struct VendorMetrics {
    kind: &'static str,
    requests: Counter<u64>,
    duration: Histogram<f64>,
}

impl VendorMetrics {
    pub fn new(kind: &'static str) -> Self {
        let meter = global::meter("voxcraft");

        Self {
            kind,
            requests: meter
                .u64_counter(VENDOR_REQUEST_COUNT)
                .with_description("Outbound vendor requests")
                .build(),
            duration: meter
                .f64_histogram(VENDOR_REQUEST_DURATION)
                .with_description("Outbound vendor request duration")
                .with_unit("s")
                .build(),
        }
    }

    /// Record one finished call
    pub fn record(&self, provider: &str, success: bool, start: Instant) {
        let attributes = [
            KeyValue::new("kind", self.kind),
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("outcome", if success { "success" } else { "error" }),
        ];

        self.requests.add(1, &attributes);
        self.duration.record(start.elapsed().as_secs_f64(), &attributes);
    }
}

impl std::fmt::Debug for VendorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorMetrics").field("kind", &self.kind).finish_non_exhaustive()
    }
}
