// Metrics module for observability
// Provides counters and a histogram for monitoring persistence performance

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Initialize all metric descriptions
/// Should be called once at application startup
pub fn init_metrics() {
    describe_counter!(
        "cache_queries_total",
        "Total number of resolver cache lookups"
    );
    describe_counter!("cache_hits_total", "Total number of resolver cache hits");
    describe_histogram!(
        "db_query_duration_seconds",
        "Database query duration in seconds"
    );
}

/// Record a cache lookup attempt
pub fn record_cache_query(object: &str) {
    counter!("cache_queries_total", "object" => object.to_string()).increment(1);
}

/// Record a cache hit
pub fn record_cache_hit(object: &str) {
    counter!("cache_hits_total", "object" => object.to_string()).increment(1);
}

/// Record a database query observation taken since `started`
///
/// Called on every exit from a store round-trip, success or failure;
/// cached resolutions never produce an observation.
pub fn observe_query_time(operation: &str, outcome: &str, started: Instant) {
    histogram!(
        "db_query_duration_seconds",
        "operation" => operation.to_string(),
        "outcome" => outcome.to_string()
    )
    .record(started.elapsed().as_secs_f64());
}
