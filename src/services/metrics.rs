use lazy_static::lazy_static;
use prometheus::{register_counter_vec, CounterVec};

lazy_static! {
    pub static ref ANNOUNCEMENTS_COUNTER: CounterVec = register_counter_vec!(
        "api_announcements_total",
        "Announcement operations by operation and outcome",
        &["operation", "status"]
    ).unwrap();
}

/// Count one announcement operation; `status` is "ok" or the error kind.
pub fn record(operation: &str, status: &str) {
    ANNOUNCEMENTS_COUNTER
        .with_label_values(&[operation, status])
        .inc();
}
