//! Observability for chirpy
//!
//! - Structured logging (one JSON object per line)
//! - Typed events
//! - Atomic service counters
//!
//! Observability never fails an operation.
//!
//! ```ignore
//! use chirpy::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ChirpCreated, &[("id", "1")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
