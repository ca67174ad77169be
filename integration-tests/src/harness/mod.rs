pub mod fixture;
pub mod tracing;

pub use fixture::Fixture;
pub use tracing::{CapturedEvent, EventLog, capture_events, events_with_message};
