use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Events recorded by the capture layer, shared with the test that asked for them.
pub type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

/// Installs the capture layer as the global subscriber on first use and
/// returns the shared log. Every test in a binary sees the same log, so
/// filter by message or field rather than counting everything.
pub fn capture_events() -> EventLog {
    static LOG: OnceLock<EventLog> = OnceLock::new();

    LOG.get_or_init(|| {
        let log = EventLog::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { log: log.clone() });
        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global tracing subscriber");
        log
    })
    .clone()
}

/// Captured events carrying `message`, in emission order.
pub fn events_with_message(log: &EventLog, message: &str) -> Vec<CapturedEvent> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|e| e.message() == Some(message))
        .cloned()
        .collect()
}

struct CaptureLayer {
    log: EventLog,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let meta = event.metadata();
        self.log.lock().unwrap().push(CapturedEvent {
            level: *meta.level(),
            target: meta.target().to_string(),
            fields: fields.0,
        });
    }
}

#[derive(Default)]
struct FieldCollector(Vec<(String, String)>);

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}
