#![cfg(all(test, feature = "tracing"))]

use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::transform::{reduce, try_reduce};

type Recorded = Arc<Mutex<Vec<(Level, String)>>>;

/// Keeps the level and fields of every event it sees.
struct Recorder(Recorded);

struct Fields(String);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields(String::new());
        event.record(&mut fields);
        if let Ok(mut events) = self.0.lock() {
            events.push((*event.metadata().level(), fields.0));
        }
    }
}

fn record(run: impl FnOnce()) -> Vec<(Level, String)> {
    let recorded = Recorded::default();
    let subscriber = tracing_subscriber::registry().with(Recorder(Arc::clone(&recorded)));
    tracing::subscriber::with_default(subscriber, run);

    recorded.lock().map(|events| events.clone()).unwrap_or_default()
}

fn has_event(events: &[(Level, String)], level: Level, text: &str) -> bool {
    events.iter().any(|(l, fields)| *l == level && fields.contains(text))
}

#[test]
fn test_rejection_is_logged_at_debug() {
    let events = record(|| {
        assert!(try_reduce(&[] as &[u8], |a, b| a + b).is_err());
    });

    assert!(
        has_event(&events, Level::DEBUG, "no elements"),
        "A rejected input should be logged at debug level, got {:?}.",
        events
    );
    assert!(
        !events.iter().any(|(level, _)| *level == Level::ERROR),
        "Rejecting without panicking shouldn't log an error."
    );
}

#[test]
fn test_violation_is_logged_before_panicking() {
    let events = record(|| {
        let panicked = std::panic::catch_unwind(|| reduce(&[] as &[u8], |a, b| a + b));
        assert!(panicked.is_err());
    });

    assert!(
        has_event(&events, Level::ERROR, "no elements"),
        "A contract violation should be logged at error level before the panic, got {:?}.",
        events
    );
}
