//! Structured log events emitted by the overlay context.

use std::sync::{Arc, Mutex};

use scrim_widgets::overlay::{OverlayConfig, OverlayContext, RecordingHost, RequestFailure};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        if let Ok(mut events) = self.events.lock() {
            events.push(Captured {
                level: *event.metadata().level(),
                message,
            });
        }
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

fn capture(run: impl FnOnce()) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, run);
    events.lock().map(|e| e.clone()).unwrap_or_default()
}

#[test]
fn failures_log_at_error_even_without_notice() {
    let events = capture(|| {
        let mut overlays = OverlayContext::new(RecordingHost::new());
        assert!(overlays.report_failure(RequestFailure::Status(418)).is_none());
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::ERROR && e.message == "request failed")
    );
}

#[test]
fn lifecycle_logs_at_debug() {
    let events = capture(|| {
        let mut overlays = OverlayContext::new(RecordingHost::new());
        overlays.open(OverlayConfig::new("x"));
        overlays.close();
    });
    let debug: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::DEBUG)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(debug, vec!["overlay opened", "overlay closing"]);
}

#[test]
fn misuse_logs_at_trace() {
    let events = capture(|| {
        let mut overlays = OverlayContext::new(RecordingHost::new());
        overlays.close();
    });
    assert!(events.iter().all(|e| e.level == Level::TRACE));
    assert_eq!(events.len(), 1);
}
