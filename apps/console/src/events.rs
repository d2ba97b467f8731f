use serde_json::Value;
use tickfolio_core::events::{PortfolioEvent, PortfolioEventSink};
use tokio::sync::broadcast;

/// Event name plus its JSON payload.
#[derive(Clone, Debug)]
pub struct ConsoleEvent {
    pub name: &'static str,
    pub payload: Value,
}

impl ConsoleEvent {
    pub fn from_portfolio_event(event: &PortfolioEvent) -> Self {
        Self {
            name: event.name(),
            payload: serde_json::to_value(event).unwrap_or(Value::Null),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any listeners.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ConsoleEvent) {
        // Lagging listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(event);
    }
}

impl PortfolioEventSink for EventBus {
    fn emit(&self, event: PortfolioEvent) {
        self.publish(ConsoleEvent::from_portfolio_event(&event));
    }
}
