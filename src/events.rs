//! Event System
//!
//! Activity events published by the dashboard controller

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

/// The controller operation an event comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Periodic or manual statistics refresh.
    Refresh,
    /// Prediction form submission.
    Prediction,
    /// Clear-history action.
    History,
    /// Controller start/stop.
    Lifecycle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

/// Sends controller events to whichever host is listening.
///
/// Sending never fails loudly: a host that does not care about events simply
/// drops its receiver.
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// An event sender nobody listens to.
    pub fn detached() -> Self {
        let (sender, _) = mpsc::channel(1);
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::new(source, message, event_type, log_level))
            .await;
    }

    /// Send from synchronous code; the event is dropped when the channel is full.
    pub fn send_now(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .try_send(Event::new(source, message, event_type, log_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_source_and_message() {
        let event = Event::new(
            Source::Refresh,
            "Loaded 3 predictions".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let text = event.to_string();
        assert!(text.starts_with("Success ["));
        assert!(text.ends_with("Refresh: Loaded 3 predictions"));
    }

    #[tokio::test]
    async fn test_detached_sender_does_not_block() {
        let sender = EventSender::detached();
        sender
            .send(
                Source::Lifecycle,
                "ignored".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;
    }

    #[tokio::test]
    async fn test_events_reach_receiver() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);
        sender
            .send(
                Source::History,
                "Cleared 2 records".to_string(),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        let event = rx.recv().await.unwrap();
        assert_eq!(event.source, Source::History);
        assert_eq!(event.msg, "Cleared 2 records");
    }

    #[test]
    fn test_send_now_drops_when_full() {
        let (tx, mut rx) = mpsc::channel(1);
        let sender = EventSender::new(tx);
        for msg in ["first", "second"] {
            sender.send_now(
                Source::Lifecycle,
                msg.to_string(),
                EventType::Refresh,
                LogLevel::Info,
            );
        }
        assert_eq!(rx.try_recv().unwrap().msg, "first");
        assert!(rx.try_recv().is_err());
    }
}
