//! Human-readable event feed
//!
//! [`EventPrinter`] owns the output sink and knows how every lifecycle step and
//! room event is rendered.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::warn;

use crate::model::{JoinConversation, RoomEvent};

pub struct EventPrinter<W> {
    out: Arc<Mutex<W>>,
    conversation_id: String,
    /// Set between a connect and its matching disconnect notice
    connected: Arc<AtomicBool>,
}

impl<W> Clone for EventPrinter<W> {
    fn clone(&self) -> Self {
        Self {
            out: self.out.clone(),
            conversation_id: self.conversation_id.clone(),
            connected: self.connected.clone(),
        }
    }
}

impl EventPrinter<Stdout> {
    pub fn stdout(conversation_id: impl Into<String>) -> Self {
        Self::new(io::stdout(), conversation_id)
    }
}

impl<W: AsRef<[u8]>> EventPrinter<W> {
    /// Everything written so far, for in-memory sinks.
    pub fn contents(&self) -> String {
        let out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let bytes: &[u8] = (*out).as_ref();
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl<W: Write + Send + 'static> EventPrinter<W> {
    pub fn new(out: W, conversation_id: impl Into<String>) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            conversation_id: conversation_id.into(),
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn banner(&self, url: &str) {
        self.write_lines(&[
            "🔌 Connecting to WebSocket server...".to_string(),
            format!("   URL: {url}"),
            format!("   Conversation ID: {}", self.conversation_id),
            String::new(),
        ]);
    }

    /// Announce the session and build the one join request for this connection.
    pub fn connected(&self, sid: Option<&str>) -> JoinConversation {
        self.connected.store(true, Ordering::SeqCst);
        self.write_lines(&[
            "✅ Connected to server".to_string(),
            format!("   Socket ID: {}", sid.unwrap_or("unknown")),
            String::new(),
            format!("📬 Joining conversation: {}", self.conversation_id),
        ]);

        JoinConversation::new(&self.conversation_id)
    }

    pub fn listening(&self) {
        self.write_lines(&["Press Ctrl+C to exit".to_string(), String::new()]);
    }

    pub fn event(&self, event: RoomEvent, payload: &Value) {
        match event {
            RoomEvent::Joined => self.write_lines(&[
                event.label().to_string(),
                format!("   Data: {payload}"),
                String::new(),
                "👂 Listening for events...".to_string(),
                String::new(),
            ]),
            _ => self.write_lines(&[event.label().to_string(), format!("   {payload}")]),
        }
    }

    pub fn disconnecting(&self) {
        self.write_lines(&[String::new(), String::new(), "👋 Disconnecting...".to_string()]);
    }

    /// Print the disconnect notice, once per connection.
    pub fn disconnected(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            self.write_lines(&["❌ Disconnected from server".to_string()]);
        }
    }

    pub fn failed(&self, err: &anyhow::Error) {
        self.write_lines(&[format!("❌ Error: {err:#}")]);
    }

    /// Write a block of lines without interleaving with other handlers.
    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{line}"))
            .and_then(|_| out.flush());

        if let Err(e) = result {
            warn!("Failed to write output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn printer() -> EventPrinter<Vec<u8>> {
        EventPrinter::new(Vec::new(), "conv-1")
    }

    #[rstest]
    #[case(RoomEvent::AgentSpawned, "🤖 Agent Spawned:")]
    #[case(RoomEvent::AgentStatus, "📊 Agent Status:")]
    #[case(RoomEvent::AgentMessage, "💬 Agent Message:")]
    #[case(RoomEvent::TaskCreated, "📝 Task Created:")]
    #[case(RoomEvent::TaskUpdated, "🔄 Task Updated:")]
    #[case(RoomEvent::QueryProgress, "⏳ Query Progress:")]
    #[case(RoomEvent::QueryCompleted, "✅ Query Completed:")]
    #[case(RoomEvent::Error, "❌ Error:")]
    fn prints_label_then_payload(#[case] event: RoomEvent, #[case] label: &str) {
        let printer = printer();

        printer.event(event, &json!({"id": "a-1", "progress": 0.5}));

        assert_eq!(
            printer.contents(),
            format!("{label}\n   {{\"id\":\"a-1\",\"progress\":0.5}}\n")
        );
    }

    #[test]
    fn joined_announces_listening() {
        let printer = printer();

        printer.event(RoomEvent::Joined, &json!({"conversationId": "conv-1"}));

        assert_eq!(
            printer.contents(),
            "✅ Successfully joined conversation\n   Data: {\"conversationId\":\"conv-1\"}\n\n👂 Listening for events...\n\n"
        );
    }

    #[test]
    fn payload_is_printed_verbatim_whatever_its_shape() {
        let printer = printer();

        printer.event(RoomEvent::Error, &json!("boom"));
        printer.event(RoomEvent::Error, &Value::Null);

        assert_eq!(printer.contents(), "❌ Error:\n   \"boom\"\n❌ Error:\n   null\n");
    }

    #[test]
    fn connect_prints_session_and_builds_join() {
        let printer = printer();

        let join = printer.connected(Some("sio-1"));

        assert_eq!(join, JoinConversation::new("conv-1"));
        assert_eq!(join.username, "python-test-client");
        assert_eq!(
            printer.contents(),
            "✅ Connected to server\n   Socket ID: sio-1\n\n📬 Joining conversation: conv-1\n"
        );
    }

    #[test]
    fn disconnect_notice_is_printed_once_per_connection() {
        let printer = printer();

        printer.disconnected();
        printer.connected(None);
        printer.disconnected();
        printer.disconnected();

        let out = printer.contents();
        assert!(out.contains("   Socket ID: unknown\n"));
        assert_eq!(out.matches("❌ Disconnected from server").count(), 1);
    }

    #[test]
    fn banner_shows_url_and_conversation() {
        let printer = printer();

        printer.banner("http://localhost:3000");

        let out = printer.contents();
        assert!(out.starts_with("🔌 Connecting to WebSocket server...\n"));
        assert!(out.contains("   URL: http://localhost:3000\n"));
        assert!(out.contains("   Conversation ID: conv-1\n"));
    }

    #[test]
    fn failure_is_one_error_line() {
        let printer = printer();

        printer.failed(&anyhow::anyhow!("connection refused"));

        assert_eq!(printer.contents(), "❌ Error: connection refused\n");
    }
}
