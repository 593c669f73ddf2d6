//! Room events exchanged with the conversation server

use serde::Serialize;

/// Event sent once after connecting to join a conversation room.
pub const JOIN_CONVERSATION: &str = "join:conversation";

/// Display name announced in every join request.
pub const USERNAME: &str = "python-test-client";

/// Conversation joined when none is given on the command line.
pub const DEFAULT_CONVERSATION_ID: &str = "42327374-aef7-4b04-81b9-0e54ce42a44e";

/// Payload of the `join:conversation` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinConversation {
    pub conversation_id: String,
    pub username: String,
}

impl JoinConversation {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            username: USERNAME.to_string(),
        }
    }
}

/// The server events this client prints. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomEvent {
    Joined,
    AgentSpawned,
    AgentStatus,
    AgentMessage,
    TaskCreated,
    TaskUpdated,
    QueryProgress,
    QueryCompleted,
    Error,
}

impl RoomEvent {
    pub const ALL: [RoomEvent; 9] = [
        RoomEvent::Joined,
        RoomEvent::AgentSpawned,
        RoomEvent::AgentStatus,
        RoomEvent::AgentMessage,
        RoomEvent::TaskCreated,
        RoomEvent::TaskUpdated,
        RoomEvent::QueryProgress,
        RoomEvent::QueryCompleted,
        RoomEvent::Error,
    ];

    /// Event name on the wire.
    pub fn name(self) -> &'static str {
        match self {
            RoomEvent::Joined => "joined",
            RoomEvent::AgentSpawned => "agent:spawned",
            RoomEvent::AgentStatus => "agent:status",
            RoomEvent::AgentMessage => "agent:message",
            RoomEvent::TaskCreated => "task:created",
            RoomEvent::TaskUpdated => "task:updated",
            RoomEvent::QueryProgress => "query:progress",
            RoomEvent::QueryCompleted => "query:completed",
            RoomEvent::Error => "error",
        }
    }

    /// Heading printed above the payload.
    pub fn label(self) -> &'static str {
        match self {
            RoomEvent::Joined => "✅ Successfully joined conversation",
            RoomEvent::AgentSpawned => "🤖 Agent Spawned:",
            RoomEvent::AgentStatus => "📊 Agent Status:",
            RoomEvent::AgentMessage => "💬 Agent Message:",
            RoomEvent::TaskCreated => "📝 Task Created:",
            RoomEvent::TaskUpdated => "🔄 Task Updated:",
            RoomEvent::QueryProgress => "⏳ Query Progress:",
            RoomEvent::QueryCompleted => "✅ Query Completed:",
            RoomEvent::Error => "❌ Error:",
        }
    }
}
