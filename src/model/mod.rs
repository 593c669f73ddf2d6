//! Wire models for the conversation room
//!
//! This module contains the room events this client knows how to print and the
//! join request it sends after connecting.

pub mod event;

pub use event::{JoinConversation, RoomEvent};
