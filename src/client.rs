//! Socket.IO client wiring
//!
//! Registers the connect, disconnect and room event callbacks on a
//! `rust_socketio` client. Callbacks run on the client's background task.

use std::io::Write;

use futures_util::FutureExt;
use rust_socketio::asynchronous::{Client, ClientBuilder};
use rust_socketio::Payload;
use serde_json::Value;
use tracing::error;

use crate::model::event::{JoinConversation, RoomEvent, JOIN_CONVERSATION};
use crate::printer::EventPrinter;

/// Build a client for `url` whose callbacks print through `printer`.
///
/// Events without a registered callback are dropped by the client.
pub fn builder<W: Write + Send + 'static>(url: &str, printer: &EventPrinter<W>) -> ClientBuilder {
    let on_open = printer.clone();
    let on_close = printer.clone();

    let mut builder = ClientBuilder::new(url)
        .on("open", move |payload: Payload, socket: Client| {
            let request = on_open.connected(session_id(&payload).as_deref());
            async move {
                if let Err(e) = join(&socket, request).await {
                    error!("Failed to join conversation: {:#}", e);
                }
            }
            .boxed()
        })
        .on("close", move |_, _| {
            on_close.disconnected();
            async {}.boxed()
        });

    for event in RoomEvent::ALL {
        let printer = printer.clone();
        builder = builder.on(event.name(), move |payload, _| {
            printer.event(event, &payload_value(payload));
            async {}.boxed()
        });
    }
    builder
}

async fn join(socket: &Client, request: JoinConversation) -> anyhow::Result<()> {
    let payload = serde_json::to_value(request)?;
    socket
        .emit(JOIN_CONVERSATION, Payload::Text(vec![payload]))
        .await?;
    Ok(())
}

/// Collapse the event arguments into one printable value.
///
/// A single argument is returned as is, no argument becomes `null` and several
/// arguments become an array.
pub fn payload_value(payload: Payload) -> Value {
    match payload {
        Payload::Text(mut args) => match args.len() {
            0 => Value::Null,
            1 => args.remove(0),
            _ => Value::Array(args),
        },
        Payload::Binary(bytes) => Value::String(format!("<{} bytes>", bytes.len())),
        other => Value::String(format!("{other:?}")),
    }
}

/// Session id, when the connect payload carries one.
pub fn session_id(payload: &Payload) -> Option<String> {
    let Payload::Text(args) = payload else {
        return None;
    };
    args.iter()
        .find_map(|arg| arg.get("sid")?.as_str().map(str::to_string))
}
