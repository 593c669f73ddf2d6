//! The listen loop behind the binary.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use tracing::{info, warn};

use crate::client;
use crate::model::event::DEFAULT_CONVERSATION_ID;
use crate::printer::EventPrinter;

/// Server the listener connects to. Not configurable at runtime.
pub const SERVER_URL: &str = "http://localhost:3000";

/// Conversation to join: the first argument after the program name, or the default.
pub fn conversation_id<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONVERSATION_ID.to_string())
}

/// Run a listen session and turn its outcome into a process exit status.
///
/// ## Returns
///
/// * `0` - the session ended because `shutdown` resolved
/// * `1` - connecting failed; the error has been printed
pub async fn run<W, S>(printer: &EventPrinter<W>, url: &str, shutdown: S) -> u8
where
    W: Write + Send + 'static,
    S: Future<Output = ()>,
{
    match listen(printer, url, shutdown).await {
        Ok(()) => 0,
        Err(e) => {
            printer.failed(&e);
            1
        }
    }
}

/// Connect, join the conversation and print events until `shutdown` resolves.
///
/// `shutdown` is watched from the start, so it also cancels a connection
/// attempt that has not completed yet.
pub async fn listen<W, S>(printer: &EventPrinter<W>, url: &str, shutdown: S) -> Result<()>
where
    W: Write + Send + 'static,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let connect = client::builder(url, printer).connect();
    let socket = tokio::select! {
        _ = &mut shutdown => {
            info!("👋 Shutdown requested while connecting");
            printer.disconnecting();
            return Ok(());
        }
        socket = connect => socket?,
    };
    printer.listening();

    shutdown.await;
    info!("👋 Shutdown requested");
    printer.disconnecting();
    if let Err(e) = socket.disconnect().await {
        warn!("Disconnect did not reach the server: {}", e);
    }
    printer.disconnected();
    Ok(())
}
