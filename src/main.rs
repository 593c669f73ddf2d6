use std::env;
use std::process::ExitCode;

use room_listener::listener::{conversation_id, run};
use room_listener::util::init_log;
use room_listener::{EventPrinter, SERVER_URL};
use tracing::warn;

#[tokio::main]
async fn main() -> ExitCode {
    init_log();

    let printer = EventPrinter::stdout(conversation_id(env::args()));
    printer.banner(SERVER_URL);

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    ExitCode::from(run(&printer, SERVER_URL, interrupt).await)
}
