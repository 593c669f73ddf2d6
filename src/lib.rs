pub mod client;
pub mod listener;
pub mod model;
pub mod printer;
pub mod util;

pub use listener::SERVER_URL;
pub use printer::EventPrinter;
