mod server;

pub use server::{DB_FILE, ServerConfig};
