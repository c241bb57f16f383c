//! Configuration model loaded from the process environment.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub supabase_url: String,
    pub supabase_secret_key: String,
}
