use config::Config;
use dotenvy::dotenv;

use inventory_api::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .set_default("address", "0.0.0.0")
        .map_err(std::io::Error::other)?
        .set_default("port", 8080_i64)
        .map_err(std::io::Error::other)?
        .add_source(config::Environment::default())
        .build()
        .map_err(std::io::Error::other)?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    inventory_api::run(server_config).await
}
