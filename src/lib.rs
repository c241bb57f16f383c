use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::postgrest::PostgrestRepository;
use crate::routes::item::{
    create_item, delete_item, get_item, list_items, search_items, update_item,
};
use crate::routes::supplier::get_supplier;

pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One backend client for the whole process, shared read-only across
    // request handlers.
    let repo = PostgrestRepository::new(
        &server_config.supabase_url,
        &server_config.supabase_secret_key,
    )
    .map_err(|e| io::Error::other(format!("Failed to build backend client: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/v1")
                    // `/items/search` must precede `/items/{id}`.
                    .service(search_items)
                    .service(list_items)
                    .service(get_item)
                    .service(create_item)
                    .service(update_item)
                    .service(delete_item)
                    .service(get_supplier),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
