use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::ApiResponse;
use crate::repository::postgrest::PostgrestRepository;
use crate::routes::{bad_request, error_response, parse_entity_id};
use crate::services;

#[get("/suppliers/{id}")]
pub async fn get_supplier(
    id: web::Path<String>,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&id) else {
        return bad_request("Invalid ID");
    };

    match services::supplier::get_supplier(repo.get_ref(), id).await {
        Ok(supplier) => {
            HttpResponse::Ok().json(ApiResponse::ok("Supplier retrieved successfully", supplier))
        }
        Err(e) => {
            log::error!("Failed to retrieve supplier {id}: {}", e.details());
            error_response(&e)
        }
    }
}
