use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use serde_json::Value;

use crate::domain::item::{ItemPatch, NewItem};
use crate::dto::payload::{
    ITEM_REQUIRED_FIELDS, PROTECTED_FIELDS, require_fields, strip_protected_fields,
};
use crate::dto::{ApiResponse, PageParams, SearchParams};
use crate::repository::postgrest::PostgrestRepository;
use crate::routes::{bad_request, error_response, parse_entity_id};
use crate::services;

#[get("/items")]
pub async fn list_items(
    params: web::Query<PageParams>,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(page) = params.page_number() else {
        return bad_request("Invalid page number");
    };
    let Some(page_size) = params.page_size() else {
        return bad_request("Invalid page size");
    };

    match services::item::list_items(repo.get_ref(), page, page_size).await {
        Ok(paged) => {
            HttpResponse::Ok().json(ApiResponse::ok("Paged items retrieved successfully", paged))
        }
        Err(e) => {
            log::error!("Failed to retrieve paged items: {}", e.details());
            error_response(&e)
        }
    }
}

#[get("/items/search")]
pub async fn search_items(
    params: web::Query<SearchParams>,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) else {
        return bad_request("Invalid name");
    };
    let Some(page) = params.page_number() else {
        return bad_request("Invalid page number");
    };
    let Some(page_size) = params.page_size() else {
        return bad_request("Invalid page size");
    };

    match services::item::search_items(repo.get_ref(), name, page, page_size).await {
        Ok(paged) => {
            HttpResponse::Ok().json(ApiResponse::ok("Paged items retrieved successfully", paged))
        }
        Err(e) => {
            log::error!("Failed to search items: {}", e.details());
            error_response(&e)
        }
    }
}

#[get("/items/{id}")]
pub async fn get_item(
    id: web::Path<String>,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&id) else {
        return bad_request("Invalid ID");
    };

    match services::item::get_item(repo.get_ref(), id).await {
        Ok(item) => HttpResponse::Ok().json(ApiResponse::ok("Item retrieved successfully", item)),
        Err(e) => {
            log::error!("Failed to retrieve item {id}: {}", e.details());
            error_response(&e)
        }
    }
}

#[post("/items")]
pub async fn create_item(
    body: web::Bytes,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to parse JSON of new item: {e}");
            return bad_request("Invalid JSON in body.");
        }
    };
    let Value::Object(map) = payload else {
        return bad_request("Invalid JSON in body.");
    };

    if let Err(e) = require_fields(&map, &ITEM_REQUIRED_FIELDS) {
        log::error!("Missing required fields in item data: {e}");
        return bad_request(&e.to_string());
    }

    // Protected keys are simply not part of `NewItem`, so anything the
    // client put there is dropped here.
    let new_item: NewItem = match serde_json::from_value(Value::Object(map)) {
        Ok(item) => item,
        Err(e) => {
            log::error!("Failed to parse JSON of new item: {e}");
            return bad_request("Invalid JSON in body.");
        }
    };

    match services::item::create_item(repo.get_ref(), &new_item).await {
        Ok(item) => HttpResponse::Created().json(ApiResponse::ok("Item created successfully", item)),
        Err(e) => {
            log::error!("Failed to create item: {}", e.details());
            error_response(&e)
        }
    }
}

#[patch("/items/{id}")]
pub async fn update_item(
    id: web::Path<String>,
    body: web::Bytes,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&id) else {
        return bad_request("Invalid ID");
    };

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to parse JSON of updated item: {e}");
            return bad_request("Invalid JSON in body.");
        }
    };
    let Value::Object(mut map) = payload else {
        return bad_request("Invalid JSON in body.");
    };

    strip_protected_fields(&mut map, &PROTECTED_FIELDS);

    let updates: ItemPatch = match serde_json::from_value(Value::Object(map)) {
        Ok(patch) => patch,
        Err(e) => {
            log::error!("Failed to parse JSON of updated item: {e}");
            return bad_request("Invalid JSON in body.");
        }
    };

    match services::item::update_item(repo.get_ref(), id, &updates).await {
        Ok(item) => HttpResponse::Ok().json(ApiResponse::ok("Item updated successfully", item)),
        Err(e) => {
            log::error!("Failed to update item {id}: {}", e.details());
            error_response(&e)
        }
    }
}

#[delete("/items/{id}")]
pub async fn delete_item(
    id: web::Path<String>,
    repo: web::Data<PostgrestRepository>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&id) else {
        return bad_request("Invalid ID");
    };

    match services::item::delete_item(repo.get_ref(), id).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::ok_empty("Item deleted successfully"))
        }
        Err(e) => {
            log::error!("Failed to delete item {id}: {}", e.details());
            error_response(&e)
        }
    }
}
