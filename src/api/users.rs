use actix_web::{web, HttpResponse, Responder};

use super::{error_response, with_store, ErrorResponse};
use crate::models::{NewUser, User, UserFilter};
use crate::services::Store;

/// GET /api/users - Lists users, optionally filtered by email or username
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "Matching users", body = [User])
    )
)]
pub async fn list_users(store: web::Data<Store>, query: web::Query<UserFilter>) -> impl Responder {
    let filter = query.into_inner();
    log::info!("👥 GET /api/users - email={:?} username={:?}", filter.email, filter.username);

    match with_store(store, move |s| s.list_users(&filter)).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(response) => response,
    }
}

/// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id, numeric or string")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn get_user(store: web::Data<Store>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();
    log::info!("👤 GET /api/users/{}", id);

    match with_store(store, move |s| s.get_user(&id)).await {
        Ok(Ok(user)) => HttpResponse::Ok().json(user),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

/// POST /api/users - Registers a user; the email must be unused
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn create_user(store: web::Data<Store>, candidate: web::Json<NewUser>) -> impl Responder {
    let NewUser(candidate) = candidate.into_inner();
    log::info!("📝 POST /api/users - {}", candidate.email().unwrap_or_default());

    match with_store(store, move |s| s.create_user(candidate)).await {
        Ok(Ok(user)) => HttpResponse::Created().json(user),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}
