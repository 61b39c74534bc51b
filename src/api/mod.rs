pub mod health;
pub mod metrics;
pub mod swagger;
pub mod tweets;
pub mod users;

use actix_web::{error::InternalError, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::services::Store;
use crate::utils::AppError;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Maps a store error onto the HTTP contract.
///
/// A rejected `likedBy` is reported as 404 along with missing records.
pub fn error_response(error: &AppError) -> HttpResponse {
    let body = ErrorResponse::new(error.client_message());
    match error {
        AppError::NotFound(_) | AppError::InvalidArgument(_) => HttpResponse::NotFound().json(body),
        AppError::Conflict(_) => HttpResponse::Conflict().json(body),
        AppError::Io(_) | AppError::Serialization(_) => {
            log::error!("❌ Store error: {}", error);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Runs a store call on the blocking pool; the store holds its lock across
/// the file write, so it must not run on an async worker.
pub async fn with_store<F, R>(store: web::Data<Store>, f: F) -> Result<R, HttpResponse>
where
    F: FnOnce(&Store) -> R + Send + 'static,
    R: Send + 'static,
{
    web::block(move || f(store.get_ref())).await.map_err(|e| {
        log::error!("❌ Blocking task failed: {}", e);
        HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
    })
}

/// Registers the users and tweets routes plus the JSON/query error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(format!("Invalid JSON body: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(format!("Invalid query string: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .service(
        web::scope("/api/users")
            .route("", web::get().to(users::list_users))
            .route("", web::post().to(users::create_user))
            .route("/{id}", web::get().to(users::get_user)),
    )
    .service(
        web::scope("/api/tweets")
            .route("", web::get().to(tweets::list_tweets))
            .route("", web::post().to(tweets::create_tweet))
            .route("/{id}", web::get().to(tweets::get_tweet))
            .route("/{id}", web::patch().to(tweets::update_tweet_likes))
            .route("/{id}", web::delete().to(tweets::delete_tweet)),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        web, App, Error,
    };

    use crate::services::Store;

    pub fn test_app(
        store: Store,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(store))
            .configure(super::configure)
    }
}
