use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use super::with_store;
use crate::services::Store;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    /// Records currently held in memory
    pub users: usize,
    pub tweets: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up and the store is loaded", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<Store>) -> impl Responder {
    let counts = with_store(store, |s| {
        let snapshot = s.lock();
        (snapshot.users.len(), snapshot.tweets.len())
    })
    .await;

    match counts {
        Ok((users, tweets)) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().timestamp(),
            users,
            tweets,
        }),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::test_support::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_reports_store_counts() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "tweet-service");
        assert_eq!((body.users, body.tweets), (2, 3));
    }
}
