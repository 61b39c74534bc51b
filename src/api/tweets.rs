use actix_web::{web, HttpResponse, Responder};

use super::{error_response, with_store, ErrorResponse};
use crate::models::{Tweet, TweetFilter, UpdateLikesRequest};
use crate::services::Store;

/// GET /api/tweets - Newest first, optionally only one user's tweets
#[utoipa::path(
    get,
    path = "/api/tweets",
    tag = "Tweets",
    params(TweetFilter),
    responses(
        (status = 200, description = "Tweets sorted by createdAt, newest first", body = [Tweet])
    )
)]
pub async fn list_tweets(store: web::Data<Store>, query: web::Query<TweetFilter>) -> impl Responder {
    let filter = query.into_inner();
    log::info!("🐦 GET /api/tweets - userId={:?}", filter.user_id);

    match with_store(store, move |s| s.list_tweets(&filter)).await {
        Ok(tweets) => HttpResponse::Ok().json(tweets),
        Err(response) => response,
    }
}

/// GET /api/tweets/{id}
#[utoipa::path(
    get,
    path = "/api/tweets/{id}",
    tag = "Tweets",
    params(("id" = String, Path, description = "Tweet id, numeric or string")),
    responses(
        (status = 200, description = "Tweet found", body = Tweet),
        (status = 404, description = "No tweet with this id", body = ErrorResponse)
    )
)]
pub async fn get_tweet(store: web::Data<Store>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();
    log::info!("🐦 GET /api/tweets/{}", id);

    match with_store(store, move |s| s.get_tweet(&id)).await {
        Ok(Ok(tweet)) => HttpResponse::Ok().json(tweet),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

/// POST /api/tweets - Stores the tweet at the head of the collection
#[utoipa::path(
    post,
    path = "/api/tweets",
    tag = "Tweets",
    request_body = Tweet,
    responses(
        (status = 201, description = "Tweet created", body = Tweet)
    )
)]
pub async fn create_tweet(store: web::Data<Store>, candidate: web::Json<Tweet>) -> impl Responder {
    let candidate = candidate.into_inner();
    log::info!("📝 POST /api/tweets - {}", candidate.label());

    match with_store(store, move |s| s.create_tweet(candidate)).await {
        Ok(tweet) => HttpResponse::Created().json(tweet),
        Err(response) => response,
    }
}

/// PATCH /api/tweets/{id} - Replaces the tweet's likedBy list
#[utoipa::path(
    patch,
    path = "/api/tweets/{id}",
    tag = "Tweets",
    params(("id" = String, Path, description = "Tweet id, numeric or string")),
    request_body = UpdateLikesRequest,
    responses(
        (status = 200, description = "Updated tweet", body = Tweet),
        (status = 404, description = "Tweet missing or likedBy is not an array", body = ErrorResponse)
    )
)]
pub async fn update_tweet_likes(
    store: web::Data<Store>,
    id: web::Path<String>,
    request: web::Json<UpdateLikesRequest>,
) -> impl Responder {
    let id = id.into_inner();
    let liked_by = request.into_inner().liked_by;
    log::info!("❤️ PATCH /api/tweets/{}", id);

    match with_store(store, move |s| s.update_tweet_likes(&id, liked_by)).await {
        Ok(Ok(tweet)) => HttpResponse::Ok().json(tweet),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

/// DELETE /api/tweets/{id}
#[utoipa::path(
    delete,
    path = "/api/tweets/{id}",
    tag = "Tweets",
    params(("id" = String, Path, description = "Tweet id, numeric or string")),
    responses(
        (status = 204, description = "Tweet deleted"),
        (status = 404, description = "No tweet with this id", body = ErrorResponse)
    )
)]
pub async fn delete_tweet(store: web::Data<Store>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();
    log::info!("🗑️ DELETE /api/tweets/{}", id);

    match with_store(store, move |s| s.delete_tweet(&id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(e)) => error_response(&e),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use crate::api::test_support::test_app;
    use crate::services::store::test_support::*;

    fn ids(body: &Value) -> Vec<Value> {
        body.as_array()
            .map(|tweets| tweets.iter().map(|t| t["id"].clone()).collect())
            .unwrap_or_default()
    }

    #[actix_web::test]
    async fn test_list_tweets_sorted() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::get().uri("/api/tweets").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&body), [json!(2), json!("3"), json!(1)]);
    }

    #[actix_web::test]
    async fn test_list_tweets_by_user() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::get().uri("/api/tweets?userId=5").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&body), [json!(2), json!(1)]);
    }

    #[actix_web::test]
    async fn test_get_tweet_and_missing_tweet() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::get().uri("/api/tweets/3").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["content"], json!("third"));

        let req = test::TestRequest::get().uri("/api/tweets/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_tweet_is_listed_first_in_storage() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;
        let candidate = json!({
            "id": 4,
            "userId": 6,
            "createdAt": "2024-07-01T10:00:00.000Z",
            "likedBy": [],
            "content": "fresh",
            "media": { "kind": "image" }
        });

        let req = test::TestRequest::post().uri("/api/tweets").set_json(&candidate).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created, candidate);

        let stored = on_disk(&dir);
        assert_eq!(serde_json::to_value(&stored.tweets[0]).unwrap(), candidate);
    }

    #[actix_web::test]
    async fn test_patch_replaces_likes() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::patch()
            .uri("/api/tweets/2")
            .set_json(json!({ "likedBy": [7, 8] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["likedBy"], json!([7, 8]));
        assert_eq!(body["content"], json!("second"));
        let stored = on_disk(&dir);
        assert_eq!(stored.tweets[1].liked_by(), Some(&json!([7, 8])));
    }

    #[actix_web::test]
    async fn test_create_tweet_accepts_any_object() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        for candidate in [
            json!({ "content": "no id" }),
            json!({ "id": 9, "likedBy": "x" }),
            json!({ "id": 10, "userId": true }),
            json!({ "id": 11, "createdAt": null, "likedBy": null }),
        ] {
            let req = test::TestRequest::post().uri("/api/tweets").set_json(&candidate).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let created: Value = test::read_body_json(resp).await;
            assert_eq!(created, candidate);
            assert_eq!(serde_json::to_value(&on_disk(&dir).tweets[0]).unwrap(), candidate);
        }
    }

    #[actix_web::test]
    async fn test_create_tweet_rejects_non_objects() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::post().uri("/api/tweets").set_json(json!([1, 2])).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(on_disk(&dir).tweets.len(), 3);
    }

    #[actix_web::test]
    async fn test_patch_stores_likes_of_any_shape() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::patch()
            .uri("/api/tweets/1")
            .set_json(json!({ "likedBy": [{ "id": 7 }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["likedBy"], json!([{ "id": 7 }]));
        assert_eq!(on_disk(&dir).tweets[0].liked_by(), Some(&json!([{ "id": 7 }])));
    }

    #[actix_web::test]
    async fn test_patch_with_invalid_likes_is_404() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        for body in [json!({ "likedBy": "7" }), json!({})] {
            let req = test::TestRequest::patch().uri("/api/tweets/1").set_json(body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn test_patch_missing_tweet_is_404() {
        let (store, _dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::patch()
            .uri("/api/tweets/999")
            .set_json(json!({ "likedBy": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_tweet() {
        let (store, dir) = store_with(sample_document());
        let app = test::init_service(test_app(store)).await;

        let req = test::TestRequest::delete().uri("/api/tweets/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let req = test::TestRequest::delete().uri("/api/tweets/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        assert_eq!(on_disk(&dir).tweets.len(), 2);
    }
}
