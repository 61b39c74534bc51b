use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tweet Service API",
        version = "1.0.0",
        description = "Users and tweets kept in a single JSON document.\n\n**Notes:**\n- Ids may be numbers or strings; `5` and `\"5\"` address the same record\n- Every write rewrites the whole document\n- No authentication, no pagination"
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,

        // Tweets
        crate::api::tweets::list_tweets,
        crate::api::tweets::get_tweet,
        crate::api::tweets::create_tweet,
        crate::api::tweets::update_tweet_likes,
        crate::api::tweets::delete_tweet,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::NewUser,
            crate::models::Tweet,
            crate::models::UpdateLikesRequest,
            crate::api::ErrorResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "List, look up and register users. Emails are unique regardless of case."),
        (name = "Tweets", description = "Tweets sorted newest first; likes are replaced as a whole."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/api/users", "/api/users/{id}", "/api/tweets", "/api/tweets/{id}", "/health", "/metrics"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {}", expected);
        }
    }
}
