use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler, redirect_handler, update_link_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/redirects", get(redirect_handler))
            .route(
                "/admin/redirects",
                get(list_links_handler).post(create_link_handler),
            )
            .route(
                "/admin/redirects/{id}",
                get(get_link_handler)
                    .patch(update_link_handler)
                    .delete(delete_link_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Response;
    use relink_admin::LinkAdminService;
    use relink_cache::{CacheConfig, NullCache, SweepingCache};
    use relink_core::{LinkCache, LinkRecord};
    use relink_resolver::{RedirectResolver, ResolverConfig};
    use relink_storage::InMemoryRepository;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn router_with<C: LinkCache + Clone>(cache: C) -> Router {
        let repository = Arc::new(InMemoryRepository::new());
        let admin = LinkAdminService::new(Arc::clone(&repository), cache.clone());
        let resolver = RedirectResolver::new(repository, cache, ResolverConfig::default());
        App::router(AppState::new(Arc::new(resolver), Arc::new(admin)))
    }

    fn router() -> Router {
        router_with(NullCache::new())
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(router: &Router, body: Value) -> LinkRecord {
        let response = send(router, Method::POST, "/admin/redirects", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_value(json_body(response).await).unwrap()
    }

    #[tokio::test]
    async fn health() {
        let response = send(&router(), Method::GET, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn redirect_statuses_follow_outcome() {
        let router = router();
        let record = create(&router, json!({ "active_link": "a.com" })).await;

        let response = send(&router, Method::GET, "/redirects?link=a.com", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, Value::Null);

        let uri = format!("/admin/redirects/{}", record.id);
        let response = send(&router, Method::PATCH, &uri, Some(json!({ "active_link": "b.com" }))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&router, Method::GET, "/redirects?link=a.com", None).await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(json_body(response).await, Value::Null);

        let response = send(&router, Method::GET, "/redirects?link=c.com", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_link_parameter_is_not_found() {
        let response = send(&router(), Method::GET, "/redirects", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_create_conflicts() {
        let router = router();
        let link = json!({ "active_link": "b.com", "history_link": "a.com" });
        create(&router, link.clone()).await;

        let response = send(&router, Method::POST, "/admin/redirects", Some(link)).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn get_list_and_delete() {
        let router = router();
        let record = create(&router, json!({ "active_link": "a.com" })).await;
        let uri = format!("/admin/redirects/{}", record.id);

        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: LinkRecord = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(fetched, record);

        let response = send(&router, Method::GET, "/admin/redirects", None).await;
        assert_eq!(json_body(response).await.as_array().map(Vec::len), Some(1));

        let response = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_unknown_link_is_not_found() {
        let response = send(
            &router(),
            Method::PATCH,
            "/admin/redirects/missing",
            Some(json!({ "active_link": "b.com" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cached_link_stays_fresh_after_update() {
        let config = CacheConfig::builder()
            .cleanup_interval(Duration::from_secs(3600))
            .build();
        let router = router_with(Arc::new(SweepingCache::new(config).unwrap()));
        let record = create(&router, json!({ "active_link": "a.com" })).await;

        let uri = format!("/admin/redirects/{}", record.id);
        send(&router, Method::PATCH, &uri, Some(json!({ "active_link": "b.com" }))).await;

        let response = send(&router, Method::GET, "/redirects?link=a.com", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
