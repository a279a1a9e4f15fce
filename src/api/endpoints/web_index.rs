use crate::api::model::AppState;
use std::path::Path;
use std::sync::Arc;

pub fn index_register(web_dir_path: &Path) -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route_service("/", tower_http::services::ServeFile::new(web_dir_path.join("index.html")))
        .nest_service("/static", tower_http::services::ServeDir::new(web_dir_path.join("static")))
        .fallback_service(tower_http::services::ServeDir::new(web_dir_path))
}

#[cfg(test)]
mod tests {
    use super::index_register;
    use crate::api::model::AppState;
    use crate::model::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_serves_index_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>faultsim</html>").unwrap();
        let router = index_register(dir.path()).with_state(Arc::new(AppState::new(Config::default())));

        let response = router.clone().oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>faultsim</html>");

        let response = router.oneshot(Request::builder().uri("/missing.js").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
