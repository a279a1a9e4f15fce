use crate::api::endpoints::sim_api::sim_api_register;
use crate::api::endpoints::web_index::index_register;
use crate::api::model::AppState;
use crate::api::serve::serve;
use crate::api::ticker::exec_ticker;
use crate::error::{fatal_err, to_io_error, SimError};
use crate::model::{Config, Healthcheck};
use crate::utils::{get_build_time, get_server_time};
use crate::VERSION;
use log::{error, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn get_web_dir_path(web_ui_enabled: bool, web_root: &str) -> Result<PathBuf, SimError> {
    let web_dir_path = PathBuf::from(web_root);
    if web_ui_enabled && (!web_dir_path.exists() || !web_dir_path.is_dir()) {
        return Err(fatal_err!(
            "web_root does not exists or is not an directory: {}",
            web_dir_path.display()
        ));
    }
    Ok(web_dir_path)
}

fn create_healthcheck() -> Healthcheck {
    Healthcheck {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        build_time: get_build_time(),
        server_time: get_server_time(),
    }
}

async fn healthcheck() -> impl axum::response::IntoResponse {
    axum::Json(create_healthcheck())
}

fn create_cors_layer() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
            axum::http::Method::HEAD,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(std::time::Duration::from_secs(3600))
}

fn create_compression_layer() -> tower_http::compression::CompressionLayer {
    tower_http::compression::CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true)
}

pub fn create_router(app_state: &Arc<AppState>, web_dir_path: Option<&Path>) -> axum::Router<()> {
    let mut router = axum::Router::new()
        .route("/healthcheck", axum::routing::get(healthcheck))
        .merge(sim_api_register());
    if let Some(web_dir) = web_dir_path {
        router = router.merge(index_register(web_dir));
    }
    router
        .layer(create_cors_layer())
        .layer(create_compression_layer())
        .with_state(Arc::clone(app_state))
}

/// Binds the first free port of `ports`, the configured port is usually taken by a leftover instance.
async fn bind_listener(host: &str, ports: &[u16]) -> std::io::Result<tokio::net::TcpListener> {
    let mut last_err = std::io::Error::new(ErrorKind::AddrNotAvailable, format!("No port to bind on {host}"));
    for port in ports {
        match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
            Ok(listener) => return Ok(listener),
            Err(err) => {
                warn!("Could not bind {host}:{port}: {err}");
                last_err = err;
            }
        }
    }
    Err(last_err)
}

fn exec_shutdown_signal(app_state: &Arc<AppState>) {
    let cancel_tokens = app_state.cancel_tokens.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested"),
            Err(err) => error!("Failed to listen for shutdown signal: {err}"),
        }
        cancel_tokens.cancel_all();
    });
}

pub async fn start_server(config: Config) -> futures::io::Result<()> {
    let mut infos = Vec::new();
    let host = config.api.host.clone();
    let ports = config.api.bind_candidates();
    let web_ui_enabled = config.api.web_ui_enabled;
    let web_dir_path = get_web_dir_path(web_ui_enabled, config.api.web_root.as_str()).map_err(to_io_error)?;
    if web_ui_enabled {
        infos.push(format!("Web root: {}", web_dir_path.display()));
    }
    let tick_interval = config.simulation.tick_interval();
    infos.push(format!("Snapshot source: {:?}", config.simulation.snapshot_source));

    let app_state = Arc::new(AppState::new(config));
    let origin = app_state.initialize_processes().await;
    infos.push(format!("Process table loaded: {origin:?}"));

    let (cancel_token_ticker, cancel_token_server) = (
        app_state.cancel_tokens.ticker.clone(),
        app_state.cancel_tokens.server.clone(),
    );
    let ticker = exec_ticker(&app_state, tick_interval, &cancel_token_ticker);
    exec_shutdown_signal(&app_state);

    let router = create_router(&app_state, web_ui_enabled.then_some(web_dir_path.as_path()));
    let listener = bind_listener(&host, &ports).await?;
    infos.push(format!("Server running: http://{}", listener.local_addr()?));
    for info in &infos {
        info!("{info}");
    }

    serve(listener, router, Some(cancel_token_server)).await;
    cancel_token_ticker.cancel();
    if let Err(err) = ticker.await {
        error!("Ticker task failed: {err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{bind_listener, create_router, get_web_dir_path};
    use crate::api::model::AppState;
    use crate::model::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[test]
    fn test_missing_web_root() {
        assert!(get_web_dir_path(true, "/definitely/not/here").is_err_and(|e| e.is_fatal()));
        assert!(get_web_dir_path(false, "/definitely/not/here").is_ok());
    }

    #[tokio::test]
    async fn test_bind_falls_back_to_next_port() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let taken_port = taken.local_addr().unwrap().port();
        let listener = bind_listener("127.0.0.1", &[taken_port, 0]).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), taken_port);
    }

    #[tokio::test]
    async fn test_healthcheck() {
        let app_state = Arc::new(AppState::new(Config::default()));
        let router = create_router(&app_state, None);
        let response = router.oneshot(Request::builder().uri("/healthcheck").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], crate::VERSION);
    }
}
