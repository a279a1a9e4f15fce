use crate::api::model::AppState;
use crate::model::{AlgorithmsResponse, FaultRequest, LogsResponse, StatusResponse};
use axum::response::IntoResponse;
use log::info;
use std::sync::Arc;

async fn init(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let origin = app_state.initialize_processes().await;
    info!("Simulator initialized with {} processes", origin.count());
    axum::Json(StatusResponse::success("System initialized successfully")).into_response()
}

async fn processes(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let response = app_state.simulator.lock().await.processes();
    axum::Json(response).into_response()
}

async fn logs(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let page_size = app_state.config.simulation.log_page_size;
    let logs = app_state.simulator.lock().await.logs(page_size);
    axum::Json(LogsResponse { logs }).into_response()
}

async fn inject_fault(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
    axum::extract::Json(req): axum::extract::Json<FaultRequest>,
) -> impl axum::response::IntoResponse + Send {
    app_state.simulator.lock().await.inject_fault(&req.fault_type);
    axum::Json(StatusResponse::success(format!("Fault {} injected successfully", req.fault_type))).into_response()
}

async fn recover_fault(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
    axum::extract::Json(req): axum::extract::Json<FaultRequest>,
) -> impl axum::response::IntoResponse + Send {
    app_state.simulator.lock().await.recover_fault(&req.fault_type);
    axum::Json(StatusResponse::success(format!("Recovery from {} completed", req.fault_type))).into_response()
}

async fn algorithms(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let algorithms = app_state.simulator.lock().await.analyze_algorithms();
    axum::Json(AlgorithmsResponse { algorithms }).into_response()
}

async fn reset(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    app_state.simulator.lock().await.reset();
    axum::Json(StatusResponse::success("System reset completed")).into_response()
}

pub fn sim_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new().nest("/api", axum::Router::new()
        .route("/init", axum::routing::get(init))
        .route("/processes", axum::routing::get(processes))
        .route("/logs", axum::routing::get(logs))
        .route("/inject_fault", axum::routing::post(inject_fault))
        .route("/recover_fault", axum::routing::post(recover_fault))
        .route("/algorithms", axum::routing::get(algorithms))
        .route("/reset", axum::routing::get(reset)))
}
