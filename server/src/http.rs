use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use platform_db::{self, DbPool};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::pages;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "staffdir server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/", get(index_handler))
        .route("/add", post(add_handler))
        .route("/delete/{id}", get(delete_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> HttpResult<Html<String>> {
    let employees = platform_db::list_employees(&state.pool)
        .await
        .map_err(|err| HttpError::internal(err.into()))?;
    Ok(Html(pages::index_page(&employees)))
}

#[derive(Deserialize)]
struct AddEmployeeForm {
    name: String,
    department: String,
}

async fn add_handler(
    State(state): State<AppState>,
    Form(form): Form<AddEmployeeForm>,
) -> HttpResult<Redirect> {
    let employee = platform_db::create_employee(&state.pool, &form.name, &form.department)
        .await
        .map_err(|err| HttpError::internal(err.into()))?;
    info!(id = employee.id, "employee added");
    Ok(Redirect::to("/"))
}

async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Redirect> {
    let deleted = platform_db::delete_employee(&state.pool, id)
        .await
        .map_err(|err| HttpError::internal(err.into()))?;
    if !deleted {
        return Err(HttpError::new(StatusCode::NOT_FOUND, "employee not found"));
    }
    info!(id, "employee deleted");
    Ok(Redirect::to("/"))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state
        .pool
        .execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT 1".to_string(),
        ))
        .await
        .is_ok();
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    fn new(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
        }
    }

    fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}
