use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::check::check;
use crate::api::info;
use crate::api::types::{ChainsResponse, CheckRequestBody, CheckResponse, HealthResponse};
use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::payment::{payment_gate, BearerProofVerifier, FacilitatorVerifier, PaymentError, PaymentVerifier};
use crate::scoring::ScoringThresholds;
use crate::types::CheckRequest;

/// Shared, read-only request context. `engine_calls` is an instrumentation
/// counter only; nothing branches on it.
pub struct AppState {
    pub config: OracleConfig,
    pub thresholds: ScoringThresholds,
    pub verifier: Arc<dyn PaymentVerifier>,
    pub engine_calls: AtomicU64,
}

impl AppState {
    /// Picks the facilitator verifier when a URL is configured, otherwise the
    /// local bearer check.
    pub fn new(config: OracleConfig) -> Result<Self, PaymentError> {
        let verifier: Arc<dyn PaymentVerifier> = match &config.facilitator_url {
            Some(url) => Arc::new(FacilitatorVerifier::new(
                url,
                config.verify_timeout,
                config.verify_retries,
            )?),
            None => Arc::new(BearerProofVerifier::new()),
        };
        Ok(Self::with_verifier(config, verifier))
    }

    pub fn with_verifier(config: OracleConfig, verifier: Arc<dyn PaymentVerifier>) -> Self {
        Self {
            config,
            thresholds: ScoringThresholds::default(),
            verifier,
            engine_calls: AtomicU64::new(0),
        }
    }

    pub fn engine_calls(&self) -> u64 {
        self.engine_calls.load(Ordering::Relaxed)
    }
}

pub async fn check_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CheckRequestBody>, JsonRejection>,
) -> Result<Json<CheckResponse>, OracleError> {
    let Json(body) = body.map_err(OracleError::from_json_rejection)?;

    let request = CheckRequest::try_from(body).map_err(|err| {
        tracing::info!(error = %err, "Rejected check request");
        err
    })?;

    state.engine_calls.fetch_add(1, Ordering::Relaxed);
    let response = check(request, &state.thresholds, &state.config);

    tracing::info!(
        chain = %response.chain,
        token = %response.token_address,
        score = response.safety_score,
        risk = response.rug_pull_risk,
        honeypot = response.is_honeypot,
        "Token checked"
    );

    Ok(Json(response))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(info::health(&state.config, state.engine_calls()))
}

pub async fn chains_handler() -> Json<ChainsResponse> {
    Json(info::chains())
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(info::index(&state.config))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let gated = Router::new()
        .route("/check", post(check_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), payment_gate));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/chains", get(chains_handler))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(config: OracleConfig) -> anyhow::Result<()> {
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    tracing::info!(
        free_mode = state.config.free_mode,
        price = state.config.price_per_check,
        token = %state.config.payment_token,
        verifier = state.verifier.verifier_name(),
        chains = ?crate::types::Chain::keys(),
        "Token safety oracle configured"
    );

    let app = build_router(state);

    // 0.0.0.0 so the service is reachable from outside a container
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
