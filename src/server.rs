use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{ApiAnalyzeRequest, ApiAnalyzeResponse};
use caption_coach::config::EngineConfig;
use caption_coach::{analyze_with, seeded_rng, synthesize_variants};

#[derive(Clone)]
struct AppState {
    config: Arc<EngineConfig>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    init_tracing();

    let (config, _) = EngineConfig::load(None)?;
    let state = AppState {
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/ping", get(ping))
        .route("/api/analyze", post(analyze_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn ping() -> impl IntoResponse {
    let message = std::env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string());
    Json(serde_json::json!({ "message": message }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let params = request
        .into_params()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let mut rng = seeded_rng(&params.text, params.nonce);
    let result = analyze_with(
        &params.text,
        params.platform,
        &params.exclude,
        &state.config,
        &mut rng,
    );

    let mut warnings = Vec::new();
    if result.pool_reset {
        warnings.push("No unseen tags were left; the exclusion pool was reset.".to_string());
    }

    info!(
        platform = params.platform.label(),
        engagement = result.engagement,
        "analyzed caption"
    );

    let variants = params
        .include_variants
        .then(|| synthesize_variants(&params.text, params.platform, &result));

    Ok(Json(ApiAnalyzeResponse::from_result(
        params.platform,
        result,
        variants,
        warnings,
    )))
}
