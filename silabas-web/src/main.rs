//! Servidor web Axum com WebSocket para visualização da separação silábica passo a passo

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use silabas_core::{
    corpus::reference_words,
    pipeline::{PipelineEvent, SyllablePipeline},
    report, HiatusPolicy, RawEntry, ValidationConfig, ValidationSummary, Validator,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Estado compartilhado da aplicação
struct AppState {
    config: ValidationConfig,
}

impl AppState {
    fn pipeline(&self, hiatus: Option<HiatusPolicy>) -> SyllablePipeline {
        SyllablePipeline::with_hiatus(hiatus.unwrap_or(self.config.hiatus))
    }
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    word: String,
    #[serde(default)]
    hiatus: Option<HiatusPolicy>,
}

/// Mensagem WebSocket recebida do cliente
#[derive(Deserialize)]
struct WsRequest {
    word: String,
    #[serde(default)]
    hiatus: Option<HiatusPolicy>,
}

#[derive(Serialize)]
struct ValidateResponse {
    syllabification_accuracy: f64,
    tonic_accuracy: f64,
    report: String,
    summary: ValidationSummary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = Arc::new(AppState {
        config: ValidationConfig::default(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/validate", post(validate_handler))
        .route("/ws", get(ws_handler))
        .route("/demo-words", get(demo_words_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state);

    let addr = std::env::var("SILABAS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("não foi possível escutar em {addr}"))?;
    info!("🚀 Servidor de sílabas iniciado em http://{addr}");
    axum::serve(listener, app).await.context("servidor encerrado com erro")?;
    Ok(())
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Análise de uma palavra via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if req.word.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Palavra vazia"})),
        )
            .into_response();
    }

    Json(state.pipeline(req.hiatus).analyze(&req.word)).into_response()
}

/// Valida um lote de entradas no formato do dicionário
async fn validate_handler(
    State(state): State<Arc<AppState>>,
    Json(values): Json<Vec<serde_json::Value>>,
) -> impl IntoResponse {
    let entries: Vec<RawEntry> = values.into_iter().map(RawEntry::from_value).collect();
    let config = state.config;
    let outcome = tokio::task::spawn_blocking(move || {
        Validator::from_config(&config).and_then(|validator| validator.run(&entries))
    })
    .await;

    match outcome {
        Ok(Ok(summary)) => Json(ValidateResponse {
            syllabification_accuracy: summary.syllabification_accuracy(),
            tonic_accuracy: summary.tonic_accuracy(),
            report: report::render_text(&summary),
            summary,
        })
        .into_response(),
        Ok(Err(e)) => {
            error!("falha na validação: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
        Err(e) => {
            error!("tarefa de validação abortada: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Retorna as palavras de demonstração com a separação de referência
async fn demo_words_handler() -> impl IntoResponse {
    let words: Vec<serde_json::Value> = reference_words()
        .iter()
        .map(|w| {
            serde_json::json!({
                "word": w.word,
                "syllables": w.syllables,
                "tonic": w.tonic,
                "phenomenon": w.phenomenon,
            })
        })
        .collect();
    Json(words)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Recebe uma palavra, executa o pipeline e envia cada etapa com uma pausa para animação
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // JSON {word, hiatus} ou a palavra pura
                let (word, hiatus) = match serde_json::from_str::<WsRequest>(&text) {
                    Ok(req) => (req.word.trim().to_string(), req.hiatus),
                    Err(_) => (text.trim().to_string(), None),
                };
                if word.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {word}");
                let pipeline = state.pipeline(hiatus);
                let (tx, rx) = std::sync::mpsc::channel::<PipelineEvent>();
                let handle = tokio::task::spawn_blocking(move || {
                    pipeline.analyze_streaming(&word, tx);
                });
                handle.await.ok();

                let events: Vec<PipelineEvent> = rx.try_iter().collect();
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        tokio::time::sleep(tokio::time::Duration::from_millis(120)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
