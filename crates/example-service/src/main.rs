//! example-service - Demo app for the authgate middlewares
//!
//! A small axum service that:
//! - Annotates every request via a bearer gate on the `authorization` header
//! - Keeps `/health` and `/ctx` open (annotate-only)
//! - Enforces authorization on everything under `/v1`
//!
//! Usage:
//!   example-service --port 4100 --token sesame
//!   example-service -p 4100 -t sesame --header x-access-token

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use authgate_axum::{authorize, require_authorized, AuthOutcome, AuthorizationGate};
use authgate_core::{AuthContext, AuthResult, BearerParser, Gate, TokenVerifier, Verdict};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    port: u16,
    token: String,
    header: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut port = 4100u16;
    let mut token = String::from("sesame");
    let mut header = String::from("authorization");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse()?;
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --port");
                }
            }
            "--token" | "-t" => {
                if i + 1 < args.len() {
                    token = args[i + 1].clone();
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --token");
                }
            }
            "--header" => {
                if i + 1 < args.len() {
                    header = args[i + 1].clone();
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --header");
                }
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(Args {
        port,
        token,
        header,
    })
}

/// Verifier that accepts one configured token and attaches a demo payload.
///
/// Illustrative only - a real service would verify a signature or call an
/// introspection endpoint here.
struct StaticTokenVerifier {
    token: String,
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> AuthResult<Verdict> {
        if token == self.token {
            Ok(Verdict::GrantedWithPayload(json!({"sub": "demo-user"})))
        } else {
            Ok(Verdict::Denied)
        }
    }
}

/// Echo the authorization outcome, authorized or not
async fn ctx(AuthOutcome(ctx): AuthOutcome) -> Json<AuthContext> {
    Json(ctx)
}

/// Gated handler - only reachable through `require_authorized`
async fn whoami(AuthOutcome(ctx): AuthOutcome) -> Json<serde_json::Value> {
    Json(json!({
        "token": ctx.token(),
        "payload": ctx.payload(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "example_service=info,authgate_axum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;

    tracing::info!(
        port = args.port,
        header = %args.header,
        "Starting example-service"
    );

    let gate = AuthorizationGate::new(
        Gate::new(
            args.header,
            Arc::new(StaticTokenVerifier { token: args.token }),
        )
        .with_parser(Arc::new(BearerParser)),
    );

    let protected = Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(require_authorized));

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/ctx", get(ctx))
        .nest("/v1", protected)
        .layer(middleware::from_fn_with_state(gate, authorize))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
