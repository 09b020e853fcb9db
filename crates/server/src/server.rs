use std::{future::Future, sync::Arc, time::Duration};

use axum::{
  Router,
  http::{
    HeaderName, HeaderValue, Method, Uri,
    header::{ACCEPT, CONTENT_TYPE, ORIGIN},
  },
};
use skillrank_shared::{AppEnv, AppError};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '&' => escaped.push_str("&amp;"),
      '\'' => escaped.push_str("&#39;"),
      '"' => escaped.push_str("&#34;"),
      _ => escaped.push(ch),
    }
  }
  escaped
}

async fn greeting(uri: Uri) -> String {
  format!("Hello, {:?}", escape_html(uri.path()))
}

/// Empty `origins` allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
  let allow_origin = if origins.is_empty() {
    AllowOrigin::any()
  } else {
    AllowOrigin::list(
      origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
    )
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods([Method::GET, Method::POST, Method::HEAD])
    .allow_headers([
      ACCEPT,
      CONTENT_TYPE,
      ORIGIN,
      HeaderName::from_static("x-requested-with"),
    ])
}

pub fn router(state: AppState) -> Router {
  let cors = cors_layer(&state.env.cors_origins);

  Router::new()
    .merge(api::app())
    .fallback(greeting)
    .with_state(state)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

/// Serve `state` on `listener` until `signal` resolves, then give in-flight
/// requests `drain_timeout` to finish.
///
/// # Errors
///
/// Returns an error if serving fails or the drain does not finish in time.
pub async fn serve<F>(
  listener: TcpListener,
  state: AppState,
  signal: F,
  drain_timeout: Duration,
) -> Result<(), AppError>
where
  F: Future<Output = ()>,
{
  let app = router(state);
  let drain = Arc::new(Notify::new());
  let drain_started = Arc::clone(&drain);

  let mut serving = tokio::spawn(async move {
    axum::serve(listener, app)
      .with_graceful_shutdown(async move { drain_started.notified().await })
      .await
  });

  tokio::select! {
    joined = &mut serving => return Ok(joined.map_err(AppError::new)??),
    () = signal => {}
  }

  tracing::info!("starting graceful shutdown");
  drain.notify_one();

  if let Ok(joined) = tokio::time::timeout(drain_timeout, &mut serving).await {
    joined.map_err(AppError::new)??;
    tracing::info!("graceful shutdown complete");
    Ok(())
  } else {
    serving.abort();
    tracing::error!(
      ?drain_timeout,
      "error during shutdown, client requests have been terminated"
    );
    Err(AppError::new(anyhow::anyhow!(
      "graceful shutdown did not finish within {drain_timeout:?}"
    )))
  }
}

pub async fn server(env: AppEnv) -> Result<(), AppError> {
  let listener = TcpListener::bind(env.server_addr()).await?;

  tracing::info!(
    policy = %env.degenerate_policy,
    "server started at http://{}",
    listener.local_addr()?
  );

  let drain_timeout = env.shutdown_timeout;
  serve(
    listener,
    AppState::from_env(env),
    shutdown_signal(),
    drain_timeout,
  )
  .await
}
