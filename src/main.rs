use skillrank_server::{heartbeat, server};
use skillrank_shared::{AppEnv, AppError};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  dotenvy::dotenv().ok();
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      format!(
        "{}=debug,skillrank_server=debug,tower_http=info",
        env!("CARGO_CRATE_NAME")
      )
      .into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .with(ErrorLayer::default())
    .init();

  let env = AppEnv::from_env()?;

  // The liveness file only reflects a running server.
  let liveness = tokio::spawn(heartbeat(
    env.liveness_file.clone(),
    env.heartbeat_interval,
  ));
  let result = server(env).await;
  liveness.abort();

  result
}
