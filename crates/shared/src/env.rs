use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, bail};
use skillrank_core::DegeneratePolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct AppEnv {
  pub server_host: String,
  pub server_port: u16,
  /// Reported by `/status/about`
  pub pod_name: String,
  /// Candidate data file; `None` serves the built-in sample profiles
  pub candidates_path: Option<PathBuf>,
  pub degenerate_policy: DegeneratePolicy,
  /// Allowed CORS origins; empty allows any origin
  pub cors_origins: Vec<String>,
  pub liveness_file: PathBuf,
  pub heartbeat_interval: Duration,
  pub shutdown_timeout: Duration,
}

impl Default for AppEnv {
  fn default() -> Self {
    Self {
      server_host: "0.0.0.0".to_owned(),
      server_port: 8080,
      pod_name: String::new(),
      candidates_path: None,
      degenerate_policy: DegeneratePolicy::default(),
      cors_origins: Vec::new(),
      liveness_file: PathBuf::from("/tmp/service-alive"),
      heartbeat_interval: Duration::from_secs(4),
      shutdown_timeout: Duration::from_secs(10),
    }
  }
}

impl AppEnv {
  /// Read configuration from the process environment.
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Read configuration through `lookup`, falling back to defaults for unset
  /// or blank variables.
  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| {
      lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
    };
    let defaults = Self::default();

    let heartbeat_secs: u64 = parse_or(&get, "HEARTBEAT_INTERVAL_SECS", 4)?;
    if heartbeat_secs == 0 {
      bail!("HEARTBEAT_INTERVAL_SECS must be greater than zero");
    }

    Ok(Self {
      server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
      server_port: parse_or(&get, "SERVER_PORT", defaults.server_port)?,
      pod_name: get("POD_NAME").unwrap_or_default(),
      candidates_path: get("CANDIDATES_PATH").map(PathBuf::from),
      degenerate_policy: parse_or(&get, "DEGENERATE_POLICY", defaults.degenerate_policy)?,
      cors_origins: get("CORS_ORIGINS")
        .map(|origins| {
          origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
        })
        .unwrap_or_default(),
      liveness_file: get("LIVENESS_FILE").map_or(defaults.liveness_file, PathBuf::from),
      heartbeat_interval: Duration::from_secs(heartbeat_secs),
      shutdown_timeout: Duration::from_secs(parse_or(&get, "SHUTDOWN_TIMEOUT_SECS", 10)?),
    })
  }

  /// `host:port` to bind, resolved by the listener.
  #[must_use]
  pub fn server_addr(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
  G: Fn(&str) -> Option<String>,
{
  get(key).map_or(Ok(default), |value| {
    value
      .parse()
      .with_context(|| format!("invalid {key} `{value}`"))
  })
}
