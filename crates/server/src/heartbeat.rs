use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use tokio::time::{MissedTickBehavior, interval};

/// Create or truncate the liveness file.
pub async fn touch_liveness_file(path: &Path) -> std::io::Result<()> {
  tokio::fs::File::create(path).await.map(drop)
}

/// Touch `path` every `period` so an external liveness probe can check its mtime.
///
/// Runs until the task is dropped; write failures are logged and retried on the
/// next tick.
pub async fn heartbeat(path: PathBuf, period: Duration) {
  let mut ticker = interval(period);
  ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

  tracing::debug!(path = %path.display(), ?period, "liveness heartbeat started");

  loop {
    ticker.tick().await;
    if let Err(err) = touch_liveness_file(&path).await {
      tracing::warn!(
        path = %path.display(),
        error = %err,
        "unable to write file for liveness check"
      );
    }
  }
}
