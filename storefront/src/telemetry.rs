// storefront/src/telemetry.rs
use tracing_subscriber::filter::{EnvFilter, FromEnvError, LevelFilter};

/// INFO unless `RUST_LOG` says otherwise.
pub fn env_filter() -> Result<EnvFilter, FromEnvError> {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::env;

  #[test]
  #[serial]
  fn defaults_to_info_without_rust_log() {
    env::remove_var("RUST_LOG");
    let filter = env_filter().unwrap();
    assert_eq!(filter.to_string(), "info");
  }

  #[test]
  #[serial]
  fn rust_log_overrides_the_default() {
    env::set_var("RUST_LOG", "storefront=debug");
    let filter = env_filter();
    env::remove_var("RUST_LOG");
    assert!(filter.unwrap().to_string().contains("storefront=debug"));
  }
}
