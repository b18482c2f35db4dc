pub mod fixtures;
pub mod replay;
pub mod utils;

pub use fixtures::{FixtureLoader, Scenario};
pub use replay::ReplayNode;
pub use utils::*;

use std::path::PathBuf;

/// Directory holding the recorded responses and expected outputs.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
