// ============================================================================
// Logging Bootstrap
// Installs a tracing-subscriber fmt layer for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber at `level`.
///
/// The crate itself only emits events (clamped legacy indexing at `WARN`,
/// failed checked arithmetic at `DEBUG`); call this once from a binary to see
/// them.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
