use std::path::PathBuf;

/// Errors surfaced once at startup. There is no degraded mode: a failed
/// resource load or platform init terminates the run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load sound `{name}` from {path:?}")]
    AudioLoad {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rendering surface unavailable: {0}")]
    SurfaceInit(String),

    #[error("game initialization failed: {0}")]
    GameInit(String),
}
