// src/error.rs
use std::io;
use thiserror::Error;

/// The master index could not be loaded. Fatal for startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {origin}: {err}")]
    Io {
        origin: String,
        #[source]
        err: io::Error,
    },

    #[error("could not fetch {origin}: {msg}")]
    Http { origin: String, msg: String },

    #[error("malformed JSON in {origin}: {err}")]
    Parse {
        origin: String,
        #[source]
        err: serde_json::Error,
    },

    #[error("unexpected document shape in {origin}: {msg}")]
    Shape { origin: String, msg: String },
}

/// A single acquisition job failed. Logged and skipped by the orchestrator.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("no command configured for job `{0}`")]
    Unknown(String),

    #[error("failed to launch job `{name}`: {err}")]
    Spawn {
        name: String,
        #[source]
        err: io::Error,
    },

    #[error("job `{name}` exited with {status}: {stderr}")]
    ExitStatus {
        name: String,
        status: String,
        stderr: String,
    },

    #[error("job `{name}` failed: {msg}")]
    Other { name: String, msg: String },
}
