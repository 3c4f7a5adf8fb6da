//! 仿真错误类型

use super::process::ProcessId;
use super::time::SimTime;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid workload: process {id}: {reason}")]
    InvalidWorkload { id: ProcessId, reason: String },

    #[error("invalid workload: duplicate process id {0}")]
    DuplicateId(ProcessId),

    #[error("simulated time overflow: process {id} cannot finish when started at {at}")]
    TimeOverflow { id: ProcessId, at: SimTime },

    #[error("unknown scheduling policy `{0}` (expected sjf, priority or all)")]
    UnknownPolicy(String),

    #[error("aging threshold must be at least 1")]
    InvalidAgingThreshold,

    #[error("unsupported workload schema_version {0}")]
    UnsupportedSchema(u32),

    #[error("read workload: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse workload: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(id: ProcessId, reason: impl Into<String>) -> Self {
        SimError::InvalidWorkload {
            id,
            reason: reason.into(),
        }
    }
}
