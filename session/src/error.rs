use thiserror::Error;

use crate::capture::CaptureError;
use crate::state::SessionStatus;
use verid_types::SessionId;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no session {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("recognition failed: {0}")]
    Engine(String),

    #[error("document rejected: {}", .reasons.join("; "))]
    AuthenticityRejected { reasons: Vec<String> },

    #[error("fields do not match the document: {}", .reasons.join("; "))]
    FieldMismatch { reasons: Vec<String> },

    #[error("submission failed: {0}; the record is preserved for resubmission")]
    Sink(String),

    #[error("session {id} already has a capture in flight")]
    CaptureInFlight { id: SessionId },

    #[error("session {id} is {status:?}; this operation requires {required}")]
    InvalidState {
        id: SessionId,
        status: SessionStatus,
        required: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),
}
