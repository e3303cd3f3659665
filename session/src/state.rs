//! Capture-session state and the final verification record.

use serde::{Deserialize, Serialize};

use verid_authenticity::AuthenticityAssessment;
use verid_match::FieldMatchResult;
use verid_types::{CaptureSource, ExtractedFields, OcrResult, SessionId, Timestamp, UserInput};

/// Lifecycle phase of a capture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No capture in flight. The starting state, and the state after an
    /// authenticity rejection, an engine failure, or a reset.
    Idle,
    /// An OCR call is outstanding for this session.
    Processing,
    /// Authenticity passed; extracted fields await user review.
    Reviewing,
    /// The verification record was accepted by the submission sink.
    Submitted,
}

/// One attempt lifecycle: capture, process, review, submit.
///
/// A session owns at most one of each derived artifact; a re-run replaces
/// the previous value, never merges with it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptureSession {
    pub id: SessionId,
    pub status: SessionStatus,
    pub source: CaptureSource,
    /// Bumped on every new capture and on reset. A recognition result is
    /// applied only if the attempt it started under is still current.
    pub attempt: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub ocr: Option<OcrResult>,
    pub authenticity: Option<AuthenticityAssessment>,
    pub extracted: Option<ExtractedFields>,
    pub user_input: Option<UserInput>,
    pub match_result: Option<FieldMatchResult>,
    /// Reasons from the last authenticity rejection.
    pub rejection_reasons: Vec<String>,
    /// Transient engine-failure marker — not a document rejection.
    pub transient_error: Option<String>,
    /// Accepted record awaiting (re-)submission after a sink failure.
    pub pending_record: Option<VerificationRecord>,
}

impl CaptureSession {
    pub fn new(id: SessionId, source: CaptureSource, now: Timestamp) -> Self {
        Self {
            id,
            status: SessionStatus::Idle,
            source,
            attempt: 0,
            created_at: now,
            updated_at: now,
            ocr: None,
            authenticity: None,
            extracted: None,
            user_input: None,
            match_result: None,
            rejection_reasons: Vec::new(),
            transient_error: None,
            pending_record: None,
        }
    }

    /// Drop every derived artifact. No data from a previous attempt may
    /// leak into the next.
    pub fn clear_derived(&mut self) {
        self.ocr = None;
        self.authenticity = None;
        self.extracted = None;
        self.user_input = None;
        self.match_result = None;
        self.rejection_reasons.clear();
        self.transient_error = None;
        self.pending_record = None;
    }
}

/// The immutable output of an accepted verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub session_id: SessionId,
    pub extracted: ExtractedFields,
    pub user_input: UserInput,
    pub match_result: FieldMatchResult,
    pub overall_accepted: bool,
}

/// Read-only view of one session for callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub status: SessionStatus,
    pub extracted: Option<ExtractedFields>,
    pub user_input: Option<UserInput>,
    pub match_result: Option<FieldMatchResult>,
    pub rejection_reasons: Vec<String>,
    pub transient_error: Option<String>,
}
