//! The verification service — session arena and state machine.
//!
//! Sessions are independent and keyed by id; nothing here is ambient or
//! global. The two suspension points (the OCR call and the submission call)
//! are awaited with the session lock released, so a concurrent reset can
//! land between them; a stale-attempt guard discards late results.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use verid_authenticity::AuthenticityScorer;
use verid_match::{CrossValidator, FieldMatchResult};
use verid_types::{
    CaptureSource, DocumentField, ImageData, SessionId, Timestamp, UserInput, VerificationParams,
};

use crate::capture::CaptureError;
use crate::engine::{OcrEngine, SubmissionSink};
use crate::error::SessionError;
use crate::state::{
    CaptureSession, SessionSnapshot, SessionStatus, VerificationRecord,
};

/// Drives capture sessions through the verification pipeline.
pub struct VerificationService<E, S> {
    ocr: E,
    sink: S,
    scorer: AuthenticityScorer,
    validator: CrossValidator,
    sessions: RwLock<HashMap<SessionId, CaptureSession>>,
    next_id: AtomicU64,
}

impl<E: OcrEngine, S: SubmissionSink> VerificationService<E, S> {
    pub fn new(ocr: E, sink: S, params: VerificationParams) -> Self {
        Self {
            ocr,
            sink,
            scorer: AuthenticityScorer::new(&params),
            validator: CrossValidator::new(&params),
            sessions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a session for a captured image and process it.
    ///
    /// Returns the session id even when the document is rejected — the
    /// outcome is visible via [`session_state`](Self::session_state). An
    /// empty image fails before a session is created.
    pub async fn start_session(
        &self,
        source: CaptureSource,
        image: ImageData,
    ) -> Result<SessionId, SessionError> {
        if image.is_empty() {
            return Err(CaptureError::EmptyImage.into());
        }
        let id = SessionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = CaptureSession::new(id, source, Timestamp::now());
        self.sessions.write().await.insert(id, session);
        info!(%id, ?source, "session started");
        self.run_capture(id, image).await?;
        Ok(id)
    }

    /// Process a new image for an existing session (retry after a rejection
    /// or an engine failure). Accepted only while the session is idle.
    pub async fn submit_capture(
        &self,
        id: SessionId,
        image: ImageData,
    ) -> Result<(), SessionError> {
        if image.is_empty() {
            return Err(CaptureError::EmptyImage.into());
        }
        self.run_capture(id, image).await
    }

    async fn run_capture(&self, id: SessionId, image: ImageData) -> Result<(), SessionError> {
        // Phase guard and attempt bump under the lock; the OCR call itself
        // runs with the lock released.
        let attempt = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&id)
                .ok_or(SessionError::SessionNotFound(id))?;
            match session.status {
                SessionStatus::Idle => {}
                SessionStatus::Processing => return Err(SessionError::CaptureInFlight { id }),
                status => {
                    return Err(SessionError::InvalidState {
                        id,
                        status,
                        required: "Idle",
                    })
                }
            }
            session.attempt += 1;
            session.clear_derived();
            session.status = SessionStatus::Processing;
            session.updated_at = Timestamp::now();
            session.attempt
        };

        let recognized = self.ocr.recognize(&image).await;

        let mut sessions = self.sessions.write().await;
        // Stale-result guard: a reset while recognition was in flight
        // invalidates this attempt; the late result must not repopulate
        // the session.
        let session = match sessions.get_mut(&id) {
            Some(s) if s.attempt == attempt && s.status == SessionStatus::Processing => s,
            _ => {
                debug!(%id, attempt, "discarding stale recognition result");
                return Ok(());
            }
        };

        let ocr = match recognized {
            Ok(ocr) if !ocr.is_blank() => ocr,
            Ok(_) => {
                session.status = SessionStatus::Idle;
                session.transient_error = Some("recognition produced no text".to_string());
                session.updated_at = Timestamp::now();
                warn!(%id, "recognition produced no text");
                return Ok(());
            }
            Err(err) => {
                session.status = SessionStatus::Idle;
                session.transient_error = Some(err.to_string());
                session.updated_at = Timestamp::now();
                warn!(%id, %err, "recognition failed");
                return Ok(());
            }
        };

        let assessment = self.scorer.assess(&ocr.text);
        if !assessment.is_valid() {
            session.rejection_reasons = assessment.rejection_reasons.clone();
            session.ocr = Some(ocr);
            session.authenticity = Some(assessment);
            session.status = SessionStatus::Idle;
            session.updated_at = Timestamp::now();
            info!(%id, reasons = ?session.rejection_reasons, "document rejected");
            return Ok(());
        }

        let extracted = verid_extract::extract_all(&ocr.text);
        debug!(%id, ?extracted, "fields extracted");
        session.user_input = Some(UserInput::prefilled_from(&extracted));
        session.extracted = Some(extracted);
        session.ocr = Some(ocr);
        session.authenticity = Some(assessment);
        session.status = SessionStatus::Reviewing;
        session.updated_at = Timestamp::now();
        info!(%id, "document accepted; awaiting review");
        Ok(())
    }

    /// Read-only view of one session.
    pub async fn session_state(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(SessionError::SessionNotFound(id))?;
        Ok(SessionSnapshot {
            id: session.id,
            status: session.status,
            extracted: session.extracted.clone(),
            user_input: session.user_input.clone(),
            match_result: session.match_result.clone(),
            rejection_reasons: session.rejection_reasons.clone(),
            transient_error: session.transient_error.clone(),
        })
    }

    /// Replace one user-entered field value. Only while reviewing.
    pub async fn set_user_field(
        &self,
        id: SessionId,
        field: DocumentField,
        value: &str,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::SessionNotFound(id))?;
        if session.status != SessionStatus::Reviewing {
            return Err(SessionError::InvalidState {
                id,
                status: session.status,
                required: "Reviewing",
            });
        }
        session
            .user_input
            .get_or_insert_with(UserInput::default)
            .set(field, value);
        // A stored verdict no longer reflects the edited input.
        session.match_result = None;
        session.pending_record = None;
        session.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cross-validate the current user input against the extracted fields.
    ///
    /// Stores and returns the result; the session stays in review either
    /// way. Authenticity validity is guaranteed by the reviewing state.
    pub async fn confirm_and_validate(
        &self,
        id: SessionId,
    ) -> Result<FieldMatchResult, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::SessionNotFound(id))?;
        if session.status != SessionStatus::Reviewing {
            return Err(SessionError::InvalidState {
                id,
                status: session.status,
                required: "Reviewing",
            });
        }
        let extracted = session.extracted.clone().unwrap_or_default();
        let input = session.user_input.clone().unwrap_or_default();
        let result = self.validator.validate(&extracted, &input);
        debug!(%id, overall = result.overall, "cross-validation complete");
        session.match_result = Some(result.clone());
        session.updated_at = Timestamp::now();
        Ok(result)
    }

    /// Validate and hand the verification record to the submission sink.
    ///
    /// A failed cross-validation keeps the session reviewing and surfaces
    /// per-field reasons. A sink failure preserves the accepted record on
    /// the session, so a later `submit` retries without re-validating.
    pub async fn submit(&self, id: SessionId) -> Result<VerificationRecord, SessionError> {
        // Build or reuse the record under the lock; submit with it released.
        let (attempt, record) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&id)
                .ok_or(SessionError::SessionNotFound(id))?;
            if session.status != SessionStatus::Reviewing {
                return Err(SessionError::InvalidState {
                    id,
                    status: session.status,
                    required: "Reviewing",
                });
            }

            if let Some(record) = session.pending_record.clone() {
                (session.attempt, record)
            } else {
                let extracted = session.extracted.clone().unwrap_or_default();
                let input = session.user_input.clone().unwrap_or_default();
                let result = self.validator.validate(&extracted, &input);
                session.match_result = Some(result.clone());
                session.updated_at = Timestamp::now();
                if !result.overall {
                    info!(%id, reasons = ?result.reasons, "submission blocked by field mismatch");
                    return Err(SessionError::FieldMismatch {
                        reasons: result.reasons,
                    });
                }
                let record = VerificationRecord {
                    session_id: id,
                    extracted,
                    user_input: input,
                    overall_accepted: result.overall,
                    match_result: result,
                };
                session.pending_record = Some(record.clone());
                (session.attempt, record)
            }
        };

        let submitted = self.sink.submit(&record).await;

        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id);
        match submitted {
            Ok(receipt) => {
                info!(%id, receipt = %receipt.id, "verification record accepted");
                if let Some(session) = session {
                    if session.attempt == attempt {
                        session.status = SessionStatus::Submitted;
                        session.pending_record = None;
                        session.updated_at = Timestamp::now();
                    }
                    // A reset that landed while the sink call was outstanding
                    // wins: the record was persisted, but the session stays
                    // reset.
                }
                Ok(record)
            }
            Err(err) => {
                warn!(%id, %err, "submission failed; record preserved");
                if let Some(session) = session {
                    if session.attempt == attempt {
                        session.updated_at = Timestamp::now();
                    }
                }
                Err(SessionError::Sink(err.to_string()))
            }
        }
    }

    /// Return the session to idle, clearing every derived artifact.
    ///
    /// Bumping the attempt counter invalidates any recognition still in
    /// flight for this session.
    pub async fn reset(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::SessionNotFound(id))?;
        session.attempt += 1;
        session.clear_derived();
        session.status = SessionStatus::Idle;
        session.updated_at = Timestamp::now();
        info!(%id, "session reset");
        Ok(())
    }
}
