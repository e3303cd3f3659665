//! Nullable submission sink — records submissions instead of persisting them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use verid_session::{SinkError, SubmissionReceipt, SubmissionSink, VerificationRecord};

/// An in-memory submission sink for testing.
pub struct NullSink {
    submitted: Mutex<Vec<VerificationRecord>>,
    failures: Mutex<Vec<String>>,
    next_receipt: AtomicU64,
}

impl NullSink {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            next_receipt: AtomicU64::new(1),
        }
    }

    /// Fail the next submission with the given message.
    ///
    /// Queued failures are consumed in order before submissions succeed
    /// again.
    pub fn fail_next(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }

    /// All records accepted so far (for assertions).
    pub fn submitted(&self) -> Vec<VerificationRecord> {
        self.submitted.lock().unwrap().clone()
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionSink for NullSink {
    async fn submit(&self, record: &VerificationRecord) -> Result<SubmissionReceipt, SinkError> {
        {
            let mut failures = self.failures.lock().unwrap();
            if !failures.is_empty() {
                return Err(SinkError::Unavailable(failures.remove(0)));
            }
        }
        self.submitted.lock().unwrap().push(record.clone());
        let id = self.next_receipt.fetch_add(1, Ordering::SeqCst);
        Ok(SubmissionReceipt {
            id: format!("rec-{id}"),
        })
    }
}
