//! Nullable OCR engine — scripted recognition results.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use verid_session::{EngineError, OcrEngine};
use verid_types::{ImageData, OcrResult};

/// A deterministic OCR engine for testing.
///
/// Returns scripted results in order, repeating the last entry once the
/// script runs out. Optionally gated: every recognition then waits until
/// the gate handle is notified, which lets tests interleave a reset with
/// an in-flight recognition.
pub struct NullOcrEngine {
    script: Mutex<Vec<Result<OcrResult, String>>>,
    index: Mutex<usize>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl NullOcrEngine {
    pub fn scripted(script: Vec<Result<OcrResult, String>>) -> Self {
        assert!(!script.is_empty(), "script must have at least one entry");
        Self {
            script: Mutex::new(script),
            index: Mutex::new(0),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Recognize every image as the same text, with high confidence.
    pub fn with_text(text: &str) -> Self {
        Self::scripted(vec![Ok(OcrResult::new(text, 0.9))])
    }

    /// Fail every recognition with the given message.
    pub fn failing(message: &str) -> Self {
        Self::scripted(vec![Err(message.to_string())])
    }

    /// Hold every recognition until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Number of recognitions performed, for assertions.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OcrEngine for NullOcrEngine {
    async fn recognize(&self, _image: &ImageData) -> Result<OcrResult, EngineError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = {
            let script = self.script.lock().unwrap();
            let mut index = self.index.lock().unwrap();
            let current = (*index).min(script.len() - 1);
            *index += 1;
            script[current].clone()
        };
        next.map_err(EngineError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_results_come_back_in_order() {
        let engine = NullOcrEngine::scripted(vec![
            Ok(OcrResult::new("first", 0.9)),
            Err("engine down".to_string()),
        ]);
        let image = ImageData::new(vec![1]);
        assert_eq!(engine.recognize(&image).await.unwrap().text, "first");
        assert!(engine.recognize(&image).await.is_err());
        // Script exhausted: the last entry repeats.
        assert!(engine.recognize(&image).await.is_err());
        assert_eq!(engine.calls(), 3);
    }
}
