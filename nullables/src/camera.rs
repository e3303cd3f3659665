//! Nullable camera — deterministic frames and lease accounting.

use std::sync::atomic::{AtomicU32, Ordering};

use verid_session::{CameraDevice, CaptureError};
use verid_types::ImageData;

/// A deterministic camera for testing the lease contract.
///
/// Counts opens and releases so tests can assert the device is released on
/// every exit path.
pub struct NullCamera {
    frame: Option<ImageData>,
    deny_permission: bool,
    opened: AtomicU32,
    released: AtomicU32,
}

impl NullCamera {
    /// A camera that yields the given frame on every capture.
    pub fn with_frame(bytes: Vec<u8>) -> Self {
        Self {
            frame: Some(ImageData::new(bytes)),
            deny_permission: false,
            opened: AtomicU32::new(0),
            released: AtomicU32::new(0),
        }
    }

    /// A camera whose frames come back empty (capture failure).
    pub fn with_empty_frames() -> Self {
        Self::with_frame(Vec::new())
    }

    /// A camera the user has denied access to.
    pub fn denying() -> Self {
        Self {
            frame: None,
            deny_permission: true,
            opened: AtomicU32::new(0),
            released: AtomicU32::new(0),
        }
    }

    pub fn opened(&self) -> u32 {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> u32 {
        self.released.load(Ordering::SeqCst)
    }
}

impl CameraDevice for NullCamera {
    fn open(&self) -> Result<(), CaptureError> {
        if self.deny_permission {
            return Err(CaptureError::PermissionDenied);
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn grab_frame(&self) -> Result<ImageData, CaptureError> {
        self.frame
            .clone()
            .ok_or_else(|| CaptureError::Unavailable("no frame configured".to_string()))
    }

    fn release(&self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verid_session::capture_from_camera;

    #[test]
    fn successful_capture_releases_the_device() {
        let camera = NullCamera::with_frame(vec![1, 2, 3]);
        let image = capture_from_camera(&camera).unwrap();
        assert_eq!(image.as_bytes(), &[1, 2, 3]);
        assert_eq!(camera.opened(), 1);
        assert_eq!(camera.released(), 1);
    }

    #[test]
    fn empty_frame_is_an_error_and_still_releases() {
        let camera = NullCamera::with_empty_frames();
        assert!(matches!(
            capture_from_camera(&camera),
            Err(CaptureError::EmptyImage)
        ));
        assert_eq!(camera.opened(), 1);
        assert_eq!(camera.released(), 1);
    }

    #[test]
    fn denied_permission_never_opens() {
        let camera = NullCamera::denying();
        assert!(matches!(
            capture_from_camera(&camera),
            Err(CaptureError::PermissionDenied)
        ));
        assert_eq!(camera.opened(), 0);
        assert_eq!(camera.released(), 0);
    }
}
