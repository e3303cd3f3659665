//! Camera capture with a guaranteed-release lease.

use thiserror::Error;
use verid_types::ImageData;

/// Capture failure — recoverable by retrying the capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("captured image is empty")]
    EmptyImage,
}

/// A camera device the pipeline can lease for one capture.
///
/// `open` claims the hardware; `release` must be idempotent enough to be
/// called exactly once per successful `open`, on every exit path.
pub trait CameraDevice {
    fn open(&self) -> Result<(), CaptureError>;
    fn grab_frame(&self) -> Result<ImageData, CaptureError>;
    fn release(&self);
}

/// A scoped lease on a camera device.
///
/// Dropping the lease releases the device — on successful capture, explicit
/// cancel, teardown, and error alike.
pub struct CameraLease<'a, D: CameraDevice> {
    device: &'a D,
}

impl<'a, D: CameraDevice> CameraLease<'a, D> {
    /// Claim the device. Released when the lease drops.
    pub fn acquire(device: &'a D) -> Result<Self, CaptureError> {
        device.open()?;
        Ok(Self { device })
    }

    /// Capture one frame. An empty frame is a capture error, not an image.
    pub fn capture_frame(&self) -> Result<ImageData, CaptureError> {
        let frame = self.device.grab_frame()?;
        if frame.is_empty() {
            return Err(CaptureError::EmptyImage);
        }
        Ok(frame)
    }
}

impl<D: CameraDevice> Drop for CameraLease<'_, D> {
    fn drop(&mut self) {
        self.device.release();
    }
}

/// Capture a single frame, holding the device only for the duration.
pub fn capture_from_camera<D: CameraDevice>(device: &D) -> Result<ImageData, CaptureError> {
    let lease = CameraLease::acquire(device)?;
    lease.capture_frame()
}
