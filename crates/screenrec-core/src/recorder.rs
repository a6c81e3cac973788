//! Native recorder seam.

use anyhow::Result;

/// Commands sent to the external recording engine.
///
/// Both calls are fire-and-forget from the screen's point of view: an error
/// is logged and never changes the session. On platforms that deliver the
/// capture path by notification, the engine emits `updateFilePath` on the
/// hub some time after [`RecorderControl::end`].
pub trait RecorderControl: Send + Sync {
    fn begin(&self) -> Result<()>;

    fn end(&self) -> Result<()>;
}
