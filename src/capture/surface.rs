use std::time::Duration;

use url::Url;

use crate::foundation::core::{FrameIndex, Viewport};
use crate::foundation::error::Svg2GifResult;

/// A page that renders the animated document and can be photographed.
///
/// Implementations own whatever external process backs the page. Dropping a surface must
/// release it; [`RenderSurface::close`] does the same but reports failures.
pub trait RenderSurface {
    /// Navigate to `url` and block until the document has loaded.
    fn load(&mut self, url: &Url) -> Svg2GifResult<()>;
    /// Take a PNG still of what the page shows right now.
    fn capture_png(&mut self) -> Svg2GifResult<Vec<u8>>;
    /// Release the page and its browser.
    fn close(self) -> Svg2GifResult<()>;
}

/// Starts rendering surfaces of a given size.
pub trait SurfaceLauncher {
    /// Surface type produced by this launcher.
    type Surface: RenderSurface;

    /// Start a fresh surface whose viewport is `viewport`.
    fn launch(&self, viewport: Viewport) -> Svg2GifResult<Self::Surface>;
}

/// Source of the timed waits between captures.
pub trait Pacer {
    /// Suspend the run for `d`.
    fn pause(&mut self, d: Duration);
}

/// [`Pacer`] backed by [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Receives a notification after every frame written to the workspace.
pub trait CaptureObserver {
    /// Frame `idx` out of `total` has been captured and written.
    fn frame_captured(&mut self, idx: FrameIndex, total: u64);

    /// All `total` frames are on disk and the surface has been released.
    fn capture_finished(&mut self, _total: u64) {}
}

impl<F> CaptureObserver for F
where
    F: FnMut(FrameIndex, u64),
{
    fn frame_captured(&mut self, idx: FrameIndex, total: u64) {
        self(idx, total);
    }
}
