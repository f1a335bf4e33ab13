use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Emulation;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use url::Url;

use crate::capture::surface::{RenderSurface, SurfaceLauncher};
use crate::foundation::core::Viewport;
use crate::foundation::error::{Svg2GifError, Svg2GifResult};

/// Launches headless Chrome/Chromium over the DevTools protocol.
#[derive(Clone, Debug)]
pub struct ChromeLauncher {
    /// Browser executable; `None` lets `headless_chrome` search the usual locations.
    pub executable: Option<PathBuf>,
    /// How long an idle DevTools connection is kept open.
    ///
    /// Must exceed the longest pause of the capture loop or the browser is torn down mid-run.
    pub idle_timeout: Duration,
}

impl Default for ChromeLauncher {
    fn default() -> Self {
        Self {
            executable: None,
            idle_timeout: Duration::from_secs(60 * 60),
        }
    }
}

impl SurfaceLauncher for ChromeLauncher {
    type Surface = ChromeSurface;

    fn launch(&self, viewport: Viewport) -> Svg2GifResult<ChromeSurface> {
        let opts = LaunchOptions {
            headless: true,
            sandbox: false,
            window_size: Some((viewport.width, viewport.height)),
            path: self.executable.clone(),
            idle_browser_timeout: self.idle_timeout,
            ..Default::default()
        };

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "launching headless chrome"
        );
        let browser = Browser::new(opts).map_err(|e| {
            Svg2GifError::capture(format!(
                "failed to launch headless chrome (is Chrome/Chromium installed?): {e:#}"
            ))
        })?;
        let tab = browser
            .new_tab()
            .map_err(|e| Svg2GifError::capture(format!("failed to open a browser tab: {e:#}")))?;
        tab.set_default_timeout(self.idle_timeout);
        tab.call_method(device_metrics(viewport))
            .map_err(|e| Svg2GifError::capture(format!("failed to set the viewport: {e:#}")))?;

        Ok(ChromeSurface { browser, tab })
    }
}

/// Page viewport override at one device pixel per CSS pixel.
///
/// The launch window size alone leaves the page area to the headless build; this pins it.
fn device_metrics(viewport: Viewport) -> Emulation::SetDeviceMetricsOverride {
    Emulation::SetDeviceMetricsOverride {
        width: viewport.width,
        height: viewport.height,
        device_scale_factor: 1.0,
        mobile: false,
        scale: None,
        screen_width: None,
        screen_height: None,
        position_x: None,
        position_y: None,
        dont_set_visible_size: None,
        screen_orientation: None,
        viewport: None,
        display_feature: None,
        device_posture: None,
    }
}

/// One Chrome tab plus the browser process it lives in.
///
/// Dropping the surface kills the browser process.
pub struct ChromeSurface {
    browser: Browser,
    tab: Arc<Tab>,
}

impl RenderSurface for ChromeSurface {
    fn load(&mut self, url: &Url) -> Svg2GifResult<()> {
        self.tab
            .navigate_to(url.as_str())
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| Svg2GifError::capture(format!("failed to load '{url}': {e:#}")))?;
        Ok(())
    }

    fn capture_png(&mut self) -> Svg2GifResult<Vec<u8>> {
        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Svg2GifError::capture(format!("screenshot failed: {e:#}")))
    }

    fn close(self) -> Svg2GifResult<()> {
        let closed = self
            .tab
            .close(false)
            .map_err(|e| Svg2GifError::capture(format!("failed to close browser tab: {e:#}")));
        drop(self.browser);
        closed.map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/chrome.rs"]
mod tests;
