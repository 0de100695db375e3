//! Headless Chrome renderer over the DevTools protocol.

use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, EventLifecycleEvent, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::{future, Stream, StreamExt};
use tokio::task::JoinHandle;
use url::Url;

use crate::capture::CaptureConfig;
use crate::traits::{CaptureError, PageRenderer};

/// A single headless browser with one reusable tab.
///
/// The browser kills its child process on drop if `close` was never reached.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<usize>,
    navigation_timeout: Duration,
    settle_delay: Duration,
}

impl ChromeSession {
    /// Launch a headless browser sized to the configured viewport.
    pub async fn launch(config: &CaptureConfig) -> Result<Self, CaptureError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.viewport_width, config.viewport_height)
            .viewport(Viewport {
                width: config.viewport_width,
                height: config.viewport_height,
                ..Default::default()
            })
            .request_timeout(config.navigation_timeout);

        if let Some(ref executable) = config.chrome_executable {
            builder = builder.chrome_executable(executable);
        }

        let browser_config = builder.build().map_err(CaptureError::Launch)?;

        let (browser, handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| CaptureError::Launch(e.to_string()))?;

        // The handler drives the websocket connection and must be polled
        let handler = tokio::spawn(drive_handler(handler));

        let page = browser.new_page("about:blank").await?;
        page.execute(SetLifecycleEventsEnabledParams::new(true)).await?;

        tracing::debug!(
            "Launched headless browser at {}x{}",
            config.viewport_width,
            config.viewport_height
        );

        Ok(Self {
            browser,
            page,
            handler,
            navigation_timeout: config.navigation_timeout,
            settle_delay: config.settle_delay,
        })
    }

    /// Load `url` and wait until the main frame's network goes idle.
    async fn navigate(&self, url: String) -> Result<(), CaptureError> {
        let main_frame = self.page.mainframe().await?;
        let lifecycle = self.page.event_listener::<EventLifecycleEvent>().await?;

        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;

        let names = lifecycle
            .filter(move |event| {
                future::ready(main_frame.as_ref().map_or(true, |id| event.frame_id == *id))
            })
            .map(|event| event.name.clone());

        if !wait_for_network_idle(names).await {
            tracing::debug!("Lifecycle events ended before network idle");
        }

        Ok(())
    }
}

impl PageRenderer for ChromeSession {
    async fn capture(&mut self, source: &Path, target: &Path) -> Result<(), CaptureError> {
        let url = file_url(source)?;

        tokio::time::timeout(self.navigation_timeout, self.navigate(url))
            .await
            .map_err(|_| CaptureError::Timeout(self.navigation_timeout))??;

        // Let entrance animations finish
        tokio::time::sleep(self.settle_delay).await;

        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();
        self.page.save_screenshot(params, target).await?;

        Ok(())
    }

    async fn close(mut self) -> Result<(), CaptureError> {
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            tracing::debug!("Browser did not exit cleanly: {}", e);
        }
        if let Ok(errors) = self.handler.await {
            tracing::debug!("Browser handler finished with {} errors", errors);
        }
        Ok(())
    }
}

/// Poll the CDP handler until the connection closes.
///
/// Errors are not fatal: newer Chrome builds emit messages the protocol
/// bindings cannot decode. Returns the number of errors seen.
async fn drive_handler<S, E>(events: S) -> usize
where
    S: Stream<Item = Result<(), E>>,
    E: Display,
{
    futures::pin_mut!(events);
    let mut errors = 0;
    while let Some(event) = events.next().await {
        if let Err(e) = event {
            errors += 1;
            tracing::debug!("Browser handler error: {}", e);
        }
    }
    errors
}

/// Wait for `networkIdle` on the document that starts after the next `init`.
///
/// Returns false if the stream ends first.
async fn wait_for_network_idle<S>(names: S) -> bool
where
    S: Stream<Item = String>,
{
    futures::pin_mut!(names);
    let mut started = false;
    while let Some(name) = names.next().await {
        match name.as_str() {
            "init" => started = true,
            "networkIdle" if started => return true,
            _ => {}
        }
    }
    false
}

/// Build a `file://` URL for `path`.
pub fn file_url(path: &Path) -> Result<String, CaptureError> {
    let absolute = dunce::canonicalize(path)?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|_| CaptureError::InvalidPath(absolute))
}
