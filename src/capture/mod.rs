//! Screenshot capture for component pages.
//!
//! Captures a rendered PNG of each component's element in the shared browser
//! session and writes it to `<ComponentName>.png` in the output directory.
//! Naming is idempotent: the same component name always targets the same
//! path, and a prior file of that name is silently replaced.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::browser::BrowserSession;
use crate::error::{BrowserError, CaptureError};

/// Default CSS selector template for a component's rendered element.
///
/// The `{name}` placeholder is substituted with the component display name
/// before the selector is applied.
pub const DEFAULT_SELECTOR_TEMPLATE: &str = "[data-id=\"{name}\"]";

/// A captured component screenshot on local disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screenshot {
    /// Component the screenshot belongs to.
    pub component: String,
    /// Path of the saved PNG file.
    pub path: PathBuf,
}

impl Screenshot {
    /// File name of the saved image (e.g., "SendGridSendEmail.png").
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Captures per-component screenshots into an output directory.
pub struct ScreenshotCapturer {
    output_dir: PathBuf,
    selector_template: String,
}

impl ScreenshotCapturer {
    /// Create a capturer writing into `output_dir`, creating it if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, CaptureError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            output_dir,
            selector_template: DEFAULT_SELECTOR_TEMPLATE.to_string(),
        })
    }

    /// Override the selector template used to locate component elements.
    pub fn with_selector_template(mut self, template: impl Into<String>) -> Self {
        self.selector_template = template.into();
        self
    }

    /// Output path for a component's screenshot.
    pub fn path_for(&self, component: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", component))
    }

    /// Capture the component's element and persist it as a PNG.
    ///
    /// A missing target element or a rendering failure is a `CaptureError`;
    /// an existing file at the output path is overwritten unconditionally.
    pub fn capture(
        &self,
        session: &BrowserSession,
        component: &str,
    ) -> Result<Screenshot, CaptureError> {
        let selector = self.selector_template.replace("{name}", component);

        let png = session
            .screenshot_element(&selector)
            .map_err(|e| match e {
                BrowserError::ElementNotFound(_) => CaptureError::TargetNotFound {
                    component: component.to_string(),
                    selector: selector.clone(),
                },
                other => CaptureError::RenderFailed {
                    component: component.to_string(),
                    message: other.to_string(),
                },
            })?;

        let path = self.path_for(component);
        fs::write(&path, &png)?;

        tracing::info!(
            component,
            path = %path.display(),
            bytes = png.len(),
            "Screenshot saved"
        );

        Ok(Screenshot {
            component: component.to_string(),
            path,
        })
    }

    /// Directory screenshots are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
