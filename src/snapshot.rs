//! Pre-measured element fixtures.
//!
//! An [`ElementSnapshot`] carries everything a matcher may ask of an element,
//! captured ahead of time: bounding box, computed colors, viewport. It is the
//! in-memory [`ElementSource`] used by this crate's own tests and by harnesses
//! that measure in bulk (one page evaluation producing many elements) before
//! asserting. The JSON shape uses camelCase keys, matching what browser
//! evaluation scripts emit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::geometry::{Rect, Size};
use crate::source::ElementSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    /// Selector or label the element was measured under.
    pub selector: String,
    /// Bounding rectangle, absent when the element had no rendered box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<Rect>,
    /// Computed CSS `color`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Effective background color, resolved to the nearest non-transparent
    /// ancestor at capture time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Viewport size at capture time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Size>,
}

impl ElementSnapshot {
    /// Snapshot with only a name; every measurement reads as unavailable.
    pub fn named(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            bounding_box: None,
            color: None,
            background_color: None,
            viewport: None,
        }
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.bounding_box = Some(rect);
        self
    }

    pub fn with_text_color(mut self, css: impl Into<String>) -> Self {
        self.color = Some(css.into());
        self
    }

    pub fn with_background_color(mut self, css: impl Into<String>) -> Self {
        self.background_color = Some(css.into());
        self
    }

    pub fn with_viewport(mut self, size: Size) -> Self {
        self.viewport = Some(size);
        self
    }

    /// Decodes a snapshot from the camelCase JSON emitted by capture scripts.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[async_trait]
impl ElementSource for ElementSnapshot {
    fn describe(&self) -> String {
        self.selector.clone()
    }

    async fn bounding_box(&self) -> Result<Option<Rect>> {
        Ok(self.bounding_box)
    }

    async fn text_color(&self) -> Result<String> {
        self.color
            .clone()
            .ok_or_else(|| MatchError::missing_style(self.selector.as_str(), "color"))
    }

    async fn background_color(&self) -> Result<Option<String>> {
        Ok(self.background_color.clone())
    }

    async fn viewport_size(&self) -> Result<Option<Size>> {
        Ok(self.viewport)
    }
}
