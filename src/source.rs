//! The boundary between matchers and the automation layer that measures
//! elements.
//!
//! Matchers never talk to a browser. They consume [`ElementSource`], a narrow
//! contract any harness can implement over its own element handles, and the
//! in-memory [`ElementSnapshot`](crate::snapshot::ElementSnapshot) implements
//! it for tests and pre-measured fixtures. Extraction failures propagate
//! unmodified; a missing rectangle is an execution error, never a failed
//! assertion.

use async_trait::async_trait;
use futures::future::try_join;
use tracing::debug;

use crate::color::{parse_rgb, Rgb};
use crate::error::{MatchError, Result};
use crate::geometry::{Rect, Size};

/// What a matcher may ask about a rendered element.
///
/// Implementations are expected to resolve each question at call time; the
/// matcher layer fetches at most once per assertion and never caches across
/// calls.
#[async_trait]
pub trait ElementSource: Send + Sync {
    /// Human-readable identifier used in diagnostics, typically the selector.
    fn describe(&self) -> String;

    /// The element's bounding rectangle in page coordinates, or `None` when
    /// the element has no rendered box (detached, `display: none`).
    async fn bounding_box(&self) -> Result<Option<Rect>>;

    /// Computed CSS `color` of the element, as a CSS color string.
    async fn text_color(&self) -> Result<String>;

    /// Effective background: the nearest non-transparent ancestor background
    /// color, or `None` when the walk reached the root without finding one.
    async fn background_color(&self) -> Result<Option<String>>;

    /// Viewport dimensions, when the harness knows them.
    async fn viewport_size(&self) -> Result<Option<Size>>;
}

/// Fetches an element's rectangle, converting an absent box into
/// [`MatchError::MissingGeometry`] naming the element.
pub async fn extract_rect(source: &dyn ElementSource) -> Result<Rect> {
    let element = source.describe();
    let rect = source
        .bounding_box()
        .await?
        .ok_or_else(|| MatchError::missing_geometry(element.as_str()))?;
    debug!("extracted {:?} for '{}'", rect, element);
    Ok(rect)
}

/// Fetches the rectangles of two elements concurrently. Either missing box
/// fails the pair.
pub async fn extract_pair(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
) -> Result<(Rect, Rect)> {
    try_join(extract_rect(subject), extract_rect(reference)).await
}

/// Fetches the viewport size, failing with [`MatchError::MissingViewport`]
/// when the harness reports none.
pub async fn extract_viewport(source: &dyn ElementSource) -> Result<Size> {
    source
        .viewport_size()
        .await?
        .ok_or_else(|| MatchError::MissingViewport {
            element: source.describe(),
        })
}

/// Resolves the element's effective background color, defaulting to white
/// when the ancestor walk found nothing opaque.
pub async fn resolve_effective_background(source: &dyn ElementSource) -> Result<Rgb> {
    match source.background_color().await? {
        Some(css) => parse_rgb(&css),
        None => {
            debug!("no opaque background for '{}', assuming white", source.describe());
            Ok(Rgb::WHITE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ElementSnapshot;

    #[tokio::test]
    async fn extract_rect_fails_for_boxless_element() {
        let detached = ElementSnapshot::named("aside.hidden");
        let err = extract_rect(&detached).await.unwrap_err();
        match err {
            MatchError::MissingGeometry { element } => assert_eq!(element, "aside.hidden"),
            other => panic!("expected missing geometry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn extract_pair_surfaces_the_missing_side() {
        let subject =
            ElementSnapshot::named("div.card").with_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let reference = ElementSnapshot::named("main");
        let err = extract_pair(&subject, &reference).await.unwrap_err();
        assert!(err.to_string().contains("main"));
    }

    #[tokio::test]
    async fn background_defaults_to_white_when_unresolved() {
        let element = ElementSnapshot::named("p");
        let background = resolve_effective_background(&element).await.unwrap();
        assert_eq!(background, Rgb::WHITE);
    }

    #[tokio::test]
    async fn background_parses_the_resolved_ancestor_color() {
        let element = ElementSnapshot::named("p").with_background_color("rgb(30, 41, 59)");
        let background = resolve_effective_background(&element).await.unwrap();
        assert_eq!(background, Rgb::new(30, 41, 59));
    }

    #[tokio::test]
    async fn malformed_background_propagates_as_color_error() {
        let element = ElementSnapshot::named("p").with_background_color("transparent");
        let err = resolve_effective_background(&element).await.unwrap_err();
        assert!(matches!(err, MatchError::ColorFormat { .. }));
    }

    #[tokio::test]
    async fn extract_viewport_requires_a_reported_size() {
        let element = ElementSnapshot::named("header");
        let err = extract_viewport(&element).await.unwrap_err();
        assert!(matches!(err, MatchError::MissingViewport { .. }));

        let sized = ElementSnapshot::named("header").with_viewport(Size::new(1280.0, 720.0));
        let viewport = extract_viewport(&sized).await.unwrap();
        assert_eq!(viewport.width, 1280.0);
    }
}
