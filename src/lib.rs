//! Plumbline
//!
//! Tolerance-aware geometric assertion matchers for UI test harnesses.
//! Matchers consume element geometry through a narrow async boundary and
//! return pass/fail verdicts with deterministic, numerically-explicit
//! diagnostics. Browser automation, test lifecycle, and screenshot
//! comparison stay outside: any harness that can measure an element can
//! drive these assertions.
//!
//! # Module Overview
//!
//! - [`geometry`] - Rectangles, axes, alignments, sides, and the pure math
//! - [`tolerance`] - Percent/pixel permitted deviation shared by matchers
//! - [`color`] - CSS color parsing and WCAG 2.1 contrast math
//! - [`source`] - The `ElementSource` boundary to the automation layer
//! - [`snapshot`] - Pre-measured element fixtures implementing the boundary
//! - [`report`] - Facts, reports, and verdicts
//! - [`matchers`] - The assertion functions
//! - [`expect`] - Fluent wrapper over the matcher set
//!
//! # Example
//!
//! ```
//! use plumbline::{expect, ElementSnapshot, InsideOptions, Rect, Tolerance};
//!
//! # fn main() -> plumbline::Result<()> {
//! let button = ElementSnapshot::named("button#save")
//!     .with_rect(Rect::new(24.0, 400.0, 96.0, 32.0));
//! let form = ElementSnapshot::named("form")
//!     .with_rect(Rect::new(0.0, 0.0, 480.0, 520.0));
//!
//! let verdict = futures::executor::block_on(
//!     expect(&button).to_be_inside(&form, InsideOptions {
//!         tolerance: Tolerance::pixels(1.0),
//!     }),
//! )?;
//! assert!(verdict.passed, "{}", verdict.message());
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod expect;
pub mod geometry;
pub mod matchers;
pub mod report;
pub mod snapshot;
pub mod source;
pub mod tolerance;

pub use color::{
    hex_from_components, parse_hex, parse_rgb, Rgb, WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT,
};
pub use error::{ErrorCategory, ErrorPayload, MatchError, Result};
pub use expect::{expect, Expect};
pub use geometry::{Alignment, Axis, EdgeOverflow, Rect, Side, Size};
// Matcher re-exports
pub use matchers::{
    // Assertion functions
    to_be_above, to_be_aligned_with, to_be_below, to_be_fully_centered_in, to_be_inside,
    to_be_left_of, to_be_right_of, to_be_within_viewport, to_fit_container, to_have_aspect_ratio,
    to_have_color_contrast, to_have_distance_from, to_have_same_size_as, to_have_spacing_between,
    to_not_overlap_with,
    // Per-matcher option structs
    AdjacencyOptions, AlignOptions, AspectRatioOptions, CenterOptions, ContrastOptions,
    DistanceOptions, InsideOptions, SizeOptions, SpacingOptions, ViewportOptions,
};
pub use report::{Fact, FactValue, Report, Verdict};
pub use snapshot::ElementSnapshot;
pub use source::ElementSource;
pub use tolerance::{Tolerance, ToleranceUnit};
