//! Matchers for asserting geometric relationships between elements.
//!
//! Each matcher reads element geometry through the [`ElementSource`]
//! boundary, compares it against the assertion's expectation under a
//! resolved tolerance, and returns a [`Verdict`] carrying a renderable
//! report:
//! - Alignment and centering (edge/center positions along an axis)
//! - Containment, exact fit, and viewport visibility
//! - Adjacency, distance, spacing, and overlap between pairs
//! - Size equality and aspect ratio
//! - WCAG color contrast
//!
//! [`ElementSource`]: crate::source::ElementSource
//! [`Verdict`]: crate::report::Verdict

// Submodules
mod align;
mod containment;
mod contrast;
mod relation;
mod size;


// Re-exports
pub use align::{to_be_aligned_with, to_be_fully_centered_in, AlignOptions, CenterOptions};
pub use containment::{
    to_be_inside, to_be_within_viewport, to_fit_container, InsideOptions, ViewportOptions,
};
pub use contrast::{to_have_color_contrast, ContrastOptions};
pub use relation::{
    to_be_above, to_be_below, to_be_left_of, to_be_right_of, to_have_distance_from,
    to_have_spacing_between, to_not_overlap_with, AdjacencyOptions, DistanceOptions,
    SpacingOptions,
};
pub use size::{to_have_aspect_ratio, to_have_same_size_as, AspectRatioOptions, SizeOptions};
