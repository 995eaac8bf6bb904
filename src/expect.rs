//! Fluent assertion surface over the matcher set.
//!
//! `expect(&element)` wraps any [`ElementSource`] and exposes each matcher
//! as a method, so harness code reads as
//! `expect(&button).to_be_inside(&form, options).await?`. Every method is a
//! thin delegation to the free function of the same name; both surfaces
//! behave identically.

use crate::error::Result;
use crate::matchers::{
    self, AdjacencyOptions, AlignOptions, AspectRatioOptions, CenterOptions, ContrastOptions,
    DistanceOptions, InsideOptions, SizeOptions, SpacingOptions, ViewportOptions,
};
use crate::report::Verdict;
use crate::source::ElementSource;

/// Assertion builder bound to one subject element.
pub struct Expect<'a> {
    subject: &'a dyn ElementSource,
}

/// Create an expectation for an element.
#[must_use]
pub fn expect(subject: &dyn ElementSource) -> Expect<'_> {
    Expect { subject }
}

impl<'a> Expect<'a> {
    /// Assert an edge or center of the subject lines up with the reference.
    pub async fn to_be_aligned_with(
        &self,
        reference: &dyn ElementSource,
        options: AlignOptions,
    ) -> Result<Verdict> {
        matchers::to_be_aligned_with(self.subject, reference, options).await
    }

    /// Assert the subject's center coincides with the container's center.
    pub async fn to_be_fully_centered_in(
        &self,
        container: &dyn ElementSource,
        options: CenterOptions,
    ) -> Result<Verdict> {
        matchers::to_be_fully_centered_in(self.subject, container, options).await
    }

    /// Assert the subject does not protrude past the container's edges.
    pub async fn to_be_inside(
        &self,
        container: &dyn ElementSource,
        options: InsideOptions,
    ) -> Result<Verdict> {
        matchers::to_be_inside(self.subject, container, options).await
    }

    /// Assert the subject exactly fills the container.
    pub async fn to_fit_container(&self, container: &dyn ElementSource) -> Result<Verdict> {
        matchers::to_fit_container(self.subject, container).await
    }

    /// Assert the subject sits above the reference.
    pub async fn to_be_above(
        &self,
        reference: &dyn ElementSource,
        options: AdjacencyOptions,
    ) -> Result<Verdict> {
        matchers::to_be_above(self.subject, reference, options).await
    }

    /// Assert the subject sits below the reference.
    pub async fn to_be_below(
        &self,
        reference: &dyn ElementSource,
        options: AdjacencyOptions,
    ) -> Result<Verdict> {
        matchers::to_be_below(self.subject, reference, options).await
    }

    /// Assert the subject sits to the left of the reference.
    pub async fn to_be_left_of(
        &self,
        reference: &dyn ElementSource,
        options: AdjacencyOptions,
    ) -> Result<Verdict> {
        matchers::to_be_left_of(self.subject, reference, options).await
    }

    /// Assert the subject sits to the right of the reference.
    pub async fn to_be_right_of(
        &self,
        reference: &dyn ElementSource,
        options: AdjacencyOptions,
    ) -> Result<Verdict> {
        matchers::to_be_right_of(self.subject, reference, options).await
    }

    /// Assert the gap to the reference matches an expected distance.
    pub async fn to_have_distance_from(
        &self,
        reference: &dyn ElementSource,
        options: DistanceOptions,
    ) -> Result<Verdict> {
        matchers::to_have_distance_from(self.subject, reference, options).await
    }

    /// Assert the gap between the subject and another element matches an
    /// expected spacing.
    pub async fn to_have_spacing_between(
        &self,
        other: &dyn ElementSource,
        options: SpacingOptions,
    ) -> Result<Verdict> {
        matchers::to_have_spacing_between(self.subject, other, options).await
    }

    /// Assert the subject and another element share no area.
    pub async fn to_not_overlap_with(&self, other: &dyn ElementSource) -> Result<Verdict> {
        matchers::to_not_overlap_with(self.subject, other).await
    }

    /// Assert the subject's dimensions match the reference's.
    pub async fn to_have_same_size_as(
        &self,
        reference: &dyn ElementSource,
        options: SizeOptions,
    ) -> Result<Verdict> {
        matchers::to_have_same_size_as(self.subject, reference, options).await
    }

    /// Assert the subject's width / height ratio.
    pub async fn to_have_aspect_ratio(&self, options: AspectRatioOptions) -> Result<Verdict> {
        matchers::to_have_aspect_ratio(self.subject, options).await
    }

    /// Assert the subject sits within the viewport's safe area.
    pub async fn to_be_within_viewport(&self, options: ViewportOptions) -> Result<Verdict> {
        matchers::to_be_within_viewport(self.subject, options).await
    }

    /// Assert the WCAG contrast between the subject's text and background.
    pub async fn to_have_color_contrast(&self, options: ContrastOptions) -> Result<Verdict> {
        matchers::to_have_color_contrast(self.subject, options).await
    }
}
