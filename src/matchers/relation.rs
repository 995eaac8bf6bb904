use crate::error::Result;
use crate::geometry::{gap_along_axis, Axis, Side};
use crate::report::{FactValue, Report, Verdict};
use crate::source::{extract_pair, ElementSource};
use crate::tolerance::Tolerance;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyOptions {
    /// Permitted overlap depth. Percent tolerances scale against the
    /// reference element's size along the checked axis.
    pub tolerance: Tolerance,
}

#[derive(Debug, Clone, Copy)]
pub struct DistanceOptions {
    pub side: Side,
    pub expected: f64,
    pub tolerance: Tolerance,
}

impl DistanceOptions {
    pub fn new(side: Side, expected: f64) -> Self {
        Self {
            side,
            expected,
            tolerance: Tolerance::default(),
        }
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpacingOptions {
    pub axis: Axis,
    pub expected: f64,
    pub tolerance: Tolerance,
}

impl SpacingOptions {
    pub fn new(axis: Axis, expected: f64) -> Self {
        Self {
            axis,
            expected,
            tolerance: Tolerance::default(),
        }
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

fn side_phrase(side: Side) -> &'static str {
    match side {
        Side::Top => "above",
        Side::Bottom => "below",
        Side::Left => "left of",
        Side::Right => "right of",
    }
}

fn adjacency_remediation(side: Side) -> &'static str {
    match side {
        Side::Top => "Move the element so its bottom edge sits at or above the reference's top edge.",
        Side::Bottom => "Move the element so its top edge sits at or below the reference's bottom edge.",
        Side::Left => "Move the element so its right edge sits at or left of the reference's left edge.",
        Side::Right => "Move the element so its left edge sits at or right of the reference's right edge.",
    }
}

/// Shared directional check. The gap is signed: zero when the near edges
/// touch, negative when they overlap. Touching always passes; overlap passes
/// only up to the resolved tolerance.
async fn directional(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    side: Side,
    options: AdjacencyOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, reference_rect) = extract_pair(subject, reference).await?;

    let gap = subject_rect.gap_beside(side, &reference_rect);
    let allowed = options
        .tolerance
        .resolve(reference_rect.size_along(side.axis()));

    let phrase = side_phrase(side);
    if gap >= -allowed {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is {} '{}' (gap {:.2}px).",
            subject.describe(),
            phrase,
            reference.describe(),
            gap,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to be {} '{}'.",
        subject.describe(),
        phrase,
        reference.describe(),
    ))
    .fact("measured gap", FactValue::Pixels(gap))
    .fact("allowed overlap", FactValue::Pixels(allowed))
    .remediation(adjacency_remediation(side));
    Ok(Verdict::fail(report))
}

/// Passes when the subject sits above the reference, edges touching included.
pub async fn to_be_above(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: AdjacencyOptions,
) -> Result<Verdict> {
    directional(subject, reference, Side::Top, options).await
}

pub async fn to_be_below(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: AdjacencyOptions,
) -> Result<Verdict> {
    directional(subject, reference, Side::Bottom, options).await
}

pub async fn to_be_left_of(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: AdjacencyOptions,
) -> Result<Verdict> {
    directional(subject, reference, Side::Left, options).await
}

pub async fn to_be_right_of(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: AdjacencyOptions,
) -> Result<Verdict> {
    directional(subject, reference, Side::Right, options).await
}

/// Compares the signed gap on a given side of the reference against an
/// expected distance. The gap stays signed so an overlapping pair reports
/// how far past the reference edge it sits. Percent tolerances scale against
/// the expected distance itself.
pub async fn to_have_distance_from(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: DistanceOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, reference_rect) = extract_pair(subject, reference).await?;

    let measured = subject_rect.gap_beside(options.side, &reference_rect);
    let difference = (measured - options.expected).abs();
    let allowed = options.tolerance.resolve(options.expected);

    if difference <= allowed {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is {:.2}px {} '{}' (expected {:.2}px, tolerance {:.2}px).",
            subject.describe(),
            measured,
            side_phrase(options.side),
            reference.describe(),
            options.expected,
            allowed,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to be {:.2}px {} '{}'.",
        subject.describe(),
        options.expected,
        side_phrase(options.side),
        reference.describe(),
    ))
    .fact("expected distance", FactValue::Pixels(options.expected))
    .fact("measured distance", FactValue::Pixels(measured))
    .fact("difference", FactValue::Pixels(difference))
    .fact("allowed deviation", FactValue::Pixels(allowed))
    .remediation("Nudge the element toward the expected distance from the reference edge.");
    Ok(Verdict::fail(report))
}

/// Compares the gap between two elements along an axis against an expected
/// spacing. The pair is ordered by position, not argument order, and an
/// overlapping pair measures as zero. Percent tolerances scale against the
/// expected spacing itself.
pub async fn to_have_spacing_between(
    first: &dyn ElementSource,
    second: &dyn ElementSource,
    options: SpacingOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (first_rect, second_rect) = extract_pair(first, second).await?;

    let measured = gap_along_axis(&first_rect, &second_rect, options.axis);
    let difference = (measured - options.expected).abs();
    let allowed = options.tolerance.resolve(options.expected);

    let axis = options.axis.as_str();
    if difference <= allowed {
        return Ok(Verdict::pass(Report::new(format!(
            "Spacing between '{}' and '{}' on the {} axis is {:.2}px (expected {:.2}px).",
            first.describe(),
            second.describe(),
            axis,
            measured,
            options.expected,
        ))));
    }

    let report = Report::new(format!(
        "Expected {:.2}px of spacing between '{}' and '{}' on the {} axis.",
        options.expected,
        first.describe(),
        second.describe(),
        axis,
    ))
    .fact("expected spacing", FactValue::Pixels(options.expected))
    .fact("measured spacing", FactValue::Pixels(measured))
    .fact("difference", FactValue::Pixels(difference))
    .fact("allowed deviation", FactValue::Pixels(allowed))
    .remediation("Adjust the gap between the elements toward the expected spacing.");
    Ok(Verdict::fail(report))
}

/// Passes when the two bounding boxes are disjoint. Touching edges do not
/// count as overlap. Symmetric in its arguments; no tolerance participates.
pub async fn to_not_overlap_with(
    first: &dyn ElementSource,
    second: &dyn ElementSource,
) -> Result<Verdict> {
    let (first_rect, second_rect) = extract_pair(first, second).await?;

    if !first_rect.intersects(&second_rect) {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' and '{}' do not overlap.",
            first.describe(),
            second.describe(),
        ))));
    }

    let overlap_width = first_rect.right().min(second_rect.right())
        - first_rect.left().max(second_rect.left());
    let overlap_height = first_rect.bottom().min(second_rect.bottom())
        - first_rect.top().max(second_rect.top());

    let report = Report::new(format!(
        "Expected '{}' and '{}' not to overlap.",
        first.describe(),
        second.describe(),
    ))
    .fact("overlap width", FactValue::Pixels(overlap_width))
    .fact("overlap height", FactValue::Pixels(overlap_height))
    .remediation("Separate the elements so their bounding boxes share no area.");
    Ok(Verdict::fail(report))
}
