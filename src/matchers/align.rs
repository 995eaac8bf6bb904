use crate::error::Result;
use crate::geometry::{Alignment, Axis};
use crate::report::{FactValue, Report, Verdict};
use crate::source::{extract_pair, ElementSource};
use crate::tolerance::Tolerance;

#[derive(Debug, Clone, Copy)]
pub struct AlignOptions {
    pub axis: Axis,
    pub alignment: Alignment,
    pub tolerance: Tolerance,
}

impl AlignOptions {
    pub fn new(axis: Axis, alignment: Alignment) -> Self {
        Self {
            axis,
            alignment,
            tolerance: Tolerance::default(),
        }
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CenterOptions {
    pub tolerance: Tolerance,
}

/// Compares one edge (or the center) of the subject against the same edge of
/// the reference along an axis. Percent tolerances scale against the
/// reference's size along that axis.
pub async fn to_be_aligned_with(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: AlignOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, reference_rect) = extract_pair(subject, reference).await?;

    let subject_pos = subject_rect.position(options.axis, options.alignment);
    let reference_pos = reference_rect.position(options.axis, options.alignment);
    let difference = (subject_pos - reference_pos).abs();
    let allowed = options
        .tolerance
        .resolve(reference_rect.size_along(options.axis));

    let axis = options.axis.as_str();
    let alignment = options.alignment.as_str();
    if difference <= allowed {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is {}-aligned with '{}' on the {} axis (tolerance {:.2}px).",
            subject.describe(),
            alignment,
            reference.describe(),
            axis,
            allowed,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to be {}-aligned with '{}' on the {} axis.",
        subject.describe(),
        alignment,
        reference.describe(),
        axis,
    ))
    .fact("element position", FactValue::Pixels(subject_pos))
    .fact("reference position", FactValue::Pixels(reference_pos))
    .fact("difference", FactValue::Pixels(difference))
    .fact("allowed deviation", FactValue::Pixels(allowed))
    .remediation(format!(
        "Shift the element along the {axis} axis until the {alignment} positions coincide."
    ));
    Ok(Verdict::fail(report))
}

/// Checks the horizontal and vertical center offsets independently. Percent
/// tolerances scale against the container's width and height respectively.
pub async fn to_be_fully_centered_in(
    subject: &dyn ElementSource,
    container: &dyn ElementSource,
    options: CenterOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, container_rect) = extract_pair(subject, container).await?;

    let offset_x = subject_rect
        .offset_from_center_of(&container_rect, Axis::Horizontal)
        .abs();
    let offset_y = subject_rect
        .offset_from_center_of(&container_rect, Axis::Vertical)
        .abs();
    let allowed_x = options.tolerance.resolve(container_rect.width);
    let allowed_y = options.tolerance.resolve(container_rect.height);

    if offset_x <= allowed_x && offset_y <= allowed_y {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is centered in '{}' (offsets {:.2}px, {:.2}px).",
            subject.describe(),
            container.describe(),
            offset_x,
            offset_y,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to be centered in '{}'.",
        subject.describe(),
        container.describe(),
    ))
    .fact("horizontal offset", FactValue::Pixels(offset_x))
    .fact("vertical offset", FactValue::Pixels(offset_y))
    .fact("allowed horizontal deviation", FactValue::Pixels(allowed_x))
    .fact("allowed vertical deviation", FactValue::Pixels(allowed_y))
    .remediation("Adjust margins or positioning so the element's center matches the container's center.");
    Ok(Verdict::fail(report))
}
