use crate::error::Result;
use crate::report::{FactValue, Report, Verdict};
use crate::source::{extract_pair, extract_rect, ElementSource};
use crate::tolerance::Tolerance;

#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOptions {
    /// Percent tolerances scale against the reference element's own width
    /// and height, per dimension.
    pub tolerance: Tolerance,
}

#[derive(Debug, Clone, Copy)]
pub struct AspectRatioOptions {
    /// Expected width / height ratio.
    pub expected: f64,
    pub tolerance: Tolerance,
}

impl AspectRatioOptions {
    pub fn new(expected: f64) -> Self {
        Self {
            expected,
            tolerance: Tolerance::default(),
        }
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Compares the two elements' widths and heights independently. Both
/// dimensions must land within tolerance for the verdict to pass.
pub async fn to_have_same_size_as(
    subject: &dyn ElementSource,
    reference: &dyn ElementSource,
    options: SizeOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, reference_rect) = extract_pair(subject, reference).await?;

    let width_difference = (subject_rect.width - reference_rect.width).abs();
    let height_difference = (subject_rect.height - reference_rect.height).abs();
    let allowed_width = options.tolerance.resolve(reference_rect.width);
    let allowed_height = options.tolerance.resolve(reference_rect.height);

    if width_difference <= allowed_width && height_difference <= allowed_height {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' has the same size as '{}' ({:.2}px x {:.2}px).",
            subject.describe(),
            reference.describe(),
            subject_rect.width,
            subject_rect.height,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to have the same size as '{}'.",
        subject.describe(),
        reference.describe(),
    ))
    .fact("element width", FactValue::Pixels(subject_rect.width))
    .fact("element height", FactValue::Pixels(subject_rect.height))
    .fact("reference width", FactValue::Pixels(reference_rect.width))
    .fact("reference height", FactValue::Pixels(reference_rect.height))
    .fact("width difference", FactValue::Pixels(width_difference))
    .fact("height difference", FactValue::Pixels(height_difference))
    .fact("allowed width deviation", FactValue::Pixels(allowed_width))
    .fact("allowed height deviation", FactValue::Pixels(allowed_height))
    .remediation("Resize the element until both dimensions match the reference.");
    Ok(Verdict::fail(report))
}

/// Compares the element's width / height ratio against an expected value.
/// A zero-height element has no ratio and fails the assertion outright
/// rather than erroring. Percent tolerances scale against the expected
/// ratio itself.
pub async fn to_have_aspect_ratio(
    subject: &dyn ElementSource,
    options: AspectRatioOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let rect = extract_rect(subject).await?;

    if rect.height == 0.0 {
        let report = Report::new(format!(
            "Expected '{}' to have aspect ratio {:.4}, but its height is zero.",
            subject.describe(),
            options.expected,
        ))
        .fact("measured width", FactValue::Pixels(rect.width))
        .fact("measured height", FactValue::Pixels(rect.height))
        .remediation("Give the element a non-zero height before asserting its aspect ratio.");
        return Ok(Verdict::fail(report));
    }

    let measured = rect.aspect_ratio();
    let difference = (measured - options.expected).abs();
    let allowed = options.tolerance.resolve(options.expected);

    if difference <= allowed {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' has aspect ratio {:.4} (expected {:.4}).",
            subject.describe(),
            measured,
            options.expected,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to have aspect ratio {:.4}.",
        subject.describe(),
        options.expected,
    ))
    .fact("expected ratio", FactValue::Ratio(options.expected))
    .fact("measured ratio", FactValue::Ratio(measured))
    .fact("difference", FactValue::Ratio(difference))
    .fact("allowed deviation", FactValue::Ratio(allowed))
    .remediation("Resize the element so width divided by height matches the expected ratio.");
    Ok(Verdict::fail(report))
}
