use crate::color::{parse_rgb, WCAG_AA_NORMAL_TEXT};
use crate::error::Result;
use crate::report::{FactValue, Report, Verdict};
use crate::source::{resolve_effective_background, ElementSource};

#[derive(Debug, Clone, Copy)]
pub struct ContrastOptions {
    /// Smallest acceptable contrast ratio between text and background.
    pub minimum_ratio: f64,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            minimum_ratio: WCAG_AA_NORMAL_TEXT,
        }
    }
}

/// Checks the WCAG contrast ratio between the element's text color and its
/// effective background. An element with no reported background is measured
/// against white.
pub async fn to_have_color_contrast(
    subject: &dyn ElementSource,
    options: ContrastOptions,
) -> Result<Verdict> {
    let text = parse_rgb(&subject.text_color().await?)?;
    let background = resolve_effective_background(subject).await?;

    let ratio = text.contrast_ratio(&background);
    if ratio >= options.minimum_ratio {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' has contrast ratio {:.2} (minimum {:.2}).",
            subject.describe(),
            ratio,
            options.minimum_ratio,
        ))));
    }

    let report = Report::new(format!(
        "Expected '{}' to have a contrast ratio of at least {:.2}.",
        subject.describe(),
        options.minimum_ratio,
    ))
    .fact("text color", FactValue::Text(text.to_hex()))
    .fact("background color", FactValue::Text(background.to_hex()))
    .fact("contrast ratio", FactValue::Scalar(ratio))
    .fact("minimum ratio", FactValue::Scalar(options.minimum_ratio))
    .remediation("Darken the text or lighten the background until the ratio clears the minimum.");
    Ok(Verdict::fail(report))
}
