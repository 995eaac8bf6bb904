use crate::error::{MatchError, Result};
use crate::geometry::Rect;
use crate::report::{FactValue, Report, Verdict};
use crate::source::{extract_pair, extract_rect, extract_viewport, ElementSource};
use crate::tolerance::Tolerance;

#[derive(Debug, Clone, Copy, Default)]
pub struct InsideOptions {
    pub tolerance: Tolerance,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportOptions {
    /// Inset applied to every viewport edge before the containment check,
    /// in pixels. Zero means the exact viewport bounds.
    pub margin: f64,
}

/// Checks that the subject does not protrude past the container's edges.
/// Overflow is clamped at zero per edge and summed per axis; percent
/// tolerances scale against the container's width and height.
pub async fn to_be_inside(
    subject: &dyn ElementSource,
    container: &dyn ElementSource,
    options: InsideOptions,
) -> Result<Verdict> {
    options.tolerance.validate()?;
    let (subject_rect, container_rect) = extract_pair(subject, container).await?;

    let overflow = subject_rect.overflow_within(&container_rect);
    let allowed_x = options.tolerance.resolve(container_rect.width);
    let allowed_y = options.tolerance.resolve(container_rect.height);

    if overflow.horizontal() <= allowed_x && overflow.vertical() <= allowed_y {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is contained within '{}'.",
            subject.describe(),
            container.describe(),
        ))));
    }

    let mut report = Report::new(format!(
        "Expected '{}' to be inside '{}'.",
        subject.describe(),
        container.describe(),
    ));
    for (side, amount) in overflow.per_side() {
        if amount > 0.0 {
            report = report.fact(format!("{} overflow", side.as_str()), FactValue::Pixels(amount));
        }
    }
    report = report
        .fact("allowed horizontal deviation", FactValue::Pixels(allowed_x))
        .fact("allowed vertical deviation", FactValue::Pixels(allowed_y))
        .remediation("Move or shrink the element so it stays within the container's bounds.");
    Ok(Verdict::fail(report))
}

/// Exact-equality check of origin and size against the container. No
/// tolerance participates; any differing field fails.
pub async fn to_fit_container(
    subject: &dyn ElementSource,
    container: &dyn ElementSource,
) -> Result<Verdict> {
    let (subject_rect, container_rect) = extract_pair(subject, container).await?;

    if subject_rect == container_rect {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' exactly fills '{}'.",
            subject.describe(),
            container.describe(),
        ))));
    }

    let fields = [
        ("x", subject_rect.x, container_rect.x),
        ("y", subject_rect.y, container_rect.y),
        ("width", subject_rect.width, container_rect.width),
        ("height", subject_rect.height, container_rect.height),
    ];
    let mut report = Report::new(format!(
        "Expected '{}' to exactly fill '{}'.",
        subject.describe(),
        container.describe(),
    ));
    for (name, subject_value, container_value) in fields {
        if subject_value != container_value {
            report = report
                .fact(format!("element {name}"), FactValue::Pixels(subject_value))
                .fact(format!("container {name}"), FactValue::Pixels(container_value));
        }
    }
    report = report.remediation("Match the container's origin and size exactly; fit allows no tolerance.");
    Ok(Verdict::fail(report))
}

/// Checks that the subject sits entirely inside the viewport inset by
/// `margin` on every edge. The margin is a pixel value; there is no percent
/// form for this matcher.
pub async fn to_be_within_viewport(
    subject: &dyn ElementSource,
    options: ViewportOptions,
) -> Result<Verdict> {
    if !options.margin.is_finite() || options.margin < 0.0 {
        return Err(MatchError::InvalidMargin {
            value: options.margin,
        });
    }
    let subject_rect = extract_rect(subject).await?;
    let viewport = extract_viewport(subject).await?;

    let safe_zone = Rect::from_size(viewport.width, viewport.height).inset(options.margin);
    let overflow = subject_rect.overflow_within(&safe_zone);

    if overflow.is_zero() {
        return Ok(Verdict::pass(Report::new(format!(
            "'{}' is fully within the viewport (margin {:.2}px).",
            subject.describe(),
            options.margin,
        ))));
    }

    let mut report = Report::new(format!(
        "Expected '{}' to be within the viewport (margin {:.2}px).",
        subject.describe(),
        options.margin,
    ));
    for (side, amount) in overflow.per_side() {
        if amount > 0.0 {
            report = report.fact(format!("{} overflow", side.as_str()), FactValue::Pixels(amount));
        }
    }
    report = report
        .fact("viewport width", FactValue::Pixels(viewport.width))
        .fact("viewport height", FactValue::Pixels(viewport.height))
        .remediation("Scroll or reposition the element so it sits inside the viewport's safe area.");
    Ok(Verdict::fail(report))
}
