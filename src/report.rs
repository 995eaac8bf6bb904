//! Assertion outcomes and their diagnostic text.
//!
//! A matcher computes its deltas once and stores them as labeled [`Fact`]s
//! inside a [`Report`]; rendering to text is a separate pure step that never
//! re-reads geometry. Repeated [`Verdict::message`] calls return identical
//! strings. Display precision is fixed per fact kind: pixel quantities render
//! to 2 decimal places, ratios to 4. Comparisons elsewhere always use full
//! precision, rounding is display-only.

use std::fmt::Write as FmtWrite;

use serde::{Deserialize, Serialize};

/// Numeric or textual content of a fact, with display precision keyed to the
/// kind of quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FactValue {
    /// Rendered as `12.34px`.
    Pixels(f64),
    /// Rendered with 4 decimal places, for aspect ratios.
    Ratio(f64),
    /// Rendered with 2 decimal places, for dimensionless values such as
    /// contrast ratios.
    Scalar(f64),
    Text(String),
}

impl FactValue {
    fn render(&self) -> String {
        match self {
            FactValue::Pixels(value) => format!("{value:.2}px"),
            FactValue::Ratio(value) => format!("{value:.4}"),
            FactValue::Scalar(value) => format!("{value:.2}"),
            FactValue::Text(text) => text.clone(),
        }
    }
}

/// One labeled entry in a report's `Details:` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub label: String,
    pub value: FactValue,
}

/// Pre-computed outcome facts plus the text around them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: String,
    pub details: Vec<Fact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Report {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: Vec::new(),
            remediation: None,
        }
    }

    pub fn fact(mut self, label: impl Into<String>, value: FactValue) -> Self {
        self.details.push(Fact {
            label: label.into(),
            value,
        });
        self
    }

    pub fn remediation(mut self, text: impl Into<String>) -> Self {
        self.remediation = Some(text.into());
        self
    }

    /// Renders the summary, a `Details:` block when facts exist, and the
    /// remediation sentence, separated by blank lines.
    pub fn render(&self) -> String {
        let mut buf = String::new();
        buf.push_str(&self.summary);
        if !self.details.is_empty() {
            buf.push_str("\n\nDetails:");
            for fact in &self.details {
                write!(buf, "\n  {}: {}", fact.label, fact.value.render()).ok();
            }
        }
        if let Some(remediation) = &self.remediation {
            buf.push_str("\n\n");
            buf.push_str(remediation);
        }
        buf
    }
}

/// The boolean outcome of a matcher together with its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub passed: bool,
    pub report: Report,
}

impl Verdict {
    pub fn pass(report: Report) -> Self {
        Self {
            passed: true,
            report,
        }
    }

    pub fn fail(report: Report) -> Self {
        Self {
            passed: false,
            report,
        }
    }

    /// The rendered diagnostic message. Pure formatting over facts computed
    /// when the matcher ran.
    pub fn message(&self) -> String {
        self.report.render()
    }
}
