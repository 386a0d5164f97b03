use serde::{Deserialize, Serialize};
use std::fmt;

/// Section headings a generated report is asked to contain.
pub const REPORT_SECTIONS: [&str; 4] = [
    "Executive Summary",
    "Key Insights",
    "Risks",
    "Recommendations",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightKind {
    Explain,
    Recommend,
    Report,
}

impl InsightKind {
    pub const ALL: [InsightKind; 3] = [Self::Explain, Self::Recommend, Self::Report];

    pub fn tone(&self) -> InsightTone {
        match self {
            Self::Explain => InsightTone::Info,
            Self::Recommend => InsightTone::Success,
            Self::Report => InsightTone::Report,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Explain => "🔍 Explain Prediction",
            Self::Recommend => "💡 Get Recommendations",
            Self::Report => "📄 Generate Report",
        }
    }

    pub fn progress_label(&self) -> &'static str {
        match self {
            Self::Explain => "Analyzing...",
            Self::Recommend => "Generating recommendations...",
            Self::Report => "Creating comprehensive report...",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explain => write!(f, "explain"),
            Self::Recommend => write!(f, "recommend"),
            Self::Report => write!(f, "report"),
        }
    }
}

impl std::str::FromStr for InsightKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explain" => Ok(Self::Explain),
            "recommend" => Ok(Self::Recommend),
            "report" => Ok(Self::Report),
            _ => anyhow::bail!(
                "Invalid insight kind: {}. Must be 'explain', 'recommend' or 'report'",
                s
            ),
        }
    }
}

/// How a response is presented: Explain is informational, Recommend is
/// positive-toned, Report is shown as a document and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightTone {
    Info,
    Success,
    Report,
}

/// Downloadable rendering of a report response.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportArtifact {
    Ready(Vec<u8>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightResponse {
    pub kind: InsightKind,
    pub tone: InsightTone,
    pub text: String,
    /// Only set for `InsightKind::Report`.
    pub artifact: Option<ReportArtifact>,
}

/// Headings from `REPORT_SECTIONS` that do not appear in `text`.
/// Advisory only: reports missing sections are still returned.
pub fn missing_report_sections(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    REPORT_SECTIONS
        .iter()
        .copied()
        .filter(|section| !lowered.contains(&section.to_lowercase()))
        .collect()
}
