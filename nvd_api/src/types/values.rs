//! Typed values for the enumerated query parameters.

use serde::{Deserialize, Serialize};

/// CVSS v2 qualitative severity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CvssV2Severity {
    Low,
    Medium,
    High,
}
impl std::fmt::Display for CvssV2Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CvssV2Severity::Low => "LOW",
                CvssV2Severity::Medium => "MEDIUM",
                CvssV2Severity::High => "HIGH",
            }
        )
    }
}

/// CVSS v3 qualitative severity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CvssV3Severity {
    Low,
    Medium,
    High,
    Critical,
}
impl std::fmt::Display for CvssV3Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CvssV3Severity::Low => "LOW",
                CvssV3Severity::Medium => "MEDIUM",
                CvssV3Severity::High => "HIGH",
                CvssV3Severity::Critical => "CRITICAL",
            }
        )
    }
}

/// Whether a version bound used with `virtualMatchString` is inclusive.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    /// The bound itself matches.
    Including,
    /// The bound itself does not match.
    Excluding,
}
impl std::fmt::Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VersionType::Including => "including",
                VersionType::Excluding => "excluding",
            }
        )
    }
}
