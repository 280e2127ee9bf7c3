//! Registry of the logical query parameters accepted by the CVE API.
//!
//! Each [`Parameter`] maps to a fixed [`ParameterSpec`]: the name the API
//! expects on the query string and whether the parameter is a bare flag or
//! carries a value that must satisfy a [`Pattern`].

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::Error;

/// Logical query parameter understood by [`super::translate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    CpeName,
    CveId,
    CvssV2Metrics,
    CvssV2Severity,
    CvssV3Metrics,
    CvssV3Severity,
    CweId,
    HasCertAlerts,
    HasCertNotes,
    HasKev,
    HasOval,
    IsVulnerable,
    KeywordExactMatch,
    KeywordSearch,
    LastModStartDate,
    LastModEndDate,
    NoRejected,
    PubStartDate,
    PubEndDate,
    ResultsPerPage,
    SourceIdentifier,
    StartIndex,
    VersionEnd,
    VersionEndType,
    VersionStart,
    VersionStartType,
    VirtualMatchString,
}

impl Parameter {
    /// Every registered parameter, in logical-name order.
    pub const ALL: [Parameter; 27] = [
        Parameter::CpeName,
        Parameter::CveId,
        Parameter::CvssV2Metrics,
        Parameter::CvssV2Severity,
        Parameter::CvssV3Metrics,
        Parameter::CvssV3Severity,
        Parameter::CweId,
        Parameter::HasCertAlerts,
        Parameter::HasCertNotes,
        Parameter::HasKev,
        Parameter::HasOval,
        Parameter::IsVulnerable,
        Parameter::KeywordExactMatch,
        Parameter::KeywordSearch,
        Parameter::LastModStartDate,
        Parameter::LastModEndDate,
        Parameter::NoRejected,
        Parameter::PubStartDate,
        Parameter::PubEndDate,
        Parameter::ResultsPerPage,
        Parameter::SourceIdentifier,
        Parameter::StartIndex,
        Parameter::VersionEnd,
        Parameter::VersionEndType,
        Parameter::VersionStart,
        Parameter::VersionStartType,
        Parameter::VirtualMatchString,
    ];

    /// The logical name callers use for this parameter.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::CpeName => "cpe_name",
            Parameter::CveId => "cve_id",
            Parameter::CvssV2Metrics => "cvssv2_metrics",
            Parameter::CvssV2Severity => "cvssV2Severity",
            Parameter::CvssV3Metrics => "cvssv3_metrics",
            Parameter::CvssV3Severity => "cvssv3_severity",
            Parameter::CweId => "cwe_id",
            Parameter::HasCertAlerts => "has_cert_alerts",
            Parameter::HasCertNotes => "has_cert_notes",
            Parameter::HasKev => "has_kev",
            Parameter::HasOval => "has_oval",
            Parameter::IsVulnerable => "is_vulnerable",
            Parameter::KeywordExactMatch => "keyword_exact_match",
            Parameter::KeywordSearch => "keyword_search",
            Parameter::LastModStartDate => "last_mod_start_date",
            Parameter::LastModEndDate => "last_mod_end_date",
            Parameter::NoRejected => "no_rejected",
            Parameter::PubStartDate => "pub_start_date",
            Parameter::PubEndDate => "pub_end_date",
            Parameter::ResultsPerPage => "results_per_page",
            Parameter::SourceIdentifier => "source_identifier",
            Parameter::StartIndex => "start_index",
            Parameter::VersionEnd => "version_end",
            Parameter::VersionEndType => "version_end_type",
            Parameter::VersionStart => "version_start",
            Parameter::VersionStartType => "version_start_type",
            Parameter::VirtualMatchString => "virtual_match_string",
        }
    }

    /// The wire name and kind registered for this parameter.
    pub const fn spec(self) -> ParameterSpec {
        use ParameterKind::{Boolean, Valued};
        let (wire_name, kind) = match self {
            Parameter::CpeName => ("cpeName", Valued(Pattern::CpeName)),
            Parameter::CveId => ("cveId", Valued(Pattern::CveId)),
            Parameter::CvssV2Metrics => ("cvssV2Metrics", Valued(Pattern::NonEmpty)),
            Parameter::CvssV2Severity => ("cvssV2Severity", Valued(Pattern::CvssV2Severity)),
            Parameter::CvssV3Metrics => ("cvssV3Metrics", Valued(Pattern::NonEmpty)),
            Parameter::CvssV3Severity => ("cvssV3Severity", Valued(Pattern::CvssV3Severity)),
            Parameter::CweId => ("cweId", Valued(Pattern::CweId)),
            Parameter::HasCertAlerts => ("hasCertAlerts", Boolean),
            Parameter::HasCertNotes => ("hasCertNotes", Boolean),
            Parameter::HasKev => ("hasKev", Boolean),
            Parameter::HasOval => ("hasOval", Boolean),
            Parameter::IsVulnerable => ("isVulnerable", Boolean),
            Parameter::KeywordExactMatch => ("keywordExactMatch", Boolean),
            Parameter::KeywordSearch => ("keywordSearch", Valued(Pattern::NonEmpty)),
            Parameter::LastModStartDate => ("lastModStartDate", Valued(Pattern::Timestamp)),
            Parameter::LastModEndDate => ("lastModEndDate", Valued(Pattern::Timestamp)),
            Parameter::NoRejected => ("noRejected", Boolean),
            Parameter::PubStartDate => ("pubStartDate", Valued(Pattern::Timestamp)),
            Parameter::PubEndDate => ("pubEndDate", Valued(Pattern::Timestamp)),
            Parameter::ResultsPerPage => ("resultsPerPage", Valued(Pattern::Digits)),
            Parameter::SourceIdentifier => ("sourceIdentifier", Valued(Pattern::NonEmpty)),
            Parameter::StartIndex => ("startIndex", Valued(Pattern::Digits)),
            Parameter::VersionEnd => ("versionEnd", Valued(Pattern::NonEmpty)),
            Parameter::VersionEndType => ("versionEndType", Valued(Pattern::VersionType)),
            Parameter::VersionStart => ("versionStart", Valued(Pattern::NonEmpty)),
            Parameter::VersionStartType => ("versionStartType", Valued(Pattern::VersionType)),
            Parameter::VirtualMatchString => ("virtualMatchString", Valued(Pattern::NonEmpty)),
        };
        ParameterSpec { wire_name, kind }
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownParameter(s.to_string()))
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry entry for a single parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Name expected on the query string.
    pub wire_name: &'static str,
    /// Flag or valued.
    pub kind: ParameterKind,
}

/// Whether a parameter is a bare flag or a validated `name=value` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// Present on the URL as a bare token when set, absent otherwise.
    Boolean,
    /// Sent as `wireName=value`; the value must match the pattern in full.
    Valued(Pattern),
}

/// Validation rule applied to the raw value of a valued parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// `cpe:2.3` followed by 4 fields without `*` or `:`, then 7 more fields.
    CpeName,
    /// `CVE-YYYY-N+`.
    CveId,
    /// `CWE-` followed by digits.
    CweId,
    /// `LOW`, `MEDIUM` or `HIGH`.
    CvssV2Severity,
    /// `LOW`, `MEDIUM`, `HIGH` or `CRITICAL`.
    CvssV3Severity,
    /// `YYYY-MM-DDThh:mm:ss[.mmm][±hh:mm]`.
    Timestamp,
    /// Non-negative integer, ASCII digits only.
    Digits,
    /// `including` or `excluding`.
    VersionType,
    /// Any non-empty string.
    NonEmpty,
}

impl Pattern {
    /// Returns true when `value` matches this pattern over its whole length.
    pub fn is_match(self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    fn regex(self) -> &'static Regex {
        static CPE_NAME: OnceLock<Regex> = OnceLock::new();
        static CVE_ID: OnceLock<Regex> = OnceLock::new();
        static CWE_ID: OnceLock<Regex> = OnceLock::new();
        static CVSS_V2_SEVERITY: OnceLock<Regex> = OnceLock::new();
        static CVSS_V3_SEVERITY: OnceLock<Regex> = OnceLock::new();
        static TIMESTAMP: OnceLock<Regex> = OnceLock::new();
        static DIGITS: OnceLock<Regex> = OnceLock::new();
        static VERSION_TYPE: OnceLock<Regex> = OnceLock::new();
        static NON_EMPTY: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            Pattern::CpeName => (&CPE_NAME, r"^cpe:2\.3(:[^*:]+){4}(:[^:]+){7}$"),
            Pattern::CveId => (&CVE_ID, r"^CVE-[0-9]{4}-[0-9]+$"),
            Pattern::CweId => (&CWE_ID, r"^CWE-[0-9]+$"),
            Pattern::CvssV2Severity => (&CVSS_V2_SEVERITY, r"^(LOW|MEDIUM|HIGH)$"),
            Pattern::CvssV3Severity => (&CVSS_V3_SEVERITY, r"^(LOW|MEDIUM|HIGH|CRITICAL)$"),
            Pattern::Timestamp => (
                &TIMESTAMP,
                r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?([+-][0-9]{2}:[0-9]{2})?$",
            ),
            Pattern::Digits => (&DIGITS, r"^[0-9]+$"),
            Pattern::VersionType => (&VERSION_TYPE, r"^(including|excluding)$"),
            Pattern::NonEmpty => (&NON_EMPTY, r"(?s)^.+$"),
        };
        cell.get_or_init(|| Regex::new(source).expect("Invalid parameter pattern"))
    }
}
