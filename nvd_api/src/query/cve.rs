//! CVE search query: logical parameters, translation to wire names, and URL assembly.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::types::{CvssV2Severity, CvssV3Severity, VersionType};
use crate::Error;

use super::params::{Parameter, ParameterKind};

/// Format the API accepts for date range bounds.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Value supplied for a logical parameter.
///
/// Boolean parameters take a [`ParamValue::Flag`]; everything else takes
/// [`ParamValue::Text`], which is validated against the parameter's pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Flag(bool),
    Text(String),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Flag(flag) => write!(f, "{}", flag),
            ParamValue::Text(text) => f.write_str(text),
        }
    }
}

/// Logical parameters for one CVE search, keyed by logical name.
///
/// Nothing is checked while the query is being built. Names and values are
/// validated by [`translate`] when the query is sent, so an unknown name set
/// through [`CveQuery::with_param`] only fails at that point. Setting the
/// same name twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CveQuery {
    params: BTreeMap<String, ParamValue>,
}

impl<K, V> FromIterator<(K, V)> for CveQuery
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl CveQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter by its logical name.
    pub fn with_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    fn with(self, param: Parameter, value: impl Into<ParamValue>) -> Self {
        self.with_param(param.name(), value)
    }

    /// Iterates over the logical parameters in name order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Validates the parameters and maps them to their wire names.
    pub fn translate(&self) -> Result<TranslatedQuery, Error> {
        translate(self)
    }

    pub fn with_cpe_name(self, cpe_name: &str) -> Self {
        self.with(Parameter::CpeName, cpe_name)
    }
    pub fn with_cve_id(self, cve_id: &str) -> Self {
        self.with(Parameter::CveId, cve_id)
    }
    pub fn with_cvss_v2_metrics(self, vector: &str) -> Self {
        self.with(Parameter::CvssV2Metrics, vector)
    }
    pub fn with_cvss_v2_severity(self, severity: CvssV2Severity) -> Self {
        self.with(Parameter::CvssV2Severity, severity.to_string())
    }
    pub fn with_cvss_v3_metrics(self, vector: &str) -> Self {
        self.with(Parameter::CvssV3Metrics, vector)
    }
    pub fn with_cvss_v3_severity(self, severity: CvssV3Severity) -> Self {
        self.with(Parameter::CvssV3Severity, severity.to_string())
    }
    pub fn with_cwe_id(self, cwe_id: &str) -> Self {
        self.with(Parameter::CweId, cwe_id)
    }

    pub fn with_has_cert_alerts(self, enabled: bool) -> Self {
        self.with(Parameter::HasCertAlerts, enabled)
    }
    pub fn with_has_cert_notes(self, enabled: bool) -> Self {
        self.with(Parameter::HasCertNotes, enabled)
    }
    pub fn with_has_kev(self, enabled: bool) -> Self {
        self.with(Parameter::HasKev, enabled)
    }
    pub fn with_has_oval(self, enabled: bool) -> Self {
        self.with(Parameter::HasOval, enabled)
    }
    /// Only meaningful together with [`CveQuery::with_cpe_name`]; not enforced.
    pub fn with_is_vulnerable(self, enabled: bool) -> Self {
        self.with(Parameter::IsVulnerable, enabled)
    }
    pub fn with_keyword_exact_match(self, enabled: bool) -> Self {
        self.with(Parameter::KeywordExactMatch, enabled)
    }
    pub fn with_no_rejected(self, enabled: bool) -> Self {
        self.with(Parameter::NoRejected, enabled)
    }

    pub fn with_keyword_search(self, keywords: &str) -> Self {
        self.with(Parameter::KeywordSearch, keywords)
    }

    pub fn with_last_mod_start_date(self, timestamp: &str) -> Self {
        self.with(Parameter::LastModStartDate, timestamp)
    }
    pub fn with_last_mod_end_date(self, timestamp: &str) -> Self {
        self.with(Parameter::LastModEndDate, timestamp)
    }
    /// Sets both bounds of the last-modified window.
    pub fn with_last_mod_date_range(
        self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.with(
            Parameter::LastModStartDate,
            start.format(DATE_FORMAT).to_string(),
        )
        .with(Parameter::LastModEndDate, end.format(DATE_FORMAT).to_string())
    }

    pub fn with_pub_start_date(self, timestamp: &str) -> Self {
        self.with(Parameter::PubStartDate, timestamp)
    }
    pub fn with_pub_end_date(self, timestamp: &str) -> Self {
        self.with(Parameter::PubEndDate, timestamp)
    }
    /// Sets both bounds of the publication window.
    pub fn with_pub_date_range(
        self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.with(Parameter::PubStartDate, start.format(DATE_FORMAT).to_string())
            .with(Parameter::PubEndDate, end.format(DATE_FORMAT).to_string())
    }

    pub fn with_results_per_page(self, results_per_page: u32) -> Self {
        self.with(Parameter::ResultsPerPage, results_per_page)
    }
    pub fn with_start_index(self, start_index: u64) -> Self {
        self.with(Parameter::StartIndex, start_index)
    }

    pub fn with_source_identifier(self, source: &str) -> Self {
        self.with(Parameter::SourceIdentifier, source)
    }

    pub fn with_version_start(self, version: &str) -> Self {
        self.with(Parameter::VersionStart, version)
    }
    pub fn with_version_start_type(self, version_type: VersionType) -> Self {
        self.with(Parameter::VersionStartType, version_type.to_string())
    }
    pub fn with_version_end(self, version: &str) -> Self {
        self.with(Parameter::VersionEnd, version)
    }
    pub fn with_version_end_type(self, version_type: VersionType) -> Self {
        self.with(Parameter::VersionEndType, version_type.to_string())
    }
    pub fn with_virtual_match_string(self, cpe_match: &str) -> Self {
        self.with(Parameter::VirtualMatchString, cpe_match)
    }
}

/// Wire-ready parameters: bare flag tokens plus validated `name=value` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatedQuery {
    /// Wire names of boolean parameters that were set to `true`.
    pub flags: BTreeSet<&'static str>,
    /// Wire name to raw value for valued parameters.
    pub valued: BTreeMap<&'static str, String>,
}

impl TranslatedQuery {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.valued.is_empty()
    }

    /// Number of entries that will appear on the query string.
    pub fn len(&self) -> usize {
        self.flags.len() + self.valued.len()
    }

    /// Appends the flags and pairs to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            return url;
        }
        {
            let mut pairs = url.query_pairs_mut();
            for flag in self.flags.iter() {
                pairs.append_key_only(flag);
            }
            for (name, value) in self.valued.iter() {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    /// Renders the query string on its own, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for flag in self.flags.iter() {
            serializer.append_key_only(flag);
        }
        for (name, value) in self.valued.iter() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// Validates every logical parameter in `query` and maps it to its wire form.
///
/// Stops at the first unknown name or rejected value. Boolean parameters set
/// to `false` are dropped, since the API has no way to express them. Values
/// that pass are carried through unchanged.
pub fn translate(query: &CveQuery) -> Result<TranslatedQuery, Error> {
    let mut translated = TranslatedQuery::default();
    for (name, value) in query.params() {
        let param: Parameter = name.parse()?;
        let spec = param.spec();
        match (spec.kind, value) {
            (ParameterKind::Boolean, ParamValue::Flag(true)) => {
                translated.flags.insert(spec.wire_name);
            }
            (ParameterKind::Boolean, ParamValue::Flag(false)) => {}
            (ParameterKind::Valued(pattern), ParamValue::Text(text)) if pattern.is_match(text) => {
                translated.valued.insert(spec.wire_name, text.clone());
            }
            _ => {
                return Err(Error::InvalidParameterValue {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(translated)
}
