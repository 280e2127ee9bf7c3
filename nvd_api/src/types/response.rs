//! Response envelope returned by the CVE API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One element of the `vulnerabilities` array, passed through as returned.
///
/// Each record carries at least a `cve` object; its inner structure is not
/// interpreted by this crate.
pub type VulnerabilityRecord = serde_json::Value;

/// Top-level body of a CVE search response.
///
/// Only the `vulnerabilities` array is relied on. The paging fields are read
/// best-effort: missing, `null` or mistyped values fall back to zero or an
/// empty string instead of rejecting the body.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CveResponse {
    /// Page size the service applied.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub results_per_page: i64,

    /// Zero-based index of the first record in this page.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub start_index: i64,

    /// Number of records matching the query across all pages.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_results: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub format: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    /// Generation time reported by the service.
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,

    /// Matching vulnerability records, possibly empty.
    #[serde(default, deserialize_with = "nullable_records")]
    pub vulnerabilities: Vec<VulnerabilityRecord>,
}

impl CveResponse {
    /// Consumes the response and returns the `cve` object of the first record.
    pub fn into_first_cve(self) -> Option<serde_json::Value> {
        self.vulnerabilities
            .into_iter()
            .next()
            .and_then(|mut record| record.get_mut("cve").map(serde_json::Value::take))
    }

    /// True when another page exists after this one.
    pub fn has_more(&self) -> bool {
        self.start_index
            .saturating_add(self.vulnerabilities.len() as i64)
            < self.total_results
    }
}

/// Accepts a number or a numeric string; anything else reads as zero.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Accepts a string as-is, `null` as empty, and renders any other value.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// `null` reads as an empty list; a non-array is still an error.
fn nullable_records<'de, D>(deserializer: D) -> Result<Vec<VulnerabilityRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<VulnerabilityRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
