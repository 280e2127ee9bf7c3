use nvd_api::types::CveResponse;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_single_cve() {
    let json = load_fixture("cve_single.json");
    let resp: CveResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total_results, 1);
    assert_eq!(resp.results_per_page, 1);
    assert_eq!(resp.format, "NVD_CVE");
    assert_eq!(resp.version, "2.0");
    assert_eq!(resp.vulnerabilities.len(), 1);
    assert_eq!(resp.vulnerabilities[0]["cve"]["id"], "CVE-2003-0521");
    assert!(!resp.has_more());
}

#[test]
fn deserialize_empty_result_set() {
    let json = load_fixture("cve_empty.json");
    let resp: CveResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.vulnerabilities.is_empty());
    assert_eq!(resp.total_results, 0);
    assert!(resp.into_first_cve().is_none());
}

#[test]
fn deserialize_paging_meta() {
    let json = load_fixture("cve_keyword_page.json");
    let resp: CveResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.start_index, 0);
    assert_eq!(resp.results_per_page, 2);
    assert_eq!(resp.total_results, 5);
    assert_eq!(resp.vulnerabilities.len(), 2);
    assert!(resp.has_more());
}

#[test]
fn first_cve_is_passed_through_unmodified() {
    let json = load_fixture("cve_single.json");
    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    let resp: CveResponse = serde_json::from_str(&json).unwrap();
    let cve = resp.into_first_cve().unwrap();
    assert_eq!(cve, raw["vulnerabilities"][0]["cve"]);
}

#[test]
fn records_are_not_interpreted() {
    let json = r#"{"vulnerabilities": [{"cve": {"id": "CVE-2020-0001"}, "extra": [1, 2, 3]}, {"other": true}]}"#;
    let resp: CveResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.vulnerabilities.len(), 2);
    assert_eq!(resp.vulnerabilities[0]["extra"][2], 3);
    assert_eq!(resp.total_results, 0);
}

#[test]
fn missing_vulnerabilities_defaults_to_empty() {
    let resp: CveResponse = serde_json::from_str(r#"{"totalResults": 0}"#).unwrap();
    assert!(resp.vulnerabilities.is_empty());
}

#[test]
fn first_record_without_cve_yields_none() {
    let resp: CveResponse = serde_json::from_str(r#"{"vulnerabilities": [{"id": "x"}]}"#).unwrap();
    assert!(resp.into_first_cve().is_none());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"vulnerabilities": not valid json}"#;
    let result = serde_json::from_str::<CveResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_wrong_top_level_type_returns_error() {
    let result = serde_json::from_str::<CveResponse>(r#"{"vulnerabilities": {"cve": {}}}"#);
    assert!(result.is_err());
}

#[test]
fn null_and_mistyped_paging_fields_keep_records() {
    let json = r#"{
        "format": null,
        "version": 2.0,
        "totalResults": "1",
        "resultsPerPage": true,
        "startIndex": null,
        "vulnerabilities": [{"cve": {"id": "CVE-2003-0521"}}]
    }"#;
    let resp: CveResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.format, "");
    assert_eq!(resp.version, "2.0");
    assert_eq!(resp.total_results, 1);
    assert_eq!(resp.results_per_page, 0);
    assert_eq!(resp.start_index, 0);
    assert_eq!(resp.vulnerabilities.len(), 1);
    assert_eq!(resp.into_first_cve().unwrap()["id"], "CVE-2003-0521");
}

#[test]
fn null_vulnerabilities_is_empty() {
    let resp: CveResponse = serde_json::from_str(r#"{"vulnerabilities": null}"#).unwrap();
    assert!(resp.vulnerabilities.is_empty());
}

#[test]
fn has_more_does_not_overflow_on_huge_start_index() {
    let json = r#"{
        "startIndex": 9223372036854775807,
        "totalResults": 9223372036854775807,
        "vulnerabilities": [{"cve": {"id": "CVE-2003-0521"}}]
    }"#;
    let resp: CveResponse = serde_json::from_str(json).unwrap();
    assert!(!resp.has_more());
}
