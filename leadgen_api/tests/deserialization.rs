use leadgen_api::types::RawCompany;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_suggestions_full() {
    let json = load_fixture("suggestions.json");
    let companies: Vec<RawCompany> = serde_json::from_str(&json).unwrap();
    assert_eq!(companies.len(), 5);

    let first = &companies[0];
    assert_eq!(first.name, "Segment");
    assert_eq!(first.domain, "segment.com");
    assert_eq!(
        first.logo.as_deref(),
        Some("https://logo.clearbit.com/segment.com")
    );
    assert!(first.has_domain());

    assert_eq!(companies[1].logo, None);
    assert!(!companies[2].has_domain());

    assert_eq!(companies[4].name, "Ghost");
    assert_eq!(companies[4].domain, "");
    assert!(!companies[4].has_domain());
}

#[test]
fn null_name_and_domain_deserialize_as_empty() {
    let company: RawCompany =
        serde_json::from_str(r#"{"name":null,"domain":null,"logo":null}"#).unwrap();
    assert_eq!(company.name, "");
    assert_eq!(company.domain, "");
    assert_eq!(company.logo, None);
}

#[test]
fn deserialize_suggestions_missing_fields() {
    let json = load_fixture("suggestions_partial.json");
    let companies: Vec<RawCompany> = serde_json::from_str(&json).unwrap();
    assert_eq!(companies.len(), 3);

    assert_eq!(companies[0].logo, None);
    assert_eq!(companies[1].name, "");
    assert_eq!(companies[1].domain, "nameless.example");
    assert_eq!(companies[2].domain, "");
    assert!(!companies[2].has_domain());
}

#[test]
fn blank_logo_is_treated_as_absent() {
    let company = RawCompany {
        name: "Acme".into(),
        domain: "acme.io".into(),
        logo: Some("  ".into()),
    };
    assert_eq!(company.logo_url(), None);
}

#[test]
fn whitespace_domain_is_not_usable() {
    let company: RawCompany =
        serde_json::from_str(r#"{"name":"Ghost","domain":"   ","logo":null}"#).unwrap();
    assert!(!company.has_domain());
}
