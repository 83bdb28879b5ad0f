//! Tests exercising the crate-root re-exports.

use nebulaai_core::{
    capitalize_first, format_currency, format_percentage, generate_id, get_random_element,
    is_valid_email, is_valid_url, normalize_string, sanitize_input, validate_vibe, BaseResult,
    CoreConfig, CoreError, DomainStatus, IndustryType, PACKAGE_NAME, VERSION,
};

#[test]
fn test_package_metadata() {
    assert_eq!(PACKAGE_NAME, "@nebulaai/core");
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_build_result_from_user_input() {
    let raw = "  Quantum  Ledger!! ";
    let name = capitalize_first(&sanitize_input(raw));
    let slug = normalize_string(&name);

    assert_eq!(name, "Quantum  Ledger");
    assert_eq!(slug, "quantum-ledger");

    let vibe = "fintech";
    assert!(validate_vibe(vibe));

    let result = BaseResult {
        id: generate_id(Some("name")),
        name,
        tagline: "Banking at the speed of light".to_string(),
        domain: format!("{}.com", slug),
        domain_status: DomainStatus::Available,
        vibe: vibe.parse::<IndustryType>().unwrap().to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    let back: BaseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert!(back.id.starts_with("name-"));
    assert!(is_valid_url(&format!("https://{}", back.domain)));
}

#[test]
fn test_contact_validation() {
    assert!(is_valid_email("hello@quantum-ledger.com"));
    assert!(!is_valid_email("hello@quantum-ledger"));
}

#[test]
fn test_pick_industry() {
    let industries = IndustryType::ALL;
    let industry = get_random_element(&industries).unwrap();
    assert!(validate_vibe(industry.as_str()));

    let empty: Vec<IndustryType> = Vec::new();
    assert!(matches!(
        get_random_element(&empty),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(format_currency(2_500_000.0, None), "$2,500,000.00");
    assert_eq!(format_percentage(23.46, None), "23.5%");
}

#[test]
fn test_config_yaml_overrides() {
    let config = CoreConfig::from_yaml("default_timeout_ms: 1000\n").unwrap();
    assert_eq!(config.default_timeout_ms, 1000);
    assert_eq!(config.max_retries, 3);
}
