use ai_architect::config::Configuration;
use ai_architect::routing::RoutingError;

/// A new role starts enabled, routed to claude, with the given
/// description.
#[test]
fn add_role_inserts_defaults() {
    let mut configuration = Configuration::default();

    configuration.add_role("qa-lead", "keeps the bar high").unwrap();

    let role = &configuration.roles["qa-lead"];
    assert!(role.enabled);
    assert_eq!(role.provider, "claude");
    assert_eq!(role.description, "keeps the bar high");
}

#[test]
fn add_role_rejects_bad_names() {
    let mut configuration = Configuration::default();

    for name in ["QA_Lead", "-bad", "bad-", "a--b", ""] {
        assert_eq!(
            configuration.add_role(name, ""),
            Err(RoutingError::InvalidName(name.to_string())),
            "{name:?} should be rejected"
        );
    }
}

/// A rejected add leaves the configuration byte-for-byte unchanged.
#[test]
fn add_existing_role_fails_and_changes_nothing() {
    let mut configuration = Configuration::default();
    let before = serde_json::to_string(&configuration).unwrap();

    assert_eq!(
        configuration.add_role("architect", "again"),
        Err(RoutingError::RoleExists("architect".to_string()))
    );

    assert_eq!(serde_json::to_string(&configuration).unwrap(), before);
}

#[test]
fn remove_role_deletes_entry() {
    let mut configuration = Configuration::default();

    configuration.remove_role("qa").unwrap();

    assert!(!configuration.roles.contains_key("qa"));
    assert_eq!(
        configuration.remove_role("qa"),
        Err(RoutingError::RoleNotFound("qa".to_string()))
    );
}

/// Renaming moves the whole entry, content preserved.
#[test]
fn rename_role_preserves_content() {
    let mut configuration = Configuration::default();
    configuration.set_role_enabled("qa", false).unwrap();
    configuration.set_role_description("qa", "final gate").unwrap();
    configuration.set_role_provider("qa", "codex").unwrap();

    configuration.rename_role("qa", "quality-gate").unwrap();

    assert!(!configuration.roles.contains_key("qa"));
    let role = &configuration.roles["quality-gate"];
    assert!(!role.enabled);
    assert_eq!(role.provider, "codex");
    assert_eq!(role.description, "final gate");
}

/// A missing source is reported before the new name is even validated.
#[test]
fn rename_checks_source_first() {
    let mut configuration = Configuration::default();

    assert_eq!(
        configuration.rename_role("ghost", "NOT-VALID"),
        Err(RoutingError::RoleNotFound("ghost".to_string()))
    );
}

#[test]
fn rename_rejects_invalid_or_taken_target() {
    let mut configuration = Configuration::default();

    assert_eq!(
        configuration.rename_role("qa", "QA"),
        Err(RoutingError::InvalidName("QA".to_string()))
    );
    assert_eq!(
        configuration.rename_role("qa", "review"),
        Err(RoutingError::RoleExists("review".to_string()))
    );
    // both failures left the source untouched
    assert!(configuration.roles.contains_key("qa"));
}

#[test]
fn set_enabled_toggles_flag() {
    let mut configuration = Configuration::default();

    configuration.set_role_enabled("review", false).unwrap();
    assert!(!configuration.roles["review"].enabled);

    configuration.set_role_enabled("review", true).unwrap();
    assert!(configuration.roles["review"].enabled);

    assert_eq!(
        configuration.set_role_enabled("ghost", true),
        Err(RoutingError::RoleNotFound("ghost".to_string()))
    );
}

#[test]
fn set_provider_requires_known_provider() {
    let mut configuration = Configuration::default();

    configuration.set_role_provider("qa", "gemini").unwrap();
    assert_eq!(configuration.roles["qa"].provider, "gemini");

    assert_eq!(
        configuration.set_role_provider("qa", "mystery"),
        Err(RoutingError::UnknownProvider("mystery".to_string()))
    );
    // the failed call did not clobber the previous assignment
    assert_eq!(configuration.roles["qa"].provider, "gemini");

    assert_eq!(
        configuration.set_role_provider("ghost", "claude"),
        Err(RoutingError::RoleNotFound("ghost".to_string()))
    );
}

/// Descriptions are stored verbatim, whatever they contain.
#[test]
fn set_description_is_verbatim() {
    let mut configuration = Configuration::default();

    configuration
        .set_role_description("planning", "  UPPER case / punctuation!  ")
        .unwrap();

    assert_eq!(
        configuration.roles["planning"].description,
        "  UPPER case / punctuation!  "
    );
}
