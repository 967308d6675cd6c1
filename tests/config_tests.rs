//! Integration tests for rule file loading and matching through the library
//!
//! These tests cover:
//! - JSON and TOML rule files producing the same rule set
//! - File order preserved into the match results
//! - Fatal errors for missing and malformed files
//! - The full activate pipeline without spawning the binary

mod common;

use common::{SAMPLE_RULES, write_rules};
use skill_triggers::cli::activate::activate;
use skill_triggers::config::load_rule_set;
use skill_triggers::output::OutputMode;
use skill_triggers::{ConfigError, MatchType, Priority, RuleName, evaluate};
use tempfile::TempDir;

#[test]
fn test_load_sample_rules() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(temp.path(), "skill-rules.json", SAMPLE_RULES);

    let rules = assert_ok!(load_rule_set(&path));
    assert_eq!(rules.len(), 5);

    let names: Vec<&str> = rules.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(
        names,
        [
            "security-review",
            "debug-helper",
            "git-helper",
            "docs-writer",
            "mystery"
        ]
    );

    let docs = assert_some!(rules.get(&RuleName::new("docs-writer")));
    assert_eq!(docs.priority(), Ok(Priority::Low));
    assert_eq!(docs.intent_patterns().len(), 2);
    assert!(!docs.intent_patterns()[0].is_valid());

    let security = assert_some!(rules.get(&RuleName::new("security-review")));
    assert_eq!(security.description(), Some("Security review checklist"));
}

#[test]
fn test_toml_rules_match_like_json() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(
        temp.path(),
        "skill-rules.toml",
        r#"
[skills.debug-helper]
priority = "high"

[skills.debug-helper.promptTriggers]
keywords = ["traceback", "stack trace"]

[skills.git-helper]
priority = "medium"

[skills.git-helper.promptTriggers]
intentPatterns = ["how do I (revert|undo) a commit"]
"#,
    );

    let rules = assert_ok!(load_rule_set(&path));
    let names: Vec<&str> = rules.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, ["debug-helper", "git-helper"]);

    let matches = evaluate(&rules, "How do I undo a commit? I got a traceback");
    let found: Vec<(&str, MatchType)> = matches
        .iter()
        .map(|m| (m.rule_name().as_str(), m.match_type))
        .collect();
    assert_eq!(
        found,
        [
            ("debug-helper", MatchType::Keyword),
            ("git-helper", MatchType::Intent)
        ]
    );
}

#[test]
fn test_missing_skills_key_gives_empty_rule_set() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(temp.path(), "skill-rules.json", r#"{"version": "1.0"}"#);

    let rules = assert_ok!(load_rule_set(&path));
    assert!(rules.is_empty());
    assert!(evaluate(&rules, "anything").is_empty());
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = load_rule_set(&temp.path().join("skill-rules.json")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(
        temp.path(),
        "skill-rules.json",
        r#"{"skills": {"bad": {"promptTriggers": {"keywords": "not-a-list"}}}}"#,
    );

    let err = load_rule_set(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad"));
}

#[test]
fn test_activate_pipeline_hook_envelope() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(temp.path(), "skill-rules.json", SAMPLE_RULES);
    let rules = assert_ok!(load_rule_set(&path));

    let line = assert_some!(assert_ok!(activate(
        &rules,
        r#"{"text": "there is a CVE in the readme"}"#,
        OutputMode::Hook
    )));

    let json: serde_json::Value = assert_ok!(serde_json::from_str(&line));
    let context = assert_some!(json["hookSpecificOutput"]["additionalContext"].as_str());
    let critical = assert_some!(context.find("→ security-review"));
    let low = assert_some!(context.find("→ docs-writer"));
    assert!(critical < low);
}

#[test]
fn test_activate_pipeline_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = write_rules(temp.path(), "skill-rules.json", SAMPLE_RULES);
    let rules = assert_ok!(load_rule_set(&path));

    let first = assert_ok!(activate(&rules, "stack trace please", OutputMode::Text));
    let second = assert_ok!(activate(&rules, "stack trace please", OutputMode::Text));
    assert_eq!(first, second);
}
