use iperform_gateway::extract::extract_json_object;
use iperform_gateway::{FALLBACK_CODE, LabReport, SeedRequest, fallback_state, prompts};
use iperform_models::state::COLLECTION_FIELDS;
use iperform_models::{Role, sanitize};
use iperform_store::session::default_password;
use serde_json::Value;

#[test]
fn test_fallback_dataset_satisfies_sanitizer_invariants() {
    let state = fallback_state(None);
    let doc = serde_json::to_value(&state).unwrap();
    for field in COLLECTION_FIELDS {
        assert!(doc[field].is_array(), "collection '{}' missing", field);
    }
    assert!(!state.school_profile.name.is_empty());
    // Already canonical: running the sanitizer over it changes nothing.
    assert_eq!(sanitize(doc), state);
}

#[test]
fn test_fallback_users_are_reachable_with_demo_credentials() {
    let state = fallback_state(None);
    assert!(state.users.iter().any(|u| u.role == Role::Principal));
    for user in &state.users {
        let stored = user.password.as_deref();
        let default = default_password(&user.role);
        assert!(
            stored.is_some() || default.is_some(),
            "user {} has no way to log in",
            user.username
        );
    }
}

#[test]
fn test_fallback_code_marks_origin_only_when_seeded() {
    assert_eq!(fallback_state(None).school_profile.code, "IPERF");

    let seed = SeedRequest::named("Hill College");
    let seeded = fallback_state(Some(&seed));
    assert_eq!(seeded.school_profile.code, FALLBACK_CODE);
    assert_eq!(seeded.school_profile.name, "Hill College");
}

#[test]
fn test_fenced_reply_survives_the_full_decode_pipeline() {
    let reply = "Sure! Here is the updated database:\n```json\n{\n  \"users\": [\n    {\"username\": \"p\", \"role\": \"Principal\"},\n    null\n  ],\n  \"students\": \"oops\"\n}\n```\nAnything else?";
    let document = extract_json_object(reply).expect("fenced reply must yield a document");
    let value: Value = serde_json::from_str(document).unwrap();
    let state = sanitize(value);
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].role, Role::Principal);
    assert!(state.students.is_empty());
}

#[test]
fn test_reply_without_document_is_rejected() {
    assert!(extract_json_object("I'm sorry, I cannot do that.").is_none());
}

#[test]
fn test_materialize_prompt_asks_for_the_full_shape() {
    let prompt = prompts::materialize_prompt(None);
    for field in COLLECTION_FIELDS {
        assert!(
            prompt.contains(&format!("\"{}\"", field)),
            "data shape is missing '{}'",
            field
        );
    }
}

#[test]
fn test_mutate_prompt_round_trips_the_state_document() {
    let state = fallback_state(None);
    let state_json = serde_json::to_string(&state).unwrap();
    let prompt = prompts::mutate_prompt(&state_json, "Promote student S001 to head boy");
    assert!(prompt.contains("Promote student S001 to head boy"));
    assert!(prompt.contains(&state.school_profile.name));
}

#[test]
fn test_lab_report_decodes_from_a_noisy_reply() {
    let reply = "```json\n{\"status\": \"DANGER\", \"observation\": \"Vigorous reaction\", \"measurements\": {\"temperature\": 95, \"ph\": \"1.5\"}, \"nextSteps\": [\"Step back\"]}\n```";
    let document = extract_json_object(reply).unwrap();
    let report: LabReport = serde_json::from_str(document).unwrap();
    assert_eq!(report.status, "DANGER");
    assert_eq!(report.measurements.temperature, "95");
    assert_eq!(report.measurements.ph, "1.5");
    assert_eq!(report.next_steps, vec!["Step back"]);
}
