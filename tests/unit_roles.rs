use iperform_models::Role;
use serde_json::json;

#[test]
fn test_every_synonym_maps_to_its_canonical_token() {
    let table = [
        ("director of studies", "dos"),
        ("directorofstudies", "dos"),
        ("Director Of Studies", "dos"),
        ("director of discipline", "dod"),
        ("directorofdiscipline", "dod"),
        ("dean of discipline", "dod"),
        ("head boy", "head_boy"),
        ("headboy", "head_boy"),
        ("HeadBoy", "head_boy"),
        ("head girl", "head_girl"),
        ("headgirl", "head_girl"),
        ("stock keeper", "stock_keeper"),
        ("stockkeeper", "stock_keeper"),
        ("Stock Keeper", "stock_keeper"),
    ];
    for (label, canonical) in table {
        assert_eq!(Role::parse(label).as_str(), canonical, "label {}", label);
    }
}

#[test]
fn test_canonical_tokens_are_fixed_points() {
    for token in Role::CANONICAL {
        let role = Role::parse(token);
        assert!(role.is_recognized());
        assert_eq!(role.as_str(), token);
        assert_eq!(Role::parse(role.as_str()), role);
    }
}

#[test]
fn test_unrecognized_labels_pass_through_normalized() {
    let role = Role::parse("  Deputy Janitor ");
    assert_eq!(role, Role::Unrecognized("deputy janitor".to_string()));
    assert_eq!(role.to_string(), "deputy janitor");
}

#[test]
fn test_absent_role_defaults_to_student() {
    #[derive(serde::Deserialize)]
    struct Probe {
        #[serde(default)]
        role: Role,
    }
    let probe: Probe = serde_json::from_value(json!({})).unwrap();
    assert_eq!(probe.role, Role::Student);
}

#[test]
fn test_wire_round_trip_preserves_identity() {
    for label in ["principal", "Dean of Discipline", "weird role"] {
        let first: Role = serde_json::from_value(json!(label)).unwrap();
        let wire = serde_json::to_value(&first).unwrap();
        let second: Role = serde_json::from_value(wire).unwrap();
        assert_eq!(first, second);
    }
}
