use super::*;

#[test]
fn user_profile_parses_the_me_payload() {
    let json = r#"{
        "user_id": 1,
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "profile_picture_url": null
    }"#;
    let profile: UserProfile = serde_json::from_str(json).expect("profile parses");
    assert_eq!(profile.user_id, 1);
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert!(profile.profile_picture_url.is_none());
}

#[test]
fn experience_list_parses_with_anonymized_author() {
    let json = r#"{
        "results": [{
            "id": 12,
            "user_id": null,
            "name": "Starting a taco truck",
            "raw_text": "It began with a lease.",
            "created_at": "2024-06-01T12:00:00Z",
            "anonymize": true,
            "first_name": null,
            "last_name": null,
            "profile_picture_url": null
        }]
    }"#;
    let list: ExperienceList = serde_json::from_str(json).expect("list parses");
    assert_eq!(list.results.len(), 1);
    let entry = &list.results[0];
    assert!(entry.anonymize);
    assert!(entry.user_id.is_none());
    assert_eq!(entry.author_name(), "Anonymous LinkedIn User");
}

#[test]
fn experience_author_name_joins_first_and_last() {
    let json = r#"{
        "id": 3,
        "user_id": 9,
        "name": "t",
        "raw_text": "b",
        "first_name": "Ada",
        "last_name": "Lovelace"
    }"#;
    let entry: Experience = serde_json::from_str(json).expect("entry parses");
    assert_eq!(entry.author_name(), "Ada Lovelace");
}

#[test]
fn submit_request_serializes_backend_field_names() {
    let req = SubmitRequest {
        existing_experience_id: Some(7),
        experience_name: "title".to_owned(),
        experience: "body".to_owned(),
        anonymize: true,
    };
    let value = serde_json::to_value(&req).expect("serializes");
    assert_eq!(value["existingExperienceId"], 7);
    assert_eq!(value["experienceName"], "title");
    assert_eq!(value["experience"], "body");
    assert_eq!(value["anonymize"], true);
}

#[test]
fn submit_request_omits_absent_existing_id() {
    let req = SubmitRequest {
        existing_experience_id: None,
        experience_name: "title".to_owned(),
        experience: "body".to_owned(),
        anonymize: false,
    };
    let value = serde_json::to_value(&req).expect("serializes");
    assert!(value.get("existingExperienceId").is_none());
}

#[test]
fn submit_response_summary_counts_addressed_fields() {
    let json = r#"{
        "fields_extracted": {
            "funding": true,
            "team": false,
            "outcome": true
        }
    }"#;
    let resp: SubmitResponse = serde_json::from_str(json).expect("report parses");
    assert_eq!(resp.summary(), (2, 3));
}
