use super::*;

fn fetched_entry() -> Experience {
    Experience {
        id: 12,
        user_id: Some(9),
        name: "Starting a taco truck".to_owned(),
        raw_text: "It began with a lease.".to_owned(),
        created_at: Some("2024-06-01T12:00:00Z".to_owned()),
        anonymize: false,
        fields_extracted: None,
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        profile_picture_url: None,
    }
}

#[test]
fn saved_draft_replaces_title_body_and_anonymize() {
    let mut entry = fetched_entry();
    let draft = SubmitRequest {
        existing_experience_id: Some(entry.id),
        experience_name: "Running a taco truck".to_owned(),
        experience: "The lease was only the beginning.".to_owned(),
        anonymize: true,
    };

    apply_submitted_draft(&mut entry, &draft);

    assert_eq!(entry.name, "Running a taco truck");
    assert_eq!(entry.raw_text, "The lease was only the beginning.");
    assert!(entry.anonymize);
}

#[test]
fn saved_draft_keeps_identity_and_attribution() {
    let mut entry = fetched_entry();
    let draft = SubmitRequest {
        existing_experience_id: Some(entry.id),
        experience_name: "Edited".to_owned(),
        experience: "Edited body.".to_owned(),
        anonymize: false,
    };

    apply_submitted_draft(&mut entry, &draft);

    // The displayed copy is patched in place, not refetched, so id,
    // author, and timestamp fields carry over unchanged.
    assert_eq!(entry.id, 12);
    assert_eq!(entry.user_id, Some(9));
    assert_eq!(entry.author_name(), "Ada Lovelace");
    assert_eq!(entry.created_at.as_deref(), Some("2024-06-01T12:00:00Z"));
}
