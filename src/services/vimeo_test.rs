use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct MemoryStash {
    value: RefCell<Option<String>>,
}

impl MemoryStash {
    fn with_state(state: &str) -> Self {
        let stash = Self::default();
        stash.put(state);
        stash
    }

    fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StateStash for MemoryStash {
    fn put(&self, value: &str) {
        self.value.replace(Some(value.to_owned()));
    }

    fn take(&self) -> Option<String> {
        self.value.replace(None)
    }
}

#[test]
fn matching_state_is_accepted_and_removed() {
    let stash = MemoryStash::with_state("abc123");
    assert_eq!(consume_state(&stash, Some("abc123")), Ok(()));
    assert!(stash.stored().is_none());
}

#[test]
fn mismatched_state_is_rejected_and_removed() {
    let stash = MemoryStash::with_state("abc123");
    assert_eq!(
        consume_state(&stash, Some("evil")),
        Err(VimeoError::StateMismatch)
    );
    // The nonce is one-shot even on rejection.
    assert!(stash.stored().is_none());
}

#[test]
fn absent_returned_state_is_rejected() {
    let stash = MemoryStash::with_state("abc123");
    assert_eq!(consume_state(&stash, None), Err(VimeoError::StateMismatch));
    assert!(stash.stored().is_none());
}

#[test]
fn absent_stored_state_is_rejected() {
    let stash = MemoryStash::default();
    assert_eq!(
        consume_state(&stash, Some("abc123")),
        Err(VimeoError::StateMismatch)
    );
}

#[test]
fn callback_stops_at_state_mismatch_before_any_exchange() {
    let stash = MemoryStash::with_state("abc123");
    let result = block_on(handle_callback(&stash, "code", Some("other")));
    assert_eq!(result, Err(VimeoError::StateMismatch));
    assert!(stash.stored().is_none());
}

#[test]
fn authorize_url_carries_client_redirect_and_state() {
    let url = authorize_url("client-1", "https://app.example/auth/vimeo/callback", "nonce");
    assert!(url.starts_with("https://api.vimeo.com/oauth/authorize?"));
    assert!(url.contains("client_id=client-1"));
    assert!(url.contains("redirect_uri=https://app.example/auth/vimeo/callback"));
    assert!(url.contains("state=nonce"));
    assert!(url.contains("response_type=code"));
}
