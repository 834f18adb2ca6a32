use crate::domain::post::cursor::PageCursor;
use crate::domain::post::value_objects::PostId;

#[test]
fn cursor_round_trips_the_anchor_document() {
    let id = PostId::new("doc-42").unwrap();
    let cursor = PageCursor::after_post(&id);
    assert_eq!(cursor.post_id().unwrap(), id);
}

#[test]
fn cursor_token_is_opaque_and_url_safe() {
    let id = PostId::new("posts/2024?page=1").unwrap();
    let cursor = PageCursor::after_post(&id);
    assert_ne!(cursor.as_token(), id.as_str());
    assert!(
        cursor
            .as_token()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}
