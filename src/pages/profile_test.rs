use super::*;

#[test]
fn avatar_prefers_optimistic_preview() {
    assert_eq!(
        avatar_src(Some("data:image/png;base64,AA".to_owned()), Some("https://cdn/pic.png".to_owned())),
        "data:image/png;base64,AA"
    );
}

#[test]
fn avatar_falls_back_to_stored_then_placeholder() {
    assert_eq!(avatar_src(None, Some("https://cdn/pic.png".to_owned())), "https://cdn/pic.png");
    assert_eq!(avatar_src(None, None), DEFAULT_AVATAR);
}

#[test]
fn member_since_shows_date_half_of_timestamp() {
    assert_eq!(member_since(Some("2024-03-01T10:00:00Z")), "2024-03-01");
    assert_eq!(member_since(Some("2024-03-01")), "2024-03-01");
}

#[test]
fn member_since_without_timestamp_is_na() {
    assert_eq!(member_since(None), "N/A");
    assert_eq!(member_since(Some("")), "N/A");
}
