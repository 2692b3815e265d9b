use super::*;

// =============================================================
// Comments
// =============================================================

#[test]
fn parse_comments_reads_records() {
    let body = r#"[
        {"id": 11, "content": "hello", "author": "a@b.com", "likeCount": 3},
        {"id": 12, "content": "world", "likeCount": 0}
    ]"#;
    let comments = parse_comments(body).expect("records should parse");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, Some(11));
    assert_eq!(comments[0].content, "hello");
    assert_eq!(comments[0].author.as_deref(), Some("a@b.com"));
    assert_eq!(comments[0].like_count, 3);
    assert_eq!(comments[1].author, None);
}

#[test]
fn parse_comments_accepts_email_as_author() {
    let body = r#"[{"id": 1, "content": "hi", "email": "z@example.com", "likeCount": 1}]"#;
    let comments = parse_comments(body).expect("records should parse");
    assert_eq!(comments[0].author.as_deref(), Some("z@example.com"));
}

#[test]
fn parse_comments_accepts_bare_strings() {
    let comments = parse_comments(r#"["first", "second"]"#).expect("strings should parse");
    assert_eq!(comments, vec![Comment::text_only("first"), Comment::text_only("second")]);
}

#[test]
fn parse_comments_missing_like_count_defaults_to_zero() {
    let comments = parse_comments(r#"[{"id": 5, "content": "x"}]"#).expect("record should parse");
    assert_eq!(comments[0].like_count, 0);
}

#[test]
fn parse_comments_rejects_non_array() {
    assert!(matches!(parse_comments(r#"{"content": "x"}"#), Err(ApiError::Decode(_))));
    assert!(matches!(parse_comments("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn parse_comments_empty_array() {
    assert_eq!(parse_comments("[]").expect("empty array should parse"), Vec::new());
}

// =============================================================
// Login
// =============================================================

#[test]
fn parse_login_response_full_object() {
    let parsed = parse_login_response(r#"{"isLoggedIn": true, "url": "/logout"}"#).expect("object should parse");
    assert_eq!(
        parsed,
        LoginResponse::Full(LoginState { is_logged_in: true, action_url: "/logout".to_owned() })
    );
}

#[test]
fn parse_login_response_bare_boolean_with_newline() {
    assert_eq!(parse_login_response("false\n").expect("bool should parse"), LoginResponse::StatusOnly(false));
    assert_eq!(parse_login_response("true").expect("bool should parse"), LoginResponse::StatusOnly(true));
}

#[test]
fn parse_login_response_rejects_garbage() {
    assert!(matches!(parse_login_response("maybe"), Err(ApiError::Decode(_))));
}

#[test]
fn parse_action_url_plain_and_quoted() {
    assert_eq!(parse_action_url("/_ah/login?continue=%2F\n"), "/_ah/login?continue=%2F");
    assert_eq!(parse_action_url("\"/_ah/logout\"\n"), "/_ah/logout");
}
