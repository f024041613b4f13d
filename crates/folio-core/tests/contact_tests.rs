// Host-side tests for contact form validation and sanitizing.

use folio_core::{
    sanitize, sanitize_html, sanitize_input, sanitize_record, validate, ContactForm, Field,
};
use serde_json::{json, Map, Value};

fn form(first: &str, last: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        subject: subject.into(),
        message: message.into(),
    }
}

fn record(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => panic!("expected object"),
    }
}

#[test]
fn well_formed_form_is_valid() {
    let report = validate(&form(
        "John",
        "Doe",
        "john@example.com",
        "Hello there",
        "This is a sufficiently long message.",
    ));
    assert!(report.is_valid());
    assert!(report.errors.is_empty());
}

#[test]
fn every_violation_is_reported_at_once() {
    let report = validate(&form("A", "Doe", "bad", "hi", "short"));
    assert!(!report.is_valid());
    assert_eq!(
        report.error(Field::FirstName),
        Some("First name must be between 2 and 50 characters")
    );
    assert_eq!(report.error(Field::Email), Some("Please enter a valid email address"));
    assert_eq!(
        report.error(Field::Subject),
        Some("Subject must be between 5 and 100 characters")
    );
    assert_eq!(
        report.error(Field::Message),
        Some("Message must be between 10 and 1000 characters")
    );
    assert_eq!(report.error(Field::LastName), None);
    assert_eq!(report.errors.len(), 4);
}

#[test]
fn empty_fields_are_required() {
    let report = validate(&ContactForm::default());
    assert_eq!(report.errors.len(), 5);
    for field in Field::ALL {
        let msg = report.error(field).unwrap();
        assert!(msg.ends_with("is required"), "{field}: {msg}");
    }
}

#[test]
fn script_payload_sanitizes_to_text() {
    let out = sanitize_input("<script>alert(1)</script>Hello");
    assert_eq!(out, "Hello");
    assert!(!out.contains('<') && !out.contains('>'));
}

#[test]
fn sanitize_strips_tags_and_trims() {
    assert_eq!(sanitize_input("  <b>bold</b> move >  "), "bold move");
    assert_eq!(sanitize_input("a < b"), "a  b");
}

#[test]
fn sanitize_form_cleans_every_field() {
    let dirty = form(
        " <i>Ada</i> ",
        "Lovelace",
        "ada@example.com ",
        "<h1>Hi</h1>",
        "<script>x()</script>Hello world!",
    );
    let clean = sanitize(&dirty);
    assert_eq!(clean, form("Ada", "Lovelace", "ada@example.com", "Hi", "Hello world!"));
}

#[test]
fn sanitize_record_passes_non_strings_through() {
    let input = record(json!({
        "firstName": "<b>Jo</b>",
        "newsletter": true,
        "age": 42,
        "tags": ["<x>"],
    }));
    let out = sanitize_record(&input);
    assert_eq!(out["firstName"], json!("Jo"));
    assert_eq!(out["newsletter"], json!(true));
    assert_eq!(out["age"], json!(42));
    assert_eq!(out["tags"], json!(["<x>"]));
}

#[test]
fn form_from_record_defaults_missing_fields() {
    let f = ContactForm::from_record(&record(json!({
        "firstName": "Jo",
        "email": 7,
    })));
    assert_eq!(f.first_name, "Jo");
    assert_eq!(f.email, "");
    assert_eq!(f.message, "");
}

#[test]
fn sanitize_html_removes_denylisted_patterns() {
    let html = r#"<div onmouseover='x()'>ok<script type="text/javascript">evil()</script><IFRAME src=x></IFRAME></div>"#;
    let out = sanitize_html(html);
    assert_eq!(out, "<div>ok</div>");
    assert!(!out.to_lowercase().contains("javascript"));
}
