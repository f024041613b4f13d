//! Contact form validation and sanitizing.
//!
//! Validation reports every violated field at once. Sanitizing is a regex
//! denylist, not a parser; it is best-effort cleanup for a low-trust form and
//! not a defence against obfuscated payloads.

use crate::constants::SANITIZE_MAX_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<iframe\b[^>]*>.*?</iframe\s*>",
    )
    .expect("block pattern")
});
static SCRIPT_IFRAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<iframe\b[^>]*>.*?</iframe\s*>")
        .expect("script pattern")
});
static OPEN_SCRIPT_IFRAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(script|iframe)\b[^>]*>").expect("open tag pattern"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static JS_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript\s*:").expect("js url pattern"));
static ON_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("handler pattern")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Subject,
        Field::Message,
    ];

    /// Key used in flat records and form control names.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn length_bounds(self) -> Option<(usize, usize)> {
        match self {
            Field::FirstName | Field::LastName => Some((2, 50)),
            Field::Subject => Some((5, 100)),
            Field::Message => Some((10, 1000)),
            Field::Email => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Build from a flat record. Missing or non-string values become empty.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let text = |field: Field| {
            record
                .get(field.key())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Self {
            first_name: text(Field::FirstName),
            last_name: text(Field::LastName),
            email: text(Field::Email),
            subject: text(Field::Subject),
            message: text(Field::Message),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

fn check_field(field: Field, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(format!("{} is required", field.label()));
    }
    if field == Field::Email {
        return (!EMAIL_RE.is_match(value))
            .then(|| "Please enter a valid email address".to_owned());
    }
    let (min, max) = field.length_bounds()?;
    let len = value.chars().count();
    (len < min || len > max).then(|| {
        format!(
            "{} must be between {} and {} characters",
            field.label(),
            min,
            max
        )
    })
}

pub fn validate(form: &ContactForm) -> ValidationReport {
    let errors = Field::ALL
        .iter()
        .filter_map(|&f| check_field(f, form.get(f)).map(|msg| (f, msg)))
        .collect();
    ValidationReport { errors }
}

/// Clean a single user-supplied string: drop script/style/iframe blocks,
/// strip tags and stray angle brackets, trim, cap the length.
pub fn sanitize_input(input: &str) -> String {
    let no_blocks = BLOCK_RE.replace_all(input, "");
    let no_tags = TAG_RE.replace_all(&no_blocks, "");
    let cleaned: String = no_tags.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    cleaned.trim().chars().take(SANITIZE_MAX_CHARS).collect()
}

pub fn sanitize(form: &ContactForm) -> ContactForm {
    let mut out = form.clone();
    for field in Field::ALL {
        let v = out.get_mut(field);
        *v = sanitize_input(v);
    }
    out
}

/// Sanitize every string value in a flat record; other values pass through.
pub fn sanitize_record(record: &Map<String, Value>) -> Map<String, Value> {
    record
        .iter()
        .map(|(k, v)| {
            let v = match v {
                Value::String(s) => Value::String(sanitize_input(s)),
                other => other.clone(),
            };
            (k.clone(), v)
        })
        .collect()
}

/// Denylist cleanup for markup that is rendered as HTML. Keeps benign tags.
pub fn sanitize_html(html: &str) -> String {
    let out = SCRIPT_IFRAME_RE.replace_all(html, "");
    let out = OPEN_SCRIPT_IFRAME_RE.replace_all(&out, "");
    let out = JS_URL_RE.replace_all(&out, "");
    ON_ATTR_RE.replace_all(&out, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_rejects_missing_parts() {
        assert!(EMAIL_RE.is_match("a@b.co"));
        assert!(!EMAIL_RE.is_match("a@b"));
        assert!(!EMAIL_RE.is_match("a b@c.d"));
        assert!(!EMAIL_RE.is_match("@c.d"));
    }

    #[test]
    fn lengths_use_trimmed_chars() {
        assert!(check_field(Field::FirstName, "  J  ").is_some());
        assert!(check_field(Field::FirstName, "Zoë").is_none());
        assert!(check_field(Field::FirstName, &"x".repeat(51)).is_some());
    }

    #[test]
    fn sanitize_input_caps_length() {
        let long = "a".repeat(1500);
        assert_eq!(sanitize_input(&long).chars().count(), SANITIZE_MAX_CHARS);
    }

    #[test]
    fn sanitize_html_keeps_benign_markup() {
        let html = r#"<p onclick="steal()">Hi <a href="javascript:alert(1)">x</a></p><iframe src="e"></iframe>"#;
        assert_eq!(sanitize_html(html), r#"<p>Hi <a href="alert(1)">x</a></p>"#);
    }
}
