//! Draft validation.
//!
//! Validation failures are data, not errors: [`validate`] returns a mapping of
//! field to message and an empty mapping means the draft is acceptable. A
//! [`ValidDraft`] can only be obtained from a draft whose mapping is empty.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::employee::EmployeeDraft;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const POSITION_REQUIRED: &str = "Position is required";

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot with
/// text on both sides somewhere after it.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Draft field a message is attached to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Position,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Position => "position",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages. Fields without an error are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Whether `value` is empty once surrounding whitespace is removed.
///
/// U+FEFF (byte order mark) counts as whitespace here, as it does for browser
/// form input, although Unicode does not classify it as `White_Space`.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Check every rule against `draft`; all applicable messages are returned together.
pub fn validate(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if is_blank(&draft.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if is_blank(&draft.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if is_blank(&draft.position) {
        errors.insert(Field::Position, POSITION_REQUIRED);
    }

    errors
}

/// A draft that passed [`validate`] with no messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft(EmployeeDraft);

impl ValidDraft {
    /// Wrap seed data that is known to be valid.
    pub(crate) fn assume_valid(draft: EmployeeDraft) -> Self {
        debug_assert!(validate(&draft).is_empty(), "seed draft is invalid: {draft:?}");
        Self(draft)
    }

    pub fn as_draft(&self) -> &EmployeeDraft {
        &self.0
    }

    pub fn into_inner(self) -> EmployeeDraft {
        self.0
    }
}

impl TryFrom<EmployeeDraft> for ValidDraft {
    type Error = FieldErrors;

    fn try_from(draft: EmployeeDraft) -> Result<Self, Self::Error> {
        let errors = validate(&draft);
        if errors.is_empty() {
            Ok(Self(draft))
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, position: &str) -> EmployeeDraft {
        EmployeeDraft::new(name, email, position)
    }

    #[test]
    fn valid_draft_has_no_messages() {
        assert!(validate(&draft("Ann", "ann@co.io", "Dev")).is_empty());
    }

    #[test]
    fn all_rules_are_reported_together() {
        let errors = validate(&draft("", "bad", "x"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Position), None);
    }

    #[test]
    fn blank_draft_reports_every_field() {
        let errors = validate(&draft("  ", "\t", " "));

        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Position), Some(POSITION_REQUIRED));
    }

    #[test]
    fn email_shape_rules() {
        let accepted = ["a@b.c", "m@c.com", "first.last@sub.domain.org", "x@y..", "a@b.c."];
        for email in accepted {
            assert!(validate(&draft("A", email, "B")).is_empty(), "{email} should pass");
        }

        let rejected = [
            "bad",
            "a@b",
            "@b.c",
            "a@.c",
            "a@b.",
            "a@@b.c",
            "a@b@c.d",
            "a b@c.d",
            " a@b.c",
            "a@b.c ",
        ];
        for email in rejected {
            assert_eq!(
                validate(&draft("A", email, "B")).get(Field::Email),
                Some(EMAIL_INVALID),
                "{email} should fail"
            );
        }
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let errors = validate(&draft("\u{FEFF}", " \u{FEFF}\t", "\u{FEFF}\u{00A0}"));

        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Position), Some(POSITION_REQUIRED));
        assert!(validate(&draft("\u{FEFF}Ann", "ann@co.io", "Dev")).is_empty());
    }

    #[test]
    fn surrounding_whitespace_in_name_is_not_an_error() {
        assert!(validate(&draft("  Ann  ", "ann@co.io", " Dev ")).is_empty());
    }

    #[test]
    fn valid_draft_conversion() {
        let ok = ValidDraft::try_from(draft("Ann", "ann@co.io", "Dev")).unwrap();
        assert_eq!(ok.as_draft().name, "Ann");

        let err = ValidDraft::try_from(draft("Ann", "", "Dev")).unwrap_err();
        assert_eq!(err.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errors = validate(&draft("", "bad", "x"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Name is required",
                "email": "Please enter a valid email",
            })
        );
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Please enter a valid email"
        );
    }
}
