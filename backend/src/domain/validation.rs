//! Rule-table validation engine for the relief entities.
//!
//! Each entity has one evaluation function returning the ordered list of
//! [`Violation`]s, empty when the instance is valid. The functions are pure
//! and deterministic so callers can evaluate them anywhere (request
//! handlers, tests, queue consumers) without side effects. The messages
//! follow the phrasing the original web forms were built around, so the UI
//! layer can render them verbatim next to the offending field.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::Violation;
use crate::domain::{NewDonation, NewIncident, RegistrationRequest, User};

/// Maximum length accepted for incident titles and locations.
pub const MAX_TEXT_LEN: usize = 200;

/// Digit count bounds for phone numbers once punctuation is stripped.
const PHONE_DIGITS_MIN: usize = 7;
const PHONE_DIGITS_MAX: usize = 15;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One local part, one domain with at least one dot, no whitespace.
        // Consecutive '@' cannot match because neither side may contain one.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // Allowed characters only; digit count is enforced separately.
        let pattern = r"^\+?[0-9\s\-().]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Shared email-syntax check used by the User and Donation rules.
pub fn valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Phone-number syntax check: optional `+`, digits with common punctuation.
pub fn valid_phone(value: &str) -> bool {
    if !phone_regex().is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits)
}

fn user_violations(
    full_name: &str,
    email: &str,
    password: &str,
    phone: Option<&str>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    if full_name.trim().is_empty() {
        violations.push(Violation::new(
            "FullName",
            "The FullName field is required.",
        ));
    }
    if email.trim().is_empty() {
        violations.push(Violation::new("Email", "The Email field is required."));
    } else if !valid_email(email) {
        violations.push(Violation::new(
            "Email",
            "The Email field is not a valid e-mail address.",
        ));
    }
    if password.is_empty() {
        violations.push(Violation::new(
            "PasswordHash",
            "The PasswordHash field is required.",
        ));
    }
    if let Some(phone) = phone {
        if !valid_phone(phone) {
            violations.push(Violation::new(
                "Phone",
                "The Phone field is not a valid phone number.",
            ));
        }
    }
    violations
}

/// Evaluate the User rules against a registration candidate.
///
/// The candidate's plaintext password stands in for the `PasswordHash`
/// field of the eventual record, hence the field name in the violation.
pub fn validate_registration(candidate: &RegistrationRequest) -> Vec<Violation> {
    user_violations(
        &candidate.full_name,
        &candidate.email,
        &candidate.password,
        candidate.phone.as_deref(),
    )
}

/// Evaluate the User rules against a stored record.
pub fn validate_user(user: &User) -> Vec<Violation> {
    user_violations(
        &user.full_name,
        &user.email,
        &user.password_hash,
        user.phone.as_deref(),
    )
}

fn max_length_violation(field: &'static str) -> Violation {
    Violation::new(
        field,
        format!("The field {field} must be a string with a maximum length of {MAX_TEXT_LEN}."),
    )
}

/// Evaluate the Incident rules against a report draft.
pub fn validate_incident(draft: &NewIncident) -> Vec<Violation> {
    let mut violations = Vec::new();
    if draft.title.trim().is_empty() {
        violations.push(Violation::new("Title", "The Title field is required."));
    } else if draft.title.chars().count() > MAX_TEXT_LEN {
        violations.push(max_length_violation("Title"));
    }
    if let Some(location) = &draft.location {
        if location.chars().count() > MAX_TEXT_LEN {
            violations.push(max_length_violation("Location"));
        }
    }
    violations
}

/// Evaluate the Donation rules against a pledge draft.
pub fn validate_donation(draft: &NewDonation) -> Vec<Violation> {
    let mut violations = Vec::new();
    if draft.donor_name.trim().is_empty() {
        violations.push(Violation::new("DonorName", "Donor name is required"));
    }
    if draft.email.trim().is_empty() {
        violations.push(Violation::new("Email", "Email is required"));
    } else if !valid_email(&draft.email) {
        violations.push(Violation::new("Email", "Invalid email address"));
    }
    if draft.resource_type.trim().is_empty() {
        violations.push(Violation::new(
            "ResourceType",
            "Resource type is required",
        ));
    }
    if draft.quantity < 1 {
        violations.push(Violation::new(
            "Quantity",
            "Quantity must be at least 1",
        ));
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    fn valid_registration() -> RegistrationRequest {
        RegistrationRequest::new("John Doe", "john@example.com", "hashedpassword123")
            .with_phone("0812345678")
    }

    fn valid_incident() -> NewIncident {
        NewIncident {
            title: "Flood in Downtown Area".into(),
            description: Some("Heavy rainfall caused flooding in several streets.".into()),
            location: Some("Downtown".into()),
            reported_by: UserId::random(),
        }
    }

    fn valid_donation() -> NewDonation {
        NewDonation {
            donor_name: "John Doe".into(),
            email: "john@example.com".into(),
            resource_type: "Food".into(),
            quantity: 5,
            description: Some("Canned goods".into()),
            contact_number: Some("0812345678".into()),
            pickup_address: Some("123 Main Street".into()),
        }
    }

    #[test]
    fn fully_populated_user_passes() {
        assert!(validate_registration(&valid_registration()).is_empty());
    }

    #[test]
    fn missing_user_fields_each_report_their_violation() {
        let candidate = RegistrationRequest::new("", "", "");
        let violations = validate_registration(&candidate);
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        assert!(messages.contains(&"The FullName field is required."));
        assert!(messages.contains(&"The Email field is required."));
        assert!(messages.contains(&"The PasswordHash field is required."));
    }

    #[rstest]
    #[case("invalidemail")]
    #[case("john@@example.com")]
    #[case("john.com")]
    fn malformed_emails_are_rejected(#[case] email: &str) {
        let mut candidate = valid_registration();
        candidate.email = email.into();
        let violations = validate_registration(&candidate);
        assert!(
            violations
                .iter()
                .any(|v| v.message.contains("not a valid e-mail address")),
            "expected email violation for {email:?}, got {violations:?}"
        );
    }

    #[test]
    fn well_formed_email_is_accepted() {
        assert!(valid_email("john@example.com"));
    }

    #[rstest]
    #[case("NotAPhoneNumber", false)]
    #[case("0812345678", true)]
    #[case("+27 81 234 5678", true)]
    #[case("12", false)]
    fn phone_syntax(#[case] phone: &str, #[case] expected: bool) {
        assert_eq!(valid_phone(phone), expected);
    }

    #[test]
    fn missing_phone_is_not_a_violation() {
        let mut candidate = valid_registration();
        candidate.phone = None;
        assert!(validate_registration(&candidate).is_empty());
    }

    #[test]
    fn invalid_phone_is_reported() {
        let candidate = valid_registration().with_phone("NotAPhoneNumber");
        let violations = validate_registration(&candidate);
        assert!(
            violations
                .iter()
                .any(|v| v.message.contains("not a valid phone number"))
        );
    }

    #[test]
    fn valid_incident_passes() {
        assert!(validate_incident(&valid_incident()).is_empty());
    }

    #[test]
    fn incident_requires_a_title() {
        let mut draft = valid_incident();
        draft.title = String::new();
        let violations = validate_incident(&draft);
        assert!(
            violations
                .iter()
                .any(|v| v.message.contains("The Title field is required"))
        );
    }

    #[rstest]
    #[case(200, true)]
    #[case(201, false)]
    fn incident_title_length_boundary(#[case] len: usize, #[case] valid: bool) {
        let mut draft = valid_incident();
        draft.title = "A".repeat(len);
        let violations = validate_incident(&draft);
        assert_eq!(violations.is_empty(), valid);
        if !valid {
            assert!(violations.iter().any(|v| v.message.contains("maximum length")));
        }
    }

    #[test]
    fn incident_location_is_length_checked_but_optional() {
        let mut draft = valid_incident();
        draft.location = Some("B".repeat(201));
        let violations = validate_incident(&draft);
        assert!(violations.iter().any(|v| v.field == "Location"));

        draft.location = None;
        assert!(validate_incident(&draft).is_empty());
    }

    #[test]
    fn valid_donation_passes() {
        assert!(validate_donation(&valid_donation()).is_empty());
    }

    #[test]
    fn missing_donation_fields_each_report_their_violation() {
        let draft = NewDonation {
            donor_name: String::new(),
            email: String::new(),
            resource_type: String::new(),
            quantity: 1,
            description: None,
            contact_number: None,
            pickup_address: None,
        };
        let messages: Vec<String> = validate_donation(&draft)
            .into_iter()
            .map(|v| v.message)
            .collect();
        assert!(messages.iter().any(|m| m.contains("Donor name is required")));
        assert!(messages.iter().any(|m| m.contains("Email is required")));
        assert!(messages.iter().any(|m| m.contains("Resource type is required")));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn donation_quantity_below_one_is_rejected(#[case] quantity: i32) {
        let mut draft = valid_donation();
        draft.quantity = quantity;
        let violations = validate_donation(&draft);
        assert!(
            violations
                .iter()
                .any(|v| v.message.contains("Quantity must be at least 1"))
        );
    }

    #[test]
    fn donation_email_syntax_shares_the_user_rule() {
        let mut draft = valid_donation();
        draft.email = "john@@example.com".into();
        let violations = validate_donation(&draft);
        assert!(
            violations
                .iter()
                .any(|v| v.message.contains("Invalid email address"))
        );
    }

    #[test]
    fn violations_preserve_field_declaration_order() {
        let candidate = RegistrationRequest::new("", "", "");
        let fields: Vec<_> = validate_registration(&candidate)
            .iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["FullName", "Email", "PasswordHash"]);
    }
}
