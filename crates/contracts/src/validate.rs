use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Complete set of validation violations for one form pass.
///
/// Rebuilt from scratch on every pass; a submit is allowed iff the map is
/// empty. Keys are field names as rendered in the form.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Upload size ceiling shared by the picker and drag-drop paths.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME whitelist for resume attachments.
pub const RESUME_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// MIME whitelist for salary slips.
pub const SLIP_MIME_TYPES: &[&str] = &["application/pdf"];

/// MIME whitelist for website images (portfolio, culture).
pub const IMAGE_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("File type {0} is not allowed")]
    DisallowedType(String),
    #[error("File exceeds the 5MB size limit")]
    TooLarge,
}

/// Single gate for both file entry points (picker and drag-drop).
///
/// Both paths must call this before a file may enter a form draft, so they
/// can never diverge in what they accept.
pub fn validate_upload(mime: &str, size: u64, allowed: &[&str]) -> Result<(), UploadError> {
    if !allowed.contains(&mime) {
        return Err(UploadError::DisallowedType(mime.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
    }
}

/// Minimal email shape check: one '@' with a dot somewhere after it.
pub fn check_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let v = value.trim();
    if v.is_empty() {
        return;
    }
    let valid = match v.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        errors.insert(field, "Enter a valid email address".to_string());
    }
}

/// Phone numbers are stored as entered but must carry exactly `digits`
/// decimal digits once separators are stripped.
pub fn check_phone(errors: &mut FieldErrors, field: &'static str, value: &str, digits: usize) {
    let v = value.trim();
    if v.is_empty() {
        return;
    }
    let count = v.chars().filter(|c| c.is_ascii_digit()).count();
    if count != digits {
        errors.insert(field, format!("Phone number must contain {} digits", digits));
    }
}

/// Parse a form date field ("YYYY-MM-DD"). Missing or malformed values
/// produce an error entry and `None`.
pub fn parse_date(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    label: &str,
) -> Option<NaiveDate> {
    let v = value.trim();
    if v.is_empty() {
        errors.insert(field, format!("{} is required", label));
        return None;
    }
    match NaiveDate::parse_from_str(v, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(field, format!("{} is not a valid date", label));
            None
        }
    }
}

pub fn check_not_before_today(
    errors: &mut FieldErrors,
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
    label: &str,
) {
    if date < today {
        errors.insert(field, format!("{} cannot be in the past", label));
    }
}

/// Numeric grade in the 0..=100 evaluation scale.
pub fn check_grade(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    let v = value.trim();
    if v.is_empty() {
        errors.insert(field, format!("{} is required", label));
        return;
    }
    match v.parse::<f64>() {
        Ok(n) if (0.0..=100.0).contains(&n) => {}
        _ => {
            errors.insert(field, format!("{} must be a number between 0 and 100", label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_rejects_disallowed_mime() {
        let err = validate_upload("text/html", 10, RESUME_MIME_TYPES).unwrap_err();
        assert_eq!(err, UploadError::DisallowedType("text/html".to_string()));
    }

    #[test]
    fn upload_rejects_oversize() {
        let err = validate_upload("application/pdf", MAX_UPLOAD_BYTES + 1, RESUME_MIME_TYPES)
            .unwrap_err();
        assert_eq!(err, UploadError::TooLarge);
    }

    #[test]
    fn upload_accepts_exact_ceiling() {
        assert!(validate_upload("application/pdf", MAX_UPLOAD_BYTES, SLIP_MIME_TYPES).is_ok());
    }

    #[test]
    fn email_shapes() {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", "asha@example.com");
        assert!(errors.is_empty());

        check_email(&mut errors, "email", "not-an-email");
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn phone_digit_count() {
        let mut errors = FieldErrors::new();
        check_phone(&mut errors, "phone", "+1 (555) 012-3456", 11);
        assert!(errors.is_empty());

        check_phone(&mut errors, "phone", "12345", 10);
        assert!(errors.contains_key("phone"));
    }
}
