use once_cell::sync::Lazy;
use regex::Regex;

use super::form::{Field, FieldError, FieldErrors, FormData};

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Checks every field and returns all problems at once.
///
/// Blank input (empty or whitespace-only) is reported as `Required` before
/// any format check runs for that field.
pub fn validate(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Err(e) = check_field(field, data.get(field)) {
            errors.insert(field, e);
        }
    }
    errors
}

pub fn check_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    match field {
        Field::Name => Ok(()),
        Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        Field::Phone if !PHONE_RE.is_match(value) => Err(FieldError::InvalidPhone),
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(FieldError::MessageTooShort { min: MIN_MESSAGE_CHARS })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> FormData {
        FormData {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            message: "We want a demand forecasting model.".into(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn empty_fields_are_reported_exactly() {
        // every subset of the four fields left empty
        for mask in 0u8..16 {
            let mut data = valid();
            let mut expected = Vec::new();
            for (bit, field) in Field::ALL.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    data.set(*field, "");
                    expected.push(*field);
                }
            }
            let errors = validate(&data);
            assert_eq!(errors.fields().collect::<Vec<_>>(), expected, "mask {mask:04b}");
            for field in &expected {
                assert_eq!(errors.get(*field), Some(&FieldError::Required(*field)));
            }
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut data = valid();
        data.name = "   \t".into();
        data.message = "\n  ".into();
        let errors = validate(&data);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::Required(Field::Name)));
        assert_eq!(errors.get(Field::Message), Some(&FieldError::Required(Field::Message)));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn email_format() {
        assert_eq!(check_field(Field::Email, "foo"), Err(FieldError::InvalidEmail));
        assert_eq!(check_field(Field::Email, "foo@bar"), Err(FieldError::InvalidEmail));
        assert_eq!(check_field(Field::Email, "a b@c.d"), Err(FieldError::InvalidEmail));
        assert_eq!(check_field(Field::Email, "a@b.co"), Ok(()));
        assert_eq!(check_field(Field::Email, "  a@b.co "), Ok(()));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert_eq!(check_field(Field::Phone, "12345"), Err(FieldError::InvalidPhone));
        assert_eq!(check_field(Field::Phone, "12345678901"), Err(FieldError::InvalidPhone));
        assert_eq!(check_field(Field::Phone, "12345-6789"), Err(FieldError::InvalidPhone));
        assert_eq!(check_field(Field::Phone, "1234567890"), Ok(()));
    }

    #[test]
    fn message_length_uses_trimmed_chars() {
        assert_eq!(
            check_field(Field::Message, "short"),
            Err(FieldError::MessageTooShort { min: MIN_MESSAGE_CHARS })
        );
        assert_eq!(
            check_field(Field::Message, "   nine char   "),
            Err(FieldError::MessageTooShort { min: MIN_MESSAGE_CHARS })
        );
        assert_eq!(check_field(Field::Message, "ten chars!"), Ok(()));
        // ten multi-byte chars, far more than ten bytes
        assert_eq!(check_field(Field::Message, "éééééééééé"), Ok(()));
    }
}
