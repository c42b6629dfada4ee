use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// The inputs of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Value used for the input's `id` and `name` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email address",
            Field::Phone => "Enter your 10-digit phone number",
            Field::Message => "Tell us about your AI project requirements",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected. `Display` is the inline message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field validation results. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Drops the entry for `field`; returns true if there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut data = FormData::default();
        for (i, field) in Field::ALL.iter().enumerate() {
            data.set(*field, format!("value-{i}"));
        }
        assert_eq!(data.get(Field::Name), "value-0");
        assert_eq!(data.get(Field::Email), "value-1");
        assert_eq!(data.get(Field::Phone), "value-2");
        assert_eq!(data.get(Field::Message), "value-3");
    }

    #[test]
    fn clearing_one_error_leaves_the_rest() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Name, FieldError::Required(Field::Name));
        errors.insert(Field::Phone, FieldError::InvalidPhone);

        assert!(errors.clear(Field::Name));
        assert!(!errors.clear(Field::Name));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Phone]);
    }

    #[test]
    fn error_messages_read_naturally() {
        assert_eq!(FieldError::Required(Field::Email).to_string(), "Email Address is required");
        assert_eq!(
            FieldError::MessageTooShort { min: 10 }.to_string(),
            "Message must be at least 10 characters"
        );
    }
}
