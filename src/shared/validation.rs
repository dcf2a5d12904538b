use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

use crate::core::error::{AppError, Result};

/// Field-level validation failures keyed by the JSON field name.
///
/// Validation routines take this by value, add to it, and hand it back, so a
/// request never shares an error collector with anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Ok when nothing was collected, otherwise the whole map as a 400
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let key = camel_case(&field.to_string());
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid.", key));
                out.add(key.clone(), message);
            }
        }
        out
    }
}

/// Run the derived field rules of a request and start an error map from them
pub fn field_errors_of<T: validator::Validate>(dto: &T) -> FieldErrors {
    match dto.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    }
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// `walk_difficulty_id` -> `walkDifficultyId`, matching the serde renaming of the DTOs
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank", message = "Name is required."))]
        name: String,
        #[validate(range(exclusive_min = 0.0, message = "Length should be greater than zero."))]
        walk_length: f64,
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("walk_difficulty_id"), "walkDifficultyId");
        assert_eq!(camel_case("region_id"), "regionId");
        assert_eq!(camel_case("code"), "code");
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Bay of Plenty").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_errors_accumulate_per_field() {
        let sample = Sample {
            name: " ".to_string(),
            walk_length: 0.0,
        };

        let errors = field_errors_of(&sample);
        assert_eq!(errors.get("name"), Some(&["Name is required.".to_string()][..]));
        assert_eq!(
            errors.get("walkLength"),
            Some(&["Length should be greater than zero.".to_string()][..])
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("code", "Code is required.");
        errors.add("code", "Code already exists.");
        assert_eq!(errors.get("code").map(|m| m.len()), Some(2));

        match errors.into_result() {
            Err(AppError::Validation(e)) => assert!(!e.is_empty()),
            _ => panic!("expected validation error"),
        }
    }
}
