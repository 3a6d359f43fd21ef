//! Field-level request validation.
//!
//! Write endpoints validate their input before touching the store and
//! answer HTTP 422 with a field-keyed error map when anything is wrong.
//! The map preserves field declaration order so clients render errors in
//! a stable sequence.

use indexmap::IndexMap;

/// Validation failures keyed by field name.
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// A request body that knows how to validate itself.
///
/// Implemented by the write-endpoint DTOs; the `ValidJson` extractor
/// runs it before the handler sees the value.
pub trait Validate {
    /// Returns the collected field errors, or `Ok(())` when the value
    /// is acceptable.
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Collects field errors across a set of rules.
///
/// # Example
///
/// ```
/// use quill_core::validation::Validator;
///
/// let mut v = Validator::new();
/// v.required("title", "");
/// v.required("content", "Hello");
///
/// let errors = v.finish().unwrap_err();
/// assert_eq!(errors["title"][0], "The title field is required.");
/// assert!(!errors.contains_key("content"));
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field.
    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// The field must be present and non-blank.
    pub fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.error(field, format!("The {field} field is required."));
        }
    }

    /// Character-count upper bound. Blank values are left to `required`.
    pub fn max_length(&mut self, field: &str, value: &str, max: usize) {
        if !value.trim().is_empty() && value.chars().count() > max {
            self.error(
                field,
                format!("The {field} may not be greater than {max} characters."),
            );
        }
    }

    /// Character-count lower bound. Blank values are left to `required`.
    pub fn min_length(&mut self, field: &str, value: &str, min: usize) {
        if !value.trim().is_empty() && value.chars().count() < min {
            self.error(
                field,
                format!("The {field} must be at least {min} characters."),
            );
        }
    }

    /// The field must look like an email address.
    pub fn email(&mut self, field: &str, value: &str) {
        if !value.trim().is_empty() && !is_valid_email(value) {
            self.error(field, format!("The {field} must be a valid email address."));
        }
    }

    /// Returns the accumulated errors, if any.
    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Structural email check: one `@`, non-empty local part, and a domain
/// with at least one dot. Deliverability is not this layer's problem.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
