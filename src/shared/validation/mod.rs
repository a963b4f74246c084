/// Field-level validation results shared by every payload validator
///
/// Validators collect every violation instead of stopping at the first one,
/// so callers can correct a payload in a single round trip.
use serde::Serialize;
use std::fmt;

/// One violated rule on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Non-empty list of violations, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Fields that failed at least one rule
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

/// Accumulates violations while a payload is checked field by field
#[derive(Debug, Default)]
pub struct FieldValidator {
    violations: Vec<FieldViolation>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    /// Run a fallible parse, keeping the value or recording the failure
    pub fn parse<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e.to_string());
                None
            }
        }
    }

    pub fn text_length(&mut self, field: &str, label: &str, value: &str, min: usize, max: Option<usize>) {
        let len = value.trim().chars().count();
        if len < min {
            if min <= 1 {
                self.add(field, format!("{} is required", label));
            } else {
                self.add(field, format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = max {
            if value.chars().count() > max {
                self.add(field, format!("{} must be at most {} characters", label, max));
            }
        }
    }

    /// Non-empty ordered list of non-empty strings
    pub fn string_list(&mut self, field: &str, singular: &str, items: &[String]) {
        if items.is_empty() {
            self.add(field, format!("At least one {}", singular));
            return;
        }
        for (index, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                self.add(&format!("{}.{}", field, index), format!("{} cannot be empty", capitalize(singular)));
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::from(self.violations))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
