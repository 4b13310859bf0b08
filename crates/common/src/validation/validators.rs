// Field Validators - Reusable validation components

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with various constraints
///
/// Lengths are counted in characters, not bytes, so accented names are
/// measured the way users type them. Every constraint accepts an optional
/// custom message; otherwise a generic English message is produced.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<regex::Regex>,
    not_empty: bool,
    trim: bool,
    empty_message: Option<String>,
    min_length_message: Option<String>,
    max_length_message: Option<String>,
    pattern_message: Option<String>,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self {
            min_length: None,
            max_length: None,
            pattern: None,
            not_empty: false,
            trim: true,
            empty_message: None,
            min_length_message: None,
            max_length_message: None,
            pattern_message: None,
        }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set pattern to match
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(regex::Regex::new(pattern)?);
        Ok(self)
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Message reported when the value is empty
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Message reported when the value is shorter than `min_length`
    pub fn min_length_message(mut self, message: impl Into<String>) -> Self {
        self.min_length_message = Some(message.into());
        self
    }

    /// Message reported when the value is longer than `max_length`
    pub fn max_length_message(mut self, message: impl Into<String>) -> Self {
        self.max_length_message = Some(message.into());
        self
    }

    /// Message reported when the value does not match `pattern`
    pub fn pattern_message(mut self, message: impl Into<String>) -> Self {
        self.pattern_message = Some(message.into());
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let length = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err(self
                .empty_message
                .clone()
                .unwrap_or_else(|| "Value cannot be empty".to_string()));
        }

        if let Some(min) = self.min_length {
            if length < min {
                return Err(self
                    .min_length_message
                    .clone()
                    .unwrap_or_else(|| format!("Length must be at least {} characters", min)));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(self
                    .max_length_message
                    .clone()
                    .unwrap_or_else(|| format!("Length must not exceed {} characters", max)));
            }
        }

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(val) {
                return Err(self
                    .pattern_message
                    .clone()
                    .unwrap_or_else(|| format!("Value must match pattern: {}", pattern.as_str())));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}
