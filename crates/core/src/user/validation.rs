//! Username and registration form rules

use ignitecall_common::{StringValidator, Validator};
use ignitecall_domain::constants::{
    NAME_MIN_LENGTH, NAME_TOO_SHORT_MESSAGE, REGISTER_PATH, USERNAME_MIN_LENGTH,
    USERNAME_PATTERN, USERNAME_PATTERN_MESSAGE, USERNAME_QUERY_PARAM, USERNAME_TOO_SHORT_MESSAGE,
};
use ignitecall_domain::{IgniteCallError, RedirectTarget, RegisterUserInput};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::RegistrationError;

struct FormRules {
    username: StringValidator,
    name: StringValidator,
}

static FORM_RULES: Lazy<Result<FormRules, String>> = Lazy::new(|| {
    // whitespace is not a letter or hyphen, so it fails the pattern
    let username = StringValidator::new()
        .trim(false)
        .min_length(USERNAME_MIN_LENGTH)
        .min_length_message(USERNAME_TOO_SHORT_MESSAGE)
        .pattern(USERNAME_PATTERN)
        .map_err(|e| e.to_string())?
        .pattern_message(USERNAME_PATTERN_MESSAGE);
    let name = StringValidator::new()
        .min_length(NAME_MIN_LENGTH)
        .min_length_message(NAME_TOO_SHORT_MESSAGE);
    Ok(FormRules { username, name })
});

fn rules() -> Result<&'static FormRules, RegistrationError> {
    FORM_RULES.as_ref().map_err(|e| {
        RegistrationError::Domain(IgniteCallError::Internal(format!("invalid form rule: {e}")))
    })
}

/// A username that passed the claim form, normalised to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClaimedUsername(String);

impl ClaimedUsername {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Registration page pre-filled with this username.
    pub fn register_target(&self) -> RedirectTarget {
        RedirectTarget::new(REGISTER_PATH).with_query(USERNAME_QUERY_PARAM, self.0.clone())
    }
}

/// Validate the landing-page username claim.
///
/// At least three characters, letters and hyphens only, in any case.
/// Surrounding whitespace is rejected, not stripped. The result is lowercased.
pub fn claim_username(raw: &str) -> Result<ClaimedUsername, RegistrationError> {
    let rules = rules()?;
    let mut validator = Validator::new();
    validator.validate_field("username", raw, &rules.username);
    validator.finalize()?;
    Ok(ClaimedUsername(raw.to_lowercase()))
}

/// Validate the registration form and normalise it.
///
/// Username follows [`claim_username`]; the name needs at least three
/// characters once trimmed. Both fields are reported together.
pub fn validate_registration(
    input: &RegisterUserInput,
) -> Result<RegisterUserInput, RegistrationError> {
    let rules = rules()?;
    let mut validator = Validator::new();
    validator.validate_field("username", input.username.as_str(), &rules.username);
    validator.validate_field("name", input.name.as_str(), &rules.name);
    validator.finalize()?;

    Ok(RegisterUserInput {
        username: input.username.to_lowercase(),
        name: input.name.trim().to_string(),
    })
}
