//! Contact-form submission and its boundary validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length for the name field.
const MAX_NAME_LEN: usize = 120;
/// Maximum length for an email address (RFC 5321 limit).
const MAX_EMAIL_LEN: usize = 254;
/// Maximum length for the message body.
const MAX_MESSAGE_LEN: usize = 10_000;

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate a submission at the API boundary.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("'name' must not be empty");
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err("'name' exceeds maximum length");
        }
        if self.email.trim().is_empty() {
            return Err("'email' must not be empty");
        }
        if self.email.len() > MAX_EMAIL_LEN {
            return Err("'email' exceeds maximum length");
        }
        if !plausible_email(self.email.trim()) {
            return Err("'email' is not a valid address");
        }
        if self.message.trim().is_empty() {
            return Err("'message' must not be empty");
        }
        if self.message.len() > MAX_MESSAGE_LEN {
            return Err("'message' exceeds maximum length");
        }
        Ok(())
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a domain
/// containing a dot. Deliverability is the provider's problem.
fn plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
