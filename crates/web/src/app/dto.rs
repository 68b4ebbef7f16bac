//! Form payloads and mapping into domain requests.

use serde::Deserialize;

use buildup_members::SignupRequest;

/// Raw signup form submission.
///
/// Fields default to empty; validation and its messages live in the service.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

impl SignupForm {
    /// Map the form into the domain request; a blank name becomes `None`.
    pub fn into_request(self) -> SignupRequest {
        let name = self.name.trim();
        SignupRequest {
            email: self.email,
            password: self.password,
            name: if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
        }
    }
}
