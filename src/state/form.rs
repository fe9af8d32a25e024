//! Signup form and activity select state.

use crate::net::types::SignupRequest;

/// Label of the leading, value-less select option.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Current contents of the signup form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupFormState {
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            activity: self.activity.clone(),
        }
    }
}

/// Options of the activity select, excluding the placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityOptions {
    pub names: Vec<String>,
}
