use cinetime_shared::Masked;
use serde::{Deserialize, Serialize};

use crate::{require_fields, CoreResult};

/// Contact details collected on the payment summary. Email and phone are
/// masked in logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
}

impl CustomerInfo {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: Masked(email.to_string()),
            phone: Masked(phone.to_string()),
        }
    }

    /// Name, email and phone are all required.
    pub fn validate(&self) -> CoreResult<()> {
        require_fields(&[
            ("name", self.name.trim().is_empty()),
            ("email", self.email.is_blank()),
            ("phone", self.phone.is_blank()),
        ])
    }
}
