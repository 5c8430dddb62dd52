use chrono::{DateTime, Utc};
use cinetime_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{require_fields, CoreResult};

pub const ACKNOWLEDGEMENT: &str = "We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    #[default]
    General,
    Booking,
    Refund,
    Technical,
    Feedback,
}

impl ContactCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Booking => "Booking Support",
            ContactCategory::Refund => "Refund Request",
            ContactCategory::Technical => "Technical Issue",
            ContactCategory::Feedback => "Feedback",
        }
    }
}

/// Message from the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Option<Masked<String>>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub category: ContactCategory,
}

impl ContactRequest {
    /// Phone is optional; everything else must be filled in.
    pub fn validate(&self) -> CoreResult<()> {
        require_fields(&[
            ("name", self.name.trim().is_empty()),
            ("email", self.email.is_blank()),
            ("subject", self.subject.trim().is_empty()),
            ("message", self.message.trim().is_empty()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub category: ContactCategory,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactReceipt {
    pub fn acknowledge(category: ContactCategory, received_at: DateTime<Utc>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            category,
            message: ACKNOWLEDGEMENT.to_string(),
            received_at,
        }
    }
}
