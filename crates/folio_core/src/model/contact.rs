//! Contact form message and "connect with me" links.
//!
//! # Invariants
//! - Every contact message is acknowledged, none is stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Number of fields left blank. Informational only.
    pub fn blank_fields(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .filter(|value| value.trim().is_empty())
            .count()
    }
}

/// Acknowledgement handed back after a contact message is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Correlates the acknowledgement with its log line.
    pub receipt_id: Uuid,
    /// Character count of the discarded message body.
    pub message_chars: usize,
}

/// External profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl ContactLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
