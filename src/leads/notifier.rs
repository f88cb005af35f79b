//! Outbound email notifier.
//!
//! Mail delivery is not wired up: messages are logged and acknowledged.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Acknowledgement for a dispatched message
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReceipt {
    pub ok: bool,
    pub message_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    operations_email: String,
}

impl Notifier {
    pub fn new(operations_email: impl Into<String>) -> Self {
        Self {
            operations_email: operations_email.into(),
        }
    }

    pub fn operations_email(&self) -> &str {
        &self.operations_email
    }

    pub async fn dispatch(&self, message: &OutboundMessage) -> Result<DispatchReceipt> {
        let receipt = DispatchReceipt {
            ok: true,
            message_id: Uuid::new_v4(),
        };
        info!(
            message_id = %receipt.message_id,
            to = %message.to,
            subject = %message.subject,
            bytes = message.body.len(),
            "Email dispatched"
        );
        // Bodies carry customer contact details
        tracing::trace!("Email body:\n{}", message.body);
        Ok(receipt)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new("ops@urbanbrush.co")
    }
}
