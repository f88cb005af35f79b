//! Quote and contact submission handling.

use askama::Template;
use chrono::Utc;
use uuid::Uuid;

use crate::db::LeadStore;
use crate::error::{AppError, Result};
use crate::models::{ContactMessage, ContactSubject, Lead, PreferredWindow};
use crate::pricing::compute_price_range;
use crate::pricing::rates::CURRENCY;

use super::emails::{ContactEmail, QuoteEmail};
use super::notifier::{Notifier, OutboundMessage};
use super::requests::{ContactRequest, SendQuoteRequest};
use super::responses::{ContactResponse, SendQuoteResponse};

/// Check the contact fields every submission needs.
fn validate_contact(name: &str, email: &str) -> Result<()> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("name: required".to_string());
    }
    let email = email.trim();
    if email.is_empty() {
        errors.push("email: required".to_string());
    } else if !email.contains('@') {
        errors.push("email: must contain '@'".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Contact details are incomplete", errors))
    }
}

/// Price the submitted selections, store the lead, and email the quote to
/// the customer and to operations.
///
/// The price range is computed here rather than trusted from the client.
pub async fn send_quote(
    store: &LeadStore,
    notifier: &Notifier,
    request: SendQuoteRequest,
) -> Result<SendQuoteResponse> {
    validate_contact(&request.name, &request.email)?;

    let price = compute_price_range(&request.quote);
    let lead = Lead {
        id: Uuid::new_v4(),
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        preferred_window: PreferredWindow::from_label(&request.preferred_window),
        notes: request.notes,
        quote: request.quote,
        price,
        created_at: Utc::now(),
    };

    store.save_lead(&lead).await?;

    let body = QuoteEmail::for_lead(&lead).render()?;
    let subject = format!("Your Urban Brush quote: ${} - ${}", price.low, price.high);
    let mut message_ids = Vec::with_capacity(2);
    for to in [lead.email.as_str(), notifier.operations_email()] {
        let receipt = notifier
            .dispatch(&OutboundMessage {
                to: to.to_string(),
                subject: subject.clone(),
                body: body.clone(),
            })
            .await?;
        message_ids.push(receipt.message_id);
    }

    tracing::info!(
        lead_id = %lead.id,
        low = price.low,
        high = price.high,
        message_ids = ?message_ids,
        "Lead captured"
    );

    Ok(SendQuoteResponse {
        ok: true,
        lead_id: lead.id,
        price,
        currency: CURRENCY.to_string(),
    })
}

/// Store a contact message and forward it to operations.
pub async fn submit_contact(
    store: &LeadStore,
    notifier: &Notifier,
    request: ContactRequest,
) -> Result<ContactResponse> {
    validate_contact(&request.name, &request.email)?;

    let message = ContactMessage {
        id: Uuid::new_v4(),
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        subject: ContactSubject::from_label(&request.subject),
        message: request.message,
        created_at: Utc::now(),
    };

    store.save_contact(&message).await?;

    let body = ContactEmail::for_message(&message).render()?;
    let receipt = notifier
        .dispatch(&OutboundMessage {
            to: notifier.operations_email().to_string(),
            subject: format!("[{}] {}", message.subject.label(), message.name),
            body,
        })
        .await?;

    tracing::info!(
        contact_id = %message.id,
        message_id = %receipt.message_id,
        "Contact message forwarded"
    );

    Ok(ContactResponse {
        ok: true,
        message_id: message.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::pricing::rates::{ApartmentSize, Neighborhood, PaintQuality};
    use crate::pricing::{PriceRange, QuoteRequest};
    use std::sync::Arc;

    fn quote_request(name: &str, email: &str) -> SendQuoteRequest {
        SendQuoteRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            preferred_window: "Weekends".to_string(),
            notes: "Two accent walls".to_string(),
            quote: QuoteRequest::new(
                ApartmentSize::OneBedroom,
                1,
                PaintQuality::Standard,
                true,
                Neighborhood::Bronx,
            ),
        }
    }

    #[tokio::test]
    async fn test_send_quote_stores_server_computed_price() {
        let inner = Arc::new(MemoryStore::default());
        let store = LeadStore::Memory(inner.clone());

        let response = send_quote(&store, &Notifier::default(), quote_request(" Ana ", "ana@example.com"))
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.price, PriceRange { low: 1223, high: 1480 });

        let leads = inner.leads().await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, response.lead_id);
        assert_eq!(leads[0].name, "Ana");
        assert_eq!(leads[0].price, response.price);
        assert_eq!(leads[0].preferred_window, PreferredWindow::Weekends);
    }

    #[tokio::test]
    async fn test_send_quote_requires_contact_details() {
        let store = LeadStore::Memory(Arc::new(MemoryStore::default()));
        let err = send_quote(&store, &Notifier::default(), quote_request("", "nope"))
            .await
            .unwrap_err();
        match err {
            AppError::Validation { errors, .. } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_quote_email_contains_range() {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: String::new(),
            preferred_window: PreferredWindow::WeekdaysPm,
            notes: String::new(),
            quote: QuoteRequest::default(),
            price: PriceRange { low: 1000, high: 1200 },
            created_at: Utc::now(),
        };

        let body = QuoteEmail::for_lead(&lead).render().unwrap();
        assert!(body.contains("Hi Sam,"));
        assert!(body.contains("$1000 - $1200 USD"));
        assert!(body.contains("Weekdays PM"));
        assert!(!body.contains("Notes:"));
    }

    #[tokio::test]
    async fn test_submit_contact_defaults_subject() {
        let inner = Arc::new(MemoryStore::default());
        let store = LeadStore::Memory(inner.clone());
        let request = ContactRequest {
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
            phone: String::new(),
            subject: "Complaint".to_string(),
            message: "Hello".to_string(),
        };

        let response = submit_contact(&store, &Notifier::default(), request).await.unwrap();
        assert!(response.ok);

        let contacts = inner.contacts().await;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].subject, ContactSubject::GeneralInquiry);
    }
}
