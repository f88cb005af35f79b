//! Notification bodies rendered with askama

use askama::Template;

use crate::models::{ContactMessage, Lead};
use crate::pricing::rates::CURRENCY;

/// Quote summary sent to the customer
#[derive(Template)]
#[template(path = "email/quote.txt")]
pub struct QuoteEmail<'a> {
    pub name: &'a str,
    pub apartment_size: &'a str,
    pub room_count: i64,
    pub paint_quality: &'a str,
    pub eco_friendly: bool,
    pub neighborhood: &'a str,
    pub preferred_window: &'a str,
    pub notes: &'a str,
    pub low: u64,
    pub high: u64,
    pub currency: &'a str,
}

impl<'a> QuoteEmail<'a> {
    pub fn for_lead(lead: &'a Lead) -> Self {
        Self {
            name: &lead.name,
            apartment_size: &lead.quote.apartment_size,
            room_count: lead.quote.room_count.max(0),
            paint_quality: &lead.quote.paint_quality,
            eco_friendly: lead.quote.eco_friendly,
            neighborhood: &lead.quote.neighborhood,
            preferred_window: lead.preferred_window.label(),
            notes: &lead.notes,
            low: lead.price.low,
            high: lead.price.high,
            currency: CURRENCY,
        }
    }
}

/// Contact message forwarded to operations
#[derive(Template)]
#[template(path = "email/contact.txt")]
pub struct ContactEmail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> ContactEmail<'a> {
    pub fn for_message(message: &'a ContactMessage) -> Self {
        Self {
            name: &message.name,
            email: &message.email,
            phone: &message.phone,
            subject: message.subject.label(),
            message: &message.message,
        }
    }
}
