//! Lead and contact models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::{PriceRange, QuoteRequest};

/// When the customer would like the crew to come by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PreferredWindow {
    #[default]
    #[serde(rename = "Weekdays AM")]
    WeekdaysAm,
    #[serde(rename = "Weekdays PM")]
    WeekdaysPm,
    Weekends,
}

impl PreferredWindow {
    pub const ALL: [PreferredWindow; 3] = [
        PreferredWindow::WeekdaysAm,
        PreferredWindow::WeekdaysPm,
        PreferredWindow::Weekends,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreferredWindow::WeekdaysAm => "Weekdays AM",
            PreferredWindow::WeekdaysPm => "Weekdays PM",
            PreferredWindow::Weekends => "Weekends",
        }
    }

    /// Unknown labels fall back to the form default
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|window| window.label() == label)
            .unwrap_or_default()
    }
}

/// Contact form topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContactSubject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Quote Request")]
    QuoteRequest,
    #[serde(rename = "Schedule Service")]
    ScheduleService,
    Support,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::GeneralInquiry,
        ContactSubject::QuoteRequest,
        ContactSubject::ScheduleService,
        ContactSubject::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactSubject::GeneralInquiry => "General Inquiry",
            ContactSubject::QuoteRequest => "Quote Request",
            ContactSubject::ScheduleService => "Schedule Service",
            ContactSubject::Support => "Support",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|subject| subject.label() == label)
            .unwrap_or_default()
    }
}

/// A "send me my quote" submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_window: PreferredWindow,
    pub notes: String,
    pub quote: QuoteRequest,
    /// Estimate as computed when the lead was submitted
    pub price: PriceRange,
    pub created_at: DateTime<Utc>,
}

/// A contact form submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: ContactSubject,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
