//! Published service packages, add-ons and the rate card.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::rates::{
    ApartmentSize, Neighborhood, PaintQuality, CURRENCY, ECO_SURCHARGE, HIGH_FACTOR, LOW_FACTOR,
    ROOM_RATE,
};
use super::responses::{MoneyResponse, RateCardResponse, RateEntry};

/// How an add-on price is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Flat,
    PerRoom,
    PerWall,
    PerHour,
    /// Percentage of the job subtotal
    Percent,
}

/// Fixed-price package tier
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: &'static str,
    pub price: MoneyResponse,
    pub subtitle: &'static str,
    pub features: Vec<&'static str>,
    pub popular: bool,
}

/// Optional extra service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub unit: PriceUnit,
    pub description: &'static str,
}

fn usd(amount: Decimal) -> MoneyResponse {
    MoneyResponse {
        amount,
        currency: CURRENCY.to_string(),
    }
}

/// Package tiers, cheapest first
pub fn packages() -> Vec<Package> {
    vec![
        Package {
            name: "Essential",
            price: usd(dec!(699)),
            subtitle: "Perfect for studios and small spaces",
            features: vec![
                "Single room or studio apartment",
                "Premium standard paint",
                "Professional prep work",
                "Clean lines and edges",
                "Furniture protection",
                "Same-day completion",
                "1-year warranty",
            ],
            popular: false,
        },
        Package {
            name: "Premium",
            price: usd(dec!(1299)),
            subtitle: "Most popular for 1-2 bedroom apartments",
            features: vec![
                "Up to 2 bedrooms + living area",
                "Premium paint with primer",
                "Detailed trim and molding work",
                "Minor wall repairs included",
                "Eco-friendly paint options",
                "2-day completion",
                "2-year warranty",
                "Free color consultation",
            ],
            popular: true,
        },
        Package {
            name: "Luxury",
            price: usd(dec!(2199)),
            subtitle: "Complete transformation for larger spaces",
            features: vec![
                "Entire apartment (up to 3BR+)",
                "Designer paint collection",
                "Specialty finishes available",
                "Crown molding and trim details",
                "Minor drywall repair",
                "Accent walls and textures",
                "3-day completion",
                "5-year warranty",
                "Design consultation included",
            ],
            popular: false,
        },
    ]
}

pub fn add_ons() -> Vec<AddOn> {
    vec![
        AddOn {
            name: "Ceiling Painting",
            price: dec!(150),
            unit: PriceUnit::PerRoom,
            description: "Professional ceiling coverage",
        },
        AddOn {
            name: "Accent Wall",
            price: dec!(75),
            unit: PriceUnit::PerWall,
            description: "Single feature wall in contrasting color",
        },
        AddOn {
            name: "Eco-Friendly Paint",
            price: ECO_SURCHARGE * dec!(100),
            unit: PriceUnit::Percent,
            description: "Low-VOC, environmentally safe options",
        },
        AddOn {
            name: "Same-Day Service",
            price: dec!(200),
            unit: PriceUnit::Flat,
            description: "Rush completion for urgent projects",
        },
        AddOn {
            name: "Color Consultation",
            price: dec!(100),
            unit: PriceUnit::Flat,
            description: "Professional color matching and advice",
        },
        AddOn {
            name: "Minor Repairs",
            price: dec!(50),
            unit: PriceUnit::PerHour,
            description: "Small holes, cracks, and touch-ups",
        },
    ]
}

/// Every rate the estimator uses, in form order
pub fn rate_card() -> RateCardResponse {
    RateCardResponse {
        currency: CURRENCY.to_string(),
        room_rate: ROOM_RATE,
        eco_surcharge: ECO_SURCHARGE,
        low_factor: LOW_FACTOR,
        high_factor: HIGH_FACTOR,
        base_rates: ApartmentSize::ALL
            .into_iter()
            .map(|size| RateEntry::new(size.label(), size.base_rate()))
            .collect(),
        quality_multipliers: PaintQuality::ALL
            .into_iter()
            .map(|quality| RateEntry::new(quality.label(), quality.multiplier()))
            .collect(),
        neighborhood_adjustments: Neighborhood::ALL
            .into_iter()
            .map(|hood| RateEntry::new(hood.label(), hood.adjustment()))
            .collect(),
    }
}
