//! Static rate tables for quote pricing.
//!
//! Form fields arrive as free-form labels. Each `*_for` lookup resolves a
//! label against its table and falls back to a neutral value when the label
//! is not recognized, so pricing never fails on bad input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Currency every quote is expressed in
pub const CURRENCY: &str = "USD";

/// Charge per room beyond base coverage
pub const ROOM_RATE: Decimal = dec!(150);

/// Low-VOC paint surcharge, applied multiplicatively
pub const ECO_SURCHARGE: Decimal = dec!(0.12);

/// Lower bound of the estimate relative to the subtotal
pub const LOW_FACTOR: Decimal = dec!(0.95);

/// Upper bound of the estimate relative to the subtotal
pub const HIGH_FACTOR: Decimal = dec!(1.15);

/// Apartment size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ApartmentSize {
    #[serde(rename = "Studio")]
    Studio,
    #[default]
    #[serde(rename = "1BR")]
    OneBedroom,
    #[serde(rename = "2BR")]
    TwoBedroom,
    #[serde(rename = "3BR+")]
    ThreePlusBedroom,
}

impl ApartmentSize {
    pub const ALL: [ApartmentSize; 4] = [
        ApartmentSize::Studio,
        ApartmentSize::OneBedroom,
        ApartmentSize::TwoBedroom,
        ApartmentSize::ThreePlusBedroom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApartmentSize::Studio => "Studio",
            ApartmentSize::OneBedroom => "1BR",
            ApartmentSize::TwoBedroom => "2BR",
            ApartmentSize::ThreePlusBedroom => "3BR+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }

    /// Base price before rooms and multipliers
    pub fn base_rate(self) -> Decimal {
        match self {
            ApartmentSize::Studio => dec!(699),
            ApartmentSize::OneBedroom => dec!(999),
            ApartmentSize::TwoBedroom => dec!(1399),
            ApartmentSize::ThreePlusBedroom => dec!(1799),
        }
    }
}

/// Paint quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PaintQuality {
    #[default]
    Standard,
    Premium,
    Designer,
}

impl PaintQuality {
    pub const ALL: [PaintQuality; 3] = [
        PaintQuality::Standard,
        PaintQuality::Premium,
        PaintQuality::Designer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaintQuality::Standard => "Standard",
            PaintQuality::Premium => "Premium",
            PaintQuality::Designer => "Designer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quality| quality.label() == label)
    }

    pub fn multiplier(self) -> Decimal {
        match self {
            PaintQuality::Standard => Decimal::ONE,
            PaintQuality::Premium => dec!(1.18),
            PaintQuality::Designer => dec!(1.35),
        }
    }
}

/// Service district
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Neighborhood {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
    Harlem,
    #[serde(rename = "Upper East Side")]
    UpperEastSide,
    #[serde(rename = "Upper West Side")]
    UpperWestSide,
    Williamsburg,
    Bushwick,
    #[serde(rename = "Long Island City")]
    LongIslandCity,
    Astoria,
    #[serde(rename = "Bed-Stuy")]
    BedStuy,
    #[serde(rename = "Park Slope")]
    ParkSlope,
    #[serde(rename = "Washington Heights")]
    WashingtonHeights,
}

impl Neighborhood {
    /// Districts in the order the quote form lists them
    pub const ALL: [Neighborhood; 15] = [
        Neighborhood::Manhattan,
        Neighborhood::Brooklyn,
        Neighborhood::Queens,
        Neighborhood::Bronx,
        Neighborhood::StatenIsland,
        Neighborhood::Harlem,
        Neighborhood::UpperEastSide,
        Neighborhood::UpperWestSide,
        Neighborhood::Williamsburg,
        Neighborhood::Bushwick,
        Neighborhood::LongIslandCity,
        Neighborhood::Astoria,
        Neighborhood::BedStuy,
        Neighborhood::ParkSlope,
        Neighborhood::WashingtonHeights,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::Manhattan => "Manhattan",
            Neighborhood::Brooklyn => "Brooklyn",
            Neighborhood::Queens => "Queens",
            Neighborhood::Bronx => "Bronx",
            Neighborhood::StatenIsland => "Staten Island",
            Neighborhood::Harlem => "Harlem",
            Neighborhood::UpperEastSide => "Upper East Side",
            Neighborhood::UpperWestSide => "Upper West Side",
            Neighborhood::Williamsburg => "Williamsburg",
            Neighborhood::Bushwick => "Bushwick",
            Neighborhood::LongIslandCity => "Long Island City",
            Neighborhood::Astoria => "Astoria",
            Neighborhood::BedStuy => "Bed-Stuy",
            Neighborhood::ParkSlope => "Park Slope",
            Neighborhood::WashingtonHeights => "Washington Heights",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hood| hood.label() == label)
    }

    /// Local cost-of-service factor
    pub fn adjustment(self) -> Decimal {
        match self {
            Neighborhood::Manhattan => dec!(1.15),
            Neighborhood::Brooklyn => dec!(1.07),
            Neighborhood::Queens => dec!(1.04),
            Neighborhood::Bronx => Decimal::ONE,
            Neighborhood::StatenIsland => Decimal::ONE,
            Neighborhood::Harlem => dec!(1.02),
            Neighborhood::UpperEastSide => dec!(1.2),
            Neighborhood::UpperWestSide => dec!(1.15),
            Neighborhood::Williamsburg => dec!(1.1),
            Neighborhood::Bushwick => dec!(1.05),
            Neighborhood::LongIslandCity => dec!(1.08),
            Neighborhood::Astoria => dec!(1.05),
            Neighborhood::BedStuy => dec!(1.04),
            Neighborhood::ParkSlope => dec!(1.12),
            Neighborhood::WashingtonHeights => dec!(1.02),
        }
    }
}

/// Base rate for a size label; unknown labels price as 1BR.
pub fn base_rate_for(label: &str) -> Decimal {
    ApartmentSize::from_label(label)
        .unwrap_or_default()
        .base_rate()
}

/// Quality multiplier for a label; unknown labels are neutral.
pub fn quality_multiplier_for(label: &str) -> Decimal {
    PaintQuality::from_label(label)
        .map(PaintQuality::multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Neighborhood factor for a label; unknown labels are neutral.
pub fn neighborhood_adjustment_for(label: &str) -> Decimal {
    Neighborhood::from_label(label)
        .map(Neighborhood::adjustment)
        .unwrap_or(Decimal::ONE)
}

/// Multiplier contributed by the eco flag
pub fn eco_multiplier(eco_friendly: bool) -> Decimal {
    if eco_friendly {
        Decimal::ONE + ECO_SURCHARGE
    } else {
        Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for size in ApartmentSize::ALL {
            assert_eq!(ApartmentSize::from_label(size.label()), Some(size));
        }
        for quality in PaintQuality::ALL {
            assert_eq!(PaintQuality::from_label(quality.label()), Some(quality));
        }
        for hood in Neighborhood::ALL {
            assert_eq!(Neighborhood::from_label(hood.label()), Some(hood));
        }
    }

    #[test]
    fn test_base_rate_falls_back_to_one_bedroom() {
        assert_eq!(base_rate_for("Studio"), dec!(699));
        assert_eq!(base_rate_for("3BR+"), dec!(1799));
        assert_eq!(base_rate_for("Penthouse"), dec!(999));
        assert_eq!(base_rate_for(""), dec!(999));
    }

    #[test]
    fn test_lookups_are_case_sensitive() {
        // Labels must match the form values exactly
        assert_eq!(ApartmentSize::from_label("studio"), None);
        assert_eq!(neighborhood_adjustment_for("manhattan"), Decimal::ONE);
    }

    #[test]
    fn test_unknown_quality_and_neighborhood_are_neutral() {
        assert_eq!(quality_multiplier_for("Gold"), Decimal::ONE);
        assert_eq!(neighborhood_adjustment_for("Hoboken"), Decimal::ONE);
        assert_eq!(neighborhood_adjustment_for("Upper East Side"), dec!(1.2));
    }

    #[test]
    fn test_eco_multiplier() {
        assert_eq!(eco_multiplier(true), dec!(1.12));
        assert_eq!(eco_multiplier(false), dec!(1));
    }

    #[test]
    fn test_neighborhood_serializes_as_label() {
        let json = serde_json::to_string(&Neighborhood::BedStuy).unwrap();
        assert_eq!(json, "\"Bed-Stuy\"");
        let json = serde_json::to_string(&ApartmentSize::ThreePlusBedroom).unwrap();
        assert_eq!(json, "\"3BR+\"");
    }
}
