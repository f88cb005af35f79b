//! Request DTOs for pricing API endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use super::rates::{ApartmentSize, Neighborhood, PaintQuality};

/// Customer input for estimating a painting job.
///
/// Enumerated fields stay as the raw form labels; the pricing engine
/// resolves them with fallbacks instead of rejecting unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default = "default_size", alias = "size")]
    pub apartment_size: String,
    /// Rooms beyond base coverage; negative values are clamped to zero
    #[serde(
        default = "default_room_count",
        alias = "rooms",
        deserialize_with = "deserialize_room_count"
    )]
    pub room_count: i64,
    #[serde(default = "default_quality")]
    pub paint_quality: String,
    #[serde(default = "default_eco_friendly")]
    pub eco_friendly: bool,
    #[serde(default = "default_neighborhood")]
    pub neighborhood: String,
}

fn default_size() -> String {
    ApartmentSize::OneBedroom.label().to_string()
}

fn default_room_count() -> i64 {
    1
}

/// Number inputs post integers, floats (`2.0`) or numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoomCountInput {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

/// Accept any numeric room count; fractions are truncated and values past
/// the `i64` range saturate.
fn deserialize_room_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RoomCountInput::deserialize(deserializer)? {
        RoomCountInput::Whole(n) => return Ok(n),
        RoomCountInput::Fractional(n) => n,
        RoomCountInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            text.parse::<f64>().map_err(|_| {
                serde::de::Error::custom(format!("roomCount: not a number: {:?}", text))
            })?
        }
    };

    if value.is_nan() {
        return Err(serde::de::Error::custom("roomCount: not a number"));
    }
    Ok(value.trunc() as i64)
}

fn default_quality() -> String {
    PaintQuality::Standard.label().to_string()
}

fn default_eco_friendly() -> bool {
    true
}

fn default_neighborhood() -> String {
    Neighborhood::Manhattan.label().to_string()
}

impl QuoteRequest {
    /// Build a request from typed values
    pub fn new(
        size: ApartmentSize,
        room_count: i64,
        quality: PaintQuality,
        eco_friendly: bool,
        neighborhood: Neighborhood,
    ) -> Self {
        Self {
            apartment_size: size.label().to_string(),
            room_count,
            paint_quality: quality.label().to_string(),
            eco_friendly,
            neighborhood: neighborhood.label().to_string(),
        }
    }
}

impl Default for QuoteRequest {
    /// Same starting values as the quote form
    fn default() -> Self {
        Self {
            apartment_size: default_size(),
            room_count: default_room_count(),
            paint_quality: default_quality(),
            eco_friendly: default_eco_friendly(),
            neighborhood: default_neighborhood(),
        }
    }
}
