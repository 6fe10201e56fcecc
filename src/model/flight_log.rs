use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{FlightRule, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::api::not_blank;

#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FlightLogRequestDto {
    pub aircraft_id: Uuid,
    pub date: NaiveDate,
    #[validate(custom(function = "not_blank"))]
    pub departure_airport: String,
    #[validate(custom(function = "not_blank"))]
    pub arrival_airport: String,
    #[validate(range(min = 0.0))]
    pub total_flight_time: f64,
    #[validate(range(min = 0.0))]
    pub pic_time: f64,
    #[validate(range(min = 0.0))]
    pub sic_time: f64,
    #[validate(range(min = 0.0))]
    pub dual_received_time: f64,
    #[validate(range(min = 0.0))]
    pub solo_time: f64,
    #[validate(range(min = 0.0))]
    pub night_time: f64,
    #[validate(range(min = 0.0))]
    pub ifr_time: f64,
    #[validate(range(min = 0.0))]
    pub cross_country_time: f64,
    #[validate(range(min = 0))]
    pub day_landings: i32,
    #[validate(range(min = 0))]
    pub night_landings: i32,
    pub weather_condition: WeatherCondition,
    pub flight_rule: FlightRule,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub approach_types: Vec<String>,
    #[serde(default)]
    pub simulator_time: Option<f64>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightLogDto {
    pub id: Uuid,
    pub pilot_id: Uuid,
    pub pilot_name: String,
    pub aircraft_id: Uuid,
    pub aircraft_tail_number: String,
    pub aircraft_model: String,
    pub date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub total_flight_time: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub dual_received_time: f64,
    pub solo_time: f64,
    pub night_time: f64,
    pub ifr_time: f64,
    pub cross_country_time: f64,
    pub day_landings: i32,
    pub night_landings: i32,
    pub weather_condition: WeatherCondition,
    pub flight_rule: FlightRule,
    pub remarks: Option<String>,
    pub approach_types: Vec<String>,
    pub simulator_time: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PilotStatsDto {
    pub total_time: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub night_time: f64,
    pub ifr_time: f64,
    pub cross_country_time: f64,
    pub dual_received: f64,
    pub solo_time: f64,
    pub total_landings: i64,
    pub night_landings: i64,
    pub last30_days: f64,
    pub last90_days: f64,
    pub last_year: f64,
    /// Hours per aircraft model, keyed in the order the models were first flown
    /// (most recent first).
    #[serde(with = "ordered_hours")]
    #[schema(value_type = HashMap<String, f64>)]
    pub by_aircraft_category: Vec<(String, f64)>,
}

/// Serializes `(key, hours)` pairs as a JSON object without losing their order.
mod ordered_hours {
    use serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserializer, Serializer,
    };
    use std::fmt;

    pub fn serialize<S: Serializer>(pairs: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, hours) in pairs {
            map.serialize_entry(key, hours)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, f64)>, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, f64)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of aircraft model to hours")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, f64>()? {
                    pairs.push(entry);
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
