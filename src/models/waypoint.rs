use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::coordinates::{dms_to_decimal, CoordinateRole, DecimalPosition};

/// One row of the VFR waypoint table, coordinates still in packed DMS form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WaypointRecord {
    #[serde(rename = "Waypoint")]
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(rename = "State")]
    #[validate(length(min = 1))]
    pub state: String,

    #[serde(rename = "Code")]
    #[validate(length(min = 1))]
    pub code: String,

    #[serde(rename = "Latitude")]
    #[validate(length(min = 1))]
    pub latitude: String,

    #[serde(rename = "Longitude")]
    #[validate(length(min = 1))]
    pub longitude: String,
}

impl WaypointRecord {
    pub fn new(
        name: String,
        state: String,
        code: String,
        latitude: String,
        longitude: String,
    ) -> Self {
        Self {
            name,
            state,
            code,
            latitude,
            longitude,
        }
    }

    pub fn coordinate_token(&self, role: CoordinateRole) -> &str {
        match role {
            CoordinateRole::Latitude => &self.latitude,
            CoordinateRole::Longitude => &self.longitude,
        }
    }

    /// Decimal degrees for one axis, or None with a warning naming this waypoint
    pub fn normalize(&self, role: CoordinateRole) -> Option<f64> {
        let token = self.coordinate_token(role);
        match dms_to_decimal(token) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    waypoint = %self.name,
                    code = %self.code,
                    %role,
                    token,
                    "Skipping invalid coordinate: {}",
                    e
                );
                None
            }
        }
    }

    /// Both axes normalized; either failure drops the whole position
    pub fn decimal_position(&self) -> Option<DecimalPosition> {
        let latitude = self.normalize(CoordinateRole::Latitude);
        let longitude = self.normalize(CoordinateRole::Longitude);

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(DecimalPosition::new(latitude, longitude)),
            _ => None,
        }
    }
}
