use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for one row of the top-drivers ranking.
///
/// Field names match the wire JSON exactly; the backend may attach extra
/// columns (dob, url) which are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DriverRankingDto {
    pub id: i64,
    pub full_name: String,
    pub nationality: String,
    #[validate(range(min = 0))]
    pub number_of_wins: i64,
}

/// Data Transfer Object for a constructor's aggregated win count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ConstructorWinsDto {
    pub constructor_name: String,
    #[validate(range(min = 0))]
    pub number_of_wins: i64,
}

/// Data Transfer Object for one (driver, year, wins) point of the
/// wins-over-time series. The backend returns a flat array of these;
/// grouping per driver happens client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WinsOverTimeDto {
    pub driver_name: String,
    pub year: i32,
    #[validate(range(min = 0))]
    pub wins: i64,
}
