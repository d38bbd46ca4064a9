pub mod dto {
    pub mod dashboard;
}

pub mod error;

// Re-export commonly used items
pub use error::FetchError;

pub use dto::dashboard::{ConstructorWinsDto, DriverRankingDto, WinsOverTimeDto};
