pub mod models {
    pub mod charts;
    pub mod dashboard;
    pub mod format;
    pub mod map;
}

pub mod dto {
    pub mod analytics;
    pub mod auth;
    pub mod common;
    pub mod user;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export DTOs
pub use dto::{
    analytics::{
        MapPoint, DensityRanking, WealthCorrelation, InternetCorrelation, RegionRoles,
        RoleBreakdown, SubregionDominance, MarketGap, YouthCorrelation,
    },
    auth::{LoginRequest, RegisterRequest, RegisterResponse, SessionUser, TokenResponse},
    common::{ApiStatus, ErrorResponse, MessageResponse},
    user::{UpdateProfileRequest, UserProfile},
};

// Re-export view models
pub use models::{
    charts::{ScatterMetric, ScatterPoint},
    dashboard::{DensityRow, GapCard, YouthSummary},
    map::MapMarker,
};
