pub mod config;
pub mod export;
pub mod hazard;
pub mod plan;
pub mod render;
pub mod risk;
pub mod session;

pub use config::{DAET, SimulationParams};
pub use hazard::{HazardRecord, HazardType, random_hazard};
pub use plan::{PlanItem, generate_plan};
pub use risk::{RiskBand, RiskReport, analyze};
pub use session::Session;
