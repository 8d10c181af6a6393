//! Hard-coded reference datasets.
//!
//! Every table here is immutable and compiled into the binary; pages and the
//! wizard only ever read them.

pub mod careers;
pub mod discovery;
pub mod evolution;
pub mod roadmap;

pub use careers::CAREER_PATHS;
pub use discovery::{CareerVideo, CAREER_VIDEOS};
pub use evolution::{
    CrisisPrediction, Impact, RiskLevel, SkillMetric, Trend, CRISIS_PREDICTIONS, LEARNING_PATH,
    MARKET_TRENDS, SKILL_GAPS, SKILL_METRICS,
};
pub use roadmap::{Difficulty, Milestone, Track, TrackId, TRACKS};
