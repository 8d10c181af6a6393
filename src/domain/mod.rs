//! Domain types shared by the wizard, the catalogs and the front-ends.
//!
//! This module defines:
//!
//! - the onboarding draft (`ProfileDraft`, `Education`)
//! - the ordered skill set (`SkillSet`)
//! - resume metadata and its validation (`ResumeReference`, `validate_upload`)
//! - career catalog records and filters (`CareerRecord`, `Industry`, `IndustryFilter`)

pub mod career;
pub mod ordered;
pub mod profile;
pub mod resume;
pub mod skills;

pub use career::*;
pub use ordered::OrderedSet;
pub use profile::*;
pub use resume::*;
pub use skills::*;
