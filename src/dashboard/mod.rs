//! Standalone dashboard pages and the links between them.
//!
//! Each page owns its local selection state over a static catalog. Nothing is
//! shared with the wizard, and entering a page always starts from a fresh state.

pub mod career_map;
pub mod discovery;
pub mod evolution;

use clap::ValueEnum;

pub use career_map::CareerMap;
pub use discovery::DiscoveryFeed;
pub use evolution::{EvolutionTab, SkillEvolution};

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Page {
    /// The onboarding → results wizard.
    #[default]
    Wizard,
    /// Swipeable career video feed.
    #[value(name = "discover")]
    Discovery,
    /// Learning-track roadmap.
    #[value(name = "map")]
    CareerMap,
    /// Skill metrics and crisis predictions.
    #[value(name = "evolution")]
    SkillEvolution,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Wizard => "CareerCraft",
            Page::Discovery => "Career Discovery",
            Page::CareerMap => "AI Career Map",
            Page::SkillEvolution => "Skill Evolution Dashboard",
        }
    }

    /// Target of the page's back arrow.
    pub fn back_link(self) -> Option<Page> {
        match self {
            Page::Wizard => None,
            Page::Discovery => Some(Page::Wizard),
            Page::CareerMap => Some(Page::Discovery),
            Page::SkillEvolution => Some(Page::CareerMap),
        }
    }

    /// Target of the page's primary call-to-action.
    ///
    /// From the skill dashboard this is "Start New Journey", which lands on a
    /// fresh wizard.
    pub fn forward_link(self) -> Page {
        match self {
            Page::Wizard => Page::Discovery,
            Page::Discovery => Page::CareerMap,
            Page::CareerMap => Page::SkillEvolution,
            Page::SkillEvolution => Page::Wizard,
        }
    }
}
