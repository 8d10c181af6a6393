//! Skill evolution page: three tabs over static analytics.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EvolutionTab {
    #[default]
    Skills,
    Predictions,
    Insights,
}

impl EvolutionTab {
    pub const ALL: [EvolutionTab; 3] = [
        EvolutionTab::Skills,
        EvolutionTab::Predictions,
        EvolutionTab::Insights,
    ];

    pub fn title(self) -> &'static str {
        match self {
            EvolutionTab::Skills => "Skills Evolution",
            EvolutionTab::Predictions => "Crisis Predictions",
            EvolutionTab::Insights => "AI Insights",
        }
    }

    pub fn index(self) -> usize {
        match self {
            EvolutionTab::Skills => 0,
            EvolutionTab::Predictions => 1,
            EvolutionTab::Insights => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillEvolution {
    tab: EvolutionTab,
}

impl SkillEvolution {
    pub fn tab(&self) -> EvolutionTab {
        self.tab
    }

    pub fn select(&mut self, tab: EvolutionTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        let all = EvolutionTab::ALL;
        self.tab = all[(self.tab.index() + 1) % all.len()];
    }

    pub fn prev_tab(&mut self) {
        let all = EvolutionTab::ALL;
        self.tab = all[(self.tab.index() + all.len() - 1) % all.len()];
    }
}
