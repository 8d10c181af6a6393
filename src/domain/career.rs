//! Career catalog records and browser filters.

use std::str::FromStr;

use serde::Serialize;

/// Industry a career belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    #[serde(rename = "Creative Arts")]
    CreativeArts,
}

impl Industry {
    /// Filter options in the order the browser lists them.
    pub const ALL: [Industry; 5] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::CreativeArts,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::CreativeArts => "Creative Arts",
        }
    }
}

/// Industry selector of the career browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndustryFilter {
    #[default]
    All,
    Only(Industry),
}

impl IndustryFilter {
    pub fn matches(self, industry: Industry) -> bool {
        match self {
            IndustryFilter::All => true,
            IndustryFilter::Only(wanted) => wanted == industry,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IndustryFilter::All => "All Industries",
            IndustryFilter::Only(industry) => industry.display_name(),
        }
    }

    /// Step through `All`, then each industry in list order (wraps).
    pub fn next(self) -> Self {
        match self {
            IndustryFilter::All => IndustryFilter::Only(Industry::ALL[0]),
            IndustryFilter::Only(industry) => {
                let idx = Industry::ALL.iter().position(|i| *i == industry).unwrap_or(0);
                match Industry::ALL.get(idx + 1) {
                    Some(next) => IndustryFilter::Only(*next),
                    None => IndustryFilter::All,
                }
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            IndustryFilter::All => IndustryFilter::Only(Industry::ALL[Industry::ALL.len() - 1]),
            IndustryFilter::Only(industry) => {
                let idx = Industry::ALL.iter().position(|i| *i == industry).unwrap_or(0);
                if idx == 0 {
                    IndustryFilter::All
                } else {
                    IndustryFilter::Only(Industry::ALL[idx - 1])
                }
            }
        }
    }
}

impl FromStr for IndustryFilter {
    type Err = String;

    /// Accepts `all` or an industry name; case and `-`/`_`/space separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        if key == "all" {
            return Ok(IndustryFilter::All);
        }
        Industry::ALL
            .iter()
            .find(|i| i.display_name().replace(' ', "").to_ascii_lowercase() == key)
            .map(|i| IndustryFilter::Only(*i))
            .ok_or_else(|| {
                let names: Vec<&str> = Industry::ALL.iter().map(|i| i.display_name()).collect();
                format!("unknown industry '{s}' (expected all, {})", names.join(", "))
            })
    }
}

/// Goal toggle on the career browser. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalType {
    Quick,
    #[default]
    LongTerm,
    Freelance,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [GoalType::Quick, GoalType::LongTerm, GoalType::Freelance];

    pub fn display_name(self) -> &'static str {
        match self {
            GoalType::Quick => "Quick Entry",
            GoalType::LongTerm => "Long-Term Growth",
            GoalType::Freelance => "Freelance",
        }
    }

    pub fn next(self) -> Self {
        match self {
            GoalType::Quick => GoalType::LongTerm,
            GoalType::LongTerm => GoalType::Freelance,
            GoalType::Freelance => GoalType::Quick,
        }
    }
}

/// A career path entry of the static catalog.
///
/// `match_score` is a fixed catalog value; it is not derived from the user's skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub match_score: u8,
    pub growth_rate: &'static str,
    pub average_salary: &'static str,
    pub required_skills: &'static [&'static str],
    pub industry: Industry,
    pub description: &'static str,
}

/// Colour band of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Good,
    Fair,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 90 {
            ScoreBand::Strong
        } else if score >= 80 {
            ScoreBand::Good
        } else {
            ScoreBand::Fair
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_names() {
        assert_eq!("all".parse::<IndustryFilter>(), Ok(IndustryFilter::All));
        assert_eq!(
            "Creative Arts".parse::<IndustryFilter>(),
            Ok(IndustryFilter::Only(Industry::CreativeArts))
        );
        assert_eq!(
            "creative-arts".parse::<IndustryFilter>(),
            Ok(IndustryFilter::Only(Industry::CreativeArts))
        );
        assert!("Aerospace".parse::<IndustryFilter>().is_err());
    }

    #[test]
    fn filter_cycle_visits_every_option() {
        let mut f = IndustryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..=Industry::ALL.len() {
            seen.push(f);
            f = f.next();
        }
        assert_eq!(f, IndustryFilter::All);
        assert_eq!(seen.len(), 6);
        assert_eq!(IndustryFilter::All.prev().next(), IndustryFilter::All);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::of(92), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(90), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(85), ScoreBand::Good);
        assert_eq!(ScoreBand::of(79), ScoreBand::Fair);
    }
}
