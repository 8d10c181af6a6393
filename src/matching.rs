//! Career browser filtering and skill highlighting.
//!
//! There is no scoring here: `match_score` comes straight from the catalog.
//! Skill matches only drive badge emphasis.

use serde::Serialize;

use crate::domain::{CareerRecord, IndustryFilter, SkillSet};

/// Required skills shown per card before collapsing into `+N more`.
pub const VISIBLE_REQUIRED_SKILLS: usize = 4;

/// Records passing the industry filter, in catalog order.
pub fn filter_paths<'a>(catalog: &'a [CareerRecord], filter: IndustryFilter) -> Vec<&'a CareerRecord> {
    catalog.iter().filter(|c| filter.matches(c.industry)).collect()
}

/// Exact, case-sensitive membership of a required skill in the user's skills.
pub fn is_skill_matched(skill: &str, skills: &SkillSet) -> bool {
    skills.contains(skill)
}

/// A required skill with its highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillBadge<'a> {
    pub skill: &'a str,
    pub matched: bool,
}

/// Badges for the first [`VISIBLE_REQUIRED_SKILLS`] required skills, plus the hidden count.
pub fn skill_badges<'a>(record: &'a CareerRecord, skills: &SkillSet) -> (Vec<SkillBadge<'a>>, usize) {
    let badges = record
        .required_skills
        .iter()
        .take(VISIBLE_REQUIRED_SKILLS)
        .map(|&skill| SkillBadge {
            skill,
            matched: is_skill_matched(skill, skills),
        })
        .collect();
    let hidden = record
        .required_skills
        .len()
        .saturating_sub(VISIBLE_REQUIRED_SKILLS);
    (badges, hidden)
}

/// Number of a record's required skills the user already has.
pub fn matched_count(record: &CareerRecord, skills: &SkillSet) -> usize {
    record
        .required_skills
        .iter()
        .filter(|s| is_skill_matched(s, skills))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CAREER_PATHS;
    use crate::domain::Industry;

    #[test]
    fn technology_filter_keeps_catalog_order() {
        let tech = filter_paths(&CAREER_PATHS, IndustryFilter::Only(Industry::Technology));
        let ids: Vec<&str> = tech.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["data-scientist", "product-manager", "software-engineer"]);
        assert!(tech.iter().all(|c| c.industry == Industry::Technology));
    }

    #[test]
    fn all_filter_returns_full_catalog() {
        let all = filter_paths(&CAREER_PATHS, IndustryFilter::All);
        assert_eq!(all.len(), CAREER_PATHS.len());
        for (got, want) in all.iter().zip(CAREER_PATHS.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        assert!(filter_paths(&CAREER_PATHS, IndustryFilter::Only(Industry::Healthcare)).is_empty());
    }

    #[test]
    fn badges_highlight_exact_matches_only() {
        let skills: SkillSet = ["Python", "sql"].into_iter().collect();
        let (badges, hidden) = skill_badges(&CAREER_PATHS[0], &skills);
        assert_eq!(hidden, 0);
        assert!(badges[0].matched);
        assert!(!badges[3].matched, "SQL vs sql must not match");
        assert_eq!(matched_count(&CAREER_PATHS[0], &skills), 1);
    }

    #[test]
    fn match_score_ignores_skills() {
        let before = CAREER_PATHS[3].match_score;
        let skills: SkillSet = CAREER_PATHS[3].required_skills.iter().copied().collect();
        assert_eq!(matched_count(&CAREER_PATHS[3], &skills), 4);
        assert_eq!(CAREER_PATHS[3].match_score, before);
    }
}
