//! The user's skill list.

use serde::{Deserialize, Serialize};

use crate::domain::OrderedSet;

/// Skill badges offered on the assessment screen.
pub const SKILL_SUGGESTIONS: [&str; 15] = [
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "Project Management",
    "Data Analysis",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Machine Learning",
    "AWS",
    "Git",
    "Agile",
    "Marketing",
];

/// How many unchosen suggestions are offered at once.
pub const VISIBLE_SKILL_SUGGESTIONS: usize = 8;

/// Ordered set of skills: insertion order, trimmed, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(OrderedSet);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill. Adding an existing skill is a no-op.
    pub fn add(&mut self, skill: &str) -> bool {
        self.0.insert(skill)
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        self.0.remove(skill)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last()
    }

    /// Up to [`VISIBLE_SKILL_SUGGESTIONS`] suggestions not yet chosen.
    pub fn visible_suggestions(&self) -> Vec<&'static str> {
        SKILL_SUGGESTIONS
            .iter()
            .copied()
            .filter(|s| !self.contains(s))
            .take(VISIBLE_SKILL_SUGGESTIONS)
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        SkillSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut skills = SkillSet::new();
        assert!(skills.add("Python"));
        assert!(!skills.add("Python"));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let skills: SkillSet = ["SQL"].into_iter().collect();
        assert!(skills.contains("SQL"));
        assert!(!skills.contains("sql"));
    }

    #[test]
    fn suggestions_skip_chosen_and_cap_at_eight() {
        let skills: SkillSet = ["Python", "React"].into_iter().collect();
        let visible = skills.visible_suggestions();
        assert_eq!(visible.len(), VISIBLE_SKILL_SUGGESTIONS);
        assert_eq!(visible[0], "JavaScript");
        assert!(!visible.contains(&"React"));
    }
}
