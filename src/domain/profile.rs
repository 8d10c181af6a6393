//! Onboarding draft: name, education level and interests.

use serde::{Deserialize, Serialize};

use crate::domain::OrderedSet;
use crate::error::ValidationError;

/// Interest badges offered on the onboarding screen.
pub const INTEREST_SUGGESTIONS: [&str; 5] = [
    "Technology",
    "Healthcare",
    "Creative Arts",
    "Finance",
    "Education",
];

/// Highest education level (fixed option list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Associate's Degree")]
    Associate,
    #[serde(rename = "Bachelor's Degree")]
    Bachelor,
    #[serde(rename = "Master's Degree")]
    Master,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Other")]
    Other,
}

impl Education {
    pub const ALL: [Education; 6] = [
        Education::HighSchool,
        Education::Associate,
        Education::Bachelor,
        Education::Master,
        Education::Phd,
        Education::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Associate => "Associate's Degree",
            Education::Bachelor => "Bachelor's Degree",
            Education::Master => "Master's Degree",
            Education::Phd => "PhD",
            Education::Other => "Other",
        }
    }

    /// Next option in list order (wraps).
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option in list order (wraps).
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|e| *e == self).unwrap_or(0)
    }
}

/// Data collected on the onboarding screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub education: Option<Education>,
    pub interests: OrderedSet,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, education: Option<Education>) -> Self {
        Self {
            name: name.into(),
            education,
            interests: OrderedSet::new(),
        }
    }

    /// Check the required fields.
    ///
    /// Name must be non-blank and an education level must be selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField("name"));
        }
        if self.education.is_none() {
            return Err(ValidationError::MissingRequiredField("education"));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn add_interest(&mut self, interest: &str) -> bool {
        self.interests.insert(interest)
    }

    pub fn remove_interest(&mut self, interest: &str) -> bool {
        self.interests.remove(interest)
    }

    /// Suggestions not yet chosen, in suggestion order.
    pub fn remaining_suggestions(&self) -> Vec<&'static str> {
        INTEREST_SUGGESTIONS
            .iter()
            .copied()
            .filter(|s| !self.interests.contains(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_missing() {
        let draft = ProfileDraft::new("   ", Some(Education::Bachelor));
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("name"))
        );
    }

    #[test]
    fn missing_education_is_reported() {
        let draft = ProfileDraft::new("Asha", None);
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("education"))
        );
    }

    #[test]
    fn education_cycles_through_all_options() {
        let mut e = Education::HighSchool;
        for _ in 0..Education::ALL.len() {
            e = e.next();
        }
        assert_eq!(e, Education::HighSchool);
        assert_eq!(Education::HighSchool.prev(), Education::Other);
    }

    #[test]
    fn chosen_interests_leave_suggestions() {
        let mut draft = ProfileDraft::default();
        assert!(draft.add_interest("Finance"));
        assert!(!draft.add_interest("Finance"));
        assert!(!draft.remaining_suggestions().contains(&"Finance"));
        assert_eq!(draft.remaining_suggestions().len(), 4);
    }
}
