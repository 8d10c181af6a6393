//! The onboarding → skills → career paths → results flow.
//!
//! [`Wizard`] owns the active screen and every draft collected so far. Each
//! transition is a single synchronous state replacement: it either succeeds
//! and moves exactly one screen, or fails with a [`ValidationError`] and leaves
//! the wizard untouched.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::careers;
use crate::domain::{CareerRecord, ProfileDraft, ResumeReference, SkillSet};
use crate::error::ValidationError;

/// Path id used by the browser's generic "choose a path" action.
pub const GENERIC_PATH_ID: &str = "selected";

/// Active wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Onboarding,
    SkillAssessment,
    CareerPaths,
    Results,
}

impl Screen {
    /// Linear order of the flow.
    pub const ORDER: [Screen; 4] = [
        Screen::Onboarding,
        Screen::SkillAssessment,
        Screen::CareerPaths,
        Screen::Results,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Screen::Onboarding => "Onboarding",
            Screen::SkillAssessment => "Skill Assessment",
            Screen::CareerPaths => "Career Paths",
            Screen::Results => "Results",
        }
    }

    /// 1-based position in [`Screen::ORDER`].
    pub fn step(self) -> usize {
        match self {
            Screen::Onboarding => 1,
            Screen::SkillAssessment => 2,
            Screen::CareerPaths => 3,
            Screen::Results => 4,
        }
    }

    /// Screen reached by `back()`. Onboarding and Results have none.
    pub fn previous(self) -> Option<Screen> {
        match self {
            Screen::Onboarding | Screen::Results => None,
            Screen::SkillAssessment => Some(Screen::Onboarding),
            Screen::CareerPaths => Some(Screen::SkillAssessment),
        }
    }
}

/// Wizard controller: current screen plus accumulated drafts.
#[derive(Debug, Clone)]
pub struct Wizard {
    screen: Screen,
    profile: ProfileDraft,
    skills: SkillSet,
    resume: Option<ResumeReference>,
    chosen_path: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            screen: Screen::Onboarding,
            profile: ProfileDraft::default(),
            skills: SkillSet::new(),
            resume: None,
            chosen_path: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> &ProfileDraft {
        &self.profile
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn resume(&self) -> Option<&ResumeReference> {
        self.resume.as_ref()
    }

    pub fn chosen_path(&self) -> Option<&str> {
        self.chosen_path.as_deref()
    }

    /// Catalog record of the chosen path, if the id names one.
    pub fn chosen_career(&self) -> Option<&'static CareerRecord> {
        self.chosen_path.as_deref().and_then(careers::find)
    }

    /// Store the onboarding draft and move to skill assessment.
    pub fn complete_onboarding(&mut self, draft: ProfileDraft) -> Result<(), ValidationError> {
        self.expect_screen(Screen::Onboarding, "complete onboarding")?;
        draft.validate()?;
        info!(
            education = draft.education.map(|e| e.display_name()),
            interests = draft.interests.len(),
            "onboarding completed"
        );
        self.profile = draft;
        self.advance_to(Screen::SkillAssessment);
        Ok(())
    }

    /// Store skills and the optional resume, then move to the career browser.
    ///
    /// At least one skill or a resume is required.
    pub fn complete_skill_assessment(
        &mut self,
        skills: SkillSet,
        resume: Option<ResumeReference>,
    ) -> Result<(), ValidationError> {
        self.expect_screen(Screen::SkillAssessment, "complete skill assessment")?;
        if skills.is_empty() && resume.is_none() {
            debug!("skill assessment rejected: no skills and no resume");
            return Err(ValidationError::NoSkillsOrResume);
        }
        info!(
            skills = skills.len(),
            resume = resume.as_ref().map(|r| r.name.as_str()),
            "skill assessment completed"
        );
        self.skills = skills;
        self.resume = resume;
        self.advance_to(Screen::CareerPaths);
        Ok(())
    }

    /// Record the chosen path and move to the results screen.
    pub fn choose_path(&mut self, path_id: &str) -> Result<(), ValidationError> {
        self.expect_screen(Screen::CareerPaths, "choose a path")?;
        let path_id = path_id.trim();
        if path_id.is_empty() {
            return Err(ValidationError::MissingRequiredField("path"));
        }
        info!(path = path_id, "career path chosen");
        self.chosen_path = Some(path_id.to_string());
        self.advance_to(Screen::Results);
        Ok(())
    }

    /// Move one screen back. Returns `false` when there is nowhere to go.
    ///
    /// Drafts are kept so the previous screen can be re-populated.
    pub fn back(&mut self) -> bool {
        match self.screen.previous() {
            Some(prev) => {
                debug!(from = ?self.screen, to = ?prev, "wizard back");
                self.screen = prev;
                true
            }
            None => false,
        }
    }

    /// Discard everything and start over at onboarding.
    pub fn restart(&mut self) {
        info!("wizard restarted");
        *self = Self::new();
    }

    fn advance_to(&mut self, next: Screen) {
        debug!(from = ?self.screen, to = ?next, "wizard advance");
        self.screen = next;
    }

    fn expect_screen(&self, expected: Screen, action: &'static str) -> Result<(), ValidationError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(ValidationError::OutOfOrder {
                action,
                screen: self.screen.display_name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Education, FileMeta, MIME_PDF, validate_upload};

    fn valid_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new("Asha Rao", Some(Education::Master));
        draft.add_interest("Technology");
        draft
    }

    fn at_career_paths() -> Wizard {
        let mut w = Wizard::new();
        w.complete_onboarding(valid_draft()).unwrap();
        let skills: SkillSet = ["Python"].into_iter().collect();
        w.complete_skill_assessment(skills, None).unwrap();
        w
    }

    #[test]
    fn invalid_drafts_do_not_transition() {
        let drafts = [
            ProfileDraft::new("", Some(Education::Phd)),
            ProfileDraft::new("  ", Some(Education::Phd)),
            ProfileDraft::new("Asha", None),
            ProfileDraft::default(),
        ];
        for draft in drafts {
            let mut w = Wizard::new();
            assert!(w.complete_onboarding(draft).is_err());
            assert_eq!(w.screen(), Screen::Onboarding);
            assert_eq!(w.profile(), &ProfileDraft::default());
        }
    }

    #[test]
    fn valid_draft_advances_once_and_is_preserved() {
        let mut w = Wizard::new();
        w.complete_onboarding(valid_draft()).unwrap();
        assert_eq!(w.screen(), Screen::SkillAssessment);
        assert_eq!(w.profile(), &valid_draft());

        // A second submit is out of order and changes nothing.
        let err = w.complete_onboarding(valid_draft()).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfOrder { .. }));
        assert_eq!(w.screen(), Screen::SkillAssessment);
    }

    #[test]
    fn skill_assessment_needs_skills_or_resume() {
        let mut w = Wizard::new();
        w.complete_onboarding(valid_draft()).unwrap();
        assert_eq!(
            w.complete_skill_assessment(SkillSet::new(), None),
            Err(ValidationError::NoSkillsOrResume)
        );
        assert_eq!(w.screen(), Screen::SkillAssessment);

        let resume = validate_upload(&FileMeta::new("cv.pdf", 1024, MIME_PDF)).unwrap();
        w.complete_skill_assessment(SkillSet::new(), Some(resume.clone()))
            .unwrap();
        assert_eq!(w.screen(), Screen::CareerPaths);
        assert_eq!(w.resume(), Some(&resume));
    }

    #[test]
    fn back_from_skills_keeps_draft() {
        let mut w = Wizard::new();
        w.complete_onboarding(valid_draft()).unwrap();
        assert!(w.back());
        assert_eq!(w.screen(), Screen::Onboarding);
        assert_eq!(w.profile(), &valid_draft());
    }

    #[test]
    fn back_walks_one_step_at_a_time() {
        let mut w = at_career_paths();
        assert!(w.back());
        assert_eq!(w.screen(), Screen::SkillAssessment);
        assert!(w.skills().contains("Python"));
        assert!(w.back());
        assert_eq!(w.screen(), Screen::Onboarding);
        assert!(!w.back());
        assert_eq!(w.screen(), Screen::Onboarding);
    }

    #[test]
    fn choose_path_requires_an_id() {
        let mut w = at_career_paths();
        assert_eq!(
            w.choose_path("  "),
            Err(ValidationError::MissingRequiredField("path"))
        );
        w.choose_path("software-engineer").unwrap();
        assert_eq!(w.screen(), Screen::Results);
        assert_eq!(w.chosen_career().map(|c| c.title), Some("Software Engineer"));
        assert!(!w.back(), "results has no back transition");
    }

    #[test]
    fn generic_choice_has_no_catalog_record() {
        let mut w = at_career_paths();
        w.choose_path(GENERIC_PATH_ID).unwrap();
        assert_eq!(w.chosen_path(), Some(GENERIC_PATH_ID));
        assert!(w.chosen_career().is_none());
    }

    #[test]
    fn screens_cannot_be_skipped() {
        let mut w = Wizard::new();
        assert!(w.choose_path("data-scientist").is_err());
        assert!(
            w.complete_skill_assessment(["SQL"].into_iter().collect(), None)
                .is_err()
        );
        assert_eq!(w.screen(), Screen::Onboarding);
    }

    #[test]
    fn restart_clears_everything() {
        let mut w = at_career_paths();
        w.restart();
        assert_eq!(w.screen(), Screen::Onboarding);
        assert!(w.skills().is_empty());
        assert!(w.profile().name.is_empty());
    }

    #[test]
    fn steps_follow_order() {
        for (i, s) in Screen::ORDER.iter().enumerate() {
            assert_eq!(s.step(), i + 1);
        }
    }
}
