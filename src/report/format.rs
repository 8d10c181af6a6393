//! Formatted terminal output: results summary, career tables and dashboards.
//!
//! We keep formatting code in one place so:
//! - the wizard and catalog code stays clean and testable
//! - output changes are localized

use chrono::{DateTime, Local};

use crate::catalog::roadmap::Track;
use crate::catalog::{
    CRISIS_PREDICTIONS, CareerVideo, LEARNING_PATH, MARKET_TRENDS, SKILL_GAPS, SKILL_METRICS,
};
use crate::dashboard::EvolutionTab;
use crate::domain::{CareerRecord, SkillSet};
use crate::matching::{VISIBLE_REQUIRED_SKILLS, skill_badges};
use crate::wizard::Wizard;

/// Summary printed when the user leaves the TUI from the results screen.
pub fn format_results_summary(wizard: &Wizard, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let profile = wizard.profile();

    out.push_str("=== CareerCraft - Results ===\n");
    out.push_str(&format!("Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M")));
    out.push_str(&format!("Congratulations, {}!\n", profile.name.trim()));
    if let Some(education) = profile.education {
        out.push_str(&format!("Education: {}\n", education.display_name()));
    }
    if !profile.interests.is_empty() {
        let interests: Vec<&str> = profile.interests.iter().collect();
        out.push_str(&format!("Interests: {}\n", interests.join(", ")));
    }

    match (wizard.chosen_career(), wizard.chosen_path()) {
        (Some(career), _) => {
            out.push_str(&format!(
                "Chosen path: {} ({}, {} avg, {} growth)\n",
                career.title, career.industry.display_name(), career.average_salary, career.growth_rate
            ));
        }
        (None, Some(_)) => out.push_str("Chosen path: no specific path\n"),
        (None, None) => {}
    }

    if !wizard.skills().is_empty() {
        let skills: Vec<&str> = wizard.skills().iter().collect();
        out.push_str(&format!("Your skills: {}\n", skills.join(", ")));
    }
    if let Some(resume) = wizard.resume() {
        out.push_str(&format!("Uploaded resume: {} ({:.2} MB)\n", resume.name, resume.size_mb()));
    }

    out
}

/// Career cards as a table. Matched required skills are marked with `*`.
pub fn format_careers_table(records: &[&CareerRecord], skills: &SkillSet) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No career paths match this filter.\n");
        return out;
    }

    out.push_str(
        format!(
            "{:<26} {:<14} {:>6} {:>7} {:<11} {}",
            "title", "industry", "match", "growth", "salary", "key skills"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<26} {:-<14} {:-<6} {:-<7} {:-<11} {:-<10}",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for record in records {
        let (badges, hidden) = skill_badges(record, skills);
        let mut key_skills: Vec<String> = badges
            .iter()
            .map(|b| {
                if b.matched {
                    format!("{}*", b.skill)
                } else {
                    b.skill.to_string()
                }
            })
            .collect();
        if hidden > 0 {
            key_skills.push(format!("+{hidden} more"));
        }

        out.push_str(
            format!(
                "{:<26} {:<14} {:>5}% {:>7} {:<11} {}",
                truncate(record.title, 26),
                record.industry.display_name(),
                record.match_score,
                record.growth_rate,
                record.average_salary,
                key_skills.join(", "),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    if !skills.is_empty() {
        out.push_str(&format!(
            "\n* = one of your skills (first {VISIBLE_REQUIRED_SKILLS} key skills shown)\n"
        ));
    }
    out
}

/// One feed entry per video.
pub fn format_feed(videos: &[CareerVideo]) -> String {
    let mut out = String::new();
    for (idx, video) in videos.iter().enumerate() {
        out.push_str(&format!("[{}/{}] {} {}\n", idx + 1, videos.len(), video.thumbnail, video.title));
        out.push_str(&format!("    {} @ {}\n", video.role, video.company));
        out.push_str(&format!("    {} | {} | {} likes\n", video.salary, video.growth, video.likes));
        out.push_str(&format!("    {}\n", video.description));
        out.push_str(&format!("    #{}\n", video.tags.join(" #")));
    }
    out
}

pub fn format_roadmap(track: &Track) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} === ({}, {})\n",
        track.title,
        track.timeline,
        track.difficulty.label()
    ));
    out.push_str(&format!(
        "Progress: {:.0}% ({} of {} milestones completed)\n",
        track.progress_percent(),
        track.completed_milestones(),
        track.milestones.len()
    ));
    out.push_str(&format!(
        "Future-proof: {}% | Market demand: {}%\n",
        track.future_proof, track.market_demand
    ));
    out.push_str(&format!("Core skills: {}\n", track.skills.join(", ")));
    out.push('\n');

    let current = track.current_milestone();
    for (idx, milestone) in track.milestones.iter().enumerate() {
        let marker = if milestone.completed {
            "[x]"
        } else if Some(idx) == current {
            "[>]"
        } else {
            "[ ]"
        };
        out.push_str(&format!(
            "{marker} {}. {} ({})\n",
            idx + 1,
            milestone.title,
            milestone.timeframe
        ));
        out.push_str(&format!("      {}\n", milestone.description));
        out.push_str(&format!("      {}\n", milestone.skills.join(", ")));
    }
    out
}

pub fn format_evolution(tab: EvolutionTab) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", tab.title()));
    match tab {
        EvolutionTab::Skills => {
            for m in &SKILL_METRICS {
                out.push_str(&format!(
                    "{:<18} {} current {:>3}% target {:>3}% gap {:>+4}% | {} risk | {}% future-proof\n",
                    m.name,
                    m.trend.symbol(),
                    m.current,
                    m.target,
                    m.gap(),
                    m.risk_level.label(),
                    m.future_proof
                ));
            }
        }
        EvolutionTab::Predictions => {
            for p in &CRISIS_PREDICTIONS {
                out.push_str(&format!(
                    "{} ({}% likely, {} impact, {})\n",
                    p.title,
                    p.probability,
                    p.impact.label(),
                    p.timeline
                ));
                out.push_str(&format!("    {}\n", p.description));
                for mitigation in p.mitigations {
                    out.push_str(&format!("    - {mitigation}\n"));
                }
            }
        }
        EvolutionTab::Insights => {
            out.push_str("Critical skill gaps:\n");
            for (skill, gap, severity) in &SKILL_GAPS {
                out.push_str(&format!("    {skill:<18} {gap}% gap ({})\n", severity.label()));
            }
            out.push_str("Market trends:\n");
            for (role, change) in &MARKET_TRENDS {
                out.push_str(&format!("    {role:<18} {change:+}% demand\n"));
            }
            out.push_str("Learning path:\n");
            for (phase, steps) in &LEARNING_PATH {
                out.push_str(&format!("    {phase}: {}\n", steps.join(", ")));
            }
        }
    }
    out
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::catalog::CAREER_PATHS;
    use crate::catalog::roadmap::{self, TrackId};
    use crate::domain::{Education, FileMeta, IndustryFilter, MIME_PDF, ProfileDraft, validate_upload};
    use crate::matching::filter_paths;

    fn finished_wizard(path: &str) -> Wizard {
        let mut w = Wizard::new();
        w.complete_onboarding(ProfileDraft::new("Asha", Some(Education::Bachelor)))
            .unwrap();
        let resume = validate_upload(&FileMeta::new("cv.pdf", 1024 * 1024, MIME_PDF)).unwrap();
        w.complete_skill_assessment(["Python", "SQL"].into_iter().collect(), Some(resume))
            .unwrap();
        w.choose_path(path).unwrap();
        w
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single().unwrap()
    }

    #[test]
    fn summary_names_user_path_and_resume() {
        let text = format_results_summary(&finished_wizard("data-scientist"), fixed_time());
        assert!(text.contains("Congratulations, Asha!"));
        assert!(text.contains("Generated: 2025-01-02 03:04"));
        assert!(text.contains("Chosen path: Data Scientist"));
        assert!(text.contains("Your skills: Python, SQL"));
        assert!(text.contains("Uploaded resume: cv.pdf (1.00 MB)"));
    }

    #[test]
    fn summary_for_generic_choice() {
        let text = format_results_summary(&finished_wizard("selected"), fixed_time());
        assert!(text.contains("Chosen path: no specific path"));
    }

    #[test]
    fn table_marks_matched_skills() {
        let skills: SkillSet = ["Python", "SQL"].into_iter().collect();
        let records = filter_paths(&CAREER_PATHS, IndustryFilter::All);
        let table = format_careers_table(&records, &skills);
        assert!(table.contains("Python*"));
        assert!(table.contains("SQL*"));
        assert!(!table.contains("Figma*"));
        assert_eq!(table.lines().filter(|l| l.contains('%')).count(), CAREER_PATHS.len());
    }

    #[test]
    fn empty_table_says_so() {
        let table = format_careers_table(&[], &SkillSet::new());
        assert!(table.contains("No career paths"));
    }

    #[test]
    fn roadmap_marks_current_milestone() {
        let text = format_roadmap(roadmap::track(TrackId::JobReady));
        assert!(text.contains("Progress: 50% (2 of 4 milestones completed)"));
        assert!(text.contains("[>] 3. Backend Development"));
        assert!(text.contains("[x] 1. Foundation Skills"));
    }

    #[test]
    fn evolution_tabs_render_their_tables() {
        assert!(format_evolution(EvolutionTab::Skills).contains("gap  -20%"));
        assert!(format_evolution(EvolutionTab::Predictions).contains("Cloud-First Migration"));
        assert!(format_evolution(EvolutionTab::Insights).contains("-15% demand"));
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Digital Marketing Manager", 10), "Digital M.");
        assert_eq!(truncate("Short", 10), "Short");
    }
}
