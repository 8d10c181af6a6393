//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and installs logging
//! - parses CLI arguments
//! - launches the TUI or prints catalog/dashboard reports

use clap::Parser;
use tracing::{debug, info};

use crate::catalog::CAREER_VIDEOS;
use crate::catalog::roadmap;
use crate::cli::{CareersArgs, CheckResumeArgs, Command, TuiArgs};
use crate::config::Settings;
use crate::domain::{SkillSet, validate_upload};
use crate::error::AppError;
use crate::matching::{filter_paths, skill_badges};
use crate::observability::{self, LogTarget};

/// Entry point for the `careercraft` binary.
pub fn run() -> Result<(), AppError> {
    // We want `careercraft` and `careercraft -p map` to behave like `careercraft tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let settings = Settings::from_env()?;
    let target = match cli.command {
        Command::Tui(_) => LogTarget::Terminal,
        _ => LogTarget::Stderr,
    };
    observability::init(&settings, target)?;
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Tui(args) => handle_tui(args, &settings),
        Command::Careers(args) => handle_careers(args),
        Command::CheckResume(args) => handle_check_resume(args, &settings),
        Command::Feed => {
            print!("{}", crate::report::format_feed(&CAREER_VIDEOS));
            Ok(())
        }
        Command::Roadmap(args) => {
            print!("{}", crate::report::format_roadmap(roadmap::track(args.track)));
            Ok(())
        }
        Command::Evolution(args) => {
            print!("{}", crate::report::format_evolution(args.tab));
            Ok(())
        }
    }
}

fn handle_tui(args: TuiArgs, settings: &Settings) -> Result<(), AppError> {
    info!(page = ?args.page, "starting tui");
    let outcome = crate::tui::run(args.page, settings)?;

    // The alternate screen is gone by now; leave the results on the normal terminal.
    if let Some(wizard) = outcome.finished_wizard {
        println!(
            "{}",
            crate::report::format_results_summary(&wizard, chrono::Local::now())
        );
    }
    Ok(())
}

fn handle_careers(args: CareersArgs) -> Result<(), AppError> {
    let skills: SkillSet = args.skills.iter().map(String::as_str).collect();
    let records = filter_paths(&crate::catalog::CAREER_PATHS, args.industry);
    debug!(filter = args.industry.display_name(), n = records.len(), "filtered careers");

    if args.json {
        let rows: Vec<serde_json::Value> = records
            .iter()
            .map(|record| {
                let (badges, hidden) = skill_badges(record, &skills);
                serde_json::json!({
                    "career": record,
                    "skillBadges": badges,
                    "hiddenSkills": hidden,
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&rows)
            .map_err(|e| AppError::new(crate::error::EXIT_RUNTIME, format!("Failed to encode JSON: {e}")))?;
        println!("{text}");
    } else {
        print!("{}", crate::report::format_careers_table(&records, &skills));
    }
    Ok(())
}

fn handle_check_resume(args: CheckResumeArgs, settings: &Settings) -> Result<(), AppError> {
    let path = match args.path {
        Some(path) => path,
        None => crate::cli::picker::prompt_for_resume_path(settings.search_depth)?,
    };

    let mut meta = crate::cli::picker::read_file_meta(&path)?;
    if let Some(mime) = args.mime {
        meta.mime = mime;
    }

    let resume = validate_upload(&meta)?;
    println!(
        "Accepted: {} ({:.2} MB, {})",
        resume.name,
        resume.size_mb(),
        resume.kind.extension()
    );
    Ok(())
}

/// Rewrite argv so `careercraft` defaults to `careercraft tui`.
///
/// Rules:
/// - `careercraft`                     -> `careercraft tui`
/// - `careercraft -p map ...`          -> `careercraft tui -p map ...`
/// - `careercraft --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise it's a subcommand (or a typo clap will report).
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(args(&["careercraft"])), args(&["careercraft", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(args(&["careercraft", "-p", "map"])),
            args(&["careercraft", "tui", "-p", "map"])
        );
    }

    #[test]
    fn help_and_subcommands_are_untouched() {
        for argv in [
            args(&["careercraft", "--help"]),
            args(&["careercraft", "-V"]),
            args(&["careercraft", "careers", "-i", "Finance"]),
        ] {
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }
}
