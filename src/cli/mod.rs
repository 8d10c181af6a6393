//! Command-line parsing for the CareerCraft wizard.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! wizard, catalogs and rendering code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::TrackId;
use crate::dashboard::{EvolutionTab, Page};
use crate::domain::IndustryFilter;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "careercraft", version, about = "CareerCraft: career guidance in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI.
    ///
    /// Starts on the onboarding wizard unless another page is requested.
    Tui(TuiArgs),
    /// Print career path suggestions, optionally filtered by industry.
    Careers(CareersArgs),
    /// Check whether a file would be accepted as a resume (metadata only).
    CheckResume(CheckResumeArgs),
    /// Print the career discovery feed.
    Feed,
    /// Print a learning-track roadmap.
    Roadmap(RoadmapArgs),
    /// Print the skill evolution dashboard.
    Evolution(EvolutionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Page to open first.
    #[arg(short = 'p', long, value_enum, default_value_t = Page::Wizard)]
    pub page: Page,
}

#[derive(Debug, Parser, Clone)]
pub struct CareersArgs {
    /// Industry filter (all, Technology, Healthcare, Finance, Education, "Creative Arts").
    #[arg(short = 'i', long, default_value = "all")]
    pub industry: IndustryFilter,

    /// Your skills; exact matches are marked in the output. Repeatable.
    #[arg(short = 's', long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct CheckResumeArgs {
    /// File to check.
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Override the MIME type inferred from the file extension.
    #[arg(long)]
    pub mime: Option<String>,
}

#[derive(Debug, Parser, Clone)]
pub struct RoadmapArgs {
    /// Track to show.
    #[arg(short = 't', long, value_enum, default_value_t = TrackId::JobReady)]
    pub track: TrackId,
}

#[derive(Debug, Parser, Clone)]
pub struct EvolutionArgs {
    /// Tab to show.
    #[arg(long, value_enum, default_value_t = EvolutionTab::Skills)]
    pub tab: EvolutionTab,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Industry;

    #[test]
    fn parses_careers_flags() {
        let cli = Cli::parse_from([
            "careercraft",
            "careers",
            "--industry",
            "Creative Arts",
            "-s",
            "Figma",
            "--skill",
            "SEO",
            "--json",
        ]);
        let Command::Careers(args) = cli.command else {
            panic!("expected careers");
        };
        assert_eq!(args.industry, IndustryFilter::Only(Industry::CreativeArts));
        assert_eq!(args.skills, vec!["Figma", "SEO"]);
        assert!(args.json);
    }

    #[test]
    fn parses_tui_page() {
        let cli = Cli::parse_from(["careercraft", "tui", "--page", "map"]);
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.page, Page::CareerMap);
    }

    #[test]
    fn rejects_unknown_industry() {
        assert!(Cli::try_parse_from(["careercraft", "careers", "-i", "Aerospace"]).is_err());
    }

    #[test]
    fn parses_roadmap_track() {
        let cli = Cli::parse_from(["careercraft", "roadmap", "--track", "future-ready"]);
        let Command::Roadmap(args) = cli.command else {
            panic!("expected roadmap");
        };
        assert_eq!(args.track, TrackId::FutureReady);
    }
}
