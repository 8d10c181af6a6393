//! Ratatui-based terminal UI.
//!
//! The TUI hosts the onboarding wizard and the three standalone dashboard
//! pages. Each page keeps its own state; moving between pages starts the
//! target page from scratch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info};

use crate::config::Settings;
use crate::dashboard::{CareerMap, DiscoveryFeed, Page, SkillEvolution};
use crate::error::{AppError, EXIT_RUNTIME};
use crate::wizard::{Screen, Wizard};

mod dashboards;
mod skill_chart;
mod wizard_view;

use wizard_view::WizardForms;

/// What the session produced, handed back to the caller after the terminal is restored.
#[derive(Debug, Default)]
pub struct TuiOutcome {
    /// Set when the user quit from the results screen.
    pub finished_wizard: Option<Wizard>,
}

/// Start the TUI on `page`.
pub fn run(page: Page, settings: &Settings) -> Result<TuiOutcome, AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(page, PathBuf::from("."), settings.search_depth);
    app.event_loop(&mut terminal)?;
    Ok(app.into_outcome())
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(
                EXIT_RUNTIME,
                format!("Failed to enter alternate screen: {e}"),
            ));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    page: Page,
    wizard: Wizard,
    forms: WizardForms,
    feed: DiscoveryFeed,
    map: CareerMap,
    evolution: SkillEvolution,
    status: String,
    resume_root: PathBuf,
    search_depth: usize,
}

impl App {
    fn new(page: Page, resume_root: PathBuf, search_depth: usize) -> Self {
        let mut app = Self {
            page: Page::Wizard,
            wizard: Wizard::new(),
            forms: WizardForms::default(),
            feed: DiscoveryFeed::default(),
            map: CareerMap::default(),
            evolution: SkillEvolution::default(),
            status: String::new(),
            resume_root,
            search_depth,
        };
        app.navigate(page);
        app.status = "Welcome to CareerCraft!".to_string();
        app
    }

    fn into_outcome(self) -> TuiOutcome {
        let finished = self.page == Page::Wizard && self.wizard.screen() == Screen::Results;
        TuiOutcome {
            finished_wizard: finished.then_some(self.wizard),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        break;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Dispatch a key press. Returns `true` to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.page {
            Page::Wizard => self.handle_wizard_key(code),
            Page::Discovery => self.handle_discovery_key(code),
            Page::CareerMap => self.handle_map_key(code),
            Page::SkillEvolution => self.handle_evolution_key(code),
        }
    }

    /// Switch pages. The target page always starts from a fresh state.
    fn navigate(&mut self, page: Page) {
        info!(from = ?self.page, to = ?page, "navigate");
        match page {
            Page::Wizard => {
                self.wizard.restart();
                self.forms = WizardForms::default();
            }
            Page::Discovery => self.feed = DiscoveryFeed::default(),
            Page::CareerMap => self.map = CareerMap::default(),
            Page::SkillEvolution => self.evolution = SkillEvolution::default(),
        }
        self.page = page;
        self.status = page.title().to_string();
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        debug!(status = %self.status, "status");
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.page {
            Page::Wizard => self.draw_wizard(frame, chunks[1]),
            Page::Discovery => self.draw_discovery(frame, chunks[1]),
            Page::CareerMap => self.draw_map(frame, chunks[1]),
            Page::SkillEvolution => self.draw_evolution(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let subtitle = match self.page {
            Page::Wizard => {
                let screen = self.wizard.screen();
                format!(
                    "Step {} of {}: {}",
                    screen.step(),
                    Screen::ORDER.len(),
                    screen.display_name()
                )
            }
            Page::Discovery => "Explore paths that match you".to_string(),
            Page::CareerMap => "Your personalized roadmap to success".to_string(),
            Page::SkillEvolution => "AI-powered insights & crisis-resilient planning".to_string(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("CareerCraft", Style::default().fg(Color::Cyan)),
                Span::raw(format!(" | {}", self.page.title())),
            ]),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.help_text(), Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn help_text(&self) -> &'static str {
        match self.page {
            Page::Wizard => match self.wizard.screen() {
                Screen::Onboarding => "Tab/↑/↓ field  ←/→ choose  Enter add/submit  Del remove  Esc quit",
                Screen::SkillAssessment => "Tab/↑/↓ field  ←/→ choose  Enter add/submit  Del remove  Esc back",
                Screen::CareerPaths => "↑/↓ career  ←/→ industry  g goal  Enter explore  c choose  Esc back",
                Screen::Results => "n new journey  d discover  q quit",
            },
            Page::Discovery => "↑/↓ swipe  l like  Enter career map  Esc home  q quit",
            Page::CareerMap => "Tab/←/→ track  Enter dashboard  Esc discovery  q quit",
            Page::SkillEvolution => "Tab/←/→ tab  Enter new journey  Esc career map  q quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    use crate::domain::Education;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Page::Wizard, dir.path().to_path_buf(), 2);
        (dir, app)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Fill onboarding: name, education, submit.
    fn finish_onboarding(app: &mut App) {
        type_text(app, "Asha");
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        for _ in 0..3 {
            app.handle_key(KeyCode::Tab);
        }
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn keyboard_drives_wizard_to_results() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        assert_eq!(app.wizard.screen(), Screen::SkillAssessment);
        assert_eq!(app.wizard.profile().name, "Asha");
        assert_eq!(app.wizard.profile().education, Some(Education::Associate));

        type_text(&mut app, "Python");
        app.handle_key(KeyCode::Enter);
        assert!(app.forms.skills.skills.contains("Python"));

        // Jump to submit.
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::CareerPaths);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Results);
        assert_eq!(app.wizard.chosen_path(), Some("data-scientist"));

        assert!(app.handle_key(KeyCode::Char('q')));
        let outcome = app.into_outcome();
        assert!(outcome.finished_wizard.is_some());
    }

    #[test]
    fn submit_without_required_fields_stays_put() {
        let (_dir, mut app) = app();
        // Name -> Education -> Interest -> Suggestions -> Submit
        for _ in 0..4 {
            app.handle_key(KeyCode::Tab);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Onboarding);
        assert!(app.status.contains("name"));
    }

    #[test]
    fn empty_skill_submit_shows_message() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::SkillAssessment);
        assert!(app.status.contains("skills or upload"));
    }

    #[test]
    fn back_restores_onboarding_form() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.wizard.screen(), Screen::Onboarding);
        assert_eq!(app.forms.onboarding.draft.name, "Asha");
    }

    #[test]
    fn industry_filter_changes_selection_pool() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        type_text(&mut app, "SEO");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::CareerPaths);

        // All -> Technology -> Healthcare -> Finance
        for _ in 0..3 {
            app.handle_key(KeyCode::Right);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.chosen_path(), Some("business-analyst"));
    }

    #[test]
    fn resume_candidate_can_be_attached() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF").unwrap();
        let mut app = App::new(Page::Wizard, dir.path().to_path_buf(), 2);
        finish_onboarding(&mut app);

        // Input -> Suggestions -> Resume
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.forms.skills.resume.as_ref().map(|r| r.name.as_str()), Some("cv.pdf"));

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::CareerPaths);
    }

    #[test]
    fn skill_suggestion_cursor_stays_in_range() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        app.handle_key(KeyCode::Tab);
        for _ in 0..7 {
            app.handle_key(KeyCode::Right);
        }

        // Keep picking the last visible suggestion until the list shrinks.
        for _ in 0..9 {
            app.handle_key(KeyCode::Enter);
        }
        let form = &app.forms.skills;
        assert_eq!(form.skills.len(), 9);
        assert!(form.suggestion < form.skills.visible_suggestions().len());
    }

    #[test]
    fn liking_fills_heart_without_changing_count() {
        let (_dir, mut app) = app();
        app.navigate(Page::Discovery);
        let likes = app.feed.current().unwrap().likes;
        assert!(render(&mut app).contains(&format!("♡ {likes}")));

        app.handle_key(KeyCode::Char('l'));
        let screen = render(&mut app);
        assert!(screen.contains(&format!("♥ {likes}")));
        assert!(!screen.contains(&format!("{}", likes + 1)));
    }

    #[test]
    fn discovery_swipes_wrap_and_links_navigate() {
        let (_dir, mut app) = app();
        app.navigate(Page::Discovery);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.feed.index(), app.feed.len() - 1);
        app.handle_key(KeyCode::Char('l'));
        assert!(app.feed.is_liked("5"));

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.page, Page::CareerMap);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.page, Page::Discovery);
        assert!(!app.feed.is_liked("5"), "pages re-initialize on entry");
    }

    #[test]
    fn new_journey_from_dashboard_resets_wizard() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        app.navigate(Page::SkillEvolution);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.page, Page::Wizard);
        assert_eq!(app.wizard.screen(), Screen::Onboarding);
        assert!(app.wizard.profile().name.is_empty());
    }

    #[test]
    fn every_page_renders() {
        let (_dir, mut app) = app();
        assert!(render(&mut app).contains("Step 1 of 4"));

        for page in [Page::Discovery, Page::CareerMap, Page::SkillEvolution] {
            app.navigate(page);
            assert!(render(&mut app).contains(page.title()));
        }

        app.navigate(Page::SkillEvolution);
        for _ in 0..2 {
            app.handle_key(KeyCode::Tab);
            render(&mut app);
        }
    }

    #[test]
    fn wizard_screens_render() {
        let (_dir, mut app) = app();
        finish_onboarding(&mut app);
        assert!(render(&mut app).contains("Step 2 of 4"));
        type_text(&mut app, "React");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Enter);
        let screen = render(&mut app);
        assert!(screen.contains("Software Engineer"));
        app.handle_key(KeyCode::Char('c'));
        assert!(render(&mut app).contains("Congratulations, Asha!"));
    }
}
