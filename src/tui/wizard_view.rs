//! Wizard screens: form state, key handling and drawing.
//!
//! Form state lives here and is only handed to [`Wizard`] on submit. Going
//! back reloads the previous form from what the wizard stored.

use std::path::PathBuf;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::App;
use crate::catalog::CAREER_PATHS;
use crate::cli::picker::{discover_resume_files, pretty_path, read_file_meta};
use crate::dashboard::Page;
use crate::domain::{
    CareerRecord, Education, GoalType, IndustryFilter, ProfileDraft, ResumeReference, ScoreBand,
    SkillSet, validate_upload,
};
use crate::matching::{filter_paths, matched_count, skill_badges};
use crate::wizard::{GENERIC_PATH_ID, Screen};

#[derive(Debug, Default)]
pub(super) struct WizardForms {
    pub(super) onboarding: OnboardingForm,
    pub(super) skills: SkillForm,
    pub(super) browser: BrowserState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum OnboardingField {
    #[default]
    Name,
    Education,
    Interest,
    Suggestions,
    Submit,
    Explore,
}

impl OnboardingField {
    const ORDER: [OnboardingField; 6] = [
        OnboardingField::Name,
        OnboardingField::Education,
        OnboardingField::Interest,
        OnboardingField::Suggestions,
        OnboardingField::Submit,
        OnboardingField::Explore,
    ];
}

#[derive(Debug, Default)]
pub(super) struct OnboardingForm {
    pub(super) draft: ProfileDraft,
    pub(super) interest_input: String,
    pub(super) field: OnboardingField,
    pub(super) suggestion: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum SkillField {
    #[default]
    Input,
    Suggestions,
    Resume,
    Submit,
}

impl SkillField {
    const ORDER: [SkillField; 4] = [
        SkillField::Input,
        SkillField::Suggestions,
        SkillField::Resume,
        SkillField::Submit,
    ];
}

#[derive(Debug, Default)]
pub(super) struct SkillForm {
    pub(super) skills: SkillSet,
    pub(super) input: String,
    pub(super) resume: Option<ResumeReference>,
    pub(super) field: SkillField,
    pub(super) suggestion: usize,
    pub(super) candidates: Vec<PathBuf>,
    pub(super) candidate: usize,
}

#[derive(Debug, Default)]
pub(super) struct BrowserState {
    pub(super) filter: IndustryFilter,
    pub(super) goal: GoalType,
    pub(super) selected: usize,
}

impl BrowserState {
    fn visible(&self) -> Vec<&'static CareerRecord> {
        filter_paths(&CAREER_PATHS, self.filter)
    }
}

/// Step to the next (or previous) entry of a fixed focus order.
fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    let len = order.len();
    if forward {
        order[(idx + 1) % len]
    } else {
        order[(idx + len - 1) % len]
    }
}

/// Move a list cursor by one, wrapping within `len`.
fn step_index(idx: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default()
    }
}

fn score_color(score: u8) -> Color {
    match ScoreBand::of(score) {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Good => Color::Yellow,
        ScoreBand::Fair => Color::LightRed,
    }
}

impl App {
    pub(super) fn handle_wizard_key(&mut self, code: KeyCode) -> bool {
        match self.wizard.screen() {
            Screen::Onboarding => self.handle_onboarding_key(code),
            Screen::SkillAssessment => {
                self.handle_skills_key(code);
                false
            }
            Screen::CareerPaths => {
                self.handle_browser_key(code);
                false
            }
            Screen::Results => self.handle_results_key(code),
        }
    }

    fn handle_onboarding_key(&mut self, code: KeyCode) -> bool {
        let form = &mut self.forms.onboarding;
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => {
                form.field = cycle(&OnboardingField::ORDER, form.field, true);
                return false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.field = cycle(&OnboardingField::ORDER, form.field, false);
                return false;
            }
            _ => {}
        }

        match form.field {
            OnboardingField::Name => match code {
                KeyCode::Char(c) => form.draft.name.push(c),
                KeyCode::Backspace => {
                    form.draft.name.pop();
                }
                KeyCode::Enter => form.field = OnboardingField::Education,
                _ => {}
            },
            OnboardingField::Education => match code {
                KeyCode::Right => {
                    form.draft.education = Some(form.draft.education.map_or(Education::ALL[0], Education::next));
                }
                KeyCode::Left => {
                    form.draft.education = Some(
                        form.draft
                            .education
                            .map_or(Education::ALL[Education::ALL.len() - 1], Education::prev),
                    );
                }
                KeyCode::Enter => form.field = OnboardingField::Interest,
                _ => {}
            },
            OnboardingField::Interest => match code {
                KeyCode::Char(c) => form.interest_input.push(c),
                KeyCode::Backspace => {
                    form.interest_input.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut form.interest_input);
                    if !form.draft.add_interest(&input) {
                        form.interest_input = input;
                    }
                }
                KeyCode::Delete => {
                    if let Some(last) = form.draft.interests.last().map(str::to_string) {
                        form.draft.remove_interest(&last);
                    }
                }
                _ => {}
            },
            OnboardingField::Suggestions => {
                let remaining = form.draft.remaining_suggestions();
                match code {
                    KeyCode::Right => form.suggestion = step_index(form.suggestion, remaining.len(), true),
                    KeyCode::Left => form.suggestion = step_index(form.suggestion, remaining.len(), false),
                    KeyCode::Enter => {
                        if let Some(s) = remaining.get(form.suggestion) {
                            form.draft.add_interest(s);
                            let left = remaining.len() - 1;
                            form.suggestion = form.suggestion.min(left.saturating_sub(1));
                        }
                    }
                    _ => {}
                }
            }
            OnboardingField::Submit => {
                if code == KeyCode::Enter {
                    self.submit_onboarding();
                }
            }
            OnboardingField::Explore => {
                if code == KeyCode::Enter {
                    self.navigate(Page::Discovery);
                }
            }
        }
        false
    }

    fn submit_onboarding(&mut self) {
        let draft = self.forms.onboarding.draft.clone();
        match self.wizard.complete_onboarding(draft) {
            Ok(()) => {
                self.load_skill_form();
                self.set_status("Let's map your skills.");
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    /// Populate the skill form from the wizard and rescan resume candidates.
    fn load_skill_form(&mut self) {
        let candidates = discover_resume_files(&self.resume_root, self.search_depth);
        self.forms.skills = SkillForm {
            skills: self.wizard.skills().clone(),
            resume: self.wizard.resume().cloned(),
            candidates,
            ..SkillForm::default()
        };
    }

    fn handle_skills_key(&mut self, code: KeyCode) {
        let form = &mut self.forms.skills;
        match code {
            KeyCode::Esc => {
                self.wizard.back();
                let draft = self.wizard.profile().clone();
                self.forms.onboarding = OnboardingForm {
                    draft,
                    ..OnboardingForm::default()
                };
                self.set_status("Back to onboarding.");
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                form.field = cycle(&SkillField::ORDER, form.field, true);
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.field = cycle(&SkillField::ORDER, form.field, false);
                return;
            }
            _ => {}
        }

        match form.field {
            SkillField::Input => match code {
                KeyCode::Char(c) => form.input.push(c),
                KeyCode::Backspace => {
                    form.input.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut form.input);
                    if form.skills.add(&input) {
                        self.set_status("Nice! That's a valuable skill.");
                    } else {
                        form.input = input;
                    }
                }
                KeyCode::Delete => {
                    if let Some(last) = form.skills.last().map(str::to_string) {
                        form.skills.remove(&last);
                    }
                }
                _ => {}
            },
            SkillField::Suggestions => {
                let visible = form.skills.visible_suggestions();
                match code {
                    KeyCode::Right => form.suggestion = step_index(form.suggestion, visible.len(), true),
                    KeyCode::Left => form.suggestion = step_index(form.suggestion, visible.len(), false),
                    KeyCode::Enter => {
                        if let Some(s) = visible.get(form.suggestion) {
                            form.skills.add(s);
                            let left = form.skills.visible_suggestions().len();
                            form.suggestion = form.suggestion.min(left.saturating_sub(1));
                            self.set_status("Nice! That's a valuable skill.");
                        }
                    }
                    _ => {}
                }
            }
            SkillField::Resume => match code {
                KeyCode::Right => form.candidate = step_index(form.candidate, form.candidates.len(), true),
                KeyCode::Left => form.candidate = step_index(form.candidate, form.candidates.len(), false),
                KeyCode::Enter => self.attach_selected_resume(),
                KeyCode::Delete | KeyCode::Backspace => {
                    if form.resume.take().is_some() {
                        self.set_status("Resume removed.");
                    }
                }
                _ => {}
            },
            SkillField::Submit => {
                if code == KeyCode::Enter {
                    self.submit_skills();
                }
            }
        }
    }

    fn attach_selected_resume(&mut self) {
        let Some(path) = self.forms.skills.candidates.get(self.forms.skills.candidate).cloned() else {
            self.set_status("No .pdf/.docx/.txt files found in this directory.");
            return;
        };

        let meta = match read_file_meta(&path) {
            Ok(meta) => meta,
            Err(err) => {
                self.set_status(err.to_string());
                return;
            }
        };

        match validate_upload(&meta) {
            Ok(resume) => {
                self.forms.skills.resume = Some(resume);
                self.set_status("Resume uploaded successfully! We only use it to help you grow.");
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    fn submit_skills(&mut self) {
        let skills = self.forms.skills.skills.clone();
        let resume = self.forms.skills.resume.clone();
        match self.wizard.complete_skill_assessment(skills, resume) {
            Ok(()) => {
                self.forms.browser = BrowserState::default();
                self.set_status("Your skills match these careers.");
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    fn handle_browser_key(&mut self, code: KeyCode) {
        let browser = &mut self.forms.browser;
        let len = browser.visible().len();
        match code {
            KeyCode::Esc => {
                self.wizard.back();
                self.load_skill_form();
                self.set_status("Back to skill assessment.");
            }
            KeyCode::Down => browser.selected = step_index(browser.selected, len, true),
            KeyCode::Up => browser.selected = step_index(browser.selected, len, false),
            KeyCode::Right => {
                browser.filter = browser.filter.next();
                browser.selected = 0;
                let filter = browser.filter;
                self.set_status(format!("industry: {}", filter.display_name()));
            }
            KeyCode::Left => {
                browser.filter = browser.filter.prev();
                browser.selected = 0;
                let filter = browser.filter;
                self.set_status(format!("industry: {}", filter.display_name()));
            }
            KeyCode::Char('g') => {
                browser.goal = browser.goal.next();
                let goal = browser.goal;
                self.set_status(format!("show paths for: {}", goal.display_name()));
            }
            KeyCode::Enter => {
                let id = browser.visible().get(browser.selected).map(|c| c.id);
                match id {
                    Some(id) => self.choose(id),
                    None => self.set_status("No career paths match this filter."),
                }
            }
            KeyCode::Char('c') => self.choose(GENERIC_PATH_ID),
            _ => {}
        }
    }

    fn choose(&mut self, id: &str) {
        match self.wizard.choose_path(id) {
            Ok(()) => self.set_status("Press q to finish."),
            Err(err) => self.set_status(err.to_string()),
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('n') => {
                self.navigate(Page::Wizard);
                false
            }
            KeyCode::Char('d') => {
                self.navigate(Page::Discovery);
                false
            }
            _ => false,
        }
    }

    pub(super) fn draw_wizard(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        match self.wizard.screen() {
            Screen::Onboarding => self.draw_onboarding(frame, area),
            Screen::SkillAssessment => self.draw_skills(frame, area),
            Screen::CareerPaths => self.draw_browser(frame, area),
            Screen::Results => self.draw_results(frame, area),
        }
    }

    fn draw_onboarding(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let form = &self.forms.onboarding;
        let focused = |f: OnboardingField| focus_style(form.field == f);

        let education = form
            .draft
            .education
            .map(Education::display_name)
            .unwrap_or("Select your education level");

        let suggestions: Vec<Span> = form
            .draft
            .remaining_suggestions()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let style = if form.field == OnboardingField::Suggestions && i == form.suggestion {
                    focus_style(true)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Span::styled(format!(" + {s} "), style)
            })
            .collect();

        let interests: Vec<&str> = form.draft.interests.iter().collect();

        let submit_style = if form.draft.is_valid() {
            focused(OnboardingField::Submit).add_modifier(Modifier::BOLD)
        } else {
            focused(OnboardingField::Submit).fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(Span::styled(
                "Unlock Your Potential. Chart Your Future.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Let's get started with some basic information."),
            Line::from(""),
            Line::from(vec![
                Span::raw("Your Name *            "),
                Span::styled(format!("[{}]", form.draft.name), focused(OnboardingField::Name)),
            ]),
            Line::from(vec![
                Span::raw("Highest Education *    "),
                Span::styled(format!("< {education} >"), focused(OnboardingField::Education)),
            ]),
            Line::from(vec![
                Span::raw("What excites you?      "),
                Span::styled(format!("[{}]", form.interest_input), focused(OnboardingField::Interest)),
            ]),
            Line::from({
                let mut spans = vec![Span::raw("Suggestions            ")];
                spans.extend(suggestions);
                spans
            }),
            Line::from(format!("Your interests:        {}", interests.join(", "))),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Start My Journey ", submit_style),
                Span::raw("   "),
                Span::styled(" Explore More ", focused(OnboardingField::Explore)),
            ]),
        ];

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Welcome to CareerCraft!").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_skills(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let form = &self.forms.skills;
        let focused = |f: SkillField| focus_style(form.field == f);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let resume_line = match &form.resume {
            Some(r) => format!("{} ({:.2} MB)", r.name, r.size_mb()),
            None => "none".to_string(),
        };
        let candidate_line = match form.candidates.get(form.candidate) {
            Some(path) => format!(
                "< {} > ({}/{})",
                pretty_path(path.strip_prefix(&self.resume_root).unwrap_or(path.as_path())),
                form.candidate + 1,
                form.candidates.len()
            ),
            None => "no .pdf/.docx/.txt files found".to_string(),
        };
        let upload = Paragraph::new(Text::from(vec![
            Line::from("Upload your resume for analysis."),
            Line::from("Supported formats: PDF, DOCX, TXT (Max 5MB)"),
            Line::from(""),
            Line::from(vec![
                Span::raw("File:    "),
                Span::styled(candidate_line, focused(SkillField::Resume)),
            ]),
            Line::from(format!("Current: {resume_line}")),
        ]))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Resume").borders(Borders::ALL));
        frame.render_widget(upload, chunks[0]);

        let suggestions: Vec<Span> = form
            .skills
            .visible_suggestions()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let style = if form.field == SkillField::Suggestions && i == form.suggestion {
                    focus_style(true)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Span::styled(format!(" + {s} "), style)
            })
            .collect();
        let skills: Vec<&str> = form.skills.iter().collect();

        let manual = Paragraph::new(Text::from(vec![
            Line::from("Add as many relevant skills as you can think of."),
            Line::from(""),
            Line::from(vec![
                Span::raw("Skill: "),
                Span::styled(format!("[{}]", form.input), focused(SkillField::Input)),
            ]),
            Line::from(suggestions),
            Line::from(""),
            Line::from(format!("Your skills ({}): {}", skills.len(), skills.join(", "))),
            Line::from(""),
            Line::from(Span::styled(
                " Analyze Skills & See My Graph ",
                focused(SkillField::Submit).add_modifier(Modifier::BOLD),
            )),
        ]))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Your Skills").borders(Borders::ALL));
        frame.render_widget(manual, chunks[1]);
    }

    fn draw_browser(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let browser = &self.forms.browser;
        let skills = self.wizard.skills();
        let visible = browser.visible();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let name = self.wizard.profile().name.trim();
        let filters = Paragraph::new(Line::from(vec![
            Span::raw(format!("Paths where you can thrive, {}.  ", if name.is_empty() { "there" } else { name })),
            Span::styled(
                format!("Industry: < {} >", browser.filter.display_name()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("  Show paths for: {}", browser.goal.display_name())),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(filters, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let items: Vec<ListItem> = visible
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<28}", c.title)),
                    Span::styled(format!("{:>3}%", c.match_score), Style::default().fg(score_color(c.match_score))),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Your Skills Match These Careers").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");
        let mut state = ListState::default();
        state.select((!visible.is_empty()).then_some(browser.selected));
        frame.render_stateful_widget(list, body[0], &mut state);

        let detail = match visible.get(browser.selected) {
            Some(career) => {
                let (badges, hidden) = skill_badges(career, skills);
                let mut badge_spans: Vec<Span> = badges
                    .iter()
                    .map(|b| {
                        let style = if b.matched {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        Span::styled(format!(" {} ", b.skill), style)
                    })
                    .collect();
                if hidden > 0 {
                    badge_spans.push(Span::raw(format!(" +{hidden} more")));
                }
                Text::from(vec![
                    Line::from(Span::styled(career.title, Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(career.industry.display_name()),
                    Line::from(career.description),
                    Line::from(""),
                    Line::from(vec![
                        Span::raw("Skill Match: "),
                        Span::styled(format!("{}%", career.match_score), Style::default().fg(score_color(career.match_score))),
                    ]),
                    Line::from(format!("Job Growth:  {} (5yr)", career.growth_rate)),
                    Line::from(format!("Avg Salary:  {}", career.average_salary)),
                    Line::from(format!(
                        "You have {} of {} key skills",
                        matched_count(career, skills),
                        career.required_skills.len()
                    )),
                    Line::from(""),
                    Line::from(badge_spans),
                ])
            }
            None => Text::from("No career paths match this filter."),
        };
        let p = Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Explore Path").borders(Borders::ALL));
        frame.render_widget(p, body[1]);
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let profile = self.wizard.profile();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Congratulations, {}!", profile.name.trim()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Your career analysis is being processed."),
            Line::from(""),
        ];

        match self.wizard.chosen_career() {
            Some(career) => lines.push(Line::from(format!("Chosen path: {}", career.title))),
            None => lines.push(Line::from("Chosen path: no specific path")),
        }

        if !self.wizard.skills().is_empty() {
            let skills: Vec<&str> = self.wizard.skills().iter().collect();
            lines.push(Line::from(format!("Your Skills: {}", skills.join(", "))));
        }
        if let Some(resume) = self.wizard.resume() {
            lines.push(Line::from(format!("Uploaded Resume: {}", resume.name)));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Results").borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
