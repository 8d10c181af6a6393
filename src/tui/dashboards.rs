//! Dashboard pages: discovery feed, career map and skill evolution.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
};

use super::App;
use super::skill_chart::SkillChart;
use crate::catalog::roadmap::TrackId;
use crate::catalog::{
    CRISIS_PREDICTIONS, LEARNING_PATH, MARKET_TRENDS, RiskLevel, SKILL_GAPS, SKILL_METRICS, Trend,
};
use crate::dashboard::{EvolutionTab, Page};

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Stable => Color::Gray,
    }
}

impl App {
    /// Follow the page's back arrow, if it has one.
    fn go_back(&mut self) {
        if let Some(page) = self.page.back_link() {
            self.navigate(page);
        }
    }

    fn go_forward(&mut self) {
        self.navigate(self.page.forward_link());
    }

    pub(super) fn handle_discovery_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.go_forward(),
            KeyCode::Up | KeyCode::Char('k') => self.feed.prev_video(),
            KeyCode::Down | KeyCode::Char('j') => self.feed.next_video(),
            KeyCode::Char('l') => {
                let liked = self.feed.toggle_like_current();
                self.set_status(if liked { "Liked." } else { "Like removed." });
            }
            _ => {}
        }
        false
    }

    pub(super) fn handle_map_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.go_forward(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.map.next_track();
                let title = self.map.track().title;
                self.set_status(title);
            }
            _ => {}
        }
        false
    }

    pub(super) fn handle_evolution_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.go_forward(),
            KeyCode::Tab | KeyCode::Right => self.evolution.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.evolution.prev_tab(),
            _ => {}
        }
        false
    }

    pub(super) fn draw_discovery(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(video) = self.feed.current() else {
            let p = Paragraph::new("No videos to show.")
                .block(Block::default().title(Page::Discovery.title()).borders(Borders::ALL));
            frame.render_widget(p, area);
            return;
        };

        let liked = self.feed.is_liked(video.id);
        let heart = if liked {
            Span::styled("♥", Style::default().fg(Color::Red))
        } else {
            Span::raw("♡")
        };
        let tags: Vec<Span> = video
            .tags
            .iter()
            .map(|t| Span::styled(format!(" #{t} "), Style::default().fg(Color::Cyan)))
            .collect();

        let lines = vec![
            Line::from(format!("{}  {}", video.thumbnail, video.company)),
            Line::from(Span::styled(video.title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(video.role),
            Line::from(""),
            Line::from(video.description),
            Line::from(""),
            Line::from(vec![
                Span::styled(video.salary, Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::styled(video.growth, Style::default().fg(Color::Yellow)),
            ]),
            Line::from(tags),
            Line::from(""),
            Line::from(vec![heart, Span::raw(format!(" {}", video.likes))]),
        ];

        let title = format!(
            "{} ({}/{})",
            Page::Discovery.title(),
            self.feed.index() + 1,
            self.feed.len()
        );
        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    pub(super) fn draw_map(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let track = self.map.track();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let selected = match self.map.selected() {
            TrackId::JobReady => 0,
            TrackId::FutureReady => 1,
        };
        let tabs = Tabs::new(vec!["Job-Ready", "Future-Ready"])
            .select(selected)
            .block(Block::default().title(Page::CareerMap.title()).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(tabs, chunks[0]);

        let summary = Paragraph::new(Text::from(vec![
            Line::from(format!(
                "{} | {} | {}",
                track.title,
                track.timeline,
                track.difficulty.label()
            )),
            Line::from(format!(
                "Future-proof: {}%  Market demand: {}%",
                track.future_proof, track.market_demand
            )),
            Line::from(format!("Core skills: {}", track.skills.join(", "))),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(summary, chunks[1]);

        let progress = track.progress_percent();
        let gauge = Gauge::default()
            .block(Block::default().title("Progress").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{progress:.0}% ({} of {} milestones)",
                track.completed_milestones(),
                track.milestones.len()
            ));
        frame.render_widget(gauge, chunks[2]);

        let current = track.current_milestone();
        let items: Vec<ListItem> = track
            .milestones
            .iter()
            .enumerate()
            .map(|(idx, m)| {
                let (marker, style) = if m.completed {
                    ("[x]", Style::default().fg(Color::Green))
                } else if Some(idx) == current {
                    ("[>]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    ("[ ]", Style::default().fg(Color::Gray))
                };
                ListItem::new(Text::from(vec![
                    Line::from(Span::styled(
                        format!("{marker} {}. {} ({})", idx + 1, m.title, m.timeframe),
                        style,
                    )),
                    Line::from(format!("      {}", m.description)),
                    Line::from(format!("      {}", m.skills.join(", "))),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().title("Milestones").borders(Borders::ALL));
        frame.render_widget(list, chunks[3]);
    }

    pub(super) fn draw_evolution(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<&str> = EvolutionTab::ALL.iter().map(|t| t.title()).collect();
        let tabs = Tabs::new(titles)
            .select(self.evolution.tab().index())
            .block(Block::default().title(Page::SkillEvolution.title()).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(tabs, chunks[0]);

        match self.evolution.tab() {
            EvolutionTab::Skills => self.draw_skill_metrics(frame, chunks[1]),
            EvolutionTab::Predictions => self.draw_predictions(frame, chunks[1]),
            EvolutionTab::Insights => self.draw_insights(frame, chunks[1]),
        }
    }

    fn draw_skill_metrics(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let lines: Vec<Line> = SKILL_METRICS
            .iter()
            .flat_map(|m| {
                [
                    Line::from(vec![
                        Span::styled(m.name, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                        Span::styled(m.trend.symbol(), Style::default().fg(trend_color(m.trend))),
                    ]),
                    Line::from(vec![
                        Span::raw(format!("  {}% -> {}% ({:+}%)  ", m.current, m.target, m.gap())),
                        Span::styled(
                            format!("{} risk", m.risk_level.label()),
                            Style::default().fg(risk_color(m.risk_level)),
                        ),
                        Span::raw(format!("  {}% future-proof", m.future_proof)),
                    ]),
                ]
            })
            .collect();
        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Current Skills").borders(Borders::ALL));
        frame.render_widget(p, chunks[0]);

        let block = Block::default()
            .title("Current (cyan) vs Target (green)")
            .borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(SkillChart::new(&SKILL_METRICS), inner);
    }

    fn draw_predictions(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines = Vec::new();
        for p in &CRISIS_PREDICTIONS {
            lines.push(Line::from(vec![
                Span::styled(p.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  {}% likely  ", p.probability)),
                Span::styled(
                    format!("{} impact", p.impact.label()),
                    Style::default().fg(risk_color(p.impact)),
                ),
                Span::raw(format!("  {}", p.timeline)),
            ]));
            lines.push(Line::from(format!("  {}", p.description)));
            for mitigation in p.mitigations {
                lines.push(Line::from(format!("  - {mitigation}")));
            }
            lines.push(Line::from(""));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Crisis Predictions").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_insights(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(area);

        let gaps: Vec<Line> = SKILL_GAPS
            .iter()
            .map(|(skill, gap, severity)| {
                Line::from(vec![
                    Span::raw(format!("{skill}: {gap}% gap ")),
                    Span::styled(severity.label(), Style::default().fg(risk_color(*severity))),
                ])
            })
            .collect();
        let p = Paragraph::new(Text::from(gaps))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Critical Skill Gaps").borders(Borders::ALL));
        frame.render_widget(p, chunks[0]);

        let trends: Vec<Line> = MARKET_TRENDS
            .iter()
            .map(|(role, change)| {
                let color = if *change < 0 { Color::Red } else { Color::Green };
                Line::from(vec![
                    Span::raw(format!("{role}: ")),
                    Span::styled(format!("{change:+}%"), Style::default().fg(color)),
                ])
            })
            .collect();
        let p = Paragraph::new(Text::from(trends))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Market Trends").borders(Borders::ALL));
        frame.render_widget(p, chunks[1]);

        let mut path = Vec::new();
        for (phase, steps) in &LEARNING_PATH {
            path.push(Line::from(Span::styled(*phase, Style::default().add_modifier(Modifier::BOLD))));
            for step in *steps {
                path.push(Line::from(format!("  {step}")));
            }
        }
        let p = Paragraph::new(Text::from(path))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Learning Path").borders(Borders::ALL));
        frame.render_widget(p, chunks[2]);
    }
}
