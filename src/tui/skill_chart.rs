//! Plotters-powered skill chart widget for Ratatui.
//!
//! Plots current against target proficiency for each tracked skill. Skills sit
//! on the x axis by index; the y axis is a 0-100 percentage.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::catalog::SkillMetric;
use crate::report::format::truncate;

/// Render-only description of the chart. Series are built from `metrics` at draw time.
pub struct SkillChart<'a> {
    pub metrics: &'a [SkillMetric],
    /// Longest skill label on the x axis, in characters.
    pub label_width: usize,
}

impl<'a> SkillChart<'a> {
    pub fn new(metrics: &'a [SkillMetric]) -> Self {
        Self {
            metrics,
            label_width: 10,
        }
    }

    fn current_series(&self) -> Vec<(f64, f64)> {
        self.metrics
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, f64::from(m.current)))
            .collect()
    }

    fn target_series(&self) -> Vec<(f64, f64)> {
        self.metrics
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, f64::from(m.target)))
            .collect()
    }

    /// Skill name for an x tick, or empty between skills.
    fn tick_label(&self, x: f64) -> String {
        let rounded = x.round();
        if (x - rounded).abs() > 0.05 || rounded < 0.0 {
            return String::new();
        }
        self.metrics
            .get(rounded as usize)
            .map(|m| truncate(m.name, self.label_width))
            .unwrap_or_default()
    }
}

impl<'a> Widget for SkillChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if self.metrics.is_empty() {
            return;
        }

        let current = self.current_series();
        let target = self.target_series();
        let x1 = self.metrics.len() as f64 - 0.5;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 5)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(-0.5..x1, 0.0..100.0)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc("%")
                .x_labels(self.metrics.len() * 2 + 1)
                .y_labels(5)
                .x_label_formatter(&|v| self.tick_label(*v))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let current_color = RGBColor(0, 255, 255); // cyan
            let target_color = RGBColor(0, 255, 0); // green

            chart.draw_series(LineSeries::new(target.iter().copied(), &target_color))?;
            chart.draw_series(LineSeries::new(current.iter().copied(), &current_color))?;

            // Pixel markers; the backend maps circle radii poorly.
            chart.draw_series(target.iter().map(|&(x, y)| Pixel::new((x, y), target_color)))?;
            chart.draw_series(current.iter().map(|&(x, y)| Pixel::new((x, y), WHITE)))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SKILL_METRICS;

    #[test]
    fn series_follow_metric_order() {
        let chart = SkillChart::new(&SKILL_METRICS);
        let current = chart.current_series();
        assert_eq!(current.len(), SKILL_METRICS.len());
        assert_eq!(current[1], (1.0, 45.0));
        assert_eq!(chart.target_series()[3], (3.0, 60.0));
    }

    #[test]
    fn ticks_only_label_whole_positions() {
        let chart = SkillChart::new(&SKILL_METRICS);
        assert_eq!(chart.tick_label(2.0), "Data Anal.");
        assert_eq!(chart.tick_label(1.5), "");
        assert_eq!(chart.tick_label(-0.5), "");
        assert_eq!(chart.tick_label(7.0), "");
    }

    #[test]
    fn tiny_area_shows_hint() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        SkillChart::new(&SKILL_METRICS).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "C");
    }
}
