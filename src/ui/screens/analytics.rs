use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Sparkline,
    Frame,
};

use crate::mock_data::{self, HEALTH_SCORE, RISK_LEVEL};
use crate::models::{HealthMetric, Prediction, Priority, RiskFactor, VitalTrend};
use crate::ui::components::{
    badge, card_block, field_line, progress_text, render_card, render_progress_bar, render_tabs, render_title,
    trend_span, Tone,
};
use crate::ui::view::{Outbox, View, ViewContext};

const TABS: [&str; 4] = ["Predictions", "Health Trends", "Metrics", "Risk Analysis"];

/// Vital series plotted on the trends tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalSeries {
    Systolic,
    Diastolic,
    HeartRate,
    Weight,
}

impl VitalSeries {
    pub const ALL: [VitalSeries; 4] = [
        VitalSeries::Systolic,
        VitalSeries::Diastolic,
        VitalSeries::HeartRate,
        VitalSeries::Weight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VitalSeries::Systolic => "Systolic BP (mmHg)",
            VitalSeries::Diastolic => "Diastolic BP (mmHg)",
            VitalSeries::HeartRate => "Heart Rate (bpm)",
            VitalSeries::Weight => "Weight (x0.1 kg)",
        }
    }

    /// Sparkline points. Weight is scaled to tenths of a kilogram.
    pub fn values(self, trends: &[VitalTrend]) -> Vec<u64> {
        trends
            .iter()
            .map(|t| match self {
                VitalSeries::Systolic => u64::from(t.bp_systolic),
                VitalSeries::Diastolic => u64::from(t.bp_diastolic),
                VitalSeries::HeartRate => u64::from(t.heart_rate),
                VitalSeries::Weight => (t.weight * 10.0).round().max(0.0) as u64,
            })
            .collect()
    }
}

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Critical,
        Priority::Medium => Tone::Warning,
        Priority::Low => Tone::Good,
    }
}

/// Health score, predictions, vital trends, metrics and risk factors
pub struct AnalyticsView {
    predictions: Vec<Prediction>,
    trends: Vec<VitalTrend>,
    metrics: Vec<HealthMetric>,
    risks: Vec<RiskFactor>,
    tab: usize,
    series: usize,
}

impl Default for AnalyticsView {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self {
            predictions: mock_data::predictions(),
            trends: mock_data::vital_trends(),
            metrics: mock_data::health_metrics(),
            risks: mock_data::risk_factors(),
            tab: 0,
            series: 0,
        }
    }

    pub fn series(&self) -> VitalSeries {
        VitalSeries::ALL[self.series]
    }

    fn render_overview(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        render_progress_bar(f, columns[0], HEALTH_SCORE, &format!("Health Score {}/100", HEALTH_SCORE));
        let big = |text: String, color: Color| {
            vec![Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)))]
        };
        render_card(f, columns[1], "Risk Level", big(RISK_LEVEL.to_string(), Color::Green));
        render_card(f, columns[2], "Trend", big("Improving".to_string(), Color::Green));
        render_card(f, columns[3], "Predictions", big(self.predictions.len().to_string(), Color::Yellow));
    }

    fn render_predictions(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .predictions
            .iter()
            .flat_map(|p| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", p.condition), Style::default().add_modifier(Modifier::BOLD)),
                        badge(p.priority.label(), priority_tone(p.priority)),
                        Span::raw(" "),
                        trend_span(p.trend),
                    ]),
                    Line::from(format!("  {}", progress_text(p.probability.into(), 20))),
                    Line::from(Span::styled(format!("  {}", p.recommendation), Style::default().fg(Color::Gray))),
                ]
            })
            .collect();
        render_card(f, area, "Predictive Health Alerts", lines);
    }

    fn render_trends(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let series = self.series();
        let data = series.values(&self.trends);
        let sparkline = Sparkline::default()
            .block(card_block(&format!("Vital Signs Trends: {}", series.label())))
            .data(&data)
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(sparkline, chunks[0]);

        let first = self.trends.first().map(|t| t.date).unwrap_or("");
        let last = self.trends.last().map(|t| t.date).unwrap_or("");
        let latest = data.last().map(|v| v.to_string()).unwrap_or_else(|| "--".to_string());
        render_card(
            f,
            chunks[1],
            "Range",
            vec![field_line(&format!("{} to {}", first, last), &format!("latest {}", latest))],
        );
    }

    fn render_metrics(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .metrics
            .iter()
            .flat_map(|m| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", m.name), Style::default().add_modifier(Modifier::BOLD)),
                        trend_span(m.trend),
                        Span::styled(format!(" {}  target {}", m.change, m.target), Style::default().fg(Color::Gray)),
                    ]),
                    Line::from(format!("  {}", progress_text(m.score.into(), 20))),
                ]
            })
            .collect();
        render_card(f, area, "Health Metrics", lines);
    }

    fn render_risks(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let lines = self
            .risks
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(format!("{:<20}", r.name), Style::default().fg(Color::White)),
                    Span::raw(progress_text(r.value.into(), 15)),
                ])
            })
            .collect();
        render_card(f, columns[0], "Risk Factor Distribution", lines);

        let actions = [
            ("Daily Exercise", "30 minutes of physical activity", "Set Goal"),
            ("Stress Management", "Meditation or relaxation techniques", "Learn More"),
            ("Regular Check-ups", "Monthly health screenings", "Schedule"),
        ];
        let lines = actions
            .iter()
            .flat_map(|(title, detail, button)| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", title), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("[{}]", button), Style::default().fg(Color::Cyan)),
                    ]),
                    Line::from(Span::styled(format!("  {}", detail), Style::default().fg(Color::Gray))),
                ]
            })
            .collect();
        render_card(f, columns[1], "Preventive Actions", lines);
    }
}

impl View for AnalyticsView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Health Analytics",
            "AI-powered insights into your health patterns and predictions",
        );
        self.render_overview(f, chunks[1]);
        render_tabs(f, chunks[2], &TABS, self.tab);

        match self.tab {
            0 => self.render_predictions(f, chunks[3]),
            1 => self.render_trends(f, chunks[3]),
            2 => self.render_metrics(f, chunks[3]),
            _ => self.render_risks(f, chunks[3]),
        }
    }

    fn get_title(&self) -> String {
        "Analytics".to_string()
    }

    fn get_status(&self) -> String {
        format!("Health score {} • risk {}", HEALTH_SCORE, RISK_LEVEL)
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("←/→", "tabs"), ("s", "next series")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, _outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Char('s') => self.series = (self.series + 1) % VitalSeries::ALL.len(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
