use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SettingsField};
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(15),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let settings = app.settings();
    let (mascot, description) = match settings.difficulty() {
        Some(difficulty) => (difficulty.mascot(), difficulty.description().to_string()),
        None => (
            "🧮",
            format!(
                "Custom: {} questions from tables 2 through {}",
                settings.question_amount(),
                settings.highest_table()
            ),
        ),
    };

    let preset = settings
        .difficulty()
        .map_or("custom", Difficulty::as_str)
        .to_string();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "MULTIPRACTICE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(mascot),
        Line::from(Span::styled(description, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        setting_line("Difficulty", preset, app.focus() == SettingsField::Preset),
        setting_line(
            "Highest table",
            settings.highest_table().to_string(),
            app.focus() == SettingsField::HighestTable,
        ),
        setting_line(
            "Questions",
            settings.question_amount().to_string(),
            app.focus() == SettingsField::QuestionAmount,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to play".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
    render_controls(frame, chunks[3]);
}

fn setting_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!("{} {}: ", marker, label), style),
        Span::styled(format!("< {} >", value), style),
    ])
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k select  ·  h/l change  ·  enter play  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
