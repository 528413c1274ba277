use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{AnswerResult, QuizSession};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    if let Some(question) = session.current_question() {
        render_question_text(frame, chunks[1], question.prompt());
    }
    render_input(frame, chunks[2], app.input());
    if let Some(result) = session.current_answer() {
        render_feedback(frame, chunks[3], result);
    }
    render_controls(frame, chunks[5], session.current_answer().is_some());
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let progress = format!(
        "score {}  ·  {}/{}",
        session.score(),
        session.question_index(),
        session.target_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let widget = Paragraph::new(Span::styled(input, Style::default().fg(Color::Yellow))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, result: AnswerResult) {
    let line = if result.correct {
        Line::from(Span::styled("Correct!", Style::default().fg(Color::Green).bold()))
    } else {
        Line::from(Span::styled(
            format!("Wrong, the answer is {}", result.correct_answer),
            Style::default().fg(Color::Red).bold(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let text = if answered {
        "enter continue  ·  esc settings"
    } else {
        "type answer  ·  enter submit  ·  esc settings"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
