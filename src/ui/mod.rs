mod colored_box;
mod double_half;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_tabs(frame, chunks[0], app.screen);

    let body = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray);
    let inner = body.inner(chunks[1]);
    frame.render_widget(body, chunks[1]);

    match app.screen {
        Screen::ColoredBox => colored_box::render(frame, inner, app.colored_box()),
        Screen::DoubleHalf => double_half::render(frame, inner, app.double_half()),
    }

    render_controls(frame, chunks[2], app.screen);
}

fn render_tabs(frame: &mut Frame, area: Rect, screen: Screen) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(label, Style::default().fg(Color::Cyan).bold())
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        tab(" Colored Box ", screen == Screen::ColoredBox),
        Span::raw("|"),
        tab(" Double Half ", screen == Screen::DoubleHalf),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, screen: Screen) {
    let hint = match screen {
        Screen::ColoredBox => "n next color  ·  tab switch  ·  q quit",
        Screen::DoubleHalf => "h halve  ·  d double  ·  tab switch  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
