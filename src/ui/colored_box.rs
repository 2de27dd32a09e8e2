use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::widgets::ColoredBox;

const SWATCH_WIDTH: u16 = 6;
const SWATCH_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, colored_box: &ColoredBox) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(SWATCH_HEIGHT),
        Constraint::Fill(1),
    ])
    .split(area);

    let heading = Paragraph::new(Span::styled(
        "Colored Box",
        Style::default().fg(Color::Cyan).bold(),
    ));
    frame.render_widget(heading, chunks[0]);

    let status = Paragraph::new(format!("The current color is: {}", colored_box.color()));
    frame.render_widget(status, chunks[1]);

    let row = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(SWATCH_WIDTH),
        Constraint::Fill(1),
    ])
    .split(chunks[2]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled("[n]", Style::default().fg(Color::Green).bold()),
        Span::raw(" Next Color"),
    ]));
    frame.render_widget(button, row[0]);

    let swatch = Block::default().style(Style::default().bg(swatch_color(colored_box.color())));
    frame.render_widget(swatch, row[1]);
}

fn swatch_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        _ => Color::Reset,
    }
}
