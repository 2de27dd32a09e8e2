use ratatui::{prelude::*, widgets::Paragraph};

use crate::widgets::DoubleHalf;

pub fn render(frame: &mut Frame, area: Rect, double_half: &DoubleHalf) {
    let content = vec![
        Line::from(Span::styled(
            "Double Half",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The current value is: "),
            Span::styled(
                double_half.value().to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[h]", Style::default().fg(Color::Green).bold()),
            Span::raw(" Halve   "),
            Span::styled("[d]", Style::default().fg(Color::Green).bold()),
            Span::raw(" Double"),
        ]),
    ];

    frame.render_widget(Paragraph::new(content), area);
}
