use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::centered_rect;
use crate::app::App;
use crate::theme::{blend, ColorRole, TypeScale};

const LOGO: [&str; 3] = ["  ◉ ◎  ", " ◉◉ ◎◎ ", "  ◉ ◎  "];

pub fn render_splash(frame: &mut Frame, app: &App, now: Instant) {
    let theme = app.theme;
    let background = theme.color(ColorRole::BackgroundPrimary);
    frame.render_widget(Block::default().style(Style::default().bg(background)), frame.area());

    // Logo and text fade in together.
    let opacity = app.splash.intro_progress(now);
    let fade = |color: Color| blend(color, background, opacity);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| {
            Line::styled(
                *row,
                Style::default().fg(fade(theme.color(ColorRole::AccentPrimary))),
            )
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "Welcome To College Mate",
        theme.text_style(TypeScale::Display, Some(fade(theme.color(ColorRole::TextPrimary)))),
    ));
    lines.push(Line::styled(
        "Find your people without the pressure",
        theme.text_style(TypeScale::Body, Some(fade(theme.color(ColorRole::TextSecondary)))),
    ));

    let content = centered_rect(frame.area(), 44, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);

    let area = frame.area();
    if area.height > 2 {
        let hint_area = Rect::new(area.x, area.y + area.height - 2, area.width, 1);
        let hint = Paragraph::new("Press any key to start")
            .style(theme.text_style(TypeScale::Caption, Some(fade(theme.color(ColorRole::TextMuted)))))
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}
