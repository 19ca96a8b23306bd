use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::onboarding::ONBOARDING_STEPS;
use crate::theme::{parse_hex, ColorRole, ShadowPreset, TypeScale};

pub fn render_vibe_check(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.color(ColorRole::BackgroundPrimary))),
        area,
    );

    let options = app.vibe_check.options();
    let [progress_area, header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(options.len() as u16 * 3),
        Constraint::Length(2),
    ])
    .areas(area.inner(Margin::new(2, 1)));

    // Step 1 of 3: first segment lit.
    let segment = "━━━━ ";
    let mut progress = vec![Span::styled(
        segment,
        Style::default().fg(theme.color(ColorRole::AccentPrimary)),
    )];
    for _ in 1..ONBOARDING_STEPS {
        progress.push(Span::styled(
            segment,
            Style::default().fg(theme.color(ColorRole::BorderSubtle)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(progress)), progress_area);

    let header = vec![
        Line::styled("What brings you here?", theme.text_style(TypeScale::Heading, None)),
        Line::styled(
            "Select all that match your vibe. You can change this anytime.",
            theme.text_style(TypeScale::Body, Some(theme.color(ColorRole::TextSecondary))),
        ),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), header_area);

    let rows = Layout::vertical(vec![Constraint::Length(3); options.len()]).split(list_area);
    for (i, (option, row)) in options.iter().zip(rows.iter()).enumerate() {
        let selected = app.vibe_check.is_selected(option.id);
        let focused = app.vibe_check.focused() == i;
        let accent = parse_hex(option.accent).unwrap_or(theme.color(ColorRole::AccentPrimary));

        let (border_type, mut border_style) = theme.box_shadow(if focused {
            ShadowPreset::Glow
        } else {
            ShadowPreset::Sm
        });
        if selected {
            border_style = border_style.fg(accent);
        }

        let mut spans = vec![
            Span::raw(format!("{} ", option.icon)),
            Span::styled(option.label, theme.text_style(TypeScale::Body, Some(accent)).bold()),
            Span::styled(
                format!("  {}", option.description),
                theme.text_style(TypeScale::Caption, Some(theme.color(ColorRole::TextMuted))),
            ),
        ];
        if selected {
            spans.push(Span::styled("  ✓", Style::default().fg(accent)));
        }

        let card = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
        frame.render_widget(card, *row);
    }

    let continue_style = if app.vibe_check.can_continue() {
        Style::default().fg(theme.color(ColorRole::AccentPrimary)).bold()
    } else {
        Style::default().fg(theme.color(ColorRole::TextMuted))
    };
    let footer = vec![
        Line::from(vec![
            Span::styled("[Enter] Continue", continue_style),
            Span::styled(
                "  [Space] Select  [↑↓] Move",
                Style::default().fg(theme.color(ColorRole::TextMuted)),
            ),
        ]),
        Line::styled(
            "You can change this anytime",
            theme.text_style(TypeScale::Tiny, Some(theme.color(ColorRole::TextMuted))),
        ),
    ];
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), footer_area);
}
