//! Home feed: status bar, discovery card, actions and bottom navigation.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ad_banner::render_ad_banner;
use super::helpers::{centered_rect, scale_horizontally, spinner_frame, truncate_to_width};
use crate::ads::AdPosition;
use crate::app::{App, DiscoveryScreen, ScopedTasks};
use crate::discovery::{CardVisual, SessionState, LOW_BUDGET_THRESHOLD};
use crate::models::Profile;
use crate::theme::{blend, ColorRole, ShadowPreset, Theme, TypeScale};

const NAV_ITEMS: [(&str, &str); 4] = [("🏠", "Home"), ("🚪", "Rooms"), ("💬", "Chats"), ("👤", "Profile")];

pub fn render_home(frame: &mut Frame, app: &App, now: Instant) {
    let theme = app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.color(ColorRole::BackgroundPrimary))),
        area,
    );

    // The empty state takes over the whole screen.
    let exhausted = app
        .discovery
        .as_ref()
        .is_some_and(|screen| screen.session().is_exhausted());
    if exhausted {
        render_empty(frame, theme, area);
        return;
    }

    let banner_height = app
        .banner
        .as_ref()
        .filter(|b| b.is_visible())
        .map(|b| b.size().height_cells())
        .unwrap_or(0);
    let banner_on_top = app
        .banner
        .as_ref()
        .is_some_and(|b| b.position() == AdPosition::Top);
    let (top_banner, bottom_banner) = if banner_on_top {
        (banner_height, 0)
    } else {
        (0, banner_height)
    };

    let [top_ad, status, card, actions, bottom_ad, nav] = Layout::vertical([
        Constraint::Length(top_banner),
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(bottom_banner),
        Constraint::Length(1),
    ])
    .areas(area);

    if let Some(banner) = app.banner.as_ref() {
        let slot = if banner_on_top { top_ad } else { bottom_ad };
        render_ad_banner(frame, theme, banner, app.ads.is_test_mode(), slot);
    }

    match app.discovery.as_ref() {
        Some(screen) => {
            render_status_bar(frame, theme, screen.session().chat_budget(), status);
            render_feed(frame, theme, screen, now, card, actions);
        }
        None => render_loading(frame, app, card),
    }
    render_nav(frame, theme, nav);
}

fn render_status_bar(frame: &mut Frame, theme: &Theme, remaining: u32, area: Rect) {
    let color = if remaining <= LOW_BUDGET_THRESHOLD {
        theme.color(ColorRole::AccentWarning)
    } else {
        theme.color(ColorRole::TextSecondary)
    };
    let line = Line::from(vec![
        Span::raw("💬 "),
        Span::styled(
            format!("{} chat slots remaining", remaining),
            theme.text_style(TypeScale::Caption, Some(color)),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.color(ColorRole::BackgroundSecondary))),
        area,
    );
}

fn render_feed(
    frame: &mut Frame,
    theme: &Theme,
    screen: &DiscoveryScreen<ScopedTasks>,
    now: Instant,
    card_area: Rect,
    actions_area: Rect,
) {
    let session = screen.session();
    if let Some(profile) = session.current_profile() {
        render_card(frame, theme, profile, screen.card_visual(now), card_area);
    }
    render_actions(
        frame,
        theme,
        session.state() == SessionState::Idle,
        session.can_request_chat(),
        actions_area,
    );
}

/// The profile card, faded and shrunk according to `visual`.
pub fn render_card(frame: &mut Frame, theme: &Theme, profile: &Profile, visual: CardVisual, area: Rect) {
    let card_bg = theme.color(ColorRole::BackgroundSecondary);
    let page_bg = theme.color(ColorRole::BackgroundPrimary);
    let fade = |color: Color| blend(color, page_bg, visual.opacity);

    let area = scale_horizontally(area.inner(Margin::new(2, 0)), visual.scale);
    let (border_type, border_style) = theme.box_shadow(ShadowPreset::Lg);
    let border_color = border_style.fg.unwrap_or(theme.color(ColorRole::BorderSubtle));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(fade(border_color)))
        .style(Style::default().bg(fade(card_bg)));

    let accent = theme.avatar_accent(&profile.anonymous_avatar);
    let muted = fade(theme.color(ColorRole::TextMuted));

    let interests: Vec<Span> = profile
        .public_interests
        .iter()
        .flat_map(|interest| {
            [
                Span::styled(
                    format!(" {} ", truncate_to_width(interest, 18)),
                    Style::default()
                        .fg(fade(theme.color(ColorRole::TextPrimary)))
                        .bg(fade(theme.color(ColorRole::BackgroundTertiary))),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let lines = vec![
        Line::styled(
            format!("● Vibe Match: {}%", profile.vibe_match_score),
            theme.text_style(TypeScale::Caption, Some(fade(theme.color(ColorRole::AccentPrimary)))),
        ),
        Line::default(),
        Line::styled(
            format!("  {}  ", profile.anonymous_avatar),
            Style::default().bg(fade(accent)),
        ),
        Line::default(),
        Line::styled(
            profile.affiliation(),
            theme.text_style(TypeScale::Body, Some(fade(theme.color(ColorRole::TextSecondary)))),
        ),
        Line::default(),
        Line::from(interests),
        Line::default(),
        Line::styled(
            format!("🔒 {} shared interests", profile.shared_interest_count),
            theme.text_style(TypeScale::Body, Some(fade(theme.color(ColorRole::AccentSecondary)))),
        ),
        Line::styled(
            "Start chatting to reveal hidden interests and identity",
            theme.text_style(TypeScale::Tiny, Some(muted)),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_empty(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::raw("🎉"),
        Line::styled("That's everyone for now!", theme.text_style(TypeScale::Heading, None)),
        Line::styled(
            "Check back later for new vibes",
            theme.text_style(TypeScale::Body, Some(theme.color(ColorRole::TextSecondary))),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area, area.width, 3),
    );
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let lines = match app.load_error.as_ref() {
        Some(err) => vec![
            Line::styled(
                err.user_message(),
                Style::default().fg(theme.color(ColorRole::AccentWarning)),
            ),
            Line::styled("[r] Retry", Style::default().fg(theme.color(ColorRole::TextMuted))),
        ],
        None => vec![Line::styled(
            format!("{} Finding your vibes...", spinner_frame(app.tick_count)),
            Style::default().fg(theme.color(ColorRole::TextSecondary)),
        )],
    };
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered_rect(area, area.width, height),
    );
}

fn render_actions(frame: &mut Frame, theme: &Theme, can_pass: bool, can_chat: bool, area: Rect) {
    let [pass_area, chat_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(area.inner(Margin::new(2, 0)));

    let muted = theme.color(ColorRole::TextMuted);
    let button = |label: &'static str, enabled: bool, color: Color| {
        let color = if enabled { color } else { muted };
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
    };

    frame.render_widget(
        button("✕ Pass  [p]", can_pass, theme.color(ColorRole::TextSecondary)),
        pass_area,
    );
    frame.render_widget(
        button("💬 Chat Request  [c]", can_chat, theme.color(ColorRole::AccentPrimary)),
        chat_area,
    );
}

fn render_nav(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut spans = Vec::new();
    for (i, (icon, label)) in NAV_ITEMS.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(theme.color(ColorRole::AccentPrimary)).bold()
        } else {
            Style::default().fg(theme.color(ColorRole::TextMuted))
        };
        spans.push(Span::styled(format!(" {} {} ", icon, label), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.color(ColorRole::BackgroundSecondary))),
        area,
    );
}
