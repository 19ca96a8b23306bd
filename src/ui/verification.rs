use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::spinner_frame;
use crate::app::App;
use crate::onboarding::{Field, VerificationState, VerificationStep};
use crate::theme::{ColorRole, ShadowPreset, Theme, TypeScale};

const WHY_VERIFY: &str = "We verify college credentials to ensure a safe, authentic community. \
Your login details are only used once for verification and never stored.";

pub fn render_verification(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.color(ColorRole::BackgroundPrimary))),
        area,
    );
    let inner = area.inner(Margin::new(2, 1));
    let state = &app.verification;

    match state.step() {
        VerificationStep::College => render_college_step(frame, theme, state, app.tick_count, inner),
        VerificationStep::Username => {
            render_username_step(frame, theme, state, app.tick_count, inner)
        }
        VerificationStep::Success => render_success(frame, theme, inner),
    }
}

fn header<'a>(theme: &Theme, icon: &'a str, title: &'a str, subtitle: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::raw(icon),
        Line::styled(title, theme.text_style(TypeScale::Heading, None)),
        Line::styled(
            subtitle,
            theme.text_style(TypeScale::Body, Some(theme.color(ColorRole::TextSecondary))),
        ),
    ]
}

fn field_widget<'a>(
    theme: &Theme,
    state: &VerificationState,
    field: Field,
    placeholder: &'a str,
) -> Paragraph<'a> {
    let focused = state.focus() == field;
    let value = state.display_value(field);
    let line = if value.is_empty() {
        Line::styled(placeholder, Style::default().fg(theme.color(ColorRole::TextMuted)))
    } else if field == Field::College {
        Line::from(vec![
            Span::styled(value, theme.text_style(TypeScale::Body, None)),
            Span::styled("  ◀ ▶", Style::default().fg(theme.color(ColorRole::TextMuted))),
        ])
    } else {
        Line::styled(value, theme.text_style(TypeScale::Body, None))
    };
    let (border_type, border_style) = theme.box_shadow(if focused {
        ShadowPreset::Glow
    } else {
        ShadowPreset::Sm
    });
    Paragraph::new(line).block(
        Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style),
    )
}

fn submit_line<'a>(theme: &Theme, state: &VerificationState, label: &'a str, ready: bool, tick: u64) -> Line<'a> {
    if state.is_pending() {
        return Line::styled(
            format!("{} Verifying...", spinner_frame(tick)),
            Style::default().fg(theme.color(ColorRole::AccentSecondary)),
        );
    }
    let style = if ready {
        Style::default().fg(theme.color(ColorRole::AccentPrimary)).bold()
    } else {
        Style::default().fg(theme.color(ColorRole::TextMuted))
    };
    Line::styled(format!("[Enter] {}", label), style)
}

fn issue_line(theme: &Theme, state: &VerificationState) -> Line<'static> {
    match state.last_issue() {
        Some(issue) => Line::styled(
            issue.message(),
            Style::default().fg(theme.color(ColorRole::AccentWarning)),
        ),
        None => Line::default(),
    }
}

fn render_college_step(frame: &mut Frame, theme: &Theme, state: &VerificationState, tick: u64, area: Rect) {
    let why_height = if state.show_why_verify() { 4 } else { 1 };
    let [head, college, login, password, why, submit, issue, badges] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(why_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(header(
            theme,
            "🔒",
            "Verify your college",
            "We verify students to keep Vibe safe and authentic",
        )),
        head,
    );
    frame.render_widget(field_widget(theme, state, Field::College, "Select your college"), college);
    frame.render_widget(field_widget(theme, state, Field::ErpLogin, "Enter your ERP login"), login);
    frame.render_widget(
        field_widget(theme, state, Field::ErpPassword, "Enter your ERP password"),
        password,
    );

    let marker = if state.show_why_verify() { "−" } else { "+" };
    let mut why_lines = vec![Line::styled(
        format!("🛡️ Why we verify? {}  [F1]", marker),
        Style::default().fg(theme.color(ColorRole::TextSecondary)),
    )];
    if state.show_why_verify() {
        why_lines.push(Line::styled(
            WHY_VERIFY,
            theme.text_style(TypeScale::Caption, Some(theme.color(ColorRole::TextMuted))),
        ));
    }
    frame.render_widget(Paragraph::new(why_lines).wrap(Wrap { trim: true }), why);

    frame.render_widget(
        Paragraph::new(submit_line(theme, state, "Send Verification", true, tick)),
        submit,
    );
    frame.render_widget(Paragraph::new(issue_line(theme, state)), issue);
    frame.render_widget(
        Paragraph::new("🔐 End-to-end encrypted   👤 Anonymous until you choose")
            .style(theme.text_style(TypeScale::Tiny, Some(theme.color(ColorRole::TextMuted)))),
        badges,
    );
}

fn render_username_step(frame: &mut Frame, theme: &Theme, state: &VerificationState, tick: u64, area: Rect) {
    let [head, username, password, confirm, notice, submit, issue] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(header(
            theme,
            "✓",
            "College verified!",
            "Now let's set up your anonymous profile",
        )),
        head,
    );

    let username_line = Line::from(vec![
        Span::styled(
            state.generated_username().to_string(),
            theme.text_style(TypeScale::Body, Some(theme.color(ColorRole::AccentSecondary))),
        ),
        Span::styled("  RANDOM", Style::default().fg(theme.color(ColorRole::TextMuted))),
    ]);
    frame.render_widget(
        Paragraph::new(username_line).block(
            Block::default()
                .title("Your anonymous username")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.color(ColorRole::BorderSubtle))),
        ),
        username,
    );
    frame.render_widget(field_widget(theme, state, Field::Password, "Min. 8 characters"), password);
    frame.render_widget(
        field_widget(theme, state, Field::ConfirmPassword, "Re-enter password"),
        confirm,
    );

    if state.verification_sent() {
        frame.render_widget(
            Paragraph::new(
                "📧 Verification email sent! Check your college email to activate your account.",
            )
            .style(Style::default().fg(theme.color(ColorRole::AccentSecondary)))
            .wrap(Wrap { trim: true }),
            notice,
        );
    }

    frame.render_widget(
        Paragraph::new(submit_line(theme, state, "Complete Setup", state.password_ready(), tick)),
        submit,
    );
    frame.render_widget(Paragraph::new(issue_line(theme, state)), issue);
}

fn render_success(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::raw("🎉"),
        Line::default(),
        Line::styled("Welcome to Vibe!", theme.text_style(TypeScale::Display, None)),
        Line::styled(
            "Your account is being activated. You'll be redirected shortly...",
            theme.text_style(TypeScale::Body, Some(theme.color(ColorRole::TextSecondary))),
        ),
    ];
    let content = super::helpers::centered_rect(area, area.width, lines.len() as u16 + 1);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content,
    );
}
