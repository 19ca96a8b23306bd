use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::ads::AdBanner;
use crate::theme::{ColorRole, Theme, TypeScale};

/// Draw the banner slot. Hidden banners draw nothing.
pub fn render_ad_banner(frame: &mut Frame, theme: &Theme, banner: &AdBanner, test_mode: bool, area: Rect) {
    if !banner.is_visible() || area.height == 0 {
        return;
    }
    let title = if test_mode { " Ad · test " } else { " Ad " };
    let text = if banner.is_opened() {
        "Sponsored content open  [a] close".to_string()
    } else if banner.is_loaded() {
        "Sponsored  [a] open".to_string()
    } else {
        "Loading ad...".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.color(ColorRole::BorderSubtle)));
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(theme.text_style(TypeScale::Caption, Some(theme.color(ColorRole::TextMuted))))
            .block(block),
        area,
    );
}
