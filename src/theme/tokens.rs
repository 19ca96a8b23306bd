//! Midnight Garden design tokens.
//!
//! Pixel values mirror the mobile design system; the `cells` columns are
//! what the terminal renderer actually uses.

use ratatui::style::Color;

// ============================================================================
// Colors
// ============================================================================

pub const BACKGROUND_PRIMARY: Color = Color::Rgb(15, 15, 26); // #0f0f1a
pub const BACKGROUND_SECONDARY: Color = Color::Rgb(26, 26, 46); // #1a1a2e
pub const BACKGROUND_TERTIARY: Color = Color::Rgb(37, 37, 61); // #25253d

pub const ACCENT_PRIMARY: Color = Color::Rgb(139, 92, 246); // #8b5cf6
pub const ACCENT_SECONDARY: Color = Color::Rgb(6, 182, 212); // #06b6d4
pub const ACCENT_WARNING: Color = Color::Rgb(245, 158, 11); // #f59e0b

pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #f8fafc
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225); // #cbd5e1
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748b

pub const BORDER_SUBTLE: Color = Color::Rgb(46, 46, 72); // #2e2e48

/// Extra avatar accents outside the semantic palette.
pub const AVATAR_PINK: Color = Color::Rgb(236, 72, 153); // #ec4899
pub const AVATAR_BLUE: Color = Color::Rgb(59, 130, 246); // #3b82f6

// ============================================================================
// Typography (font size, line height, weight)
// ============================================================================

pub const TYPE_DISPLAY: (u16, u16, u16) = (40, 48, 800);
pub const TYPE_HEADING: (u16, u16, u16) = (24, 32, 700);
pub const TYPE_BODY: (u16, u16, u16) = (16, 24, 400);
pub const TYPE_CAPTION: (u16, u16, u16) = (13, 18, 500);
pub const TYPE_TINY: (u16, u16, u16) = (11, 14, 500);

// ============================================================================
// Spacing (pixels, cells)
// ============================================================================

pub const SPACE_XS: (u16, u16) = (4, 1);
pub const SPACE_SM: (u16, u16) = (8, 1);
pub const SPACE_MD: (u16, u16) = (16, 2);
pub const SPACE_LG: (u16, u16) = (24, 3);
pub const SPACE_XL: (u16, u16) = (32, 4);
pub const SPACE_XXL: (u16, u16) = (48, 6);
