//! Read-only design tokens for the terminal client.
//!
//! The theme is resolved once into a process-wide [`Theme`] and never
//! mutated. Screens look values up by semantic role (`ColorRole`,
//! `TypeScale`, `SpacingToken`, `ShadowPreset`) or by the dotted string keys
//! used by the mobile design system (`"accent.primary"`, `"heading"`, ...).

pub mod tokens;

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

static MIDNIGHT_GARDEN: Lazy<Theme> = Lazy::new(|| Theme::resolve("midnight-garden"));

/// Semantic colour roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    AccentPrimary,
    AccentSecondary,
    AccentWarning,
    TextPrimary,
    TextSecondary,
    TextMuted,
    BorderSubtle,
}

impl ColorRole {
    pub const ALL: [ColorRole; 10] = [
        ColorRole::BackgroundPrimary,
        ColorRole::BackgroundSecondary,
        ColorRole::BackgroundTertiary,
        ColorRole::AccentPrimary,
        ColorRole::AccentSecondary,
        ColorRole::AccentWarning,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::BorderSubtle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::BackgroundPrimary => "background.primary",
            ColorRole::BackgroundSecondary => "background.secondary",
            ColorRole::BackgroundTertiary => "background.tertiary",
            ColorRole::AccentPrimary => "accent.primary",
            ColorRole::AccentSecondary => "accent.secondary",
            ColorRole::AccentWarning => "accent.warning",
            ColorRole::TextPrimary => "text.primary",
            ColorRole::TextSecondary => "text.secondary",
            ColorRole::TextMuted => "text.muted",
            ColorRole::BorderSubtle => "border.subtle",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    fn token(&self) -> Color {
        match self {
            ColorRole::BackgroundPrimary => tokens::BACKGROUND_PRIMARY,
            ColorRole::BackgroundSecondary => tokens::BACKGROUND_SECONDARY,
            ColorRole::BackgroundTertiary => tokens::BACKGROUND_TERTIARY,
            ColorRole::AccentPrimary => tokens::ACCENT_PRIMARY,
            ColorRole::AccentSecondary => tokens::ACCENT_SECONDARY,
            ColorRole::AccentWarning => tokens::ACCENT_WARNING,
            ColorRole::TextPrimary => tokens::TEXT_PRIMARY,
            ColorRole::TextSecondary => tokens::TEXT_SECONDARY,
            ColorRole::TextMuted => tokens::TEXT_MUTED,
            ColorRole::BorderSubtle => tokens::BORDER_SUBTLE,
        }
    }
}

/// Typography scale names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeScale {
    Display,
    Heading,
    Body,
    Caption,
    Tiny,
}

impl TypeScale {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "display" => Some(TypeScale::Display),
            "heading" => Some(TypeScale::Heading),
            "body" => Some(TypeScale::Body),
            "caption" => Some(TypeScale::Caption),
            "tiny" => Some(TypeScale::Tiny),
            _ => None,
        }
    }
}

/// A resolved typography entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_size: u16,
    pub line_height: u16,
    pub font_weight: u16,
}

impl Typography {
    fn from_token((font_size, line_height, font_weight): (u16, u16, u16)) -> Self {
        Self {
            font_size,
            line_height,
            font_weight,
        }
    }

    /// Closest terminal rendition of the size and weight.
    pub fn modifier(&self) -> Modifier {
        match (self.font_weight, self.font_size) {
            (w, s) if w >= 700 && s >= 40 => Modifier::BOLD | Modifier::UNDERLINED,
            (w, _) if w >= 700 => Modifier::BOLD,
            (_, s) if s <= 11 => Modifier::DIM,
            (_, s) if s <= 13 => Modifier::ITALIC,
            _ => Modifier::empty(),
        }
    }
}

/// Spacing token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "xs" => Some(SpacingToken::Xs),
            "sm" => Some(SpacingToken::Sm),
            "md" => Some(SpacingToken::Md),
            "lg" => Some(SpacingToken::Lg),
            "xl" => Some(SpacingToken::Xl),
            "xxl" => Some(SpacingToken::Xxl),
            _ => None,
        }
    }

    fn token(&self) -> (u16, u16) {
        match self {
            SpacingToken::Xs => tokens::SPACE_XS,
            SpacingToken::Sm => tokens::SPACE_SM,
            SpacingToken::Md => tokens::SPACE_MD,
            SpacingToken::Lg => tokens::SPACE_LG,
            SpacingToken::Xl => tokens::SPACE_XL,
            SpacingToken::Xxl => tokens::SPACE_XXL,
        }
    }
}

/// Resolved spacing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub pixels: u16,
    pub cells: u16,
}

/// Shadow preset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowPreset {
    Sm,
    Md,
    Lg,
    Glow,
}

impl ShadowPreset {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sm" => Some(ShadowPreset::Sm),
            "md" => Some(ShadowPreset::Md),
            "lg" => Some(ShadowPreset::Lg),
            "glow" => Some(ShadowPreset::Glow),
            _ => None,
        }
    }
}

/// A shadow preset. Terminals cannot blur, so elevation is expressed
/// through the border glyphs and border colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset_y: u16,
    pub blur_radius: u16,
    pub opacity: f32,
    pub border_type: BorderType,
}

/// The Midnight Garden theme.
#[derive(Debug)]
pub struct Theme {
    name: &'static str,
    /// Colours indexed by `ColorRole` discriminant
    palette: [Color; ColorRole::ALL.len()],
    avatar_palette: [Color; 5],
}

impl Theme {
    fn resolve(name: &'static str) -> Self {
        let palette = ColorRole::ALL.map(|role| role.token());
        let avatar_palette = [
            palette[ColorRole::AccentPrimary as usize],
            palette[ColorRole::AccentSecondary as usize],
            palette[ColorRole::AccentWarning as usize],
            tokens::AVATAR_PINK,
            tokens::AVATAR_BLUE,
        ];
        Self {
            name,
            palette,
            avatar_palette,
        }
    }

    /// The process-wide theme instance.
    pub fn midnight_garden() -> &'static Theme {
        &MIDNIGHT_GARDEN
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn color(&self, role: ColorRole) -> Color {
        self.palette[role as usize]
    }

    pub fn color_by_key(&self, key: &str) -> Option<Color> {
        ColorRole::from_key(key).map(|role| self.color(role))
    }

    pub fn typography(&self, scale: TypeScale) -> Typography {
        Typography::from_token(match scale {
            TypeScale::Display => tokens::TYPE_DISPLAY,
            TypeScale::Heading => tokens::TYPE_HEADING,
            TypeScale::Body => tokens::TYPE_BODY,
            TypeScale::Caption => tokens::TYPE_CAPTION,
            TypeScale::Tiny => tokens::TYPE_TINY,
        })
    }

    pub fn typography_by_key(&self, key: &str) -> Option<Typography> {
        TypeScale::from_key(key).map(|scale| self.typography(scale))
    }

    pub fn spacing(&self, token: SpacingToken) -> Spacing {
        let (pixels, cells) = token.token();
        Spacing { pixels, cells }
    }

    pub fn spacing_by_key(&self, key: &str) -> Option<Spacing> {
        SpacingToken::from_key(key).map(|token| self.spacing(token))
    }

    pub fn shadow(&self, preset: ShadowPreset) -> Shadow {
        match preset {
            ShadowPreset::Sm => Shadow {
                color: Color::Black,
                offset_y: 1,
                blur_radius: 2,
                opacity: 0.2,
                border_type: BorderType::Plain,
            },
            ShadowPreset::Md => Shadow {
                color: Color::Black,
                offset_y: 4,
                blur_radius: 8,
                opacity: 0.3,
                border_type: BorderType::Rounded,
            },
            ShadowPreset::Lg => Shadow {
                color: Color::Black,
                offset_y: 8,
                blur_radius: 16,
                opacity: 0.4,
                border_type: BorderType::Thick,
            },
            ShadowPreset::Glow => Shadow {
                color: tokens::ACCENT_PRIMARY,
                offset_y: 0,
                blur_radius: 20,
                opacity: 0.5,
                border_type: BorderType::Double,
            },
        }
    }

    pub fn shadow_by_key(&self, key: &str) -> Option<Shadow> {
        ShadowPreset::from_key(key).map(|preset| self.shadow(preset))
    }

    /// Text style for a typography scale, defaulting to `text.primary`.
    pub fn text_style(&self, scale: TypeScale, color: Option<Color>) -> Style {
        Style::default()
            .fg(color.unwrap_or_else(|| self.color(ColorRole::TextPrimary)))
            .add_modifier(self.typography(scale).modifier())
    }

    /// Border style for a card rendered with a shadow preset.
    pub fn box_shadow(&self, preset: ShadowPreset) -> (BorderType, Style) {
        let shadow = self.shadow(preset);
        let color = match preset {
            ShadowPreset::Glow => shadow.color,
            _ => self.color(ColorRole::BorderSubtle),
        };
        (shadow.border_type, Style::default().fg(color))
    }

    /// Palette the anonymous avatar accent is picked from.
    pub fn avatar_palette(&self) -> [Color; 5] {
        self.avatar_palette
    }

    /// Deterministic avatar accent for a seed, keyed on its length in
    /// UTF-16 code units as the mobile client measures it.
    pub fn avatar_accent(&self, seed: &str) -> Color {
        self.avatar_palette[seed.encode_utf16().count() % self.avatar_palette.len()]
    }
}

/// Parse `#rrggbb` into a terminal colour.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Scale an RGB colour towards a background by `opacity` (0.0..=1.0).
///
/// Used to fake the card fade-out on terminals, which have no alpha.
pub fn blend(fg: Color, bg: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * opacity).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if opacity < 0.5 => bg,
        _ => fg,
    }
}
