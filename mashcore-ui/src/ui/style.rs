use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

/// RGB color. Construct with `Color::new(r, g, b)` or use named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Basic colors
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(100, 100, 100);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const ORANGE: Color = Color::new(255, 165, 0);

    // Provenance colors
    pub const SONG_A: Color = Color::new(100, 180, 255); // Blue - song A
    pub const SONG_B: Color = Color::new(255, 165, 0); // Orange - song B
    pub const MIXED: Color = Color::new(147, 112, 219); // Purple - mixed measures

    // UI colors
    pub const SELECTION_BG: Color = Color::new(60, 100, 180); // Selection highlight
    pub const WARN_COLOR: Color = Color::new(255, 220, 80);
    pub const ERROR_COLOR: Color = Color::new(255, 100, 100);
    pub const OK_COLOR: Color = Color::new(80, 220, 100);
}

/// Create style with conditional selection background.
/// Useful for list items that highlight when selected.
pub fn selected_style(is_selected: bool, fg: Color) -> Style {
    if is_selected {
        Style::new().fg(fg).bg(Color::SELECTION_BG)
    } else {
        Style::new().fg(fg)
    }
}

/// Text style with foreground, background, and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            underline: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[allow(dead_code)]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

// --- Conversions to ratatui types ---

impl From<Color> for RatatuiColor {
    fn from(c: Color) -> Self {
        RatatuiColor::Rgb(c.r, c.g, c.b)
    }
}

impl From<Style> for RatatuiStyle {
    fn from(s: Style) -> Self {
        let mut rs = RatatuiStyle::default();
        if let Some(fg) = s.fg {
            rs = rs.fg(RatatuiColor::from(fg));
        }
        if let Some(bg) = s.bg {
            rs = rs.bg(RatatuiColor::from(bg));
        }
        if s.bold {
            rs = rs.add_modifier(Modifier::BOLD);
        }
        if s.underline {
            rs = rs.add_modifier(Modifier::UNDERLINED);
        }
        rs
    }
}
