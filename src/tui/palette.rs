use ratatui::style::Color;

/// Colours for one resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub title: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub final_bg: Color,
    pub final_border: Color,
    pub inserted_bg: Color,
    pub deleted_bg: Color,
    pub error: Color,
    pub success: Color,
    pub status_bg: Color,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        if dark {
            Self {
                background: Color::Rgb(17, 24, 39),
                foreground: Color::Rgb(243, 244, 246),
                muted: Color::Rgb(156, 163, 175),
                border: Color::Rgb(75, 85, 99),
                title: Color::Rgb(250, 250, 250),
                selection_fg: Color::Rgb(250, 250, 250),
                selection_bg: Color::Rgb(16, 185, 129),
                final_bg: Color::Rgb(30, 58, 138),
                final_border: Color::Rgb(96, 165, 250),
                inserted_bg: Color::Rgb(21, 128, 61),
                deleted_bg: Color::Rgb(185, 28, 28),
                error: Color::Rgb(239, 68, 68),
                success: Color::Rgb(74, 222, 128),
                status_bg: Color::Rgb(24, 24, 27),
            }
        } else {
            Self {
                background: Color::Rgb(249, 250, 251),
                foreground: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(107, 114, 128),
                border: Color::Rgb(156, 163, 175),
                title: Color::Rgb(17, 24, 39),
                selection_fg: Color::Rgb(250, 250, 250),
                selection_bg: Color::Rgb(16, 185, 129),
                final_bg: Color::Rgb(239, 246, 255),
                final_border: Color::Rgb(59, 130, 246),
                inserted_bg: Color::Rgb(134, 239, 172),
                deleted_bg: Color::Rgb(252, 165, 165),
                error: Color::Rgb(220, 38, 38),
                success: Color::Rgb(22, 163, 74),
                status_bg: Color::Rgb(229, 231, 235),
            }
        }
    }
}

/// Accent colour for a provider id: openai blue, gemini green, claude purple, others grey
pub fn provider_accent(provider_id: &str, dark: bool) -> Color {
    match (provider_id, dark) {
        ("openai", true) => Color::Rgb(96, 165, 250),
        ("openai", false) => Color::Rgb(59, 130, 246),
        ("gemini", true) => Color::Rgb(74, 222, 128),
        ("gemini", false) => Color::Rgb(34, 197, 94),
        ("claude", true) => Color::Rgb(192, 132, 252),
        ("claude", false) => Color::Rgb(168, 85, 247),
        (_, true) => Color::Rgb(107, 114, 128),
        (_, false) => Color::Rgb(156, 163, 175),
    }
}
