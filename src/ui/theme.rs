use crate::snapshot::BarRole;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub axis: Color,
    pub bar_idle: Color,      // Indigo
    pub bar_comparing: Color, // Yellow
    pub bar_swapping: Color,  // Pink
    pub bar_sorted: Color,    // Teal
}

impl Theme {
    pub fn bar_color(&self, role: BarRole) -> Color {
        match role {
            BarRole::Idle => self.bar_idle,
            BarRole::Comparing => self.bar_comparing,
            BarRole::Swapping => self.bar_swapping,
            BarRole::Sorted => self.bar_sorted,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    axis: Color::Rgb(88, 91, 112),
    bar_idle: Color::Rgb(129, 140, 248),
    bar_comparing: Color::Rgb(249, 226, 175),
    bar_swapping: Color::Rgb(245, 194, 231),
    bar_sorted: Color::Rgb(148, 226, 213),
};
