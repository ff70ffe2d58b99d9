//! Settings pane: algorithm, array kind, size, speed and the custom array line

use crate::algorithms::Algorithm;
use crate::input::ArrayKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the settings pane
pub struct ControlsRenderData<'a> {
    pub algorithm: Algorithm,
    pub kind: ArrayKind,
    pub size: usize,
    pub speed: u32,
    /// Text on the custom array line (the edit buffer while editing)
    pub custom_input: &'a str,
    pub validation_error: Option<String>,
    pub is_editing: bool,
    /// Settings other than speed are frozen while a sort is in progress
    pub is_locked: bool,
}

/// Render the settings pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData) {
    let border_style = if data.is_editing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Sorting Visualizer ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = if data.is_locked {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    };
    let key = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);

    let size_style = if data.kind == ArrayKind::Custom {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        value
    };

    let settings = Line::from(vec![
        Span::styled(" Algorithm ", label),
        Span::styled(data.algorithm.name(), value),
        Span::raw(" "),
        Span::styled(" a ", key),
        Span::styled("   Array ", label),
        Span::styled(data.kind.name(), value),
        Span::raw(" "),
        Span::styled(" t ", key),
        Span::styled("   Size ", label),
        Span::styled(data.size.to_string(), size_style),
        Span::raw(" "),
        Span::styled(" [ ] ", key),
        Span::styled("   Speed ", label),
        Span::styled(
            format!("{}/s", data.speed),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(" - + ", key),
    ]);

    let mut lines = vec![settings, custom_line(&data, label, key)];
    if let Some(error) = &data.validation_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn custom_line<'a>(data: &ControlsRenderData<'a>, label: Style, key: Style) -> Line<'a> {
    if data.kind != ArrayKind::Custom && !data.is_editing {
        return Line::from(vec![
            Span::styled(" Custom array ", label),
            Span::styled(" c ", key),
        ]);
    }

    let text_style = if data.validation_error.is_some() {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut spans = vec![
        Span::styled(" Custom ", label),
        Span::styled(data.custom_input, text_style),
    ];
    if data.is_editing {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(DEFAULT_THEME.border_focused),
        ));
        spans.push(Span::styled("  ↵ apply  esc cancel", label));
    } else {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(" c ", key));
    }
    Line::from(spans)
}
