//! Array pane rendering: one vertical bar per element around a zero axis
//!
//! Positive values grow upward from the axis and negative values downward,
//! both scaled against the largest absolute value of the step. Bar colour
//! comes from the element's [`BarRole`] in the displayed step.
//!
//! When there are more elements than columns, several bars share a column;
//! highlighted bars are drawn last so they stay visible.

use crate::snapshot::{BarRole, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the array pane
pub struct BarsRenderData<'a> {
    pub step: &'a Step,
    pub title: String,
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_active: bool) {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", data.title))
        .title_bottom(legend())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    if data.step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    frame.render_widget(block, area);
    draw_bars(frame.buffer_mut(), inner, data.step);
}

fn legend() -> Line<'static> {
    let entry = |role: BarRole, label: &'static str| {
        [
            Span::styled(" ■", Style::default().fg(DEFAULT_THEME.bar_color(role))),
            Span::styled(format!(" {} ", label), Style::default().fg(DEFAULT_THEME.fg)),
        ]
    };

    Line::from(
        [
            entry(BarRole::Comparing, "comparing"),
            entry(BarRole::Swapping, "swapping"),
            entry(BarRole::Sorted, "sorted"),
        ]
        .concat(),
    )
}

fn draw_bars(buf: &mut Buffer, area: Rect, step: &Step) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let geometry = AxisGeometry::new(area.height);
    let axis_y = area.y + geometry.above;
    buf.set_string(
        area.x,
        axis_y,
        "─".repeat(area.width as usize),
        Style::default().fg(DEFAULT_THEME.axis),
    );

    let max_abs = step
        .array
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1);
    let count = step.array.len();

    // Idle bars first so highlighted ones win shared columns
    let (idle, highlighted): (Vec<usize>, Vec<usize>) =
        (0..count).partition(|&i| step.role(i) == BarRole::Idle);

    for index in idle.into_iter().chain(highlighted) {
        let (offset, width) = column_span(index, count, area.width);
        let style = Style::default().fg(DEFAULT_THEME.bar_color(step.role(index)));
        let value = step.array[index];
        let cells = "█".repeat(width as usize);

        if value > 0 {
            let height = bar_height(value.unsigned_abs(), max_abs, geometry.above);
            for row in 0..height {
                buf.set_string(area.x + offset, axis_y - 1 - row, &cells, style);
            }
        } else if value < 0 {
            let height = bar_height(value.unsigned_abs(), max_abs, geometry.below);
            for row in 0..height {
                buf.set_string(area.x + offset, axis_y + 1 + row, &cells, style);
            }
        }
    }
}

/// Rows available above and below the axis row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisGeometry {
    above: u16,
    below: u16,
}

impl AxisGeometry {
    fn new(height: u16) -> Self {
        let usable = height.saturating_sub(1);
        let above = usable.div_ceil(2);
        AxisGeometry {
            above,
            below: usable - above,
        }
    }
}

/// Height in rows of a bar for `magnitude`, at least one row when non-zero
pub fn bar_height(magnitude: u32, max_abs: u32, rows: u16) -> u16 {
    if magnitude == 0 || rows == 0 {
        return 0;
    }
    let scaled = u64::from(magnitude) * u64::from(rows) / u64::from(max_abs.max(1));
    scaled.clamp(1, u64::from(rows)) as u16
}

/// Column offset and width of bar `index` out of `count` in `width` columns.
///
/// Bars wider than two columns leave a one column gap on their right.
pub fn column_span(index: usize, count: usize, width: u16) -> (u16, u16) {
    let width_u = width as usize;
    let start = index * width_u / count;
    let end = ((index + 1) * width_u / count).max(start + 1).min(width_u);
    let span = end.saturating_sub(start).max(1);
    let drawn = if span > 2 { span - 1 } else { span };
    (start.min(width_u.saturating_sub(1)) as u16, drawn as u16)
}
