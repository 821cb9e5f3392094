use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, GRID, GridSize, Theme};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from an immutable state borrow.
///
/// The renderer only observes: score line, bordered play field, food, snake,
/// and the game-over popup when the session has ended.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.score_fg)),
        score_area,
    );

    let field = centered_field(play_area);
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, state.food, theme);
    render_snake(frame, inner, state, theme);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, field, state.score, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Position, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, GRID, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, GRID, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Returns a field rect centered in `area`, sized to the grid plus border,
/// clamped to whatever fits on small terminals.
fn centered_field(area: Rect) -> Rect {
    let wanted_width = GRID.width.saturating_add(2).min(area.width);
    let wanted_height = GRID.height.saturating_add(2).min(area.height);

    let x = area.x + (area.width - wanted_width) / 2;
    let y = area.y + (area.height - wanted_height) / 2;
    Rect::new(x, y, wanted_width, wanted_height)
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GRID;
    use crate::snake::Position;

    use super::{centered_field, logical_to_terminal};

    #[test]
    fn field_is_grid_sized_when_terminal_is_large_enough() {
        let field = centered_field(Rect::new(0, 0, 80, 40));

        assert_eq!(field.width, GRID.width + 2);
        assert_eq!(field.height, GRID.height + 2);
    }

    #[test]
    fn cells_outside_the_visible_inner_rect_are_skipped() {
        let inner = Rect::new(1, 1, 5, 5);

        assert_eq!(
            logical_to_terminal(inner, GRID, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, GRID, Position { x: 10, y: 10 }),
            None
        );
    }
}
