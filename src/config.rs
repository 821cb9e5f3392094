use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces an anonymous `(u16, u16)` tuple for bounds, making width vs.
/// height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Fixed play field: a square torus, 20 cells on each side.
pub const GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Tick interval in milliseconds. Constant for the whole session.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Starting head cell.
pub const INITIAL_HEAD: (i32, i32) = (10, 10);

/// Starting food cell. Fixed so that reset is fully deterministic.
pub const INITIAL_FOOD: (i32, i32) = (15, 15);

// Grid geometry is a programming-time invariant, checked once at compile
// time rather than on a runtime error path.
const _: () = {
    assert!(GRID.width > 0 && GRID.height > 0);
    assert!(INITIAL_HEAD.0 >= 0 && INITIAL_HEAD.1 >= 0);
    assert!(INITIAL_FOOD.0 >= 0 && INITIAL_FOOD.1 >= 0);
    assert!(INITIAL_HEAD.0 < GRID.width as i32 && INITIAL_HEAD.1 < GRID.height as i32);
    assert!(INITIAL_FOOD.0 < GRID.width as i32 && INITIAL_FOOD.1 < GRID.height as i32);
};

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub score_fg: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Green snake on dark with red food, matching the original look.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    score_fg: Color::White,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    score_fg: Color::Cyan,
    overlay_title: Color::Cyan,
    overlay_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    score_fg: Color::Magenta,
    overlay_title: Color::Magenta,
    overlay_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Solid block glyph for snake segments.
pub const GLYPH_SNAKE: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";
