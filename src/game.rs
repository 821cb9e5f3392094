use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GRID, INITIAL_FOOD, INITIAL_HEAD};
use crate::food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// Single source of truth: mutated only by [`tick`](Self::tick),
/// [`apply_input`](Self::apply_input) and [`reset`](Self::reset). The
/// renderer borrows it immutably and never writes back.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            snake: initial_snake(),
            food: initial_food(),
            score: 0,
            status: GameStatus::Running,
            rng,
        }
    }

    /// Advances the simulation by one tick. Total over its input domain:
    /// no-op once the game is over, never fails otherwise.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.snake.commit_pending_direction();
        let new_head = self.snake.next_head_position(GRID);

        // Score and food are settled before the collision check, matching
        // the move ordering: eat first, then test the resulting body.
        let ate = new_head == self.food;
        if ate {
            self.score += 1;
            self.food = food::spawn(&mut self.rng, GRID);
        }

        if self.snake.would_self_collide(new_head, ate) {
            // The colliding move is discarded: the displayed snake freezes
            // at its pre-collision body.
            self.status = GameStatus::GameOver;
            return;
        }

        self.snake.advance(new_head, ate);
    }

    /// Applies one external input event.
    ///
    /// Directional input overwrites the pending direction unconditionally,
    /// reversals included; last write before a tick wins. Confirm and Quit
    /// are session-level concerns handled by the shell.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.set_pending_direction(direction),
            GameInput::Confirm | GameInput::Quit => {}
        }
    }

    /// Restores the exact initial values, independent of pre-reset state:
    /// snake [(10,10)] heading Right, food (15,15), score 0, running.
    pub fn reset(&mut self) {
        self.snake = initial_snake();
        self.food = initial_food();
        self.score = 0;
        self.status = GameStatus::Running;
    }

    /// Returns true once the snake has collided with itself.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_snake() -> Snake {
    Snake::new(
        Position {
            x: INITIAL_HEAD.0,
            y: INITIAL_HEAD.1,
        },
        Direction::Right,
    )
}

fn initial_food() -> Position {
    Position {
        x: INITIAL_FOOD.0,
        y: INITIAL_FOOD.1,
    }
}

#[cfg(test)]
mod tests {
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus};

    #[test]
    fn plain_move_keeps_length_and_drops_tail() {
        let mut state = GameState::new_with_seed(1);
        state.snake = Snake::from_segments(
            vec![Position { x: 5, y: 5 }, Position { x: 4, y: 5 }],
            Direction::Right,
        );
        state.food = Position { x: 0, y: 0 };

        state.tick();

        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
        assert!(!state.snake.occupies(Position { x: 4, y: 5 }));
    }

    #[test]
    fn eating_food_grows_snake_and_scores() {
        let mut state = GameState::new_with_seed(2);
        state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        state.food = Position { x: 6, y: 5 };

        state.tick();

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn self_collision_sets_game_over_and_freezes_body() {
        let mut state = GameState::new_with_seed(3);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 5, y: 6 },
                Position { x: 5, y: 7 },
                Position { x: 6, y: 7 },
            ],
            Direction::Down,
        );
        state.food = Position { x: 0, y: 0 };

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        // The colliding move was discarded: body is exactly the pre-move one.
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
    }

    #[test]
    fn ticks_are_no_ops_after_game_over() {
        let mut state = GameState::new_with_seed(4);
        state.status = GameStatus::GameOver;
        let head = state.snake.head();

        state.tick();
        state.tick();

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn movement_wraps_across_the_left_edge() {
        let mut state = GameState::new_with_seed(5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Left,
        );
        state.food = Position { x: 9, y: 9 };

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position { x: 19, y: 0 });
        let body: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![
                Position { x: 19, y: 0 },
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
            ]
        );
    }

    #[test]
    fn reset_restores_exact_initial_values() {
        let mut state = GameState::new_with_seed(6);
        state.snake = Snake::from_segments(
            vec![Position { x: 1, y: 1 }, Position { x: 2, y: 1 }],
            Direction::Up,
        );
        state.food = Position { x: 3, y: 3 };
        state.score = 12;
        state.status = GameStatus::GameOver;

        state.reset();

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.pending_direction(), Direction::Right);
        assert_eq!(state.food, Position { x: 15, y: 15 });
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn directional_input_overwrites_pending_direction() {
        let mut state = GameState::new_with_seed(7);

        state.apply_input(GameInput::Direction(Direction::Up));
        state.apply_input(GameInput::Direction(Direction::Down));

        assert_eq!(state.snake.pending_direction(), Direction::Down);
        // Committed direction is untouched until the next tick.
        assert_eq!(state.snake.direction(), Direction::Right);
    }
}
