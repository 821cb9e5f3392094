use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step in `direction`, wrapped
    /// toroidally into bounds. Wall collisions are impossible by construction.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap_axis(self.x + dx, i32::from(bounds.width)),
            y: wrap_axis(self.y + dy, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Returns true iff `head` occupies any cell of `body`.
///
/// Pure membership scan; callers decide which segments belong in `body`
/// (the new head itself is never included).
#[must_use]
pub fn collides<'a, I>(head: Position, body: I) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    body.into_iter().any(|segment| *segment == head)
}

/// Snake body plus its committed and pending travel directions.
///
/// The pending direction is overwritten by every directional key press with
/// last-write-wins semantics and becomes the committed direction on the next
/// tick. There is intentionally no filter against selecting the direct
/// reverse of travel; see the reversal tests in `tests/scripted_session.rs`.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Overwrites the pending direction unconditionally.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Commits the pending direction as the travel direction for this tick.
    pub fn commit_pending_direction(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns the cell the head enters on the next step, wrapped into bounds.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        self.head().stepped(self.direction, bounds)
    }

    /// Returns true when placing the head at `new_head` would overlap the
    /// post-move body.
    ///
    /// When not growing the tail vacates its cell this tick, so it is
    /// excluded from the scan; a length-1 snake therefore can never
    /// self-collide.
    #[must_use]
    pub fn would_self_collide(&self, new_head: Position, grow: bool) -> bool {
        let kept = if grow {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        collides(new_head, self.body.iter().take(kept))
    }

    /// Commits one movement step: prepends `new_head` and, unless growing,
    /// drops the tail so length stays constant.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed travel direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
