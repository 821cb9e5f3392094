use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Spawns food at a uniformly random cell.
///
/// Both axes are drawn independently from `[0, bounds)`. Occupancy is
/// deliberately not consulted: food may land under the snake body, where it
/// stays uncollectable until the snake moves away. Callers must not rely on
/// the spawned cell being free.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
