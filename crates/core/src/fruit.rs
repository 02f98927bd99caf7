//! Fruit placement.
//!
//! A new fruit is drawn uniformly from the cells the snake does not occupy, so it can
//! never spawn under a segment. When no free cell is left there is nowhere to place it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{GridSize, Position};

/// Pick a free cell uniformly at random, or `None` if the snake fills the grid.
pub fn place_fruit<'a, R, I>(grid: GridSize, occupied: I, rng: &mut R) -> Option<Position>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
{
    let mut taken = vec![false; grid.cell_count()];
    for pos in occupied {
        if let Some(i) = cell_index(grid, *pos) {
            taken[i] = true;
        }
    }

    let free: Vec<Position> = grid
        .cells()
        .zip(taken.iter())
        .filter_map(|(pos, &t)| (!t).then_some(pos))
        .collect();

    free.choose(rng).copied()
}

fn cell_index(grid: GridSize, pos: Position) -> Option<usize> {
    if !grid.contains(pos) {
        return None;
    }
    Some(pos.y as usize * grid.width as usize + pos.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_lands_on_the_snake() {
        let grid = GridSize::new(4, 4);
        let snake: Vec<Position> = grid.cells().take(12).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let fruit = place_fruit(grid, &snake, &mut rng).unwrap();
            assert!(grid.contains(fruit));
            assert!(!snake.contains(&fruit), "fruit placed on snake at {:?}", fruit);
        }
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let grid = GridSize::new(3, 3);
        let last = Position::new(2, 2);
        let snake: Vec<Position> = grid.cells().filter(|&p| p != last).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_fruit(grid, &snake, &mut rng), Some(last));
    }

    #[test]
    fn full_grid_has_no_fruit() {
        let grid = GridSize::new(2, 2);
        let snake: Vec<Position> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_fruit(grid, &snake, &mut rng), None);
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = GridSize::new(3, 2);
        let snake = [Position::new(0, 0)];
        let mut rng = StdRng::seed_from_u64(99);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(place_fruit(grid, &snake, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), grid.cell_count() - 1);
    }

    #[test]
    fn same_seed_same_placement() {
        let grid = GridSize::new(20, 20);
        let snake = [grid.center()];
        let mut a = StdRng::seed_from_u64(12345);
        let mut b = StdRng::seed_from_u64(12345);

        for _ in 0..50 {
            assert_eq!(
                place_fruit(grid, &snake, &mut a),
                place_fruit(grid, &snake, &mut b)
            );
        }
    }
}
