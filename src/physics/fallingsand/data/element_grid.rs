use bevy::log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physics::fallingsand::elements::element::{cell_type_at, Element, ElementType};
use crate::physics::fallingsand::elements::movement::solid::solid_target;
use crate::physics::fallingsand::util::grid::{Grid, GridOutOfBoundsError};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::RowColVector;

/// An element grid is the whole sandbox, a 2D grid of elements
/// Row 0 is the top, so "below" is always row + 1
pub struct ElementGrid {
    grid: Grid<Element>,
    rng: StdRng,
}

/* Initialization */
impl ElementGrid {
    /// Creates an empty grid whose randomness is seeded from the OS
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Creates an empty grid with deterministic randomness
    pub fn new_seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        Self {
            grid: Grid::new_fill(width, height, Element::NONE),
            rng,
        }
    }
}

/* Getters & Setters */
impl ElementGrid {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.get_width()
    }
    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.get_height()
    }
    pub fn get_grid(&self) -> &Grid<Element> {
        &self.grid
    }
    /// The element at a position, Option::None if it is outside the grid
    pub fn get_element(&self, pos: RowColVector) -> Option<&Element> {
        self.grid.get(pos)
    }
    /// The type at a position, Option::None if it is outside the grid
    pub fn get(&self, pos: RowColVector) -> Option<ElementType> {
        self.grid.get(pos).map(Element::get_type)
    }
    /// Like get, but everything outside the grid reads as rock, the walls and floor are solid
    pub fn cell_type(&self, pos: RowColVector) -> ElementType {
        cell_type_at(&self.grid, pos)
    }
    /// Writes a fresh element with a random shade, replacing whatever was there
    pub fn set(
        &mut self,
        pos: RowColVector,
        element_type: ElementType,
    ) -> Result<(), GridOutOfBoundsError> {
        let element = Element::spawn(element_type, &mut self.rng);
        self.grid.set(pos, element)
    }
    /// How many cells hold the given type
    pub fn count(&self, element_type: ElementType) -> usize {
        self.grid
            .iter()
            .filter(|element| element.get_type() == element_type)
            .count()
    }
}

/// Proceedural generation helpers
impl ElementGrid {
    /// Fill the grid with the given element, every grain gets its own shade
    pub fn fill(&mut self, element_type: ElementType) {
        for element in self.grid.iter_mut() {
            *element = Element::spawn(element_type, &mut self.rng);
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.grid.fill(Element::NONE);
    }
}

/// Handle processing
impl ElementGrid {
    /// Advance the simulation by one tick, returns how many grains moved
    ///
    /// Rows are scanned bottom-up, so a grain always lands in a row that has
    /// already been visited and moves at most once per tick.
    pub fn evolve(&mut self) -> usize {
        let height = self.height();
        let width = self.width();
        if height < 2 {
            return 0;
        }

        let mut moved = 0;
        for row in (0..height - 1).rev() {
            for col in 0..width {
                let pos = RowColVector { row, col };
                if !self.cell_type(pos).is_movable() {
                    continue;
                }
                if let Some(target) = solid_target(&self.grid, pos, &mut self.rng) {
                    // The target is an empty cell, so swapping leaves None behind
                    if self.grid.swap(pos, target).is_ok() {
                        moved += 1;
                    }
                }
            }
        }
        trace!("evolve moved {} grains", moved);
        moved
    }
}

/// Rendering
impl ElementGrid {
    /// One pixel per cell, empty cells are the black background
    pub fn get_texture(&self) -> RawImage {
        RawImage::from_colors(
            self.width(),
            self.height(),
            self.grid.iter().map(Element::get_color),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fallingsand::elements::element::BACKGROUND;

    /// Scatter sand and rock around the grid
    fn scattered(width: usize, height: usize, seed: u64) -> ElementGrid {
        let mut grid = ElementGrid::new_seeded(width, height, seed);
        for row in 0..height {
            for col in 0..width {
                let element_type = match (row * 7 + col * 13) % 5 {
                    0 | 1 => ElementType::Sand,
                    2 => ElementType::Rock,
                    _ => ElementType::None,
                };
                grid.set(RowColVector { row, col }, element_type).unwrap();
            }
        }
        grid
    }

    fn rock_positions(grid: &ElementGrid) -> Vec<RowColVector> {
        grid.get_grid()
            .indexed_iter()
            .filter(|(_, element)| element.get_type() == ElementType::Rock)
            .map(|(pos, _)| pos)
            .collect()
    }

    mod reads_and_writes {
        use super::*;

        #[test]
        fn test_new_is_empty() {
            let grid = ElementGrid::new(8, 6);
            assert_eq!(grid.width(), 8);
            assert_eq!(grid.height(), 6);
            assert_eq!(grid.count(ElementType::None), 48);
        }

        #[test]
        fn test_out_of_bounds() {
            let mut grid = ElementGrid::new_seeded(4, 3, 0);
            let outside = RowColVector::new(3, 0);
            assert_eq!(grid.get(outside), None);
            assert_eq!(grid.cell_type(outside), ElementType::Rock);
            assert_eq!(
                grid.set(outside, ElementType::Sand),
                Err(GridOutOfBoundsError(outside))
            );
            assert_eq!(grid.count(ElementType::Sand), 0);
        }

        #[test]
        fn test_paint_over() {
            let mut grid = ElementGrid::new_seeded(4, 3, 0);
            let pos = RowColVector::new(1, 1);
            grid.set(pos, ElementType::Sand).unwrap();
            grid.set(pos, ElementType::Rock).unwrap();
            assert_eq!(grid.get(pos), Some(ElementType::Rock));
            grid.set(pos, ElementType::None).unwrap();
            assert_eq!(grid.get(pos), Some(ElementType::None));
        }

        #[test]
        fn test_fill_and_clear() {
            let mut grid = ElementGrid::new_seeded(4, 3, 0);
            grid.fill(ElementType::Rock);
            assert_eq!(grid.count(ElementType::Rock), 12);
            grid.clear();
            assert_eq!(grid.count(ElementType::None), 12);
        }

        #[test]
        fn test_fill_shades_each_grain() {
            let mut grid = ElementGrid::new_seeded(4, 3, 0);
            grid.fill(ElementType::Sand);
            let shades: Vec<f32> = grid
                .get_grid()
                .iter()
                .map(|element| element.get_shade().0)
                .collect();
            assert!(shades.iter().all(|shade| (0.0..1.0).contains(shade)));
            assert!(shades.iter().any(|shade| *shade != shades[0]));

            grid.fill(ElementType::None);
            assert!(grid.get_grid().iter().all(|element| *element == Element::NONE));
        }
    }

    /// Simple tests for testing that the sand falls down
    mod falls_down {
        use super::*;

        macro_rules! test_falls_one_row {
            ($name:ident, $row:expr, $col:expr) => {
                #[test]
                fn $name() {
                    let mut grid = ElementGrid::new_seeded(5, 5, 0);
                    grid.set(RowColVector::new($row, $col), ElementType::Sand)
                        .unwrap();
                    assert_eq!(grid.evolve(), 1);
                    assert_eq!(
                        grid.get(RowColVector::new($row, $col)),
                        Some(ElementType::None)
                    );
                    assert_eq!(
                        grid.get(RowColVector::new($row + 1, $col)),
                        Some(ElementType::Sand)
                    );
                }
            };
        }

        test_falls_one_row!(test_falls_at_r0_c0, 0, 0);
        test_falls_one_row!(test_falls_at_r0_c4, 0, 4);
        test_falls_one_row!(test_falls_at_r1_c2, 1, 2);
        test_falls_one_row!(test_falls_at_r3_c3, 3, 3);

        #[test]
        fn test_one_row_per_tick_until_floor() {
            let mut grid = ElementGrid::new_seeded(3, 6, 0);
            grid.set(RowColVector::new(0, 1), ElementType::Sand).unwrap();
            for expected_row in 1..6 {
                grid.evolve();
                assert_eq!(
                    grid.get(RowColVector::new(expected_row, 1)),
                    Some(ElementType::Sand)
                );
            }
            // On the floor now, nothing moves
            assert_eq!(grid.evolve(), 0);
            assert_eq!(grid.get(RowColVector::new(5, 1)), Some(ElementType::Sand));
        }

        #[test]
        fn test_stacked_grains_both_fall() {
            let mut grid = ElementGrid::new_seeded(3, 5, 0);
            grid.set(RowColVector::new(0, 1), ElementType::Sand).unwrap();
            grid.set(RowColVector::new(1, 1), ElementType::Sand).unwrap();
            assert_eq!(grid.evolve(), 2);
            assert_eq!(grid.get(RowColVector::new(0, 1)), Some(ElementType::None));
            assert_eq!(grid.get(RowColVector::new(1, 1)), Some(ElementType::Sand));
            assert_eq!(grid.get(RowColVector::new(2, 1)), Some(ElementType::Sand));
        }

        #[test]
        fn test_shade_moves_with_grain() {
            let mut grid = ElementGrid::new_seeded(3, 3, 5);
            grid.set(RowColVector::new(0, 1), ElementType::Sand).unwrap();
            let before = *grid.get_element(RowColVector::new(0, 1)).unwrap();
            grid.evolve();
            assert_eq!(grid.get_element(RowColVector::new(1, 1)), Some(&before));
        }

        #[test]
        fn test_slides_off_rock() {
            let mut grid = ElementGrid::new_seeded(3, 3, 0);
            grid.set(RowColVector::new(1, 0), ElementType::Sand).unwrap();
            grid.set(RowColVector::new(2, 0), ElementType::Rock).unwrap();
            grid.evolve();
            assert_eq!(grid.get(RowColVector::new(2, 1)), Some(ElementType::Sand));
            assert_eq!(grid.get(RowColVector::new(1, 0)), Some(ElementType::None));
        }

        #[test]
        fn test_pile_forms_pyramid() {
            // Three grains dropped on the same column settle into a little pyramid
            let mut grid = ElementGrid::new_seeded(5, 4, 3);
            for row in 0..3 {
                grid.set(RowColVector::new(row, 2), ElementType::Sand)
                    .unwrap();
            }
            for _ in 0..10 {
                grid.evolve();
            }
            assert_eq!(grid.get(RowColVector::new(3, 2)), Some(ElementType::Sand));
            assert_eq!(grid.count(ElementType::Sand), 3);
            let floor: usize = (0..5)
                .filter(|col| grid.get(RowColVector::new(3, *col)) == Some(ElementType::Sand))
                .count();
            assert_eq!(floor, 3);
        }
    }

    mod stays_put {
        use super::*;

        #[test]
        fn test_rock_never_moves() {
            let mut grid = ElementGrid::new_seeded(3, 3, 0);
            grid.set(RowColVector::new(0, 1), ElementType::Rock).unwrap();
            assert_eq!(grid.evolve(), 0);
            assert_eq!(grid.get(RowColVector::new(0, 1)), Some(ElementType::Rock));
        }

        #[test]
        fn test_fully_supported_grain() {
            let mut grid = ElementGrid::new_seeded(3, 3, 0);
            grid.set(RowColVector::new(1, 1), ElementType::Sand).unwrap();
            for col in 0..3 {
                grid.set(RowColVector::new(2, col), ElementType::Rock)
                    .unwrap();
            }
            assert_eq!(grid.evolve(), 0);
            assert_eq!(grid.get(RowColVector::new(1, 1)), Some(ElementType::Sand));
        }

        #[test]
        fn test_degenerate_grids() {
            let mut flat = ElementGrid::new_seeded(4, 1, 0);
            flat.fill(ElementType::Sand);
            assert_eq!(flat.evolve(), 0);
            assert_eq!(flat.count(ElementType::Sand), 4);

            let mut empty = ElementGrid::new_seeded(0, 4, 0);
            assert_eq!(empty.evolve(), 0);
        }
    }

    mod conservation {
        use super::*;

        #[test]
        fn test_counts_and_rocks_are_conserved() {
            let mut grid = scattered(17, 13, 11);
            let sand = grid.count(ElementType::Sand);
            let rock = grid.count(ElementType::Rock);
            let rocks = rock_positions(&grid);
            for _ in 0..50 {
                grid.evolve();
                assert_eq!(grid.count(ElementType::Sand), sand);
                assert_eq!(grid.count(ElementType::Rock), rock);
            }
            assert_eq!(rock_positions(&grid), rocks);
        }

        #[test]
        fn test_settles() {
            let mut grid = scattered(9, 9, 2);
            let ticks = (0..1000).take_while(|_| grid.evolve() > 0).count();
            assert!(ticks < 1000);
            assert_eq!(grid.evolve(), 0);
        }

        #[test]
        fn test_same_seed_same_result() {
            let mut a = scattered(9, 9, 4);
            let mut b = scattered(9, 9, 4);
            for _ in 0..20 {
                a.evolve();
                b.evolve();
            }
            assert_eq!(a.get_grid(), b.get_grid());
        }
    }

    mod texture {
        use super::*;

        #[test]
        fn test_texture_matches_cells() {
            let mut grid = ElementGrid::new_seeded(3, 2, 0);
            grid.set(RowColVector::new(1, 2), ElementType::Rock).unwrap();
            let img = grid.get_texture();
            assert_eq!((img.width, img.height), (3, 2));
            assert_eq!(
                img.get_pixel(0, 0),
                Some(BACKGROUND.as_rgba_u8())
            );
            let rock = grid.get_element(RowColVector::new(1, 2)).unwrap();
            assert_eq!(img.get_pixel(2, 1), Some(rock.get_color().as_rgba_u8()));
        }
    }
}
