use bevy::render::color::Color;
use derive_more::{From, Into};
use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::physics::fallingsand::util::{functions::hsv, grid::Grid, vectors::RowColVector};

/// Color of an empty cell
pub const BACKGROUND: Color = Color::BLACK;

/// What a cell holds
/// None is an empty cell, it is what sand falls through
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ElementType {
    #[default]
    None,
    Sand,
    Rock,
}

impl ElementType {
    /// Only sand responds to gravity
    pub fn is_movable(&self) -> bool {
        matches!(self, ElementType::Sand)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ElementType::None)
    }
}

/// Random hue offset in [0, 1) picked when a grain is created
#[derive(Default, Debug, Clone, Copy, PartialEq, From, Into)]
pub struct Shade(pub f32);

/// A single cell, its type and the shade it keeps for its whole life
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Element {
    element_type: ElementType,
    shade: Shade,
}

impl Element {
    /// The empty cell
    pub const NONE: Self = Self {
        element_type: ElementType::None,
        shade: Shade(0.0),
    };

    pub fn new(element_type: ElementType, shade: Shade) -> Self {
        Self {
            element_type,
            shade,
        }
    }

    /// Create an element with a random shade
    pub fn new_random<R: Rng>(element_type: ElementType, rng: &mut R) -> Self {
        Self::new(element_type, Shade(rng.gen_range(0.0..1.0)))
    }

    /// What gets written when a cell is painted
    /// Empty cells carry no shade, so no randomness is drawn for them
    pub fn spawn<R: Rng>(element_type: ElementType, rng: &mut R) -> Self {
        if element_type.is_empty() {
            Self::NONE
        } else {
            Self::new_random(element_type, rng)
        }
    }

    pub fn get_type(&self) -> ElementType {
        self.element_type
    }

    pub fn get_shade(&self) -> Shade {
        self.shade
    }

    /// Shaded color, sand is a warm tan and rock a dark gray
    pub fn get_color(&self) -> Color {
        match self.element_type {
            ElementType::None => BACKGROUND,
            ElementType::Sand => hsv(self.shade.0 * 30.0, 0.3, 0.7),
            ElementType::Rock => hsv(self.shade.0 * 10.0, 0.1, 0.3),
        }
    }
}

/// The type of the cell at `pos`, where anything outside the grid is rock
pub fn cell_type_at(grid: &Grid<Element>, pos: RowColVector) -> ElementType {
    grid.get(pos).map_or(ElementType::Rock, Element::get_type)
}
