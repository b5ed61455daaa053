//! Tetromino catalog: the seven piece types, their templates and colors

use crate::shape::Shape;
use ratatui::style::Color;

const I_TEMPLATE: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_TEMPLATE: &[&[u8]] = &[&[1, 1], &[1, 1]];
// ###
// .#.
const T_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
// .##
// ##.
const S_TEMPLATE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
// ##.
// .##
const Z_TEMPLATE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_TEMPLATE: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_TEMPLATE: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    S, // Green - S-shape
    Z, // Red - Z-shape
    J, // Blue - J-shape
    L, // Orange - L-shape
}

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Rgb(0x00, 0xf0, 0xf0),
            TetrominoType::O => Color::Rgb(0xf0, 0xf0, 0x00),
            TetrominoType::T => Color::Rgb(0xa0, 0x00, 0xf0),
            TetrominoType::S => Color::Rgb(0x00, 0xf0, 0x00),
            TetrominoType::Z => Color::Rgb(0xf0, 0x00, 0x00),
            TetrominoType::J => Color::Rgb(0x00, 0x00, 0xf0),
            TetrominoType::L => Color::Rgb(0xf0, 0xa0, 0x00),
        }
    }

    /// All tetromino types, in catalog order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::J,
            TetrominoType::L,
        ]
    }

    /// Canonical template rows, top row first
    fn template(&self) -> &'static [&'static [u8]] {
        match self {
            TetrominoType::I => I_TEMPLATE,
            TetrominoType::O => O_TEMPLATE,
            TetrominoType::T => T_TEMPLATE,
            TetrominoType::S => S_TEMPLATE,
            TetrominoType::Z => Z_TEMPLATE,
            TetrominoType::J => J_TEMPLATE,
            TetrominoType::L => L_TEMPLATE,
        }
    }

    /// A fresh copy of this type's spawn shape.
    ///
    /// The catalog itself is static; every call builds an independent matrix,
    /// so rotating the returned shape never touches the template.
    pub fn shape(&self) -> Shape {
        Shape::from_rows(self.template())
    }

    pub fn name(&self) -> char {
        match self {
            TetrominoType::I => 'I',
            TetrominoType::O => 'O',
            TetrominoType::T => 'T',
            TetrominoType::S => 'S',
            TetrominoType::Z => 'Z',
            TetrominoType::J => 'J',
            TetrominoType::L => 'L',
        }
    }
}
