//! The Anscombe Quartet.
//!
//! <https://en.wikipedia.org/wiki/Anscombe%27s_quartet>

use clap::ValueEnum;

use crate::math::Coordinate;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Quartet {
    C1,
    C2,
    C3,
    C4,
}

impl Quartet {
    pub const ALL: [Self; 4] = [Self::C1, Self::C2, Self::C3, Self::C4];

    pub const fn label(self) -> &'static str {
        match self {
            Self::C1 => "c1",
            Self::C2 => "c2",
            Self::C3 => "c3",
            Self::C4 => "c4",
        }
    }

    pub const fn points(self) -> &'static [Coordinate] {
        match self {
            Self::C1 => &C1,
            Self::C2 => &C2,
            Self::C3 => &C3,
            Self::C4 => &C4,
        }
    }
}

const C1: [Coordinate; 11] = [
    Coordinate::new(10.0, 8.04),
    Coordinate::new(8.0, 6.95),
    Coordinate::new(13.0, 7.58),
    Coordinate::new(9.0, 8.81),
    Coordinate::new(11.0, 8.33),
    Coordinate::new(14.0, 9.96),
    Coordinate::new(6.0, 7.24),
    Coordinate::new(4.0, 4.26),
    Coordinate::new(12.0, 10.84),
    Coordinate::new(7.0, 4.82),
    Coordinate::new(5.0, 5.68),
];

const C2: [Coordinate; 11] = [
    Coordinate::new(10.0, 9.14),
    Coordinate::new(8.0, 8.14),
    Coordinate::new(13.0, 8.74),
    Coordinate::new(9.0, 8.77),
    Coordinate::new(11.0, 9.26),
    Coordinate::new(14.0, 8.10),
    Coordinate::new(6.0, 6.13),
    Coordinate::new(4.0, 3.10),
    Coordinate::new(12.0, 9.13),
    Coordinate::new(7.0, 7.26),
    Coordinate::new(5.0, 4.74),
];

const C3: [Coordinate; 11] = [
    Coordinate::new(10.0, 7.46),
    Coordinate::new(8.0, 6.77),
    Coordinate::new(13.0, 12.74),
    Coordinate::new(9.0, 7.11),
    Coordinate::new(11.0, 7.81),
    Coordinate::new(14.0, 8.84),
    Coordinate::new(6.0, 6.08),
    Coordinate::new(4.0, 5.39),
    Coordinate::new(12.0, 8.15),
    Coordinate::new(7.0, 6.42),
    Coordinate::new(5.0, 5.73),
];

const C4: [Coordinate; 11] = [
    Coordinate::new(8.0, 6.58),
    Coordinate::new(8.0, 5.76),
    Coordinate::new(8.0, 7.71),
    Coordinate::new(8.0, 8.84),
    Coordinate::new(8.0, 8.47),
    Coordinate::new(8.0, 7.04),
    Coordinate::new(8.0, 5.25),
    Coordinate::new(19.0, 12.50),
    Coordinate::new(8.0, 5.56),
    Coordinate::new(8.0, 7.91),
    Coordinate::new(8.0, 6.89),
];
