//! Row, column, and box groupings.

use crate::Position;

/// A constraint group: one row, column, or 3×3 box.
///
/// Every cell belongs to exactly three houses, and a solved board is one
/// where all 27 houses contain each digit exactly once.
///
/// # Examples
///
/// ```
/// use gridoku_core::House;
///
/// assert_eq!(House::ALL.len(), 27);
/// for house in House::ALL {
///     assert_eq!(house.positions().count(), 9);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the 9 positions belonging to this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => {
                Position::new(index % 3 * 3 + i % 3, index / 3 * 3 + i / 3)
            }
        })
    }

    /// Returns whether `pos` belongs to this house.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { y } => pos.y() == y,
            Self::Column { x } => pos.x() == x,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}
