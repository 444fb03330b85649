/// What occupies a grid cell
///
/// The numeric codes are the external storage format (see `GridMap`'s
/// `Display`) and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    /// Body segment the head has already passed
    Body,
    Head,
    /// Body segment placed this tick (initial layout, growth, teleport)
    FreshBody,
    Growth,
    Poison,
    Gate,
}

impl Cell {
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Body => 2,
            Cell::Head => 3,
            Cell::FreshBody => 4,
            Cell::Growth => 5,
            Cell::Poison => 6,
            Cell::Gate => 7,
        }
    }

    /// Wall or any part of the snake
    pub fn is_solid(&self) -> bool {
        matches!(self, Cell::Wall | Cell::Body | Cell::Head | Cell::FreshBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_storage_format() {
        let expected = [
            (Cell::Empty, 0),
            (Cell::Wall, 1),
            (Cell::Body, 2),
            (Cell::Head, 3),
            (Cell::FreshBody, 4),
            (Cell::Growth, 5),
            (Cell::Poison, 6),
            (Cell::Gate, 7),
        ];
        for (cell, code) in expected {
            assert_eq!(cell.code(), code);
        }
    }

    #[test]
    fn test_solidity() {
        assert!(Cell::Wall.is_solid());
        assert!(Cell::Body.is_solid());
        assert!(Cell::Head.is_solid());
        assert!(Cell::FreshBody.is_solid());
        assert!(!Cell::Empty.is_solid());
        assert!(!Cell::Growth.is_solid());
        assert!(!Cell::Poison.is_solid());
        assert!(!Cell::Gate.is_solid());
    }
}
