/// Direction of travel on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Heading) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn clockwise(&self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    pub fn counter_clockwise(&self) -> Heading {
        self.clockwise().opposite()
    }

    /// Returns the (d_row, d_col) unit step for this heading
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }
}

/// Input the driver hands to the engine once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a new heading before moving
    Turn(Heading),
    /// Keep the current heading
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_headings() {
        assert!(Heading::Up.is_opposite(Heading::Down));
        assert!(Heading::Down.is_opposite(Heading::Up));
        assert!(Heading::Left.is_opposite(Heading::Right));
        assert!(Heading::Right.is_opposite(Heading::Left));

        assert!(!Heading::Up.is_opposite(Heading::Up));
        assert!(!Heading::Up.is_opposite(Heading::Left));
        assert!(!Heading::Up.is_opposite(Heading::Right));
    }

    #[test]
    fn test_rotation() {
        for heading in Heading::ALL {
            assert_eq!(heading.clockwise().counter_clockwise(), heading);
            assert_eq!(heading.clockwise().clockwise(), heading.opposite());
        }
        assert_eq!(Heading::Up.clockwise(), Heading::Right);
        assert_eq!(Heading::Up.counter_clockwise(), Heading::Left);
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::Up.delta(), (-1, 0));
        assert_eq!(Heading::Down.delta(), (1, 0));
        assert_eq!(Heading::Left.delta(), (0, -1));
        assert_eq!(Heading::Right.delta(), (0, 1));
    }
}
