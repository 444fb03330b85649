use std::fmt;

use super::{cell::Cell, error::GameError, state::Position};

/// The shared occupancy grid
///
/// Single owner of every cell. The snake, the engine and the renderer all go
/// through `read`/`write`, so the grid is the one place that says what occupies
/// a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Create an all-empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Create a grid whose outermost ring is wall
    pub fn with_border_walls(height: usize, width: usize) -> Self {
        let mut grid = Self::new(height, width);
        for row in 0..height {
            for col in 0..width {
                let pos = Position::new(row as i32, col as i32);
                if grid.is_border(pos) {
                    grid.cells[row * width + col] = Cell::Wall;
                }
            }
        }
        grid
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.width + pos.col as usize)
    }

    /// What occupies a cell, or None outside the grid
    pub fn read(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn write(&mut self, pos: Position, cell: Cell) -> Result<(), GameError> {
        let i = self.index(pos).ok_or(GameError::OutOfBounds(pos))?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row == 0
                || pos.col == 0
                || pos.row as usize == self.height - 1
                || pos.col as usize == self.width - 1)
    }

    pub fn is_corner(&self, pos: Position) -> bool {
        let last_row = self.height as i32 - 1;
        let last_col = self.width as i32 - 1;
        self.contains(pos)
            && (pos.row == 0 || pos.row == last_row)
            && (pos.col == 0 || pos.col == last_col)
    }

    /// Every position holding `kind`, in row-major order
    pub fn cells_of(&self, kind: Cell) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == kind)
            .map(move |(i, _)| Position::new((i / width) as i32, (i % width) as i32))
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells_of(Cell::Empty).collect()
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }
}

/// One line of storage codes per row
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{}", cell.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_walls() {
        let grid = GridMap::with_border_walls(5, 6);
        assert_eq!(grid.read(Position::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.read(Position::new(4, 5)), Some(Cell::Wall));
        assert_eq!(grid.read(Position::new(2, 0)), Some(Cell::Wall));
        assert_eq!(grid.read(Position::new(2, 3)), Some(Cell::Empty));
        // 3 x 4 interior
        assert_eq!(grid.empty_cells().len(), 12);
        assert_eq!(grid.count(Cell::Wall), 30 - 12);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = GridMap::new(3, 3);
        assert_eq!(grid.read(Position::new(-1, 0)), None);
        assert_eq!(grid.read(Position::new(0, 3)), None);
        assert_eq!(
            grid.write(Position::new(3, 0), Cell::Wall),
            Err(GameError::OutOfBounds(Position::new(3, 0)))
        );
    }

    #[test]
    fn test_display_uses_storage_codes() {
        let mut grid = GridMap::with_border_walls(3, 4);
        grid.write(Position::new(1, 1), Cell::Growth).unwrap();
        grid.write(Position::new(1, 2), Cell::Gate).unwrap();

        assert_eq!(grid.to_string(), "1111\n1571\n1111\n");
    }

    #[test]
    fn test_corners() {
        let grid = GridMap::new(4, 5);
        assert!(grid.is_corner(Position::new(0, 0)));
        assert!(grid.is_corner(Position::new(0, 4)));
        assert!(grid.is_corner(Position::new(3, 0)));
        assert!(grid.is_corner(Position::new(3, 4)));
        assert!(!grid.is_corner(Position::new(0, 2)));
        assert!(grid.is_border(Position::new(0, 2)));
        assert!(!grid.is_border(Position::new(1, 2)));
    }
}
