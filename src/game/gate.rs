use super::{action::Heading, cell::Cell, error::GameError, grid::GridMap, state::Position};

/// Teleport endpoints and exit-heading resolution
///
/// There are exactly two pairings, indexed 0 and 1.
pub trait GateSystem {
    fn gate_entry(&self, pairing: usize) -> Position;
    fn gate_exit(&self, pairing: usize) -> Position;
    /// Heading the snake faces when leaving through `exit`
    fn resolve_exit_heading(&self, exit: Position, current: Heading, grid: &GridMap) -> Heading;
}

/// Two linked gate cells set into the walls
///
/// Pairing 0 enters through gate A and leaves through gate B, pairing 1 the
/// other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePair {
    gates: [Position; 2],
}

impl GatePair {
    pub fn new(a: Position, b: Position) -> Self {
        Self { gates: [a, b] }
    }

    pub fn positions(&self) -> [Position; 2] {
        self.gates
    }

    /// Mark both gate cells on the grid
    pub fn place(&self, grid: &mut GridMap) -> Result<(), GameError> {
        for gate in self.gates {
            grid.write(gate, Cell::Gate)?;
        }
        Ok(())
    }

    /// Turn both gate cells back into wall
    pub fn remove(&self, grid: &mut GridMap) -> Result<(), GameError> {
        for gate in self.gates {
            grid.write(gate, Cell::Wall)?;
        }
        Ok(())
    }
}

impl GateSystem for GatePair {
    fn gate_entry(&self, pairing: usize) -> Position {
        self.gates[pairing % 2]
    }

    fn gate_exit(&self, pairing: usize) -> Position {
        self.gates[(pairing + 1) % 2]
    }

    fn resolve_exit_heading(&self, exit: Position, current: Heading, grid: &GridMap) -> Heading {
        // Border gates always open into the field
        if grid.is_border(exit) {
            let last_row = grid.height() as i32 - 1;
            let last_col = grid.width() as i32 - 1;
            if exit.row == 0 {
                return Heading::Down;
            }
            if exit.row == last_row {
                return Heading::Up;
            }
            if exit.col == 0 {
                return Heading::Right;
            }
            if exit.col == last_col {
                return Heading::Left;
            }
        }

        let candidates = [
            current,
            current.clockwise(),
            current.counter_clockwise(),
            current.opposite(),
        ];

        candidates
            .into_iter()
            .find(|heading| {
                grid.read(exit.stepped(*heading))
                    .is_some_and(|cell| !cell.is_solid() && cell != Cell::Gate)
            })
            .unwrap_or(current)
    }
}
