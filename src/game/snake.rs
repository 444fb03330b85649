use std::collections::VecDeque;

use super::{
    action::Heading,
    cell::Cell,
    error::GameError,
    gate::GateSystem,
    grid::GridMap,
    score::ScoreTracker,
    state::Position,
};

/// Shortest body that is still alive
pub const MIN_LENGTH: usize = 3;

/// Points for eating a growth item
pub const GROWTH_SCORE: i32 = 20;
/// Points for eating a poison item (a penalty)
pub const POISON_SCORE: i32 = -10;

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Ran into a wall or a part of itself; carries what it hit
    Collision(Cell),
    /// Asked to turn straight back
    Reversal,
    /// Poison shrank the body below the minimum length
    TooShort,
}

/// What one call to `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Advanced,
    Grew,
    Shrank,
    Teleported { pairing: usize },
    Died(DeathCause),
    /// The snake was already dead; nothing changed
    Halted,
}

/// The snake: an ordered run of cells from head to tail
///
/// The grid always mirrors `segments` while the snake is alive: the front cell
/// is marked `Head`, every other cell `Body` or `FreshBody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
    heading: Heading,
    death: Option<DeathCause>,
}

impl SnakeBody {
    /// Create a snake with its head at `head`, facing right, and mark it on the grid
    pub fn new(head: Position, grid: &mut GridMap) -> Result<Self, GameError> {
        let mut snake = Self {
            segments: VecDeque::with_capacity(MIN_LENGTH),
            heading: Heading::Right,
            death: None,
        };
        snake.initialize(head, grid)?;
        Ok(snake)
    }

    /// Reset to a three-cell body trailing opposite the heading
    ///
    /// Cells still marked by a previous body are cleared first.
    pub fn initialize(&mut self, head: Position, grid: &mut GridMap) -> Result<(), GameError> {
        for &segment in &self.segments {
            if grid.read(segment).is_some_and(|cell| cell.is_solid()) {
                grid.write(segment, Cell::Empty)?;
            }
        }

        self.heading = Heading::Right;
        self.death = None;
        self.segments.clear();

        let back = self.heading.opposite();
        let mut cell = head;
        for _ in 0..MIN_LENGTH {
            self.segments.push_back(cell);
            cell = cell.stepped(back);
        }

        for &segment in self.segments.iter().skip(1) {
            grid.write(segment, Cell::FreshBody)?;
        }
        grid.write(head, Cell::Head)?;
        Ok(())
    }

    /// Request a new heading
    ///
    /// Turning straight back kills the snake. Any other heading, including
    /// the current one, is accepted. Returns whether the heading was accepted.
    pub fn change_direction(&mut self, requested: Heading) -> bool {
        if self.is_game_over() {
            return false;
        }

        if self.heading.is_opposite(requested) {
            self.die(DeathCause::Reversal);
            return false;
        }

        self.heading = requested;
        true
    }

    /// Advance one tick in the current heading
    ///
    /// Death is reported through the outcome, not as an error. Errors mean a
    /// collaborator broke its contract.
    pub fn advance<S, G>(
        &mut self,
        grid: &mut GridMap,
        score: &mut S,
        gates: &G,
    ) -> Result<MoveOutcome, GameError>
    where
        S: ScoreTracker + ?Sized,
        G: GateSystem + ?Sized,
    {
        if self.is_game_over() {
            return Ok(MoveOutcome::Halted);
        }

        let next = self.head_position().stepped(self.heading);

        // Outside the grid counts as wall
        let ahead = grid.read(next).unwrap_or(Cell::Wall);
        if !self.is_valid_move(next, grid) {
            return Ok(self.die(DeathCause::Collision(ahead)));
        }

        match ahead {
            Cell::Growth => {
                grid.write(next, Cell::Empty)?;
                self.add_segment(next, grid)?;

                score.add_score(GROWTH_SCORE);
                score.add_growth_eaten(1);
                score.add_body_current_length(1);
                if score.body_current_length() > score.body_longest_length() {
                    score.set_body_longest_length(score.body_current_length());
                }
                Ok(MoveOutcome::Grew)
            }
            Cell::Poison => {
                self.remove_segment(grid)?;
                grid.write(next, Cell::Empty)?;

                score.add_score(POISON_SCORE);
                score.add_poison_eaten(1);
                score.add_body_current_length(-1);

                self.step_to(next, grid)?;
                if score.body_current_length() < MIN_LENGTH as i32 {
                    return Ok(self.die(DeathCause::TooShort));
                }
                Ok(MoveOutcome::Shrank)
            }
            Cell::Gate => {
                score.add_gate_eaten(1);
                self.pass_gate(next, grid, gates)
            }
            _ => {
                self.step_to(next, grid)?;
                Ok(MoveOutcome::Advanced)
            }
        }
    }

    /// True unless `next` is off the grid or solid
    pub fn is_valid_move(&self, next: Position, grid: &GridMap) -> bool {
        grid.read(next).is_some_and(|cell| !cell.is_solid())
    }

    /// Put a new head at `at`, keeping the tail
    pub fn add_segment(&mut self, at: Position, grid: &mut GridMap) -> Result<(), GameError> {
        self.segments.push_front(at);
        grid.write(at, Cell::Head)?;
        if let Some(&neck) = self.segments.get(1) {
            grid.write(neck, Cell::FreshBody)?;
        }
        Ok(())
    }

    /// Drop the tail cell, unless it is the only one left
    pub fn remove_segment(&mut self, grid: &mut GridMap) -> Result<(), GameError> {
        if self.segments.len() > 1 {
            if let Some(tail) = self.segments.pop_back() {
                grid.write(tail, Cell::Empty)?;
            }
        }
        Ok(())
    }

    /// Ordinary advance: new head at `next`, old head demoted, tail dropped
    fn step_to(&mut self, next: Position, grid: &mut GridMap) -> Result<(), GameError> {
        self.segments.push_front(next);
        grid.write(next, Cell::Head)?;
        grid.write(self.segments[1], Cell::Body)?;

        if let Some(tail) = self.segments.pop_back() {
            grid.write(tail, Cell::Empty)?;
        }
        Ok(())
    }

    fn pass_gate<G>(
        &mut self,
        gate: Position,
        grid: &mut GridMap,
        gates: &G,
    ) -> Result<MoveOutcome, GameError>
    where
        G: GateSystem + ?Sized,
    {
        let head = self.head_position();
        let pairing = select_pairing(head, gate, gates)?;
        let exit = gates.gate_exit(pairing);
        let exit_heading = gates.resolve_exit_heading(exit, self.heading, grid);
        let landing = exit.stepped(exit_heading);

        match grid.read(landing) {
            None => return Err(GameError::GateExitOutOfBounds { exit, landing }),
            Some(cell) if cell.is_solid() || cell == Cell::Gate => {
                return Ok(self.die(DeathCause::Collision(cell)));
            }
            Some(_) => {}
        }

        for &segment in self.segments.iter().rev() {
            grid.write(segment, Cell::Empty)?;
        }

        // Every segment takes the slot of the one ahead of it
        self.segments.pop_back();
        self.segments.push_front(landing);

        for (i, &segment) in self.segments.iter().enumerate() {
            let cell = if i == 0 { Cell::Head } else { Cell::FreshBody };
            grid.write(segment, cell)?;
        }

        log::debug!(
            "gate pairing {pairing}: {gate} -> {exit}, head now {landing} facing {exit_heading:?}"
        );
        self.heading = exit_heading;
        Ok(MoveOutcome::Teleported { pairing })
    }

    fn die(&mut self, cause: DeathCause) -> MoveOutcome {
        self.death = Some(cause);
        MoveOutcome::Died(cause)
    }

    /// Get the head position
    pub fn head_position(&self) -> Position {
        self.segments
            .front()
            .copied()
            .expect("remove_segment never drops the last cell")
    }

    pub fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.death.is_some()
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death
    }
}

/// Pick the pairing whose entry matches the pre-step head, falling back to
/// the gate cell being entered
fn select_pairing<G>(head: Position, gate: Position, gates: &G) -> Result<usize, GameError>
where
    G: GateSystem + ?Sized,
{
    [head, gate]
        .into_iter()
        .find_map(|pos| (0..2).find(|&pairing| gates.gate_entry(pairing) == pos))
        .ok_or(GameError::UnknownGate { head, gate })
}
