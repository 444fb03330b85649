use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{
    action::Action,
    cell::Cell,
    config::GameConfig,
    error::GameError,
    gate::GatePair,
    grid::GridMap,
    score::{MissionProgress, ScoreBoard},
    snake::{DeathCause, MIN_LENGTH, MoveOutcome, SnakeBody},
    state::Position,
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// What the snake did this tick
    pub outcome: MoveOutcome,
    /// Whether every mission target has been reached
    pub mission_complete: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// An item on the field and how long it has been lying there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    pos: Position,
    kind: Cell,
    age: u32,
}

/// The game engine: owns the level and drives the snake once per tick
pub struct GameEngine {
    config: GameConfig,
    grid: GridMap,
    snake: SnakeBody,
    score: ScoreBoard,
    gates: GatePair,
    items: Vec<Item>,
    gate_age: u32,
    steps: u32,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration and build the level
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (grid, snake, gates) = build_level(&config, &mut rng)?;

        let mut engine = Self {
            score: ScoreBoard::new(MIN_LENGTH as i32),
            config,
            grid,
            snake,
            gates,
            items: Vec::new(),
            gate_age: 0,
            steps: 0,
            rng,
        };
        engine.replenish_items()?;
        log::info!(
            "new game on {}x{} grid, gates at {:?}",
            engine.grid.height(),
            engine.grid.width(),
            engine.gates.positions()
        );
        Ok(engine)
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> Result<(), GameError> {
        let (grid, snake, gates) = build_level(&self.config, &mut self.rng)?;
        self.grid = grid;
        self.snake = snake;
        self.gates = gates;
        self.score = ScoreBoard::new(MIN_LENGTH as i32);
        self.items.clear();
        self.gate_age = 0;
        self.steps = 0;
        self.replenish_items()?;
        log::info!("game reset, gates at {:?}", self.gates.positions());
        Ok(())
    }

    /// Execute one step of the game
    pub fn step(&mut self, action: Action) -> Result<StepResult, GameError> {
        if self.snake.is_game_over() {
            return Ok(self.result(MoveOutcome::Halted));
        }

        if let Action::Turn(heading) = action {
            if !self.snake.change_direction(heading) {
                log::info!("reversed into itself after {} steps", self.steps);
                return Ok(self.result(MoveOutcome::Died(DeathCause::Reversal)));
            }
        }

        let outcome = self
            .snake
            .advance(&mut self.grid, &mut self.score, &self.gates)?;
        self.steps += 1;

        match outcome {
            MoveOutcome::Died(cause) => {
                log::info!(
                    "game over after {} steps: {:?}, score {}",
                    self.steps,
                    cause,
                    self.score.score
                );
                log::debug!("final board:\n{}", self.grid);
            }
            _ => {
                self.age_items()?;
                self.replenish_items()?;
                self.age_gates()?;
            }
        }

        Ok(self.result(outcome))
    }

    fn result(&self, outcome: MoveOutcome) -> StepResult {
        StepResult {
            terminated: self.snake.is_game_over(),
            info: StepInfo {
                outcome,
                mission_complete: self.mission_progress().is_complete(),
            },
        }
    }

    /// Forget eaten or overwritten items and expire stale ones
    fn age_items(&mut self) -> Result<(), GameError> {
        let lifetime = self.config.item_lifetime_ticks;
        let mut kept = Vec::with_capacity(self.items.len());

        for mut item in std::mem::take(&mut self.items) {
            if self.grid.read(item.pos) != Some(item.kind) {
                continue;
            }
            item.age += 1;
            if lifetime > 0 && item.age >= lifetime {
                self.grid.write(item.pos, Cell::Empty)?;
                continue;
            }
            kept.push(item);
        }

        self.items = kept;
        Ok(())
    }

    /// Top the field back up to the configured item counts
    ///
    /// A crowded field gets as many items as still fit.
    fn replenish_items(&mut self) -> Result<(), GameError> {
        let wanted = [
            (Cell::Growth, self.config.growth_items),
            (Cell::Poison, self.config.poison_items),
        ];

        for (kind, target) in wanted {
            let present = self.items.iter().filter(|item| item.kind == kind).count();
            for placed in present..target {
                let Some(&pos) = self.grid.empty_cells().choose(&mut self.rng) else {
                    log::debug!("no room for {} more {:?} item(s)", target - placed, kind);
                    return Ok(());
                };
                self.grid.write(pos, kind)?;
                self.items.push(Item { pos, kind, age: 0 });
                log::debug!("spawned {:?} at {}", kind, pos);
            }
        }
        Ok(())
    }

    /// Move the gates once they have stood long enough and nothing is passing
    fn age_gates(&mut self) -> Result<(), GameError> {
        let lifetime = self.config.gate_lifetime_ticks;
        self.gate_age = self.gate_age.saturating_add(1);
        if lifetime == 0 || self.gate_age < lifetime || self.snake_near_gates() {
            return Ok(());
        }

        self.gates.remove(&mut self.grid)?;
        self.gates = pick_gates(&self.grid, &mut self.rng)?;
        self.gates.place(&mut self.grid)?;
        self.gate_age = 0;
        log::debug!("gates moved to {:?}", self.gates.positions());
        Ok(())
    }

    fn snake_near_gates(&self) -> bool {
        self.snake.segments().iter().any(|segment| {
            self.gates
                .positions()
                .iter()
                .any(|gate| gate.is_adjacent(*segment))
        })
    }

    pub fn mission_progress(&self) -> MissionProgress {
        self.score.progress(&self.config.missions)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn gates(&self) -> &GatePair {
        &self.gates
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_game_over(&self) -> bool {
        self.snake.is_game_over()
    }
}

/// Walls, snake and gates for a fresh game
fn build_level(
    config: &GameConfig,
    rng: &mut StdRng,
) -> Result<(GridMap, SnakeBody, GatePair), GameError> {
    let mut grid = GridMap::with_border_walls(config.grid_height, config.grid_width);
    for &wall in &config.walls {
        grid.write(wall, Cell::Wall)?;
    }

    let snake = SnakeBody::new(config.spawn_head(), &mut grid)?;

    let gates = pick_gates(&grid, rng)?;
    gates.place(&mut grid)?;

    Ok((grid, snake, gates))
}

/// Two distinct wall cells, never corners
fn pick_gates(grid: &GridMap, rng: &mut StdRng) -> Result<GatePair, GameError> {
    let candidates: Vec<Position> = grid
        .cells_of(Cell::Wall)
        .filter(|pos| !grid.is_corner(*pos))
        .collect();

    let picked: Vec<Position> = candidates.choose_multiple(rng, 2).copied().collect();
    match picked.as_slice() {
        &[a, b] => Ok(GatePair::new(a, b)),
        _ => Err(GameError::NoFreeCell("gate")),
    }
}
