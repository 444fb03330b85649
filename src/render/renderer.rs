use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, DeathCause, GameEngine, Position, ScoreTracker};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        engine: &GameEngine,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, metrics), chunks[0]);

        // Grid on the left, score board and missions on the right
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(chunks[1]);

        if engine.is_game_over() {
            frame.render_widget(self.render_game_over(engine), body[0]);
        } else {
            frame.render_widget(self.render_grid(engine, paused), body[0]);
        }

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(body[1]);
        frame.render_widget(self.render_score_board(engine), side[0]);
        frame.render_widget(self.render_missions(engine), side[1]);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn cell_span(cell: Cell) -> Span<'static> {
        match cell {
            Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
            Cell::Wall => Span::styled("██", Style::default().fg(Color::Gray)),
            Cell::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body | Cell::FreshBody => {
                Span::styled("□ ", Style::default().fg(Color::Green))
            }
            Cell::Growth => Span::styled(
                "+ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Poison => Span::styled(
                "x ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Gate => Span::styled(
                "◎ ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn render_grid(&self, engine: &GameEngine, paused: bool) -> Paragraph<'_> {
        let grid = engine.grid();
        let mut lines = Vec::with_capacity(grid.height());

        for row in 0..grid.height() {
            let spans: Vec<Span> = (0..grid.width())
                .map(|col| {
                    let cell = grid
                        .read(Position::new(row as i32, col as i32))
                        .unwrap_or_default();
                    Self::cell_span(cell)
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, engine: &GameEngine, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let text = vec![Line::from(vec![
            label("Score: "),
            Span::styled(
                engine.score().score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            label("Steps: "),
            value(engine.steps().to_string()),
            Span::raw("    "),
            label("Time: "),
            value(metrics.format_time()),
            Span::raw("    "),
            label("Best: "),
            value(metrics.high_score.to_string()),
            Span::raw("    "),
            label("Longest: "),
            value(metrics.longest_length.to_string()),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_score_board(&self, engine: &GameEngine) -> Paragraph<'_> {
        let score = engine.score();
        let row = |name: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{name:<8}"), Style::default().fg(Color::Yellow)),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        };

        let text = vec![
            row(
                "Length",
                format!(
                    "{} / {}",
                    score.body_current_length(),
                    score.body_longest_length()
                ),
            ),
            row("Growth", score.growth_eaten.to_string()),
            row("Poison", score.poison_eaten.to_string()),
            row("Gates", score.gate_eaten.to_string()),
        ];

        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Score Board "),
        )
    }

    fn render_missions(&self, engine: &GameEngine) -> Paragraph<'_> {
        let missions = &engine.config().missions;
        let progress = engine.mission_progress();
        let row = |name: &'static str, target: String, done: bool| {
            let (mark, color) = if done { ("v", Color::Green) } else { (" ", Color::Gray) };
            Line::from(vec![
                Span::styled(format!("{name:<8}{target:>4}  "), Style::default().fg(color)),
                Span::styled(format!("({mark})"), Style::default().fg(color)),
            ])
        };

        let mut text = vec![
            row("Length", missions.length.to_string(), progress.length),
            row("Growth", missions.growth.to_string(), progress.growth),
            row("Poison", missions.poison.to_string(), progress.poison),
            row("Gates", missions.gate.to_string(), progress.gate),
        ];
        if progress.is_complete() {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "STAGE CLEAR",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Mission "))
    }

    fn render_game_over(&self, engine: &GameEngine) -> Paragraph<'_> {
        let reason = match engine.snake().death_cause() {
            Some(DeathCause::Collision(Cell::Wall)) => "Hit a wall",
            Some(DeathCause::Collision(_)) => "Bit its own body",
            Some(DeathCause::Reversal) => "Turned back on itself",
            Some(DeathCause::TooShort) => "Too much poison",
            None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.score().score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
