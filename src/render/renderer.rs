use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::view::ViewModel;
use crate::game::{GamePhase, Position};
use crate::metrics::GameMetrics;

/// Draws a [`ViewModel`] onto a board of `cells` x `cells`
pub struct Renderer {
    cells: i32,
    cell_size: i32,
}

impl Renderer {
    /// A non-positive `cell_size` yields an empty board
    pub fn new(board_size: i32, cell_size: i32) -> Self {
        let cells = if cell_size > 0 { board_size / cell_size } else { 0 };
        Self { cells, cell_size }
    }

    pub fn render(&self, frame: &mut Frame, view: &ViewModel, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, metrics), chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match &view.banner {
            Some(message) if view.phase == GamePhase::Over => {
                frame.render_widget(self.render_game_over(message), game_area);
            }
            _ => frame.render_widget(self.render_grid(view), game_area),
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, view: &ViewModel) -> Paragraph<'_> {
        let snapshot = &view.snapshot;
        let head = snapshot.snake.first().copied();
        let mut lines = Vec::with_capacity(self.cells as usize);

        for row in 0..self.cells {
            let mut spans = Vec::with_capacity(self.cells as usize);

            for col in 0..self.cells {
                let pos = Position::new(col * self.cell_size, row * self.cell_size);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if view.phase == GamePhase::Idle {
            " Snake - press an arrow key to start "
        } else {
            " Snake "
        };

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

    fn render_stats(&self, view: &ViewModel, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                view.score_text(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, message: &str) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
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
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, EndCause, GameEvent, Snapshot};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn view() -> ViewModel {
        ViewModel::new(Snapshot {
            snake: vec![Position::new(20, 20), Position::new(0, 20)],
            food: Position::new(40, 0),
        })
    }

    #[test]
    fn test_draws_score_and_board() {
        let renderer = Renderer::new(60, 20);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut view = view();
        view.apply(&GameEvent::ScoreChanged(4));
        let mut metrics = GameMetrics::new();
        metrics.ticks = 17;

        terminal
            .draw(|frame| renderer.render(frame, &view, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 4"));
        assert!(text.contains("Ticks: 17"));
        assert!(text.contains('■'));
        assert!(text.contains('□'));
        assert!(text.contains('O'));
    }

    #[test]
    fn test_draws_game_over_banner() {
        let renderer = Renderer::new(60, 20);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut view = view();
        view.apply(&GameEvent::GameOver {
            final_score: 2,
            cause: EndCause::Collision(CollisionType::SelfCollision),
        });

        terminal
            .draw(|frame| renderer.render(frame, &view, &GameMetrics::new()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("Game Over! Your score: 2"));
    }

    #[test]
    fn test_zero_cell_size_draws_empty_board() {
        let renderer = Renderer::new(400, 0);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &view(), &GameMetrics::new()))
            .unwrap();

        assert!(!buffer_text(&terminal).contains('■'));
    }
}
