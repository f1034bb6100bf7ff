use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use super::scheduler::TickScheduler;
use crate::audio::{self, AudioNotifier};
use crate::game::{Direction, GameConfig, GameEngine, GameEvent, GamePhase, GameState, Steer};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, ViewModel};

/// Interactive session: owns the state and routes engine events to the
/// renderer, score display and audio cues
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    view: ViewModel,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    scheduler: TickScheduler,
    audio: Box<dyn AudioNotifier>,
    should_quit: bool,
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, dropping the guard undoes raw mode even if entering
        // the alternate screen fails
        let guard = Self { restored: false };
        execute!(stderr(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Run every teardown step and report the first failure
    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(stderr(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen");
        let shown = execute!(stderr(), cursor::Show).context("Failed to show cursor");

        raw_mode.and(screen).and(shown)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("terminal restore failed: {:#}", err);
        }
    }
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let audio = audio::notifier(config.sound);
        Self::with_audio(config, audio)
    }

    /// Build a session that sends sound cues to `audio`
    pub fn with_audio(config: GameConfig, audio: Box<dyn AudioNotifier>) -> Result<Self> {
        let mut engine = GameEngine::new(config)?;
        let config = engine.config();
        let renderer = Renderer::new(config.board_size, config.cell_size);
        let scheduler = TickScheduler::new(config.tick_interval());

        let state = engine.new_game();
        let view = ViewModel::new(state.snapshot());

        Ok(Self {
            engine,
            state,
            view,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            scheduler,
            audio,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "session started on a {}x{} board",
            self.state.board_size, self.state.board_size
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        let restored = guard.restore();

        info!(
            "session ended after {} games, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );

        result.and(restored)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame), independent of the tick cadence
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => warn!("failed to read terminal event: {}", err),
                        None => self.should_quit = true,
                    }
                }

                // Only resolves while a run is active
                _ = self.scheduler.next() => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.view, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.scheduler.stop();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => self.steer(direction),
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn steer(&mut self, direction: Direction) {
        if self.engine.set_direction(&mut self.state, direction) == Steer::Started {
            self.scheduler.start();
            self.metrics.on_run_start();
            self.view.set_phase(GamePhase::Running);
        }
    }

    fn on_tick(&mut self) {
        let ticks_before = self.state.ticks;
        let events = self.engine.tick(&mut self.state);
        if self.state.ticks > ticks_before {
            self.metrics.on_tick();
        }
        self.dispatch(events);
    }

    fn restart(&mut self) {
        self.scheduler.stop();
        let events = self.engine.reset(&mut self.state);
        self.metrics.on_reset();
        self.view.set_phase(GamePhase::Idle);
        self.dispatch(events);
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            self.view.apply(&event);

            match event {
                GameEvent::FoodConsumed => self.audio.food_consumed(),
                GameEvent::GameOver { final_score, .. } => {
                    self.scheduler.stop();
                    self.audio.game_over();
                    self.metrics.on_game_over(final_score);
                }
                GameEvent::Render(_) | GameEvent::ScoreChanged(_) => {}
            }
        }
    }
}
