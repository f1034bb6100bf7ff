use std::time::{Duration, Instant};

/// Stats for one interactive session, spanning many runs
pub struct GameMetrics {
    /// Set while a run is ticking; the clock freezes once it ends
    pub run_started: Option<Instant>,
    pub elapsed_time: Duration,
    /// Moves committed in the current run
    pub ticks: u32,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_started: None,
            elapsed_time: Duration::ZERO,
            ticks: 0,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        if let Some(start) = self.run_started {
            self.elapsed_time = start.elapsed();
        }
    }

    pub fn on_run_start(&mut self) {
        self.run_started = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
        self.ticks = 0;
    }

    pub fn on_tick(&mut self) {
        self.ticks += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.run_started = None;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn on_reset(&mut self) {
        self.run_started = None;
        self.elapsed_time = Duration::ZERO;
        self.ticks = 0;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
    }

    #[test]
    fn test_tick_count_per_run() {
        let mut metrics = GameMetrics::new();
        metrics.on_run_start();
        metrics.on_tick();
        metrics.on_tick();
        assert_eq!(metrics.ticks, 2);

        metrics.on_game_over(0);
        assert_eq!(metrics.ticks, 2);

        metrics.on_reset();
        assert_eq!(metrics.ticks, 0);
    }

    #[test]
    fn test_clock_runs_only_during_a_run() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.on_run_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.on_game_over(1);
        let frozen = metrics.elapsed_time;
        assert!(frozen.as_millis() >= 20);

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_reset();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
