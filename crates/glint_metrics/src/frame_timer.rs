//! Frame timing over a rolling window

use std::time::Instant;

use crate::history::History;
use crate::FrameStats;

/// Measures wall time between presented frames
pub struct FrameTimer {
    last_frame: Instant,
    history: History,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        Self {
            last_frame: Instant::now(),
            history: History::new(window),
        }
    }

    /// Record one presented frame. Call once per present.
    pub fn frame(&mut self) {
        let now = Instant::now();
        self.history.push(now - self.last_frame);
        self.last_frame = now;
    }

    /// Number of frames currently in the window
    pub fn frames(&self) -> usize {
        self.history.len()
    }

    pub fn stats(&self) -> FrameStats {
        let Some((avg, min, max)) = self.history.summary() else {
            return FrameStats::default();
        };
        let avg_s = avg.as_secs_f64();
        FrameStats {
            fps: if avg_s > 0.0 { 1.0 / avg_s } else { 0.0 },
            avg_ms: avg_s * 1000.0,
            min_ms: min.as_secs_f64() * 1000.0,
            max_ms: max.as_secs_f64() * 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_reports_zeroed_stats() {
        let timer = FrameTimer::new(60);
        assert_eq!(timer.frames(), 0);
        assert_eq!(timer.stats(), FrameStats::default());
    }

    #[test]
    fn recorded_frames_produce_ordered_stats() {
        let mut timer = FrameTimer::new(60);
        timer.frame();
        std::thread::sleep(std::time::Duration::from_millis(2));
        timer.frame();

        assert_eq!(timer.frames(), 2);
        let stats = timer.stats();
        assert!(stats.min_ms <= stats.avg_ms);
        assert!(stats.avg_ms <= stats.max_ms);
        assert!(stats.max_ms > 0.0);
    }
}
