use crate::engine::{LevelRenderer, LevelSnapshot};
use crate::models::Level;
use crate::utils::time_utils::format_date;

/// Headless renderer: writes each snapshot to the log instead of a chart.
pub struct LogRenderer {
    /// How many ladder levels around the reference price to show.
    pub nearest: usize,
    /// Log every level, not just the nearest ones.
    pub verbose_levels: bool,
    frames: usize,
}

impl LogRenderer {
    pub fn new(nearest: usize, verbose_levels: bool) -> Self {
        Self {
            nearest,
            verbose_levels,
            frames: 0,
        }
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames
    }

    fn describe(level: &Level) -> String {
        if level.has_label() {
            format!("{:.2} [{}] {}", level.price, level.label, level.style)
        } else {
            format!("{:.2} {}", level.price, level.style)
        }
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(4, false)
    }
}

impl LevelRenderer for LogRenderer {
    fn render(&mut self, snapshot: &LevelSnapshot) {
        self.frames += 1;

        log::info!(
            "Frame {}: price {:.2}, window [{}, {}], {} levels ({:?})",
            self.frames,
            snapshot.reference_price,
            snapshot.window.start_price,
            snapshot.window.end_price,
            snapshot.levels.len(),
            snapshot.state
        );

        let nearest: Vec<String> = snapshot
            .nearest_levels(snapshot.reference_price, self.nearest)
            .into_iter()
            .map(Self::describe)
            .collect();
        if !nearest.is_empty() {
            log::info!("  nearest: {}", nearest.join(" | "));
        }

        if self.verbose_levels {
            for level in &snapshot.levels {
                log::info!("  {} {} w{}", Self::describe(level), level.color, level.width);
            }
        }

        let pivot_lines = snapshot.pivot_lines();
        if !pivot_lines.is_empty() {
            let text: Vec<String> = pivot_lines
                .iter()
                .map(|line| format!("{} {:.2}", line.kind, line.price))
                .collect();
            log::info!("  pivots ({}): {}", format_date(snapshot.pivots_date), text.join("  "));
        }
    }
}
