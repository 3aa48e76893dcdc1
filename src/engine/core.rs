use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::analysis::pivot_calc::{is_new_day, maybe_recompute_pivots};
use crate::analysis::PriceWindow;
use crate::analysis::level_ladder::levels_in_window;
#[cfg(debug_assertions)]
use crate::config::{PRINT_LEVEL_REBUILDS, PRINT_PIVOT_UPDATES};
use crate::config::LevelsConfig;
use crate::models::{AnchorSet, PivotSet};
use crate::utils::TimeUtils;
use crate::utils::time_utils::format_date;

use super::host::{ChartHost, LevelRenderer};
use super::state::{EngineState, LevelSnapshot};

/// Update orchestrator for one overlay instance.
///
/// Owns the level list and the pivot set. Driven synchronously by the host,
/// one [`on_update`](Self::on_update) per price/bar event.
pub struct LevelEngine {
    config: LevelsConfig,
    anchor_sets: Vec<AnchorSet>,

    state: EngineState,
    pivots: PivotSet,
    last_calculation_date: NaiveDate,

    /// Last published output. Replaced wholesale, never edited.
    snapshot: Arc<LevelSnapshot>,
}

impl LevelEngine {
    /// Validate the configuration and build an engine in `AwaitingFirstDay`.
    /// A malformed anchor list or presentation value fails here.
    pub fn new(config: LevelsConfig) -> Result<Self> {
        let anchor_sets = config.validate()?;
        let pivots = PivotSet::default();
        let last_calculation_date = TimeUtils::NEVER;
        let snapshot = Arc::new(LevelSnapshot {
            state: EngineState::AwaitingFirstDay,
            reference_price: 0.0,
            window: PriceWindow::around(0.0, config.price_lower_offset, config.price_upper_offset),
            levels: Vec::new(),
            pivots,
            pivots_date: last_calculation_date,
            pivot_presentation: config.pivots.clone(),
            label_offset: config.label_offset,
        });

        log::info!(
            "Level engine ready for {}: {} anchor sets, window -{}/+{}",
            config.symbol,
            anchor_sets.len(),
            config.price_lower_offset,
            config.price_upper_offset
        );

        Ok(Self {
            config,
            anchor_sets,
            state: EngineState::AwaitingFirstDay,
            pivots,
            last_calculation_date,
            snapshot,
        })
    }

    /// THE UPDATE LOOP.
    /// Rebuilds the ladder from the latest price, refreshes the pivots when the
    /// UTC day has rolled over, then publishes a new snapshot.
    pub fn on_update(&mut self, host: &impl ChartHost) -> Arc<LevelSnapshot> {
        // 1. Ladder (always). No price yet means a degenerate window around zero.
        let reference_price = host
            .reference_price()
            .filter(|price| price.is_finite())
            .unwrap_or(0.0);
        let window = PriceWindow::around(
            reference_price,
            self.config.price_lower_offset,
            self.config.price_upper_offset,
        );
        let levels = levels_in_window(&window, &self.anchor_sets);

        #[cfg(debug_assertions)]
        if PRINT_LEVEL_REBUILDS {
            log::info!(
                "Ladder rebuilt at {:.2}: {} levels over [{}, {}]",
                reference_price,
                levels.len(),
                window.start_price,
                window.end_price
            );
        }

        // 2. Pivots (at most once per UTC day)
        self.refresh_pivots(host);

        // 3. Publish
        self.snapshot = Arc::new(LevelSnapshot {
            state: self.state,
            reference_price,
            window,
            levels,
            pivots: self.pivots,
            pivots_date: self.last_calculation_date,
            pivot_presentation: self.config.pivots.clone(),
            label_offset: self.config.label_offset,
        });
        self.snapshot.clone()
    }

    /// Run an update and hand the result straight to a renderer.
    pub fn update_and_render(&mut self, host: &impl ChartHost, renderer: &mut impl LevelRenderer) {
        let snapshot = self.on_update(host);
        renderer.render(&snapshot);
    }

    /// Accessor for renderers reading between updates
    pub fn snapshot(&self) -> Arc<LevelSnapshot> {
        self.snapshot.clone()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn pivots(&self) -> PivotSet {
        self.pivots
    }

    pub fn last_calculation_date(&self) -> NaiveDate {
        self.last_calculation_date
    }

    pub fn config(&self) -> &LevelsConfig {
        &self.config
    }

    // --- CONFIG UPDATES ---

    /// Swap in a new configuration. On error the old one stays active.
    /// Pivots and their calculation date survive; the next update rebuilds the ladder.
    pub fn update_config(&mut self, new_config: LevelsConfig) -> Result<()> {
        let anchor_sets = new_config.validate()?;
        self.anchor_sets = anchor_sets;
        self.config = new_config;
        Ok(())
    }

    // --- INTERNAL LOGIC ---

    fn refresh_pivots(&mut self, host: &impl ChartHost) {
        let today = host.current_utc_date();
        if !is_new_day(today, self.last_calculation_date) {
            return;
        }

        let history = host.daily_history(&self.config.symbol, self.config.pivot_lookback_days);
        match maybe_recompute_pivots(&history, today, self.last_calculation_date) {
            Some((pivots, calculated_on)) => {
                self.pivots = pivots;
                self.last_calculation_date = calculated_on;
                if self.state == EngineState::AwaitingFirstDay {
                    self.state = EngineState::Ready;
                }
                log::info!(
                    "[{}] Pivots for {}: P {:.2} R1 {:.2} R2 {:.2} S1 {:.2} S2 {:.2}",
                    self.config.symbol,
                    format_date(calculated_on),
                    pivots.pivot,
                    pivots.r1,
                    pivots.r2,
                    pivots.s1,
                    pivots.s2
                );
            }
            None => {
                // Not enough closed daily bars yet. Keep the old set; the date is
                // left alone so the next update tries again.
                #[cfg(debug_assertions)]
                if PRINT_PIVOT_UPDATES {
                    log::info!(
                        "[{}] No completed daily bar for {} ({} bars available, last calc {})",
                        self.config.symbol,
                        format_date(today),
                        history.len(),
                        format_date(self.last_calculation_date)
                    );
                }
            }
        }
    }
}
