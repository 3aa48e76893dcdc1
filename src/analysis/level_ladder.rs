use itertools::iproduct;
use serde::Serialize;

use crate::models::{AnchorSet, Level};
use crate::utils::maths_utils::{BAND_WIDTH, round_to_multiple, stepped_inclusive};

/// The span of band prices a ladder is drawn over.
///
/// The window is anchored on the reference price rounded to the nearest band,
/// shifted down by `lower_offset`, and extends `upper_offset` above that point.
/// It is deliberately not centred on the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceWindow {
    pub start_price: i64,
    pub end_price: i64,
}

impl PriceWindow {
    pub fn around(reference_price: f64, lower_offset: i64, upper_offset: i64) -> Self {
        let start_price = round_to_multiple(reference_price, BAND_WIDTH).saturating_sub(lower_offset);
        Self {
            start_price,
            end_price: start_price.saturating_add(upper_offset),
        }
    }

    /// Band bottoms from `start_price` up to and including `end_price`.
    pub fn band_prices(&self) -> impl Iterator<Item = i64> + Clone + use<> {
        stepped_inclusive(self.start_price, self.end_price, BAND_WIDTH)
    }

    pub fn is_empty(&self) -> bool {
        self.end_price < self.start_price
    }
}

/// Expand every anchor of every set across the bands of the window.
///
/// Output order is set, then anchor, then band price (innermost), so repeated
/// calls with the same inputs produce identical sequences.
pub fn generate_levels(
    reference_price: f64,
    lower_offset: i64,
    upper_offset: i64,
    anchor_sets: &[AnchorSet],
) -> Vec<Level> {
    let window = PriceWindow::around(reference_price, lower_offset, upper_offset);
    levels_in_window(&window, anchor_sets)
}

pub fn levels_in_window(window: &PriceWindow, anchor_sets: &[AnchorSet]) -> Vec<Level> {
    anchor_sets
        .iter()
        .flat_map(|set| {
            iproduct!(set.anchors.iter(), window.band_prices()).map(move |(anchor, band)| Level {
                price: anchor.value + band as f64,
                color: set.color,
                label: set.label_for(anchor),
                width: set.width,
                style: set.style,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineColor, LineStyle};
    use crate::models::parse_anchors;
    use crate::models::anchor_set::NO_LABEL;

    fn set(name: &str, levels: &str, label: &str) -> AnchorSet {
        AnchorSet {
            name: name.to_string(),
            anchors: parse_anchors(levels).unwrap(),
            color: LineColor::from_rgb(10, 20, 30),
            label_suffix: label.to_string(),
            width: 2,
            style: LineStyle::Dot,
        }
    }

    fn prices(levels: &[Level]) -> Vec<f64> {
        levels.iter().map(|l| l.price).collect()
    }

    #[test]
    fn window_is_offset_from_rounded_price() {
        let w = PriceWindow::around(1234.0, 100, 100);
        assert_eq!(w, PriceWindow { start_price: 1100, end_price: 1200 });
        assert_eq!(w.band_prices().collect::<Vec<_>>(), vec![1100, 1200]);
    }

    #[test]
    fn ladder_example_in_anchor_major_order() {
        let levels = generate_levels(1234.0, 100, 100, &[set("Core", "20-80", "")]);
        assert_eq!(prices(&levels), vec![1120.0, 1220.0, 1180.0, 1280.0]);
        assert_eq!(levels[0].label, "20");
        assert_eq!(levels[2].label, "80");
        assert!(levels.iter().all(|l| l.style == LineStyle::Dot && l.width == 2));
    }

    #[test]
    fn sets_are_emitted_one_after_another() {
        let sets = [set("Core", "20", "c"), set("Secondary", "50", "s")];
        let levels = generate_levels(1000.0, 0, 100, &sets);
        assert_eq!(prices(&levels), vec![1020.0, 1120.0, 1050.0, 1150.0]);
        assert_eq!(levels[0].label, "20c");
        assert_eq!(levels[3].label, "50s");
    }

    #[test]
    fn same_inputs_give_same_output() {
        let sets = [set("Core", "20-80", ""), set("Secondary", "33.5-46-66-93-3.5", NO_LABEL)];
        let first = generate_levels(38_512.4, 500, 1000, &sets);
        let second = generate_levels(38_512.4, 500, 1000, &sets);
        assert_eq!(first, second);
        assert_eq!(first.len(), 7 * 11);
    }

    #[test]
    fn every_level_sits_on_a_band_inside_the_window() {
        let sets = [set("Core", "20-80", ""), set("Secondary", "33.5-3.5", NO_LABEL)];
        let window = PriceWindow::around(5_049.0, 300, 650);
        for level in levels_in_window(&window, &sets) {
            let anchor = sets
                .iter()
                .flat_map(|s| s.anchors.iter())
                .find(|a| {
                    let band = level.price - a.value;
                    band.fract() == 0.0
                        && (band as i64 - window.start_price) % BAND_WIDTH == 0
                        && band as i64 >= window.start_price
                        && band as i64 <= window.end_price
                });
            assert!(anchor.is_some(), "level {} outside window {:?}", level.price, window);
        }
    }

    #[test]
    fn dash_suffix_suppresses_labels() {
        let levels = generate_levels(1234.0, 100, 100, &[set("Secondary", "33.5-46", NO_LABEL)]);
        assert!(levels.iter().all(|l| !l.has_label()));

        let labelled = generate_levels(1234.0, 100, 100, &[set("Core", "33.5", " mid")]);
        assert_eq!(labelled[0].label, "33.5 mid");
    }

    #[test]
    fn negative_upper_offset_gives_no_levels() {
        let window = PriceWindow::around(1234.0, 100, -1);
        assert!(window.is_empty());
        assert!(generate_levels(1234.0, 100, -1, &[set("Core", "20-80", "")]).is_empty());
    }

    #[test]
    fn duplicate_anchors_are_not_merged() {
        let sets = [set("Core", "50", ""), set("Secondary", "50", "")];
        let levels = generate_levels(1000.0, 0, 0, &sets);
        assert_eq!(prices(&levels), vec![1050.0, 1050.0]);
    }

    #[test]
    fn zero_reference_price_still_builds_a_window() {
        let levels = generate_levels(0.0, 100, 200, &[set("Core", "20", "")]);
        assert_eq!(prices(&levels), vec![-80.0, 20.0, 120.0]);
    }
}
