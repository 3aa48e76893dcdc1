use serde::Serialize;

/// Which side of the market a pivot line describes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum PivotRole {
    Support,
    Pivot,
    Resistance,
}

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, strum_macros::EnumIter, strum_macros::Display,
)]
pub enum PivotKind {
    S2,
    S1,
    #[strum(serialize = "P")]
    Pivot,
    R1,
    R2,
}

impl PivotKind {
    pub fn role(&self) -> PivotRole {
        match self {
            PivotKind::S2 | PivotKind::S1 => PivotRole::Support,
            PivotKind::Pivot => PivotRole::Pivot,
            PivotKind::R1 | PivotKind::R2 => PivotRole::Resistance,
        }
    }
}

/// Classic floor-trader pivot levels for one trading day.
/// All zero until the first successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PivotSet {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

impl PivotSet {
    /// Derive the five levels from the previous day's high, low and close.
    pub fn from_hlc(high: f64, low: f64, close: f64) -> Self {
        let pivot = (high + low + close) / 3.0;
        let r1 = 2.0 * pivot - low;
        let s1 = 2.0 * pivot - high;
        let spread = r1 - s1;

        Self {
            pivot,
            r1,
            r2: pivot + spread,
            s1,
            s2: pivot - spread,
        }
    }

    pub fn value(&self, kind: PivotKind) -> f64 {
        match kind {
            PivotKind::S2 => self.s2,
            PivotKind::S1 => self.s1,
            PivotKind::Pivot => self.pivot,
            PivotKind::R1 => self.r1,
            PivotKind::R2 => self.r2,
        }
    }

    /// Lines from lowest to highest (S2 .. R2).
    pub fn lines(&self) -> impl Iterator<Item = (PivotKind, f64)> + '_ {
        use strum::IntoEnumIterator;
        PivotKind::iter().map(move |kind| (kind, self.value(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::maths_utils::approx_eq;

    #[test]
    fn textbook_example() {
        let p = PivotSet::from_hlc(110.0, 90.0, 100.0);
        assert!(approx_eq(p.pivot, 100.0));
        assert!(approx_eq(p.r1, 110.0));
        assert!(approx_eq(p.s1, 90.0));
        assert!(approx_eq(p.r2, 120.0));
        assert!(approx_eq(p.s2, 80.0));
    }

    #[test]
    fn flat_day_collapses_every_level() {
        let p = PivotSet::from_hlc(50.0, 50.0, 50.0);
        for (_, value) in p.lines() {
            assert!(approx_eq(value, 50.0));
        }
    }

    #[test]
    fn levels_are_strictly_ordered_when_day_has_range() {
        let p = PivotSet::from_hlc(4321.5, 4210.25, 4300.0);
        let values: Vec<f64> = p.lines().map(|(_, v)| v).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
    }

    #[test]
    fn roles_split_around_pivot() {
        assert_eq!(PivotKind::S2.role(), PivotRole::Support);
        assert_eq!(PivotKind::Pivot.role(), PivotRole::Pivot);
        assert_eq!(PivotKind::R1.role(), PivotRole::Resistance);
        assert_eq!(PivotKind::Pivot.to_string(), "P");
    }
}
