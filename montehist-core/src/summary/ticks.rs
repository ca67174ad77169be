use crate::sections::SectionData;
use crate::summary::error::SummaryError;
use serde::Serialize;

/// Yen amounts for `10^n` million yen, n = 0..=8, followed by n = -3..=-1.
const YEN_LABELS: [&str; 12] = [
    "¥1M", "¥10M", "¥100M", "¥1B", "¥10B", "¥100B", "¥1T", "¥10T", "¥100T", "¥1K", "¥10K",
    "¥100K",
];

/// Widest axis accepted, in decades. Finite `f64` values span fewer than this.
pub const MAX_AXIS_DECADES: i32 = 700;

/// Integer log10 range of the histogram axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisRange {
    pub lo: i32,
    pub hi: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub value: i32,
    pub label: String,
}

impl AxisRange {
    pub fn new(lo: i32, hi: i32) -> Result<Self, SummaryError> {
        if lo >= hi {
            return Err(SummaryError::EmptyRange { lo, hi });
        }
        if i64::from(hi) - i64::from(lo) > i64::from(MAX_AXIS_DECADES) {
            return Err(SummaryError::AxisTooWide {
                lo,
                hi,
                max: MAX_AXIS_DECADES,
            });
        }
        Ok(Self { lo, hi })
    }

    /// Smallest integer range covering every finite value of every section.
    ///
    /// Returns `None` when there is nothing to cover.
    pub fn auto(sections: &[SectionData]) -> Option<Self> {
        let mut finite = sections
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .peekable();
        finite.peek()?;

        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        let lo = min.floor() as i32;
        let hi = (max.ceil() as i32).max(lo + 1);
        Some(Self { lo, hi })
    }

    pub fn ticks(&self) -> Vec<Tick> {
        (self.lo..=self.hi)
            .map(|value| Tick {
                value,
                label: tick_label(value),
            })
            .collect()
    }
}

/// Label for the log10 tick `exponent`, reading values as millions of yen.
pub fn tick_label(exponent: i32) -> String {
    match exponent {
        0..=8 => YEN_LABELS[exponent as usize].to_string(),
        -3..=-1 => YEN_LABELS[(12 + exponent) as usize].to_string(),
        _ => format!("¥10^{exponent}M"),
    }
}
