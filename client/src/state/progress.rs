//! Skill bar reveal tracking.
//!
//! Each bar starts empty and fills to its target the first time enough of
//! it is on screen. A revealed bar never fires again, whatever the
//! viewport does afterwards.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Width every bar starts from.
pub const INITIAL_WIDTH: &str = "0%";

/// Parse a `data-progress` value into a percentage clamped to `0..=100`.
pub fn parse_target(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().trim_end_matches('%').trim().parse::<f64>();
    match value {
        Ok(percent) if percent.is_finite() => Some(percent.clamp(0.0, 100.0)),
        _ => None,
    }
}

/// CSS width for `percent`.
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressEntry {
    pub target_percent: f64,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    entries: Vec<ProgressEntry>,
    threshold: f64,
}

impl RevealTracker {
    /// Track one bar per target; a bar reveals once its visible fraction
    /// reaches `threshold`.
    pub fn new(targets: impl IntoIterator<Item = f64>, threshold: f64) -> Self {
        let entries = targets
            .into_iter()
            .map(|target_percent| ProgressEntry { target_percent, revealed: false })
            .collect();
        Self { entries, threshold }
    }

    /// Report a visibility change for bar `index`.
    ///
    /// Returns the target to fill to exactly once: the first time
    /// `visible_ratio` reaches the threshold. Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, visible_ratio: f64) -> Option<f64> {
        let entry = self.entries.get_mut(index)?;
        if entry.revealed || visible_ratio < self.threshold {
            return None;
        }
        entry.revealed = true;
        Some(entry.target_percent)
    }
}
