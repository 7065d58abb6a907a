use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Named reporting windows offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

/// The reporting window the overview query is scoped to: a preset tag plus
/// two inclusive calendar-date boundaries.
///
/// While the preset is not [`RangePreset::Custom`] the boundaries are derived
/// from the preset and the current date. Editing a boundary directly flips the
/// preset to `Custom`; applying a preset writes the derived boundaries through
/// the same path, suppressed by a transient flag so the derivation does not
/// flip itself back to `Custom`.
///
/// Boundaries are stored verbatim as strings. No ordering validation is
/// performed; an inverted window is passed to the backend as typed.
#[derive(Debug, Clone)]
pub struct ReportingRange {
    preset: RangePreset,
    from: String,
    to: String,
    deriving: bool,
}

impl ReportingRange {
    /// New range with the default `Last7Days` window ending today.
    pub fn new() -> Self {
        Self::new_at(Local::now().date_naive())
    }

    pub fn new_at(today: NaiveDate) -> Self {
        let mut range = Self {
            preset: RangePreset::Last7Days,
            from: String::new(),
            to: String::new(),
            deriving: false,
        };
        range.apply_preset_at(RangePreset::Last7Days, today);
        range
    }

    pub fn preset(&self) -> RangePreset {
        self.preset
    }

    pub fn apply_preset(&mut self, preset: RangePreset) {
        self.apply_preset_at(preset, Local::now().date_naive());
    }

    /// Apply a preset relative to an explicit `today`. `Custom` keeps the
    /// existing boundaries; the other presets overwrite both.
    pub fn apply_preset_at(&mut self, preset: RangePreset, today: NaiveDate) {
        self.preset = preset;
        let (from, to) = match preset {
            RangePreset::Today => (today, today),
            RangePreset::Last7Days => (today - Duration::days(6), today),
            RangePreset::Last30Days => (today - Duration::days(29), today),
            RangePreset::Custom => return,
        };
        let (from, to) = (date_key(from), date_key(to));
        // Nothing between set and clear can fail; the two writes below are
        // plain string stores.
        self.deriving = true;
        self.set_from(from);
        self.set_to(to);
        self.deriving = false;
    }

    /// Store a new lower boundary verbatim. A user-initiated edit while a
    /// preset is active switches the range to `Custom`.
    pub fn set_from(&mut self, date: impl Into<String>) {
        self.from = date.into();
        self.mark_manual_edit();
    }

    /// Store a new upper boundary verbatim, with the same `Custom` side
    /// effect as [`ReportingRange::set_from`].
    pub fn set_to(&mut self, date: impl Into<String>) {
        self.to = date.into();
        self.mark_manual_edit();
    }

    /// The `(from, to)` pair as query parameters for the overview fetch. No
    /// ordering guarantee is made.
    pub fn current_range(&self) -> (&str, &str) {
        (&self.from, &self.to)
    }

    fn mark_manual_edit(&mut self) {
        if !self.deriving {
            self.preset = RangePreset::Custom;
        }
    }
}

impl Default for ReportingRange {
    fn default() -> Self {
        Self::new()
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn defaults_to_last_7_days() {
        let range = ReportingRange::new_at(day(2024, 3, 10));
        assert_eq!(range.preset(), RangePreset::Last7Days);
        assert_eq!(range.current_range(), ("2024-03-04", "2024-03-10"));
    }

    #[test]
    fn today_preset_collapses_to_one_day() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.apply_preset_at(RangePreset::Today, day(2024, 3, 10));
        assert_eq!(range.current_range(), ("2024-03-10", "2024-03-10"));
    }

    #[test]
    fn last_30_days_preset_spans_thirty_days() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.apply_preset_at(RangePreset::Last30Days, day(2024, 3, 10));
        assert_eq!(range.current_range(), ("2024-02-10", "2024-03-10"));
    }

    #[test]
    fn window_rolls_over_year_boundary() {
        let range = ReportingRange::new_at(day(2024, 1, 2));
        assert_eq!(range.current_range(), ("2023-12-27", "2024-01-02"));
    }

    #[test]
    fn window_rolls_over_leap_february() {
        let mut range = ReportingRange::new_at(day(2024, 3, 1));
        range.apply_preset_at(RangePreset::Last30Days, day(2024, 3, 1));
        assert_eq!(range.current_range(), ("2024-02-01", "2024-03-01"));
    }

    #[test]
    fn preset_survives_its_own_derivation() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.apply_preset_at(RangePreset::Today, day(2024, 3, 10));
        assert_eq!(range.preset(), RangePreset::Today);
        range.apply_preset_at(RangePreset::Last30Days, day(2024, 3, 10));
        assert_eq!(range.preset(), RangePreset::Last30Days);
    }

    #[test]
    fn manual_edits_switch_to_custom() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("2024-01-01");
        assert_eq!(range.preset(), RangePreset::Custom);
        range.set_to("2024-01-31");
        assert_eq!(range.preset(), RangePreset::Custom);
        assert_eq!(range.current_range(), ("2024-01-01", "2024-01-31"));
    }

    #[test]
    fn partial_edit_leaves_other_boundary_alone() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("2024-05-10");
        assert_eq!(range.preset(), RangePreset::Custom);
        assert_eq!(range.current_range(), ("2024-05-10", "2024-03-10"));
    }

    #[test]
    fn custom_preset_keeps_existing_boundaries() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("2024-01-01");
        range.set_to("2024-01-31");
        range.apply_preset_at(RangePreset::Custom, day(2024, 3, 10));
        assert_eq!(range.preset(), RangePreset::Custom);
        assert_eq!(range.current_range(), ("2024-01-01", "2024-01-31"));
    }

    #[test]
    fn preset_reasserts_after_custom() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("2024-01-01");
        range.apply_preset_at(RangePreset::Last7Days, day(2024, 3, 10));
        assert_eq!(range.preset(), RangePreset::Last7Days);
        assert_eq!(range.current_range(), ("2024-03-04", "2024-03-10"));
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("2024-02-10");
        range.set_to("2024-01-01");
        assert_eq!(range.current_range(), ("2024-02-10", "2024-01-01"));
    }

    #[test]
    fn unparsable_input_is_stored_verbatim() {
        let mut range = ReportingRange::new_at(day(2024, 3, 10));
        range.set_from("not-a-date");
        assert_eq!(range.current_range().0, "not-a-date");
        assert_eq!(range.preset(), RangePreset::Custom);
    }
}
