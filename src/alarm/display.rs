use serde::Deserialize;

use crate::alarm::model::{DAYS_PER_WEEK, MIN_DAYS_FOR_ABBREVIATED_LABELS};
use crate::alarm::{AlarmState, Day};

const ABBREVIATION_SEPARATOR: &str = ", ";

/// How the day region of an alarm card is drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayStrategy {
    /// Every day active: all seven letters.
    AllDays,
    /// A handful of days: their abbreviations, comma separated.
    FewDaysAbbreviated,
    /// No day active: all seven letters and the time label muted.
    NoDaysMuted,
    /// Anything else: all seven letters.
    ManyDaysDefault,
}

impl DisplayStrategy {
    pub fn is_time_muted(self) -> bool {
        self == DisplayStrategy::NoDaysMuted
    }

    pub fn are_days_muted(self) -> bool {
        self == DisplayStrategy::NoDaysMuted
    }

    pub fn shows_day_letters(self) -> bool {
        self != DisplayStrategy::FewDaysAbbreviated
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_abbreviated_label_max_days")]
    pub abbreviated_label_max_days: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            abbreviated_label_max_days: default_abbreviated_label_max_days(),
        }
    }
}

fn default_abbreviated_label_max_days() -> usize {
    MIN_DAYS_FOR_ABBREVIATED_LABELS
}

pub fn select_display_strategy(state: &AlarmState) -> DisplayStrategy {
    select_display_strategy_with(state, &DisplaySettings::default())
}

/// First match wins: all days, then few days, then none, then the rest.
pub fn select_display_strategy_with(
    state: &AlarmState,
    settings: &DisplaySettings,
) -> DisplayStrategy {
    let count = state.count_active_days();
    if count == DAYS_PER_WEEK {
        DisplayStrategy::AllDays
    } else if count > 0 && count <= settings.abbreviated_label_max_days {
        DisplayStrategy::FewDaysAbbreviated
    } else if count == 0 {
        DisplayStrategy::NoDaysMuted
    } else {
        DisplayStrategy::ManyDaysDefault
    }
}

/// Abbreviations joined with ", ", e.g. `Mon, Wed, Fri`.
pub fn abbreviated_day_label(days: &[Day]) -> String {
    days.iter()
        .map(|day| day.abbreviation())
        .collect::<Vec<_>>()
        .join(ABBREVIATION_SEPARATOR)
}
