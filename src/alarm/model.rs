use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::alarm::{AlarmError, Day};

pub const DAYS_PER_WEEK: usize = 7;
/// Largest active-day count still rendered as a list of abbreviated names.
pub const MIN_DAYS_FOR_ABBREVIATED_LABELS: usize = 3;
pub const DEFAULT_HOUR: u32 = 12;
pub const DEFAULT_MINUTE: u32 = 30;

const MAX_HOUR: u32 = 23;
const MAX_MINUTE: u32 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlarmId(Uuid);

impl AlarmId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AlarmId {
    type Err = AlarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AlarmError::InvalidId(s.to_string()))
    }
}

/// Activation flag for each of the seven days, indexed by [`Day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaysActive([bool; DAYS_PER_WEEK]);

impl DaysActive {
    pub const fn none() -> Self {
        Self([false; DAYS_PER_WEEK])
    }

    pub const fn all() -> Self {
        Self([true; DAYS_PER_WEEK])
    }

    pub fn get(&self, day: Day) -> bool {
        self.0[day.index()]
    }

    pub fn set(&mut self, day: Day, active: bool) {
        self.0[day.index()] = active;
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|active| **active).count()
    }

    /// Every day with its flag, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, bool)> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.get(day)))
    }

    pub fn active_days(&self) -> Vec<Day> {
        self.iter()
            .filter_map(|(day, active)| active.then_some(day))
            .collect()
    }
}

impl FromIterator<Day> for DaysActive {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        let mut days = Self::none();
        for day in iter {
            days.set(day, true);
        }
        days
    }
}

/// One recurring alarm: a time of day plus the days it is active on.
///
/// Construction is side-effect free. Rendering is a separate step owned by
/// [`crate::presenter`].
#[derive(Debug, PartialEq, Eq)]
pub struct AlarmState {
    id: AlarmId,
    hour: u32,
    minute: u32,
    days_active: DaysActive,
}

impl Default for AlarmState {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmState {
    /// A fresh alarm at 12:30 with every day inactive.
    pub fn new() -> Self {
        Self {
            id: AlarmId::generate(),
            hour: DEFAULT_HOUR,
            minute: DEFAULT_MINUTE,
            days_active: DaysActive::none(),
        }
    }

    pub fn with_time(hour: u32, minute: u32) -> Result<Self, AlarmError> {
        validate_time(hour, minute)?;
        Ok(Self {
            hour,
            minute,
            ..Self::new()
        })
    }

    pub(crate) fn from_parts(
        id: AlarmId,
        hour: u32,
        minute: u32,
        days_active: DaysActive,
    ) -> Result<Self, AlarmError> {
        validate_time(hour, minute)?;
        Ok(Self {
            id,
            hour,
            minute,
            days_active,
        })
    }

    pub fn id(&self) -> AlarmId {
        self.id
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn days_active(&self) -> &DaysActive {
        &self.days_active
    }

    /// Sets both fields or neither.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<(), AlarmError> {
        validate_time(hour, minute)?;
        self.hour = hour;
        self.minute = minute;
        debug!(alarm = %self.id, hour, minute, "alarm time updated");
        Ok(())
    }

    pub fn set_hour(&mut self, hour: u32) -> Result<(), AlarmError> {
        self.set_time(hour, self.minute)
    }

    pub fn set_minute(&mut self, minute: u32) -> Result<(), AlarmError> {
        self.set_time(self.hour, minute)
    }

    pub fn set_day_active(&mut self, day: Day, active: bool) {
        self.days_active.set(day, active);
        debug!(alarm = %self.id, day = day.key(), active, "alarm day updated");
    }

    /// Flips one day and returns its new state.
    pub fn toggle_day(&mut self, day: Day) -> bool {
        let active = !self.days_active.get(day);
        self.set_day_active(day, active);
        active
    }

    pub fn set_all_days(&mut self, active: bool) {
        self.days_active = if active {
            DaysActive::all()
        } else {
            DaysActive::none()
        };
        debug!(alarm = %self.id, active, "alarm days updated");
    }

    pub fn is_active_on(&self, weekday: Weekday) -> bool {
        self.days_active.get(Day::from(weekday))
    }

    pub fn count_active_days(&self) -> usize {
        self.days_active.count()
    }

    pub fn is_all_days_active(&self) -> bool {
        self.count_active_days() == DAYS_PER_WEEK
    }

    pub fn is_all_days_inactive(&self) -> bool {
        self.count_active_days() == 0
    }

    /// True for one to three active days.
    pub fn is_few_days_active(&self) -> bool {
        let count = self.count_active_days();
        count > 0 && count <= MIN_DAYS_FOR_ABBREVIATED_LABELS
    }

    pub fn active_day_list(&self) -> Vec<Day> {
        self.days_active.active_days()
    }

    /// `HH:MM`, both fields zero padded.
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

fn validate_time(hour: u32, minute: u32) -> Result<(), AlarmError> {
    if hour > MAX_HOUR || minute > MAX_MINUTE {
        warn!(hour, minute, "rejected out of range alarm time");
        return Err(AlarmError::InvalidTimeValue {
            hour: i64::from(hour),
            minute: i64::from(minute),
        });
    }
    Ok(())
}
