pub mod day;
pub mod display;
pub mod error;
pub mod model;
pub mod record;

pub use day::Day;
pub use display::{
    DisplaySettings, DisplayStrategy, abbreviated_day_label, select_display_strategy,
    select_display_strategy_with,
};
pub use error::AlarmError;
pub use model::{AlarmId, AlarmState, DaysActive};
pub use record::{AlarmRecord, parse_alarm_record_text};
