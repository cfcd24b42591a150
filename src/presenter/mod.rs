//! Rendering side of an alarm card.
//!
//! The alarm model only hands over an [`AlarmView`]: the id, the formatted
//! time, the chosen [`DisplayStrategy`] and the active days. Everything about
//! markup and attaching to a page lives here.

pub mod card;
pub mod container;
pub mod node;

use crate::alarm::{
    AlarmId, AlarmState, Day, DisplaySettings, DisplayStrategy, select_display_strategy_with,
};

pub use card::{CardPresenter, TextPresenter};
pub use container::AlarmContainer;
pub use node::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmView {
    pub id: AlarmId,
    pub time: String,
    pub strategy: DisplayStrategy,
    pub active_days: Vec<Day>,
}

impl AlarmView {
    pub fn from_state(state: &AlarmState) -> Self {
        Self::from_state_with(state, &DisplaySettings::default())
    }

    pub fn from_state_with(state: &AlarmState, settings: &DisplaySettings) -> Self {
        Self {
            id: state.id(),
            time: state.formatted_time(),
            strategy: select_display_strategy_with(state, settings),
            active_days: state.active_day_list(),
        }
    }

    /// Element id for the card. Prefixed so it never starts with a digit.
    pub fn dom_id(&self) -> String {
        dom_id_for(&self.id)
    }
}

pub(crate) fn dom_id_for(id: &AlarmId) -> String {
    format!("alarm-{id}")
}

pub trait AlarmPresenter {
    type Output;

    fn render(&self, view: &AlarmView) -> Self::Output;
}
