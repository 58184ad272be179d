use crate::domain::a003_leave::api::LeaveFilter;
use crate::shared::form_state::FormMode;
use crate::shared::team_filter::TeamFilter;
use chrono::NaiveDate;
use contracts::domain::a003_leave::aggregate::{Leave, LeavePeriod};
use contracts::domain::a003_leave::draft::DATE_FORMAT;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct LeaveListState {
    pub form: FormMode<Leave>,
    pub filter: TeamFilter,
    /// Raw text of the period inputs
    pub period_start: String,
    pub period_end: String,
}

impl LeaveListState {
    pub fn editing_id(&self) -> Option<i64> {
        self.form.editing().map(|l| l.id)
    }

    /// Current selection; an incomplete or reversed period is left out
    pub fn leave_filter(&self) -> LeaveFilter {
        let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok();
        let period = match (parse(&self.period_start), parse(&self.period_end)) {
            (Some(start), Some(end)) => LeavePeriod::new(start, end),
            _ => None,
        };
        LeaveFilter {
            team: self.filter,
            period: self.filter.team_id().and(period),
        }
    }
}

pub fn create_state() -> RwSignal<LeaveListState> {
    RwSignal::new(LeaveListState::default())
}
