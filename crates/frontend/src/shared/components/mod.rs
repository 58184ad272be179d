pub mod team_filter_select;

pub use team_filter_select::TeamFilterSelect;
