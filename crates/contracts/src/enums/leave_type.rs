use serde::{Deserialize, Serialize};

/// Category of a leave record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    #[default]
    AnnualLeave,
    SickLeave,
    PersonalLeave,
    PublicHoliday,
    Conference,
    Other,
}

impl LeaveType {
    /// Wire code, as sent to and received from the backend
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::AnnualLeave => "ANNUAL_LEAVE",
            LeaveType::SickLeave => "SICK_LEAVE",
            LeaveType::PersonalLeave => "PERSONAL_LEAVE",
            LeaveType::PublicHoliday => "PUBLIC_HOLIDAY",
            LeaveType::Conference => "CONFERENCE",
            LeaveType::Other => "OTHER",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LeaveType::AnnualLeave => "Annual Leave",
            LeaveType::SickLeave => "Sick Leave",
            LeaveType::PersonalLeave => "Personal Leave",
            LeaveType::PublicHoliday => "Public Holiday",
            LeaveType::Conference => "Conference",
            LeaveType::Other => "Other",
        }
    }

    /// Modifier class for the `leave-type` badge
    pub fn css_class(&self) -> &'static str {
        match self {
            LeaveType::AnnualLeave => "annual",
            LeaveType::SickLeave => "sick",
            LeaveType::PersonalLeave => "personal",
            LeaveType::PublicHoliday => "holiday",
            LeaveType::Conference => "conference",
            LeaveType::Other => "other",
        }
    }

    pub fn all() -> Vec<LeaveType> {
        vec![
            LeaveType::AnnualLeave,
            LeaveType::SickLeave,
            LeaveType::PersonalLeave,
            LeaveType::PublicHoliday,
            LeaveType::Conference,
            LeaveType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
