use super::aggregate::{CreateLeaveRequest, Leave};
use crate::enums::leave_type::LeaveType;
use crate::shared::validation::ValidationError;
use chrono::NaiveDate;

/// Format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable input of the leave form.
///
/// Dates hold the raw `YYYY-MM-DD` text of the date inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDraft {
    pub start_date: String,
    pub end_date: String,
    pub leave_type: LeaveType,
    pub description: String,
    pub team_member_id: Option<i64>,
}

impl LeaveDraft {
    pub fn new(default_member: Option<i64>) -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            leave_type: LeaveType::default(),
            description: String::new(),
            team_member_id: default_member,
        }
    }

    pub fn from_leave(leave: &Leave) -> Self {
        Self {
            start_date: leave.start_date.format(DATE_FORMAT).to_string(),
            end_date: leave.end_date.format(DATE_FORMAT).to_string(),
            leave_type: leave.leave_type,
            description: leave.description.clone(),
            team_member_id: Some(leave.team_member_id),
        }
    }

    pub fn validate(&self) -> Result<CreateLeaveRequest, ValidationError> {
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            let field = if self.start_date.trim().is_empty() {
                "startDate"
            } else {
                "endDate"
            };
            return Err(ValidationError::new(
                field,
                "Start date and end date are required",
            ));
        }

        let start_date = parse_date(&self.start_date, "startDate")?;
        let end_date = parse_date(&self.end_date, "endDate")?;
        if start_date > end_date {
            return Err(ValidationError::new(
                "startDate",
                "Start date cannot be after end date",
            ));
        }

        let team_member_id = self
            .team_member_id
            .ok_or_else(|| ValidationError::new("teamMemberId", "Please select a team member"))?;

        Ok(CreateLeaveRequest {
            start_date,
            end_date,
            leave_type: self.leave_type,
            description: self.description.clone(),
            team_member_id,
        })
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::new(field, "Dates must be valid calendar dates"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(start: &str, end: &str) -> LeaveDraft {
        LeaveDraft {
            start_date: start.into(),
            end_date: end.into(),
            leave_type: LeaveType::PersonalLeave,
            description: "Moving house".into(),
            team_member_id: Some(3),
        }
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = draft("2024-03-10", "2024-03-05").validate().unwrap_err();
        assert_eq!(err.field, "startDate");
        assert_eq!(err.message, "Start date cannot be after end date");
    }

    #[test]
    fn test_same_day_is_accepted() {
        let req = draft("2024-03-05", "2024-03-05").validate().unwrap();
        assert_eq!(req.start_date, req.end_date);
    }

    #[test]
    fn test_dates_required() {
        for (s, e) in [("", "2024-03-05"), ("2024-03-05", ""), ("", "")] {
            let err = draft(s, e).validate().unwrap_err();
            assert_eq!(err.message, "Start date and end date are required");
        }
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err = draft("2024-02-30", "2024-03-05").validate().unwrap_err();
        assert_eq!(err.field, "startDate");
        assert_eq!(err.message, "Dates must be valid calendar dates");
    }

    #[test]
    fn test_member_required() {
        let mut d = draft("2024-03-01", "2024-03-05");
        d.team_member_id = None;
        assert_eq!(d.validate().unwrap_err().message, "Please select a team member");
    }

    #[test]
    fn test_date_order_checked_before_member() {
        let mut d = draft("2024-03-10", "2024-03-05");
        d.team_member_id = None;
        assert_eq!(
            d.validate().unwrap_err().message,
            "Start date cannot be after end date"
        );
    }

    #[test]
    fn test_valid_draft_builds_request() {
        let req = draft("2024-03-01", "2024-03-05").validate().unwrap();
        assert_eq!(req.start_date.to_string(), "2024-03-01");
        assert_eq!(req.end_date.to_string(), "2024-03-05");
        assert_eq!(req.leave_type, LeaveType::PersonalLeave);
        assert_eq!(req.team_member_id, 3);
    }

    #[test]
    fn test_new_and_from_leave() {
        let fresh = LeaveDraft::new(Some(12));
        assert_eq!(fresh.leave_type, LeaveType::AnnualLeave);
        assert_eq!(fresh.team_member_id, Some(12));
        assert!(fresh.start_date.is_empty());

        let leave = Leave {
            id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            leave_type: LeaveType::Other,
            description: "x".into(),
            team_member_id: 5,
            team_member_name: "A B".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let d = LeaveDraft::from_leave(&leave);
        assert_eq!(d.start_date, "2024-01-02");
        assert_eq!(d.end_date, "2024-01-03");
        assert_eq!(d.team_member_id, Some(5));
        assert_eq!(d.validate().unwrap().leave_type, LeaveType::Other);
    }
}
