use crate::enums::leave_type::LeaveType;
use crate::shared::serde_utils::null_as_default;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave record, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub team_member_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_member_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Body of `POST /leaves` and `PUT /leaves/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub description: String,
    pub team_member_id: i64,
}

/// Inclusive date range, encoded as the `startDate`/`endDate` query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeavePeriod {
    /// Build a period, `None` when `end` precedes `start`
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Option<Self> {
        (start_date <= end_date).then_some(Self {
            start_date,
            end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_leave() {
        let json = r#"{
            "id": 3,
            "startDate": "2024-07-01",
            "endDate": "2024-07-14",
            "leaveType": "ANNUAL_LEAVE",
            "description": null,
            "teamMemberId": 8,
            "teamMemberName": "Ada Lovelace",
            "createdAt": "2024-06-01T10:00:00",
            "updatedAt": "2024-06-01T10:00:00"
        }"#;
        let leave: Leave = serde_json::from_str(json).unwrap();
        assert_eq!(leave.start_date, date("2024-07-01"));
        assert_eq!(leave.leave_type, LeaveType::AnnualLeave);
        assert_eq!(leave.description, "");
        assert_eq!(leave.team_member_name, "Ada Lovelace");
    }

    #[test]
    fn test_request_serializes_iso_dates() {
        let req = CreateLeaveRequest {
            start_date: date("2024-03-05"),
            end_date: date("2024-03-10"),
            leave_type: LeaveType::SickLeave,
            description: "Flu".into(),
            team_member_id: 4,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "startDate": "2024-03-05",
                "endDate": "2024-03-10",
                "leaveType": "SICK_LEAVE",
                "description": "Flu",
                "teamMemberId": 4
            })
        );
    }

    #[test]
    fn test_period_rejects_reversed_range() {
        assert!(LeavePeriod::new(date("2024-03-10"), date("2024-03-05")).is_none());
        let same_day = LeavePeriod::new(date("2024-03-05"), date("2024-03-05")).unwrap();
        assert_eq!(same_day.start_date, same_day.end_date);
    }
}
