use crate::shared::crud::Repository;
use crate::shared::http::{ApiClient, ApiError, FetchTransport, Transport};
use crate::shared::team_filter::TeamFilter;
use async_trait::async_trait;
use contracts::domain::a003_leave::aggregate::{CreateLeaveRequest, Leave, LeavePeriod};

/// Leave list selection: a team and, together with a team, a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveFilter {
    pub team: TeamFilter,
    pub period: Option<LeavePeriod>,
}

#[derive(Clone, Debug)]
pub struct LeaveService<T = FetchTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> LeaveService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all_leaves(&self) -> Result<Vec<Leave>, ApiError> {
        self.client.get("/leaves").await
    }

    pub async fn get_leaves_by_member(&self, team_member_id: i64) -> Result<Vec<Leave>, ApiError> {
        self.client
            .get(&format!("/leaves/member/{}", team_member_id))
            .await
    }

    pub async fn get_leaves_by_team(&self, team_id: i64) -> Result<Vec<Leave>, ApiError> {
        self.client.get(&format!("/leaves/team/{}", team_id)).await
    }

    pub async fn get_team_leaves_in_period(
        &self,
        team_id: i64,
        period: &LeavePeriod,
    ) -> Result<Vec<Leave>, ApiError> {
        let query = serde_qs::to_string(period).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.client
            .get(&format!("/leaves/team/{}/period?{}", team_id, query))
            .await
    }

    pub async fn get_leave_by_id(&self, id: i64) -> Result<Leave, ApiError> {
        self.client.get(&format!("/leaves/{}", id)).await
    }

    pub async fn create_leave(&self, leave: &CreateLeaveRequest) -> Result<Leave, ApiError> {
        self.client.post("/leaves", leave).await
    }

    pub async fn update_leave(
        &self,
        id: i64,
        leave: &CreateLeaveRequest,
    ) -> Result<Leave, ApiError> {
        self.client.put(&format!("/leaves/{}", id), leave).await
    }

    pub async fn delete_leave(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/leaves/{}", id)).await
    }
}

#[async_trait(?Send)]
impl<T: Transport> Repository for LeaveService<T> {
    type Entity = Leave;
    type Request = CreateLeaveRequest;
    type Filter = LeaveFilter;

    /// A period without a team is ignored: there is no unfiltered period endpoint
    async fn list(&self, filter: &LeaveFilter) -> Result<Vec<Leave>, ApiError> {
        match (filter.team, filter.period) {
            (TeamFilter::All, _) => self.get_all_leaves().await,
            (TeamFilter::Team(team_id), None) => self.get_leaves_by_team(team_id).await,
            (TeamFilter::Team(team_id), Some(period)) => {
                self.get_team_leaves_in_period(team_id, &period).await
            }
        }
    }

    async fn create(&self, request: &CreateLeaveRequest) -> Result<Leave, ApiError> {
        self.create_leave(request).await
    }

    async fn update(&self, id: i64, request: &CreateLeaveRequest) -> Result<Leave, ApiError> {
        self.update_leave(id, request).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.delete_leave(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Method;
    use crate::shared::testing::RecordingTransport;
    use chrono::NaiveDate;
    use contracts::enums::leave_type::LeaveType;
    use futures::executor::block_on;

    const LEAVE_JSON: &str = r#"{
        "id": 21, "startDate": "2024-03-04", "endDate": "2024-03-08", "leaveType": "SICK_LEAVE",
        "description": "", "teamMemberId": 9, "teamMemberName": "Ada Lovelace"
    }"#;

    fn service() -> (LeaveService<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::new();
        (LeaveService::new(ApiClient::new(transport.clone())), transport)
    }

    fn march() -> LeavePeriod {
        LeavePeriod::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_period_query_string() {
        let (service, transport) = service();
        block_on(service.get_team_leaves_in_period(3, &march())).unwrap();
        assert_eq!(
            transport.last_path().as_deref(),
            Some("/leaves/team/3/period?startDate=2024-03-01&endDate=2024-03-31")
        );
    }

    #[test]
    fn test_filter_selects_endpoint() {
        let (service, transport) = service();
        let cases = [
            (LeaveFilter::default(), "/leaves"),
            (
                LeaveFilter {
                    team: TeamFilter::All,
                    period: Some(march()),
                },
                "/leaves",
            ),
            (
                LeaveFilter {
                    team: TeamFilter::Team(3),
                    period: None,
                },
                "/leaves/team/3",
            ),
            (
                LeaveFilter {
                    team: TeamFilter::Team(3),
                    period: Some(march()),
                },
                "/leaves/team/3/period?startDate=2024-03-01&endDate=2024-03-31",
            ),
        ];
        for (filter, path) in cases {
            block_on(service.list(&filter)).unwrap();
            assert_eq!(transport.last_path().as_deref(), Some(path));
        }
    }

    #[test]
    fn test_member_and_single_leave_endpoints() {
        let (service, transport) = service();
        transport.respond(200, &format!("[{}]", LEAVE_JSON));
        transport.respond(200, LEAVE_JSON);

        let by_member = block_on(service.get_leaves_by_member(9)).unwrap();
        let leave = block_on(service.get_leave_by_id(21)).unwrap();

        assert_eq!(by_member.len(), 1);
        assert_eq!(leave.leave_type, LeaveType::SickLeave);
        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/leaves/member/9", "/leaves/21"]);
    }

    #[test]
    fn test_write_endpoints() {
        let (service, transport) = service();
        transport.respond(201, LEAVE_JSON);
        transport.respond(200, LEAVE_JSON);
        transport.respond(204, "");
        let request = CreateLeaveRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            leave_type: LeaveType::SickLeave,
            description: String::new(),
            team_member_id: 9,
        };

        block_on(service.create_leave(&request)).unwrap();
        block_on(service.update_leave(21, &request)).unwrap();
        block_on(service.delete_leave(21)).unwrap();

        let sent = transport.requests();
        assert_eq!((sent[0].method, sent[0].path.as_str()), (Method::Post, "/leaves"));
        assert_eq!((sent[1].method, sent[1].path.as_str()), (Method::Put, "/leaves/21"));
        assert_eq!((sent[2].method, sent[2].path.as_str()), (Method::Delete, "/leaves/21"));
        assert!(sent[0]
            .body
            .as_deref()
            .is_some_and(|b| b.contains(r#""startDate":"2024-03-04""#)));
    }

    #[test]
    fn test_failed_delete_surfaces_status() {
        let (service, transport) = service();
        transport.respond(409, "");
        assert!(matches!(
            block_on(service.delete_leave(21)),
            Err(ApiError::Status { status: 409, .. })
        ));
    }
}
