use crate::shared::crud::Repository;
use crate::shared::http::{ApiClient, ApiError, FetchTransport, Transport};
use crate::shared::team_filter::TeamFilter;
use async_trait::async_trait;
use contracts::domain::a002_team_member::aggregate::{CreateTeamMemberRequest, TeamMember};

#[derive(Clone, Debug)]
pub struct TeamMemberService<T = FetchTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> TeamMemberService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all_members(&self) -> Result<Vec<TeamMember>, ApiError> {
        self.client.get("/team-members").await
    }

    pub async fn get_members_by_team(&self, team_id: i64) -> Result<Vec<TeamMember>, ApiError> {
        self.client
            .get(&format!("/team-members/team/{}", team_id))
            .await
    }

    pub async fn get_member_by_id(&self, id: i64) -> Result<TeamMember, ApiError> {
        self.client.get(&format!("/team-members/{}", id)).await
    }

    pub async fn create_member(
        &self,
        member: &CreateTeamMemberRequest,
    ) -> Result<TeamMember, ApiError> {
        self.client.post("/team-members", member).await
    }

    pub async fn update_member(
        &self,
        id: i64,
        member: &CreateTeamMemberRequest,
    ) -> Result<TeamMember, ApiError> {
        self.client
            .put(&format!("/team-members/{}", id), member)
            .await
    }

    pub async fn delete_member(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/team-members/{}", id)).await
    }
}

#[async_trait(?Send)]
impl<T: Transport> Repository for TeamMemberService<T> {
    type Entity = TeamMember;
    type Request = CreateTeamMemberRequest;
    type Filter = TeamFilter;

    async fn list(&self, filter: &TeamFilter) -> Result<Vec<TeamMember>, ApiError> {
        match filter {
            TeamFilter::All => self.get_all_members().await,
            TeamFilter::Team(team_id) => self.get_members_by_team(*team_id).await,
        }
    }

    async fn create(&self, request: &CreateTeamMemberRequest) -> Result<TeamMember, ApiError> {
        self.create_member(request).await
    }

    async fn update(
        &self,
        id: i64,
        request: &CreateTeamMemberRequest,
    ) -> Result<TeamMember, ApiError> {
        self.update_member(id, request).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.delete_member(id).await
    }
}
