use crate::shared::crud::Repository;
use crate::shared::http::{ApiClient, ApiError, FetchTransport, Transport};
use async_trait::async_trait;
use contracts::domain::a001_team::aggregate::{CreateTeamRequest, Team};

#[derive(Clone, Debug)]
pub struct TeamService<T = FetchTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> TeamService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.client.get("/teams").await
    }

    pub async fn get_team_by_id(&self, id: i64) -> Result<Team, ApiError> {
        self.client.get(&format!("/teams/{}", id)).await
    }

    pub async fn create_team(&self, team: &CreateTeamRequest) -> Result<Team, ApiError> {
        self.client.post("/teams", team).await
    }

    pub async fn update_team(&self, id: i64, team: &CreateTeamRequest) -> Result<Team, ApiError> {
        self.client.put(&format!("/teams/{}", id), team).await
    }

    pub async fn delete_team(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/teams/{}", id)).await
    }
}

#[async_trait(?Send)]
impl<T: Transport> Repository for TeamService<T> {
    type Entity = Team;
    type Request = CreateTeamRequest;
    type Filter = ();

    async fn list(&self, _filter: &()) -> Result<Vec<Team>, ApiError> {
        self.get_all_teams().await
    }

    async fn create(&self, request: &CreateTeamRequest) -> Result<Team, ApiError> {
        self.create_team(request).await
    }

    async fn update(&self, id: i64, request: &CreateTeamRequest) -> Result<Team, ApiError> {
        self.update_team(id, request).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.delete_team(id).await
    }
}
