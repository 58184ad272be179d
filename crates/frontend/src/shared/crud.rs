//! Create/update/delete orchestration shared by the management views.
//!
//! Views never patch their lists locally: after a successful mutation they
//! reload the primary collection through [`Repository::list`].

use crate::shared::http::ApiError;
use async_trait::async_trait;

/// One backend resource seen through its list/create/update/delete endpoints
#[async_trait(?Send)]
pub trait Repository {
    type Entity;
    type Request;
    type Filter;

    async fn list(&self, filter: &Self::Filter) -> Result<Vec<Self::Entity>, ApiError>;
    async fn create(&self, request: &Self::Request) -> Result<Self::Entity, ApiError>;
    async fn update(&self, id: i64, request: &Self::Request) -> Result<Self::Entity, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`; answers no when there is no window
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

/// Create when `editing` is `None`, otherwise update the entity with that id
pub async fn save<R: Repository>(
    repo: &R,
    editing: Option<i64>,
    request: &R::Request,
) -> Result<R::Entity, ApiError> {
    match editing {
        Some(id) => repo.update(id, request).await,
        None => repo.create(request).await,
    }
}

/// Delete `id` only after the user acknowledges `message`
pub async fn delete_confirmed<R, C>(
    repo: &R,
    confirm: &C,
    message: &str,
    id: i64,
) -> Result<DeleteOutcome, ApiError>
where
    R: Repository,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(message) {
        return Ok(DeleteOutcome::Cancelled);
    }
    repo.delete(id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Result of the list reload that follows a successful mutation
pub type Reloaded<E> = Result<Vec<E>, ApiError>;

/// `save`, then reload the list under `filter`.
///
/// A failed save returns before any reload; a failed reload after a
/// successful save is reported inside the `Ok` value.
pub async fn save_then_reload<R: Repository>(
    repo: &R,
    editing: Option<i64>,
    request: &R::Request,
    filter: &R::Filter,
) -> Result<(R::Entity, Reloaded<R::Entity>), ApiError> {
    let saved = save(repo, editing, request).await?;
    let reloaded = repo.list(filter).await;
    Ok((saved, reloaded))
}

/// `delete_confirmed`, then reload the list under `filter`.
///
/// `None` when the user cancelled: nothing was deleted or reloaded.
pub async fn delete_then_reload<R, C>(
    repo: &R,
    confirm: &C,
    message: &str,
    id: i64,
    filter: &R::Filter,
) -> Result<Option<Reloaded<R::Entity>>, ApiError>
where
    R: Repository,
    C: Confirm + ?Sized,
{
    match delete_confirmed(repo, confirm, message, id).await? {
        DeleteOutcome::Cancelled => Ok(None),
        DeleteOutcome::Deleted => Ok(Some(repo.list(filter).await)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::team_filter::TeamFilter;
    use crate::domain::a002_team_member::api::TeamMemberService;
    use crate::shared::http::{ApiClient, Method};
    use crate::shared::testing::{RecordingTransport, ScriptedConfirm};
    use contracts::domain::a002_team_member::aggregate::CreateTeamMemberRequest;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        team_id: i64,
    }

    #[derive(Debug, Clone)]
    struct RowRequest {
        name: String,
        team_id: i64,
    }

    /// Stand-in backend keeping rows in memory and counting calls
    #[derive(Default)]
    struct InMemory {
        rows: RefCell<Vec<Row>>,
        next_id: Cell<i64>,
        deletes: Cell<usize>,
        fail_writes: bool,
    }

    impl InMemory {
        fn seeded(rows: &[(&str, i64)]) -> Self {
            let repo = InMemory::default();
            for (name, team_id) in rows {
                block_on(repo.create(&RowRequest {
                    name: name.to_string(),
                    team_id: *team_id,
                }))
                .unwrap();
            }
            repo
        }
    }

    #[async_trait(?Send)]
    impl Repository for InMemory {
        type Entity = Row;
        type Request = RowRequest;
        type Filter = TeamFilter;

        async fn list(&self, filter: &TeamFilter) -> Result<Vec<Row>, ApiError> {
            let rows = self.rows.borrow();
            Ok(match filter {
                TeamFilter::All => rows.clone(),
                TeamFilter::Team(team_id) => {
                    rows.iter().filter(|r| r.team_id == *team_id).cloned().collect()
                }
            })
        }

        async fn create(&self, request: &RowRequest) -> Result<Row, ApiError> {
            if self.fail_writes {
                return Err(ApiError::Status {
                    status: 500,
                    path: "/rows".into(),
                });
            }
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            let row = Row {
                id,
                name: request.name.clone(),
                team_id: request.team_id,
            };
            self.rows.borrow_mut().push(row.clone());
            Ok(row)
        }

        async fn update(&self, id: i64, request: &RowRequest) -> Result<Row, ApiError> {
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ApiError::Status {
                    status: 404,
                    path: format!("/rows/{}", id),
                })?;
            row.name = request.name.clone();
            row.team_id = request.team_id;
            Ok(row.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.deletes.set(self.deletes.get() + 1);
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    fn request(name: &str, team_id: i64) -> RowRequest {
        RowRequest {
            name: name.into(),
            team_id,
        }
    }

    #[test]
    fn test_save_without_editing_creates() {
        let repo = InMemory::seeded(&[("Ops", 1)]);

        let created = block_on(save(&repo, None, &request("Platform", 2))).unwrap();
        let reloaded = block_on(repo.list(&TeamFilter::All)).unwrap();

        assert_eq!(created.name, "Platform");
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.iter().any(|r| r.id == created.id));
    }

    #[test]
    fn test_save_with_editing_updates_in_place() {
        let repo = InMemory::seeded(&[("Ops", 1), ("Data", 1)]);

        block_on(save(&repo, Some(1), &request("Operations", 1))).unwrap();
        let reloaded = block_on(repo.list(&TeamFilter::All)).unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].name, "Operations");
    }

    #[test]
    fn test_save_error_is_returned() {
        let repo = InMemory {
            fail_writes: true,
            ..InMemory::default()
        };
        let err = block_on(save(&repo, None, &request("Ops", 1))).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(block_on(repo.list(&TeamFilter::All)).unwrap().is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let repo = InMemory::seeded(&[("Ops", 1)]);
        let confirm = ScriptedConfirm::answering(false);

        let outcome =
            block_on(delete_confirmed(&repo, &confirm, "Delete this team?", 1)).unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(confirm.times_asked(), 1);
        assert_eq!(repo.deletes.get(), 0);
        assert_eq!(block_on(repo.list(&TeamFilter::All)).unwrap().len(), 1);
    }

    #[test]
    fn test_confirmed_delete_leaves_no_stale_entry() {
        let repo = InMemory::seeded(&[("Ops", 1), ("Data", 2)]);
        let confirm = ScriptedConfirm::answering(true);

        let outcome =
            block_on(delete_confirmed(&repo, &confirm, "Delete this team?", 1)).unwrap();
        let reloaded = block_on(repo.list(&TeamFilter::All)).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(confirm.last_message().as_deref(), Some("Delete this team?"));
        assert_eq!(repo.deletes.get(), 1);
        assert!(reloaded.iter().all(|r| r.id != 1));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_filter_all_and_by_team() {
        let repo = InMemory::seeded(&[("Ada", 1), ("Alan", 2), ("Grace", 1)]);

        let all = block_on(repo.list(&TeamFilter::All)).unwrap();
        let team_one = block_on(repo.list(&TeamFilter::Team(1))).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(team_one.len(), 2);
        assert!(team_one.iter().all(|r| r.team_id == 1));
    }

    const MEMBER_JSON: &str = r#"{"id":7,"firstName":"Ada","lastName":"Lovelace",
        "email":"ada@example.com","capacityPercentage":80,"teamId":2,"teamName":"Core"}"#;

    fn member_request() -> CreateTeamMemberRequest {
        CreateTeamMemberRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            jurisdiction: String::new(),
            capacity_percentage: 80,
            team_id: 2,
        }
    }

    fn member_service(transport: &RecordingTransport) -> TeamMemberService<RecordingTransport> {
        TeamMemberService::new(ApiClient::new(transport.clone()))
    }

    fn calls(transport: &RecordingTransport) -> Vec<(Method, String)> {
        transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect()
    }

    #[test]
    fn test_create_is_followed_by_filtered_reload() {
        let transport = RecordingTransport::new();
        transport.respond(201, MEMBER_JSON);
        transport.respond(200, &format!("[{}]", MEMBER_JSON));
        let service = member_service(&transport);

        let (saved, reloaded) = block_on(save_then_reload(
            &service,
            None,
            &member_request(),
            &TeamFilter::Team(2),
        ))
        .unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (Method::Post, "/team-members".to_string()),
                (Method::Get, "/team-members/team/2".to_string()),
            ]
        );
        assert_eq!(saved.id, 7);
        let reloaded = reloaded.unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_update_is_followed_by_reload_of_all() {
        let transport = RecordingTransport::new();
        transport.respond(200, MEMBER_JSON);
        let service = member_service(&transport);

        let (_, reloaded) = block_on(save_then_reload(
            &service,
            Some(7),
            &member_request(),
            &TeamFilter::All,
        ))
        .unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (Method::Put, "/team-members/7".to_string()),
                (Method::Get, "/team-members".to_string()),
            ]
        );
        assert!(reloaded.unwrap().is_empty());
    }

    #[test]
    fn test_failed_save_skips_reload() {
        let transport = RecordingTransport::new();
        transport.respond(500, "");
        let service = member_service(&transport);

        let err = block_on(save_then_reload(
            &service,
            None,
            &member_request(),
            &TeamFilter::All,
        ))
        .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_the_save() {
        let transport = RecordingTransport::new();
        transport.respond(201, MEMBER_JSON);
        transport.fail(ApiError::Network("offline".into()));
        let service = member_service(&transport);

        let (saved, reloaded) = block_on(save_then_reload(
            &service,
            None,
            &member_request(),
            &TeamFilter::All,
        ))
        .unwrap();

        assert_eq!(saved.id, 7);
        assert_eq!(reloaded, Err(ApiError::Network("offline".into())));
    }

    #[test]
    fn test_confirmed_delete_is_followed_by_filtered_reload() {
        let transport = RecordingTransport::new();
        transport.respond(204, "");
        transport.respond(200, &format!("[{}]", MEMBER_JSON));
        let service = member_service(&transport);
        let confirm = ScriptedConfirm::answering(true);

        let reloaded = block_on(delete_then_reload(
            &service,
            &confirm,
            "Delete?",
            9,
            &TeamFilter::Team(2),
        ))
        .unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (Method::Delete, "/team-members/9".to_string()),
                (Method::Get, "/team-members/team/2".to_string()),
            ]
        );
        assert_eq!(reloaded.unwrap().unwrap()[0].id, 7);
    }

    #[test]
    fn test_cancelled_delete_sends_nothing() {
        let transport = RecordingTransport::new();
        let service = member_service(&transport);
        let confirm = ScriptedConfirm::answering(false);

        let reloaded = block_on(delete_then_reload(
            &service,
            &confirm,
            "Delete?",
            9,
            &TeamFilter::All,
        ))
        .unwrap();

        assert!(reloaded.is_none());
        assert!(transport.requests().is_empty());
    }
}
