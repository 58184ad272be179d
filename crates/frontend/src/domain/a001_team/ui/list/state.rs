use crate::shared::form_state::FormMode;
use contracts::domain::a001_team::aggregate::Team;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct TeamListState {
    pub form: FormMode<Team>,
}

impl TeamListState {
    /// Id passed to `crud::save`: `None` creates
    pub fn editing_id(&self) -> Option<i64> {
        self.form.editing().map(|t| t.id)
    }
}

pub fn create_state() -> RwSignal<TeamListState> {
    RwSignal::new(TeamListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_id() {
        let mut state = TeamListState::default();
        assert_eq!(state.editing_id(), None);
        state.form = FormMode::Create;
        assert_eq!(state.editing_id(), None);
        state.form = FormMode::Edit(Team {
            id: 8,
            name: "Ops".into(),
            description: String::new(),
            members: vec![],
            created_at: String::new(),
            updated_at: String::new(),
        });
        assert_eq!(state.editing_id(), Some(8));
    }
}
