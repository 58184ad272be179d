use leptos::prelude::*;

/// Management view shown below the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Teams,
    Members,
    Leaves,
}

impl ActiveView {
    /// Icon name
    pub fn key(&self) -> &'static str {
        match self {
            ActiveView::Teams => "teams",
            ActiveView::Members => "members",
            ActiveView::Leaves => "leaves",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Teams => "Teams",
            ActiveView::Members => "Team Members",
            ActiveView::Leaves => "Leave Management",
        }
    }

    pub fn all() -> [ActiveView; 3] {
        [ActiveView::Teams, ActiveView::Members, ActiveView::Leaves]
    }
}

/// App-wide UI state; only the active view, nothing is persisted
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ActiveView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActiveView::default()),
        }
    }

    pub fn activate(&self, view: ActiveView) {
        log::debug!("activate view '{}'", view.key());
        self.active.set(view);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<_> = ActiveView::all().iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["Teams", "Team Members", "Leave Management"]);
        assert_eq!(ActiveView::default(), ActiveView::Teams);
    }

    #[test]
    fn test_activate_switches_view() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.active.get_untracked(), ActiveView::Teams);
        ctx.activate(ActiveView::Leaves);
        assert_eq!(ctx.active.get_untracked(), ActiveView::Leaves);
    }
}
