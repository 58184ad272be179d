/// Team selection of the "Filter by Team" dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TeamFilter {
    #[default]
    All,
    Team(i64),
}

impl TeamFilter {
    /// Option value of the "All Teams" entry
    pub const ALL_VALUE: &'static str = "all";

    /// Parse a `<select>` value; anything that is not a team id means all teams
    pub fn from_select_value(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map(TeamFilter::Team)
            .unwrap_or(TeamFilter::All)
    }

    pub fn select_value(&self) -> String {
        match self {
            TeamFilter::All => Self::ALL_VALUE.to_string(),
            TeamFilter::Team(id) => id.to_string(),
        }
    }

    pub fn team_id(&self) -> Option<i64> {
        match self {
            TeamFilter::All => None,
            TeamFilter::Team(id) => Some(*id),
        }
    }
}
