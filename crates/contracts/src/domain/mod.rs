pub mod a001_team;
pub mod a002_team_member;
pub mod a003_leave;
