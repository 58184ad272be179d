pub mod api_utils;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod form_state;
pub mod http;
pub mod icons;
pub mod list_resource;
pub mod modal;
pub mod team_filter;

#[cfg(test)]
pub mod testing;
