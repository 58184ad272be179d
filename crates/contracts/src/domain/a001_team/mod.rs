pub mod aggregate;
pub mod draft;
