pub mod leave_type;
