pub mod once;
pub mod pending;
