pub mod assign_roles;
pub mod auth;
pub mod discovery;
pub mod enable_apis;
pub mod interactive;
pub mod onboard;
