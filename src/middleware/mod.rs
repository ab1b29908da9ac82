pub mod auth;

pub use auth::{AdminPrincipal, AuthGate, RequireAdmin, StaticKeyGate};
