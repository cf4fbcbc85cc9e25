//! Domain Entities

pub mod credential;
pub mod identity;
pub mod session;

pub use credential::Credential;
pub use identity::Identity;
pub use session::AuthSession;
