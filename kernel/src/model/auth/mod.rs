pub mod event;

/// Opaque session token handed out on login and carried back in the
/// `session` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
