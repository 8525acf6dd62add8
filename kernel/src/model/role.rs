use strum::{AsRefStr, EnumString};

/// Stored as a free-form string in the users table; parsing is
/// case-insensitive and anything unrecognized counts as a plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    #[default]
    User,
}
