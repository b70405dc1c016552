use serde::Serialize;
use std::fmt;

/// Job role a shift was worked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Server, // SERVER
    Host,   // HOST
    Ta,     // TA
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Server, Role::Host, Role::Ta];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Server => "SERVER",
            Role::Host => "HOST",
            Role::Ta => "TA",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "SERVER" => Some(Role::Server),
            "HOST" => Some(Role::Host),
            "TA" => Some(Role::Ta),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case, or menu number 1-3)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Role::Server),
            "2" => Some(Role::Host),
            "3" => Some(Role::Ta),
            other => Role::from_db_str(&other.to_uppercase()),
        }
    }

    /// TA shifts never carry tips.
    pub fn receives_tips(&self) -> bool {
        !matches!(self, Role::Ta)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
