//! Role → hourly wage lookup.
//!
//! The rate is resolved once when a shift is logged and then frozen on the
//! stored row, so editing the table never rewrites history.

use crate::models::role::Role;
use serde::{Deserialize, Serialize};

pub const SERVER_WAGE: f64 = 3.00;
pub const HOST_WAGE: f64 = 11.50;
pub const TA_WAGE: f64 = 12.00;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageTable {
    #[serde(default = "default_server")]
    pub server: f64,
    #[serde(default = "default_host")]
    pub host: f64,
    #[serde(default = "default_ta")]
    pub ta: f64,
}

fn default_server() -> f64 {
    SERVER_WAGE
}
fn default_host() -> f64 {
    HOST_WAGE
}
fn default_ta() -> f64 {
    TA_WAGE
}

impl Default for WageTable {
    fn default() -> Self {
        Self {
            server: SERVER_WAGE,
            host: HOST_WAGE,
            ta: TA_WAGE,
        }
    }
}

impl WageTable {
    pub fn rate_for(&self, role: Role) -> f64 {
        match role {
            Role::Server => self.server,
            Role::Host => self.host,
            Role::Ta => self.ta,
        }
    }

    /// Every rate must be a positive, finite number.
    pub fn invalid_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|r| {
                let rate = self.rate_for(*r);
                !(rate.is_finite() && rate > 0.0)
            })
            .collect()
    }
}
