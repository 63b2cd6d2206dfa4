//! Attribution settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};

/// Knobs of the attribution stages.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttributionConfig {
    /// The site's own domain. Referrals from it are internal navigation.
    #[serde(default = "default_own_domain")]
    #[validate(length(min = 1))]
    pub own_domain: String,
    /// `event_list` code that marks a purchase.
    #[serde(default = "default_purchase_event")]
    pub purchase_event: f64,
    /// Leave rows with no forward-filled revenue out of the per-visitor
    /// reduction instead of collapsing them into a single null group.
    #[serde(default)]
    pub skip_unattributed: bool,
}

fn default_own_domain() -> String {
    "esshopzilla.com".to_string()
}

fn default_purchase_event() -> f64 {
    1.0
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            own_domain: default_own_domain(),
            purchase_event: default_purchase_event(),
            skip_unattributed: false,
        }
    }
}

impl AttributionConfig {
    /// Validates the settings before a run.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::config(format!("attribution: {}", e)))?;
        if !self.purchase_event.is_finite() {
            return Err(Error::config("attribution: purchase_event must be finite"));
        }
        Ok(())
    }
}
