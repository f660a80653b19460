use cnpjscout_core::SearchWindow;
use serde_json::json;

/// Filter sent to the registry: founding-date window, SIMEI optant flag and
/// page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub window: SearchWindow,
    pub simei_optant: bool,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(window: SearchWindow, simei_optant: bool, limit: u32) -> Self {
        Self {
            window,
            simei_optant,
            limit,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("founded.gte", self.window.founded_gte()),
            ("founded.lte", self.window.founded_lte()),
            ("company.simei.optant.eq", self.simei_optant.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    pub fn describe(&self) -> serde_json::Value {
        json!({
            "founded_from": self.window.from().to_string(),
            "founded_to": self.window.to().to_string(),
            "simei_optant": self.simei_optant,
            "limit": self.limit,
        })
    }
}
