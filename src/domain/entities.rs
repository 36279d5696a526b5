#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One normalized shipping quotation, as returned by the rate backend or
/// recovered from assistant reply text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Non-empty within a response; synthesized when the source omits it.
    #[serde(default)]
    pub quote_id: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    /// Port codes when the backend knows them (e.g. "PKKHI").
    #[serde(default)]
    pub origin_code: Option<String>,
    #[serde(default)]
    pub destination_code: Option<String>,
    /// Free-form container code, e.g. "20GP".
    #[serde(default)]
    pub container_type: String,
    #[serde(default)]
    pub commodity: Option<String>,
    #[serde(default)]
    pub spot_rate_usd: f64,
    /// 0 means "not separately stated"; display via [`Rate::total_rate`].
    #[serde(default)]
    pub total_rate_usd: f64,
    #[serde(default = "default_service_level")]
    pub service_level: String,
    #[serde(default)]
    pub transit_days: u32,
    #[serde(default)]
    pub vessel_name: String,
    /// Opaque date strings; absent values render as "N/A".
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub arrival_date: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub validity_until: Option<String>,
    #[serde(default)]
    pub free_days: Option<u32>,
    #[serde(default)]
    pub detention: Option<f64>,
    #[serde(default)]
    pub preferred: bool,
}

fn default_service_level() -> String {
    "Standard".to_string()
}

impl Default for Rate {
    fn default() -> Self {
        Self {
            quote_id: String::new(),
            carrier: String::new(),
            origin: String::new(),
            destination: String::new(),
            origin_code: None,
            destination_code: None,
            container_type: String::new(),
            commodity: None,
            spot_rate_usd: 0.0,
            total_rate_usd: 0.0,
            service_level: default_service_level(),
            transit_days: 0,
            vessel_name: String::new(),
            departure_date: String::new(),
            arrival_date: String::new(),
            frequency: None,
            validity_until: None,
            free_days: None,
            detention: None,
            preferred: false,
        }
    }
}

impl Rate {
    /// All-in price for display. Falls back to the spot rate when the
    /// backend did not state a separate total.
    pub fn total_rate(&self) -> f64 {
        if self.total_rate_usd > 0.0 {
            self.total_rate_usd
        } else {
            self.spot_rate_usd
        }
    }

    /// "Karachi (PKKHI) → Dubai (AEJEA)", codes included when known.
    pub fn route_label(&self) -> String {
        let leg = |name: &str, code: &Option<String>| match code {
            Some(code) if !code.is_empty() => format!("{name} ({code})"),
            _ => name.to_string(),
        };
        format!(
            "{} → {}",
            leg(&self.origin, &self.origin_code),
            leg(&self.destination, &self.destination_code)
        )
    }
}

/// Echo of the search that produced a response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub container_type: String,
}

/// An ordered set of rates plus the message/context metadata the assistant
/// sent alongside them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateResponse {
    #[serde(default)]
    pub rates: Vec<Rate>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub search_criteria: Option<SearchCriteria>,
    /// Origin/destination suggestions carried by clarification replies.
    #[serde(default)]
    pub available_origins: Option<Vec<String>>,
    #[serde(default)]
    pub available_destinations: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat thread. Ids are v4 uuids so list renders stay
/// stable while the thread grows.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    pub fn now(role: ChatRole, content: impl Into<String>) -> Self {
        Self::with_timestamp(role, content, OffsetDateTime::now_utc())
    }

    pub fn with_timestamp(
        role: ChatRole,
        content: impl Into<String>,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp,
        }
    }
}

/// Container codes offered in the rate-search form.
pub const CONTAINER_TYPES: &[&str] = &["20GP", "40GP", "40HC", "20RF", "40RF"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_rate_falls_back_to_spot() {
        let mut rate = Rate {
            spot_rate_usd: 500.0,
            ..Default::default()
        };
        assert_eq!(rate.total_rate(), 500.0);

        rate.total_rate_usd = 560.0;
        assert_eq!(rate.total_rate(), 560.0);
    }

    #[test]
    fn test_route_label_includes_codes_when_known() {
        let mut rate = Rate {
            origin: "Karachi".to_string(),
            destination: "Dubai".to_string(),
            ..Default::default()
        };
        assert_eq!(rate.route_label(), "Karachi → Dubai");

        rate.origin_code = Some("PKKHI".to_string());
        rate.destination_code = Some("AEJEA".to_string());
        assert_eq!(rate.route_label(), "Karachi (PKKHI) → Dubai (AEJEA)");
    }
}
