#![allow(dead_code)]

//! Best-effort extraction of shipping rates from assistant replies.
//!
//! A reply arrives in one of three shapes: JSON with a `rates` array, a
//! single JSON rate object, or a bulleted plain-text block per carrier.
//! Everything here is total over arbitrary input; unparseable text resolves
//! to `None`/`Prose`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::entities::{Rate, RateResponse, SearchCriteria};

/// Carrier treated as preferred when the reply does not say otherwise.
pub const DEFAULT_PREFERRED_CARRIER: &str = "CMA CGM";

const KNOWN_CARRIERS: &[&str] = &["CMA CGM", "MSC", "Maersk", "Hapag-Lloyd", "ONE", "Carrier"];

const SHIP_MARKER: &str = "🚢";

const ROUTE_LABEL: &str = "Route:";
const CONTAINER_LABEL: &str = "Container:";
const RATE_LABEL: &str = "Rate:";
const TRANSIT_LABEL: &str = "Transit:";
const VESSEL_LABEL: &str = "Vessel:";
const DEPARTURE_LABEL: &str = "Departure:";
const ARRIVAL_LABEL: &str = "Arrival:";

/// At least one of these must appear before a full scan is worth running.
const QUICK_MARKERS: &[&str] = &[
    "• Container:",
    "• Rate:",
    "• Transit:",
    "* Container:",
    "* Rate:",
    "* Transit:",
    "Route:",
];

static RATES_FROM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rates\s+from\s+(.+?)\s+to\s+([^(\n]+)").unwrap());
static ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Route:\s*([^→\n]+)→\s*([^•\n]+)").unwrap());
static PREFERRED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\((preferred|recommended)\)").unwrap());
static MONEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$?([\d,]+)").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

/// Required-field gate applied when a record is emitted. Multi-carrier
/// assistant replies use [`FieldGate::Strict`]; single-record route
/// summaries on the search page may relax to [`FieldGate::Loose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldGate {
    /// Carrier, route, container type, and a positive rate.
    Strict,
    /// Carrier and route only.
    Loose,
}

/// How a reply should be rendered once the extractor has seen it.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtractedReply {
    /// One or more rates to show as cards.
    Rates(RateResponse),
    /// Structured reply with a message but no rates, e.g. a clarification
    /// listing the origins the backend knows about.
    Advisory(RateResponse),
    /// Valid JSON that matches none of the known shapes.
    Technical(Value),
    /// Nothing structured detected; show the raw text.
    Prose,
}

/// Single entry point used by the chat view: decides between structured
/// decoding and the plain-text parser and maps the result to a rendering.
pub fn classify_reply(content: &str) -> ExtractedReply {
    if json_shaped(content) {
        match serde_json::from_str::<Value>(content.trim()) {
            Ok(value) => {
                if let Some(response) = decode_structured(&value) {
                    if response.rates.is_empty() {
                        if response.message.is_empty() {
                            return ExtractedReply::Technical(value);
                        }
                        return ExtractedReply::Advisory(response);
                    }
                    return ExtractedReply::Rates(response);
                }
                return ExtractedReply::Technical(value);
            }
            Err(error) => {
                tracing::debug!(%error, "JSON-shaped reply failed to decode, trying plain text");
            }
        }
    }

    match parse_plain_text_rates(content, FieldGate::Strict) {
        Some(rates) => ExtractedReply::Rates(RateResponse {
            rates,
            ..Default::default()
        }),
        None => ExtractedReply::Prose,
    }
}

/// True when the reply decodes to one of the structured rate shapes.
pub fn is_rate_response(content: &str) -> bool {
    parse_rate_response(content).is_some()
}

/// Decodes a structured (JSON) reply into a [`RateResponse`].
///
/// Handles the backward-compatible `rates` array, a bare single-rate
/// object, and message-only clarification replies. Returns `None` for
/// malformed JSON and for JSON that matches no known shape.
pub fn parse_rate_response(content: &str) -> Option<RateResponse> {
    if !json_shaped(content) {
        return None;
    }
    let value = serde_json::from_str::<Value>(content.trim()).ok()?;
    decode_structured(&value)
}

fn json_shaped(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

fn decode_structured(value: &Value) -> Option<RateResponse> {
    if value.get("rates").is_some_and(Value::is_array) {
        return serde_json::from_value(value.clone()).ok();
    }

    if is_single_rate(value) {
        let rate: Rate = serde_json::from_value(value.clone()).ok()?;
        let message = match value.get("message").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!(
                "Found shipping rate from {} to {}",
                rate.origin, rate.destination
            ),
        };
        let search_criteria = SearchCriteria {
            origin: rate.origin.clone(),
            destination: rate.destination.clone(),
            container_type: rate.container_type.clone(),
        };
        return Some(RateResponse {
            rates: vec![rate],
            message,
            search_criteria: Some(search_criteria),
            ..Default::default()
        });
    }

    if let Some(message) = value.get("message").and_then(Value::as_str) {
        return Some(RateResponse {
            message: message.to_string(),
            available_origins: string_list(value.get("available_origins")),
            available_destinations: string_list(value.get("available_destinations")),
            ..Default::default()
        });
    }

    None
}

fn is_single_rate(value: &Value) -> bool {
    let non_empty = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|text| !text.is_empty())
    };
    let positive_rate = value
        .get("spot_rate_usd")
        .and_then(Value::as_f64)
        .is_some_and(|rate| rate != 0.0);

    non_empty("quote_id") || (non_empty("origin") && non_empty("destination") && positive_rate)
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    let list: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

/// Scans a plain-text reply for per-carrier rate blocks.
///
/// One pass over the lines, carrying a single open [`RateDraft`]: a carrier
/// header closes and emits the previous record, field-marker lines fill the
/// open one, and everything else is ignored. `None` means no usable rates,
/// the caller should fall back to rendering the raw text.
pub fn parse_plain_text_rates(content: &str, gate: FieldGate) -> Option<Vec<Rate>> {
    if !has_field_marker(content) {
        return None;
    }

    let context = RouteContext::from_text(content);
    let mut rates: Vec<Rate> = Vec::new();
    let mut draft: Option<RateDraft> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if is_carrier_header(line) {
            if let Some(open) = draft.take() {
                rates.extend(open.finalize(gate));
            }
            draft = Some(RateDraft::open(line, &context));
            continue;
        }

        if let Some(open) = draft.as_mut() {
            open.absorb_line(line);
        }
    }

    if let Some(open) = draft.take() {
        rates.extend(open.finalize(gate));
    }

    if rates.is_empty() {
        rates.extend(single_block_rate(content, &context, gate));
    }

    if rates.is_empty() {
        return None;
    }

    assign_quote_ids(&mut rates);
    Some(rates)
}

fn has_field_marker(content: &str) -> bool {
    QUICK_MARKERS.iter().any(|marker| content.contains(marker))
}

fn is_carrier_header(line: &str) -> bool {
    if !line.contains(':') || line.starts_with('•') || line.starts_with('*') {
        return false;
    }
    line.contains(SHIP_MARKER) || KNOWN_CARRIERS.iter().any(|carrier| line.contains(carrier))
}

/// Origin/destination defaults recovered from the reply as a whole, applied
/// to records that do not carry their own route line.
#[derive(Clone, Debug, Default)]
struct RouteContext {
    origin: String,
    destination: String,
}

impl RouteContext {
    fn from_text(content: &str) -> Self {
        if let Some(caps) = RATES_FROM_RE.captures(content) {
            return Self {
                origin: caps[1].trim().to_string(),
                destination: caps[2].trim().to_string(),
            };
        }
        if let Some((origin, destination)) = route_parts(content) {
            return Self {
                origin,
                destination,
            };
        }
        Self::default()
    }
}

fn route_parts(text: &str) -> Option<(String, String)> {
    let caps = ROUTE_RE.captures(text)?;
    let origin = caps[1].trim().to_string();
    let destination = caps[2].trim().to_string();
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some((origin, destination))
}

/// In-progress record accumulated during the line scan. Finalizing runs the
/// field gate and either emits a [`Rate`] or drops the draft silently.
#[derive(Debug, Default)]
struct RateDraft {
    carrier: String,
    origin: String,
    destination: String,
    container_type: String,
    rate_usd: f64,
    transit_days: u32,
    vessel_name: String,
    departure_date: String,
    arrival_date: String,
    preferred_marker: bool,
}

impl RateDraft {
    fn open(header: &str, context: &RouteContext) -> Self {
        let name = header.split(':').next().unwrap_or(header);
        let name = name.replace(SHIP_MARKER, "");
        let carrier = PREFERRED_RE.replace_all(&name, "").trim().to_string();

        Self {
            carrier,
            origin: context.origin.clone(),
            destination: context.destination.clone(),
            preferred_marker: PREFERRED_RE.is_match(header),
            ..Default::default()
        }
    }

    fn absorb_line(&mut self, line: &str) {
        // A route inside the block overrides the context route for this
        // record only. Route lines may appear with or without a bullet.
        if let Some((origin, destination)) = route_parts(line) {
            self.origin = origin;
            self.destination = destination;
            return;
        }

        let Some(rest) = line
            .strip_prefix('•')
            .or_else(|| line.strip_prefix('*'))
            .map(str::trim_start)
        else {
            return;
        };

        if let Some(value) = labeled_value(rest, CONTAINER_LABEL) {
            self.container_type = value.to_string();
        } else if let Some(value) = labeled_value(rest, RATE_LABEL) {
            if let Some(amount) = money_amount(value) {
                self.rate_usd = amount;
            }
        } else if let Some(value) = labeled_value(rest, TRANSIT_LABEL) {
            if let Some(days) = leading_integer(value) {
                self.transit_days = days;
            }
        } else if let Some(value) = labeled_value(rest, VESSEL_LABEL) {
            self.vessel_name = value.to_string();
        } else if let Some(value) = labeled_value(rest, DEPARTURE_LABEL) {
            self.departure_date = value.to_string();
        } else if let Some(value) = labeled_value(rest, ARRIVAL_LABEL) {
            self.arrival_date = value.to_string();
        }
    }

    fn finalize(self, gate: FieldGate) -> Option<Rate> {
        if self.carrier.is_empty() || self.origin.is_empty() || self.destination.is_empty() {
            return None;
        }
        if gate == FieldGate::Strict && (self.container_type.is_empty() || self.rate_usd <= 0.0) {
            return None;
        }

        let preferred = self.preferred_marker || self.carrier == DEFAULT_PREFERRED_CARRIER;
        Some(Rate {
            carrier: self.carrier,
            origin: self.origin,
            destination: self.destination,
            container_type: self.container_type,
            spot_rate_usd: self.rate_usd,
            total_rate_usd: self.rate_usd,
            transit_days: self.transit_days,
            vessel_name: self.vessel_name,
            departure_date: self.departure_date,
            arrival_date: self.arrival_date,
            preferred,
            ..Default::default()
        })
    }
}

fn labeled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

fn money_amount(value: &str) -> Option<f64> {
    let caps = MONEY_RE.captures(value)?;
    caps[1].replace(',', "").parse().ok()
}

fn leading_integer(value: &str) -> Option<u32> {
    let caps = INTEGER_RE.captures(value)?;
    caps[1].parse().ok()
}

/// Recovers single-offer summaries that skip the per-carrier header layout:
/// a route marker plus a container marker is enough to attempt one
/// whole-text extraction under the default carrier.
fn single_block_rate(content: &str, context: &RouteContext, gate: FieldGate) -> Option<Rate> {
    if !content.contains(ROUTE_LABEL) || !content.contains(CONTAINER_LABEL) {
        return None;
    }

    let mut draft = RateDraft {
        carrier: DEFAULT_PREFERRED_CARRIER.to_string(),
        origin: context.origin.clone(),
        destination: context.destination.clone(),
        ..Default::default()
    };
    for raw_line in content.lines() {
        draft.absorb_line(raw_line.trim());
    }

    let mut rate = draft.finalize(gate)?;
    rate.preferred = true;
    rate.quote_id = format!("generated-single-{}", carrier_slug(&rate.carrier));
    Some(rate)
}

/// Every emitted record needs a quote id unique within the response; absent
/// ids are synthesized from the ordinal position and the carrier name.
fn assign_quote_ids(rates: &mut [Rate]) {
    for (index, rate) in rates.iter_mut().enumerate() {
        if rate.quote_id.is_empty() {
            rate.quote_id = format!("generated-{index}-{}", carrier_slug(&rate.carrier));
        }
    }
}

/// Collapses non-alphanumeric runs to a single dash ("CMA CGM" → "CMA-CGM").
fn carrier_slug(carrier: &str) -> String {
    let mut slug = String::with_capacity(carrier.len());
    let mut gap = false;
    for ch in carrier.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES_ARRAY_JSON: &str = r#"{"rates":[{"quote_id":"q1","carrier":"MSC","origin":"Karachi","destination":"Dubai","container_type":"20GP","spot_rate_usd":500}], "message":"ok"}"#;

    const MULTI_CARRIER_TEXT: &str = "Here are the current rates from Karachi to Dubai (20GP):\n\n\
🚢 MSC:\n\
• Container: 20GP\n\
• Rate: $520\n\
• Transit: 12 days\n\n\
🚢 CMA CGM (Preferred):\n\
• Container: 20GP\n\
• Rate: $480\n\
• Transit: 14 days\n";

    #[test]
    fn test_rates_array_decodes_unmodified() {
        let response = parse_rate_response(RATES_ARRAY_JSON).unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.rates.len(), 1);

        let rate = &response.rates[0];
        assert_eq!(rate.quote_id, "q1");
        assert_eq!(rate.carrier, "MSC");
        assert_eq!(rate.origin, "Karachi");
        assert_eq!(rate.destination, "Dubai");
        assert_eq!(rate.container_type, "20GP");
        assert_eq!(rate.spot_rate_usd, 500.0);
        assert_eq!(rate.service_level, "Standard");
        assert!(!rate.preferred);
    }

    #[test]
    fn test_single_rate_object_is_wrapped() {
        let content =
            r#"{"quote_id":"q2","origin":"Lahore","destination":"Jebel Ali","spot_rate_usd":700}"#;
        let response = parse_rate_response(content).unwrap();

        assert_eq!(response.rates.len(), 1);
        assert_eq!(response.rates[0].quote_id, "q2");
        assert_eq!(response.rates[0].spot_rate_usd, 700.0);
        assert!(response.message.contains("Lahore"));
        assert!(response.message.contains("Jebel Ali"));

        let criteria = response.search_criteria.unwrap();
        assert_eq!(criteria.origin, "Lahore");
        assert_eq!(criteria.destination, "Jebel Ali");
    }

    #[test]
    fn test_message_only_reply_is_advisory() {
        let content = r#"{"message":"Which origin did you mean?","available_origins":["Karachi","Lahore"]}"#;
        match classify_reply(content) {
            ExtractedReply::Advisory(response) => {
                assert!(response.rates.is_empty());
                assert_eq!(response.message, "Which origin did you mean?");
                assert_eq!(
                    response.available_origins.as_deref(),
                    Some(&["Karachi".to_string(), "Lahore".to_string()][..])
                );
            }
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_json_is_technical() {
        let content = r#"{"status":"queued","job":42}"#;
        assert!(matches!(
            classify_reply(content),
            ExtractedReply::Technical(_)
        ));
        assert!(!is_rate_response(content));
    }

    #[test]
    fn test_malformed_json_falls_back_to_plain_text() {
        let content = "{\nMSC:\n• Container: 20GP\n• Rate: $500\n• Route: Karachi → Dubai\n}";
        match classify_reply(content) {
            ExtractedReply::Rates(response) => {
                assert_eq!(response.rates.len(), 1);
                assert_eq!(response.rates[0].carrier, "MSC");
                assert_eq!(response.rates[0].origin, "Karachi");
            }
            other => panic!("expected rates, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_carrier_blocks_in_header_order() {
        let rates = parse_plain_text_rates(MULTI_CARRIER_TEXT, FieldGate::Strict).unwrap();
        assert_eq!(rates.len(), 2);

        assert_eq!(rates[0].carrier, "MSC");
        assert!(!rates[0].preferred);
        assert_eq!(rates[0].spot_rate_usd, 520.0);
        assert_eq!(rates[0].transit_days, 12);
        assert_eq!(rates[0].origin, "Karachi");
        assert_eq!(rates[0].destination, "Dubai");

        assert_eq!(rates[1].carrier, "CMA CGM");
        assert!(rates[1].preferred);
        assert_eq!(rates[1].spot_rate_usd, 480.0);
        assert_eq!(rates[1].quote_id, "generated-1-CMA-CGM");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_plain_text_rates(MULTI_CARRIER_TEXT, FieldGate::Strict);
        let second = parse_plain_text_rates(MULTI_CARRIER_TEXT, FieldGate::Strict);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_greeting_is_rejected() {
        assert_eq!(
            parse_plain_text_rates("Hello, how can I help you today?", FieldGate::Strict),
            None
        );
        assert_eq!(
            classify_reply("Hello, how can I help you today?"),
            ExtractedReply::Prose
        );
    }

    #[test]
    fn test_header_without_required_fields_is_dropped() {
        let content = "MSC:\n• Vessel: Ever Given";
        assert_eq!(parse_plain_text_rates(content, FieldGate::Strict), None);
    }

    #[test]
    fn test_single_block_fallback_emits_one_preferred_rate() {
        let content = "Route: Karachi → Jebel Ali\n\
• Container: 40HC\n\
• Rate: $1,150\n\
• Transit: 9 days\n\
• Vessel: MSC Aurora\n";
        let rates = parse_plain_text_rates(content, FieldGate::Strict).unwrap();

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].carrier, DEFAULT_PREFERRED_CARRIER);
        assert!(rates[0].preferred);
        assert_eq!(rates[0].spot_rate_usd, 1150.0);
        assert_eq!(rates[0].transit_days, 9);
        assert_eq!(rates[0].vessel_name, "MSC Aurora");
        assert_eq!(rates[0].quote_id, "generated-single-CMA-CGM");
    }

    #[test]
    fn test_route_line_overrides_context_route() {
        let content = "Here are the rates from Karachi to Dubai (20GP):\n\
MSC:\n\
• Route: Lahore → Jebel Ali\n\
• Container: 20GP\n\
• Rate: $700\n";
        let rates = parse_plain_text_rates(content, FieldGate::Strict).unwrap();
        assert_eq!(rates[0].origin, "Lahore");
        assert_eq!(rates[0].destination, "Jebel Ali");
    }

    #[test]
    fn test_loose_gate_accepts_route_only_block() {
        let content = "🚢 MSC:\n• Route: Karachi → Dubai";
        let loose = parse_plain_text_rates(content, FieldGate::Loose).unwrap();
        assert_eq!(loose.len(), 1);
        assert_eq!(loose[0].carrier, "MSC");
        assert_eq!(loose[0].spot_rate_usd, 0.0);

        assert_eq!(parse_plain_text_rates(content, FieldGate::Strict), None);
    }

    #[test]
    fn test_default_carrier_is_preferred_without_marker() {
        let content = "rates from Karachi to Dubai (20GP)\n\
CMA CGM:\n\
• Container: 20GP\n\
• Rate: $480\n";
        let rates = parse_plain_text_rates(content, FieldGate::Strict).unwrap();
        assert!(rates[0].preferred);
    }

    #[test]
    fn test_arbitrary_input_never_panics() {
        let inputs = [
            "",
            "{",
            "}{",
            "{{{",
            "{\"rates\": \"not-a-list\"}",
            "• Rate:",
            "🚢🚢🚢",
            "Route: →",
            "\u{0}\u{1}\u{2}",
        ];
        for input in inputs {
            let _ = classify_reply(input);
            let _ = parse_rate_response(input);
            let _ = parse_plain_text_rates(input, FieldGate::Strict);
            let _ = parse_plain_text_rates(input, FieldGate::Loose);
        }
    }

    #[test]
    fn test_is_rate_response_tracks_parser() {
        assert!(is_rate_response(RATES_ARRAY_JSON));
        assert!(!is_rate_response("Hello, how can I help you today?"));
        assert!(!is_rate_response("{\"status\":\"queued\"}"));
    }
}
