use dioxus::prelude::*;

use crate::domain::Rate;
use crate::ui::theme;
use crate::util::format::{container_type_label, format_currency, format_date};

/// Quotation card for a single carrier rate. Missing commercial terms fall
/// back to the desk's standard offer (24h validity, 3 free days, $25/day
/// detention, weekly sailings) so a sparse upstream record still renders as
/// a complete quote.
#[component]
pub fn RateCard(rate: Rate, on_quote: Option<EventHandler<Rate>>) -> Element {
    let route = rate.route_label();
    let container = container_type_label(&rate.container_type).to_string();
    let total = format_currency(rate.total_rate());
    let spot = format_currency(rate.spot_rate_usd);

    let validity = validity_label(&rate);
    let free_days = free_days_label(&rate);
    let detention = detention_label(&rate);
    let frequency = frequency_label(&rate);

    let departure = format_date(&rate.departure_date);
    let arrival = format_date(&rate.arrival_date);
    let quote_rate = rate.clone();

    rsx! {
        div {
            class: "{theme::rate_card_border(rate.preferred)} p-5",
            div { class: "flex items-start justify-between gap-3",
                div {
                    h3 { class: "text-lg font-semibold {theme::text_primary()}", "{rate.carrier}" }
                    p { class: "text-sm {theme::text_secondary()}", "{route}" }
                }
                if rate.preferred {
                    span {
                        class: "rounded-full border border-amber-500/40 bg-amber-500/10 px-3 py-1 text-xs font-semibold text-amber-300",
                        "★ Preferred"
                    }
                }
            }

            div { class: "mt-4 flex items-baseline gap-2",
                span { class: "text-3xl font-bold {theme::accent_text()}", "{total}" }
                span { class: "text-xs {theme::text_muted()}", "total per {container}" }
            }

            div { class: "mt-4 grid grid-cols-2 gap-3 text-sm sm:grid-cols-3",
                RateField { label: "Spot Rate", value: spot }
                RateField { label: "Transit", value: format!("{} days", rate.transit_days) }
                RateField { label: "Service", value: rate.service_level.clone() }
                RateField { label: "Vessel", value: rate.vessel_name.clone() }
                RateField { label: "Departure", value: departure }
                RateField { label: "Arrival", value: arrival }
                RateField { label: "Valid Until", value: validity }
                RateField { label: "Frequency", value: frequency }
                RateField { label: "Free Days", value: free_days }
                RateField { label: "Detention", value: detention }
            }

            if let Some(commodity) = rate.commodity.clone().filter(|c| !c.trim().is_empty()) {
                p { class: "mt-3 text-xs {theme::text_muted()}", "Commodity: {commodity}" }
            }

            div { class: "mt-4 flex items-center justify-between",
                span { class: "text-[10px] uppercase tracking-wide {theme::text_muted()}", "Quote {rate.quote_id}" }
                if let Some(handler) = on_quote {
                    button {
                        class: "{theme::btn_primary()}",
                        onclick: move |_| handler.call(quote_rate.clone()),
                        "Get Quote"
                    }
                }
            }
        }
    }
}

#[component]
fn RateField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            p { class: "{theme::label_class()}", "{label}" }
            p { class: "mt-0.5 {theme::text_secondary()}", "{value}" }
        }
    }
}

/// A stated expiry renders as a date; empty or placeholder values fall back
/// to the desk's standard 24 hours.
fn validity_label(rate: &Rate) -> String {
    match rate.validity_until.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() && value != "N/A" => format_date(value),
        _ => "24 Hours".to_string(),
    }
}

fn frequency_label(rate: &Rate) -> String {
    rate.frequency
        .clone()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "Weekly".to_string())
}

fn free_days_label(rate: &Rate) -> String {
    format!("{} days", rate.free_days.unwrap_or(3))
}

fn detention_label(rate: &Rate) -> String {
    format!("{}/day", format_currency(rate.detention.unwrap_or(25.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_rate() -> Rate {
        Rate {
            quote_id: "q1".to_string(),
            carrier: "MSC".to_string(),
            origin: "Karachi".to_string(),
            destination: "Dubai".to_string(),
            container_type: "40HC".to_string(),
            spot_rate_usd: 1450.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_terms_fall_back_to_standard_offer() {
        let rate = sparse_rate();
        assert_eq!(validity_label(&rate), "24 Hours");
        assert_eq!(free_days_label(&rate), "3 days");
        assert_eq!(detention_label(&rate), "$25/day");
        assert_eq!(frequency_label(&rate), "Weekly");
    }

    #[test]
    fn test_placeholder_validity_falls_back() {
        let rate = Rate {
            validity_until: Some("N/A".to_string()),
            ..sparse_rate()
        };
        assert_eq!(validity_label(&rate), "24 Hours");
    }

    #[test]
    fn test_stated_terms_render_as_given() {
        let rate = Rate {
            validity_until: Some("2025-08-01".to_string()),
            free_days: Some(7),
            detention: Some(40.0),
            frequency: Some("Twice weekly".to_string()),
            ..sparse_rate()
        };
        assert_eq!(validity_label(&rate), "Aug 01, 2025");
        assert_eq!(free_days_label(&rate), "7 days");
        assert_eq!(detention_label(&rate), "$40/day");
        assert_eq!(frequency_label(&rate), "Twice weekly");
    }
}
