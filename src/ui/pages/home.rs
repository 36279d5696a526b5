use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🚢",
        "Sea Freight",
        "FCL and LCL bookings on the main east-west trades, with weekly sailings out of Karachi and Port Qasim.",
    ),
    (
        "✈️",
        "Air Freight",
        "Time-critical uplift through Lahore and Karachi with door-to-door handling for urgent consignments.",
    ),
    (
        "🛃",
        "Customs Clearance",
        "Licensed brokerage for imports and exports, from HS classification to duty assessment and release.",
    ),
    (
        "🏭",
        "Warehousing",
        "Bonded and general storage near the port belt, with consolidation and distribution on request.",
    ),
];

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "space-y-10",
            section {
                class: "{theme::panel_accent()} px-8 py-12 text-center",
                p { class: "text-xs font-semibold uppercase tracking-[0.3em] {theme::text_primary()}", "AHS Pakistan" }
                h1 { class: "mt-3 text-4xl font-bold text-slate-100", "Move cargo with confidence" }
                p { class: "mx-auto mt-4 max-w-2xl text-sm leading-relaxed {theme::text_secondary()}",
                    "Freight forwarding across Pakistan's trade lanes, backed by an AI assistant that "
                    "quotes live carrier rates in seconds instead of days."
                }
                div { class: "mt-8 flex flex-wrap justify-center gap-3",
                    Link {
                        to: Route::Chat {},
                        class: "{theme::btn_primary()}",
                        "Ask the AI Assistant"
                    }
                    Link {
                        to: Route::Rates {},
                        class: "{theme::btn_secondary()}",
                        "Search Rates"
                    }
                }
            }

            section {
                h2 { class: "{theme::section_title()}", "What we do" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    for (icon, title, blurb) in SERVICES.iter().copied() {
                        div {
                            class: "{theme::panel_border()} p-5",
                            span { class: "text-2xl", "{icon}" }
                            h3 { class: "mt-3 text-base font-semibold {theme::text_primary()}", "{title}" }
                            p { class: "mt-2 text-sm leading-relaxed {theme::text_muted()}", "{blurb}" }
                        }
                    }
                }
            }

            section {
                class: "{theme::panel_border()} flex flex-col items-center gap-4 p-8 text-center sm:flex-row sm:justify-between sm:text-left",
                div {
                    h2 { class: "text-lg font-semibold text-slate-100", "Need a quotation today?" }
                    p { class: "mt-1 text-sm {theme::text_muted()}",
                        "Tell the assistant your origin, destination and container type. It answers with live rates."
                    }
                }
                Link {
                    to: Route::Chat {},
                    class: "{theme::btn_primary()}",
                    "Start a conversation"
                }
            }
        }
    }
}
