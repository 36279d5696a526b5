use dioxus::prelude::*;

use crate::ui::theme;

const STATS: &[(&str, &str)] = &[
    ("15+", "Years forwarding"),
    ("12,000+", "Shipments handled"),
    ("40+", "Ports served"),
    ("98%", "On-time delivery"),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border()} p-8",
                h1 { class: "text-2xl font-bold text-slate-100", "About AHS Pakistan" }
                p { class: "mt-4 text-sm leading-relaxed {theme::text_secondary()}",
                    "AHS Pakistan started as a two-desk customs brokerage at Karachi port and grew into a "
                    "full forwarding house covering sea, air and overland cargo. We book space directly with "
                    "the major carriers on the Gulf, Far East and Europe trades, clear shipments through our "
                    "own brokerage licence, and keep customers informed at every milestone."
                }
                p { class: "mt-3 text-sm leading-relaxed {theme::text_secondary()}",
                    "The rate desk in this application is the same one our operations team uses: it asks the "
                    "AI assistant for live carrier pricing and turns the reply into side-by-side quotations."
                }
            }

            section {
                div { class: "grid gap-4 sm:grid-cols-4",
                    for (figure, label) in STATS.iter().copied() {
                        div {
                            class: "{theme::panel_border()} p-5 text-center",
                            p { class: "text-2xl font-bold {theme::accent_text()}", "{figure}" }
                            p { class: "mt-1 text-xs uppercase tracking-wide {theme::text_muted()}", "{label}" }
                        }
                    }
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "{theme::section_title()}", "How we work" }
                ul { class: "mt-4 space-y-3 text-sm {theme::text_secondary()}",
                    li { "• One accountable coordinator per shipment, from booking to delivery." }
                    li { "• Carrier-direct contracts on the Karachi, Lahore and Port Qasim gateways." }
                    li { "• Transparent quotations: spot rate, surcharges and free time spelled out up front." }
                    li { "• Documentation and customs handled in-house, not passed to a third party." }
                }
            }

            section {
                class: "{theme::panel_accent()} p-6",
                h2 { class: "{theme::section_title()}", "Contact" }
                div { class: "mt-4 grid gap-4 text-sm {theme::text_secondary()} sm:grid-cols-3",
                    div {
                        p { class: "{theme::label_class()}", "Head Office" }
                        p { class: "mt-1", "Shahrah-e-Faisal, Karachi, Pakistan" }
                    }
                    div {
                        p { class: "{theme::label_class()}", "Phone" }
                        p { class: "mt-1", "+92 21 111 247 247" }
                    }
                    div {
                        p { class: "{theme::label_class()}", "Email" }
                        p { class: "mt-1", "operations@ahspakistan.com" }
                    }
                }
            }
        }
    }
}
