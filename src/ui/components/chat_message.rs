use dioxus::prelude::*;

use crate::domain::{classify_reply, ChatMessage, ChatRole, ExtractedReply, Rate};
use crate::ui::components::rate_card::RateCard;
use crate::ui::theme;
use crate::util::format::format_clock_time;

/// One entry in the chat thread. User messages render as plain bubbles;
/// assistant messages are classified first so structured rate replies come
/// out as quotation cards instead of raw JSON.
#[component]
pub fn ChatBubble(message: ChatMessage, on_quote: EventHandler<Rate>) -> Element {
    let stamp = format_clock_time(message.timestamp);

    match message.role {
        ChatRole::User => rsx! {
            div { class: "flex flex-col",
                div { class: "{theme::bubble_class(ChatRole::User)}",
                    p { class: "whitespace-pre-wrap", "{message.content}" }
                }
                span { class: "{theme::bubble_meta(ChatRole::User)}", "{stamp}" }
            }
        },
        ChatRole::Assistant => rsx! {
            div { class: "flex flex-col",
                AssistantBody { content: message.content.clone(), on_quote }
                span { class: "{theme::bubble_meta(ChatRole::Assistant)}", "{stamp}" }
            }
        },
    }
}

#[component]
fn AssistantBody(content: String, on_quote: EventHandler<Rate>) -> Element {
    match classify_reply(&content) {
        ExtractedReply::Rates(response) => {
            let headline = response.message.trim().to_string();
            rsx! {
                div { class: "mr-auto w-full space-y-3",
                    if !headline.is_empty() {
                        p { class: "text-sm {theme::text_secondary()}", "{headline}" }
                    }
                    div { class: "grid gap-4 xl:grid-cols-2",
                        for rate in response.rates {
                            RateCard {
                                rate,
                                on_quote: Some(EventHandler::new(move |picked| on_quote.call(picked))),
                            }
                        }
                    }
                }
            }
        }
        ExtractedReply::Advisory(response) => {
            let origins = response.available_origins.clone().unwrap_or_default();
            let destinations = response.available_destinations.clone().unwrap_or_default();
            rsx! {
                div { class: "mr-auto w-full {theme::panel_accent()} space-y-3 p-4",
                    p { class: "text-sm {theme::text_secondary()}", "{response.message}" }
                    if !origins.is_empty() {
                        PortChips { label: "Origins we serve", ports: origins }
                    }
                    if !destinations.is_empty() {
                        PortChips { label: "Destinations we serve", ports: destinations }
                    }
                }
            }
        }
        ExtractedReply::Technical(value) => {
            let pretty =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            rsx! {
                pre {
                    class: "mr-auto w-full overflow-x-auto rounded-xl border border-slate-800 bg-slate-950 p-4 text-xs text-slate-400",
                    "{pretty}"
                }
            }
        }
        ExtractedReply::Prose => rsx! {
            div { class: "{theme::bubble_class(ChatRole::Assistant)}",
                p { class: "whitespace-pre-wrap", "{content}" }
            }
        },
    }
}

#[component]
pub fn PortChips(label: &'static str, ports: Vec<String>) -> Element {
    rsx! {
        div {
            p { class: "{theme::label_class()}", "{label}" }
            div { class: "mt-1.5 flex flex-wrap gap-1.5",
                for port in ports {
                    span {
                        class: "rounded-full border border-sky-700/40 bg-sky-900/30 px-2.5 py-0.5 text-xs text-sky-200",
                        "{port}"
                    }
                }
            }
        }
    }
}
