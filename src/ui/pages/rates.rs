use dioxus::prelude::*;

use crate::{
    domain::{AppState, SearchCriteria, CONTAINER_TYPES},
    ui::{
        components::{
            chat_message::PortChips,
            rate_card::RateCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const ROUTE_PRESETS: &[(&str, &str, &str)] = &[
    ("Karachi", "Dubai", "40HC"),
    ("Karachi", "Jebel Ali", "20GP"),
    ("Lahore", "Dubai", "40HC"),
    ("Karachi", "Singapore", "40GP"),
];

#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let rate_request = use_context::<Signal<Option<SearchCriteria>>>();

    let mut origin = use_signal(String::new);
    let mut destination = use_signal(String::new);
    let mut container = use_signal(|| "40HC".to_string());

    let results = state.with(|st| st.rate_results.clone());
    let searching = rate_request().is_some();

    let on_search = {
        let rate_request = rate_request.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            submit_search(
                rate_request.clone(),
                toasts.clone(),
                origin(),
                destination(),
                container(),
            );
        }
    };

    rsx! {
        div { class: "space-y-6",
            section {
                h1 { class: "text-xl font-bold text-slate-100", "Rate Search" }
                p { class: "mt-1 text-sm {theme::text_muted()}",
                    "Compare live carrier rates for a lane, or pick one of the frequent routes below."
                }
            }

            form {
                class: "{theme::panel_border()} flex flex-wrap items-end gap-4 px-5 py-4",
                onsubmit: on_search,
                div { class: "min-w-[180px] flex-1",
                    label { class: "{theme::label_class()}", "Origin" }
                    input {
                        class: "{theme::input_class()} mt-1 w-full",
                        value: origin(),
                        placeholder: "e.g. Karachi",
                        oninput: move |evt| origin.set(evt.value()),
                    }
                }
                div { class: "min-w-[180px] flex-1",
                    label { class: "{theme::label_class()}", "Destination" }
                    input {
                        class: "{theme::input_class()} mt-1 w-full",
                        value: destination(),
                        placeholder: "e.g. Dubai",
                        oninput: move |evt| destination.set(evt.value()),
                    }
                }
                div { class: "w-32",
                    label { class: "{theme::label_class()}", "Container" }
                    select {
                        class: "{theme::select_class()} mt-1 w-full",
                        value: container(),
                        onchange: move |evt| container.set(evt.value()),
                        for code in CONTAINER_TYPES.iter().copied() {
                            option { value: code, selected: container() == code, "{code}" }
                        }
                    }
                }
                button {
                    class: "{theme::btn_primary()}",
                    r#type: "submit",
                    disabled: searching,
                    "Search Rates"
                }
            }

            section {
                class: "flex flex-wrap items-center gap-2",
                span { class: "text-xs uppercase tracking-wide {theme::text_muted()}", "Frequent routes:" }
                for (from, to, code) in ROUTE_PRESETS.iter().copied() {
                    button {
                        class: "{theme::preset_button()}",
                        onclick: {
                            let rate_request = rate_request.clone();
                            let toasts = toasts.clone();
                            move |_| {
                                origin.set(from.to_string());
                                destination.set(to.to_string());
                                container.set(code.to_string());
                                submit_search(
                                    rate_request.clone(),
                                    toasts.clone(),
                                    from.to_string(),
                                    to.to_string(),
                                    code.to_string(),
                                );
                            }
                        },
                        "{from} → {to} ({code})"
                    }
                }
            }

            if searching {
                div {
                    class: "{theme::panel_border()} animate-pulse p-5 text-sm {theme::text_muted()}",
                    "Searching live rates…"
                }
            }

            if let Some(response) = results {
                if response.rates.is_empty() {
                    div {
                        class: "{theme::panel_accent()} space-y-3 p-5",
                        p { class: "text-sm {theme::text_secondary()}",
                            if response.message.trim().is_empty() {
                                "No rates found for that lane. Try one of the frequent routes."
                            } else {
                                "{response.message}"
                            }
                        }
                        if let Some(origins) = response.available_origins.clone().filter(|list| !list.is_empty()) {
                            PortChips { label: "Origins we serve", ports: origins }
                        }
                        if let Some(destinations) = response.available_destinations.clone().filter(|list| !list.is_empty()) {
                            PortChips { label: "Destinations we serve", ports: destinations }
                        }
                    }
                } else {
                    section {
                        if !response.message.trim().is_empty() {
                            p { class: "text-sm {theme::text_secondary()}", "{response.message}" }
                        }
                        div { class: "mt-3 grid gap-4 xl:grid-cols-2",
                            for rate in response.rates {
                                RateCard { rate }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn submit_search(
    mut rate_request: Signal<Option<SearchCriteria>>,
    toasts: Signal<Vec<ToastMessage>>,
    origin: String,
    destination: String,
    container_type: String,
) -> bool {
    let origin = origin.trim().to_string();
    let destination = destination.trim().to_string();
    if origin.is_empty() || destination.is_empty() {
        push_toast(
            toasts,
            ToastKind::Warning,
            "Enter both an origin and a destination.",
        );
        return false;
    }
    if rate_request().is_some() {
        push_toast(toasts, ToastKind::Warning, "A search is already running.");
        return false;
    }

    rate_request.set(Some(SearchCriteria {
        origin,
        destination,
        container_type,
    }));
    true
}
