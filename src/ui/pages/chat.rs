use dioxus::prelude::*;

use crate::{
    app::persist_session,
    domain::{AppState, ChatMessage, ChatRole, Rate},
    ui::{
        components::{
            chat_message::ChatBubble,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const SUGGESTED_PROMPTS: &[&str] = &[
    "What rates do you have from Karachi to Dubai?",
    "Show me rates for a 40HC to Jebel Ali",
    "Which trade lanes do you cover?",
];

#[component]
pub fn ChatPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let chat_request = use_context::<Signal<Option<String>>>();

    let mut draft = use_signal(String::new);

    let messages = state.with(|st| st.messages.clone());
    let session_id = state.with(|st| st.session_id.clone());
    let waiting = chat_request().is_some();

    let on_send = {
        let state = state.clone();
        let toasts = toasts.clone();
        let chat_request = chat_request.clone();
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if queue_chat_message(state.clone(), chat_request.clone(), toasts.clone(), draft()) {
                draft.set(String::new());
            }
        }
    };

    let on_quote = {
        let state = state.clone();
        let toasts = toasts.clone();
        let chat_request = chat_request.clone();
        move |rate: Rate| {
            queue_chat_message(
                state.clone(),
                chat_request.clone(),
                toasts.clone(),
                quotation_request(&rate),
            );
        }
    };

    let on_new_chat = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.clear_thread());
            push_toast(toasts.clone(), ToastKind::Info, "Cleared the conversation.");
        }
    };

    let on_new_session = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.rotate_session());
            persist_session(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                "Started a fresh session.",
            );
        }
    };

    let on_pick_suggestion = {
        let state = state.clone();
        let toasts = toasts.clone();
        let chat_request = chat_request.clone();
        move |prompt: String| {
            queue_chat_message(state.clone(), chat_request.clone(), toasts.clone(), prompt);
        }
    };

    rsx! {
        div { class: "flex flex-col gap-4",
            section {
                class: "flex flex-wrap items-center justify-between gap-3",
                div {
                    h1 { class: "text-xl font-bold text-slate-100", "AI Assistant" }
                    p { class: "text-xs {theme::text_muted()}", "Session: {session_id}" }
                }
                div { class: "flex gap-2",
                    button { class: "{theme::btn_quiet()}", onclick: on_new_chat, "New Chat" }
                    button { class: "{theme::btn_quiet()}", onclick: on_new_session, "New Session" }
                }
            }

            section {
                class: "{theme::panel_border()} flex max-h-[62vh] min-h-[24rem] flex-col gap-4 overflow-y-auto p-5",
                if messages.is_empty() {
                    EmptyThread { on_pick: on_pick_suggestion }
                } else {
                    for message in messages {
                        ChatBubble {
                            message,
                            on_quote: on_quote.clone(),
                        }
                    }
                }
                if waiting {
                    div {
                        class: "mr-auto animate-pulse rounded-2xl rounded-bl-sm border border-slate-800 bg-slate-900/70 px-4 py-3 text-sm {theme::text_muted()}",
                        "Assistant is thinking…"
                    }
                }
            }

            form {
                class: "flex gap-3",
                onsubmit: on_send,
                input {
                    class: "{theme::input_class()} flex-1",
                    value: draft(),
                    placeholder: "Ask about rates, transit times or bookings…",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "{theme::btn_primary()}",
                    r#type: "submit",
                    disabled: waiting,
                    "Send"
                }
            }
        }
    }
}

#[component]
fn EmptyThread(on_pick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "m-auto max-w-md text-center",
            span { class: "text-4xl", "🚢" }
            h2 { class: "mt-3 text-lg font-semibold text-slate-100", "Ask the AHS rate desk" }
            p { class: "mt-2 text-sm {theme::text_muted()}",
                "Live carrier rates, transit times and sailing schedules for your lane."
            }
            div { class: "mt-5 flex flex-col gap-2",
                for prompt in SUGGESTED_PROMPTS.iter().copied() {
                    button {
                        class: "{theme::preset_button()}",
                        onclick: move |_| on_pick.call(prompt.to_string()),
                        "{prompt}"
                    }
                }
            }
        }
    }
}

/// Appends the user message to the thread and hands the text to the
/// delivery resource. Returns false when nothing was queued.
fn queue_chat_message(
    mut state: Signal<AppState>,
    mut chat_request: Signal<Option<String>>,
    toasts: Signal<Vec<ToastMessage>>,
    text: String,
) -> bool {
    let text = text.trim().to_string();
    if text.is_empty() {
        push_toast(toasts, ToastKind::Warning, "Type a message first.");
        return false;
    }
    if chat_request().is_some() {
        push_toast(
            toasts,
            ToastKind::Warning,
            "Still waiting for the assistant. One moment.",
        );
        return false;
    }

    state.with_mut(|st| {
        st.messages
            .push(ChatMessage::now(ChatRole::User, text.clone()));
    });
    chat_request.set(Some(text));
    true
}

/// Follow-up message sent when the user asks for a quotation from a card.
/// Names the spot rate; surcharges are left for the quotation itself.
fn quotation_request(rate: &Rate) -> String {
    format!(
        "Please send me a quotation for the {} rate from {} to {} ({}) at {:.0} USD.",
        rate.carrier, rate.origin, rate.destination, rate.container_type, rate.spot_rate_usd
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotation_request_quotes_the_spot_rate() {
        let rate = Rate {
            carrier: "CMA CGM".to_string(),
            origin: "Karachi".to_string(),
            destination: "Dubai".to_string(),
            container_type: "40HC".to_string(),
            spot_rate_usd: 1450.0,
            total_rate_usd: 1650.0,
            ..Default::default()
        };

        assert_eq!(
            quotation_request(&rate),
            "Please send me a quotation for the CMA CGM rate from Karachi to Dubai (40HC) at 1450 USD."
        );
    }
}
