use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    domain::{
        is_rate_response, parse_plain_text_rates, parse_rate_response, AppState, ChatMessage,
        ChatRole, FieldGate, RateResponse, SearchCriteria,
    },
    infra::{AhsClient, AhsClientError, HealthStatus, RateFilters},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AboutPage, ChatPage, HomePage, RatesPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_session, save_persisted_session},
    },
};

/// Ceiling for one assistant round-trip before the user gets an answer.
const CHAT_TIMEOUT: Duration = Duration::from_secs(15);
/// How many stored exchanges to replay when a session resumes.
const HISTORY_REPLAY_LIMIT: usize = 10;
/// The rate-search page talks to the assistant on its own session so lane
/// queries never pollute the user's conversation.
const RATE_SEARCH_SESSION: &str = "rate-search-session";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/chat")]
    Chat {},
    #[route("/rates")]
    Rates {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_session() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Pending chat delivery shared between the chat page and the resource below.
    let chat_request = use_signal(|| None::<String>);
    use_context_provider(|| chat_request.clone());

    // Pending rate search, same arrangement.
    let rate_request = use_signal(|| None::<SearchCriteria>);
    use_context_provider(|| rate_request.clone());

    let health = use_signal(|| None::<HealthStatus>);
    use_context_provider(|| health.clone());

    let _health_probe = use_resource({
        let health = health.clone();
        move || async move { probe_health(health.clone()).await }
    });

    let _history_replay = use_resource({
        let state = state.clone();
        move || async move { replay_history(state.clone()).await }
    });

    let _chat_delivery = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let chat_request = chat_request.clone();
        move || async move { deliver_chat(state.clone(), chat_request.clone(), toasts.clone()).await }
    });

    let _rate_delivery = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let rate_request = rate_request.clone();
        move || async move { deliver_rates(state.clone(), rate_request.clone(), toasts.clone()).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the current session id. Reads through `peek` so callers inside
/// reactive scopes do not pick up a dependency on the whole app state.
pub fn persist_session(state: &Signal<AppState>) {
    let snapshot = state.peek().to_persisted();
    if let Err(err) = save_persisted_session(&snapshot) {
        tracing::warn!(%err, "failed to persist session");
    }
}

async fn probe_health(mut health: Signal<Option<HealthStatus>>) {
    let Ok(client) = AhsClient::new() else {
        tracing::warn!("could not initialise API client for health probe");
        return;
    };

    match client.health().await {
        Ok(status) => {
            tracing::info!(status = %status.status, "health probe succeeded");
            health.set(Some(status));
        }
        Err(err) => {
            tracing::warn!(%err, "health probe failed");
            health.set(Some(HealthStatus {
                status: "unreachable".to_string(),
                message: Some(err.to_string()),
                version: None,
            }));
        }
    }
}

/// Replays the saved session's recent exchanges into an empty thread.
/// Runs once; a thread the user already started is left alone.
async fn replay_history(mut state: Signal<AppState>) {
    let (session_id, already_loaded, thread_empty) = state.with(|st| {
        (
            st.session_id.clone(),
            st.history_loaded,
            st.messages.is_empty(),
        )
    });
    if already_loaded {
        return;
    }
    if !thread_empty {
        state.with_mut(|st| st.history_loaded = true);
        return;
    }

    let Ok(client) = AhsClient::new() else {
        return;
    };

    match client.session_history(&session_id, HISTORY_REPLAY_LIMIT).await {
        Ok(messages) => {
            if !messages.is_empty() {
                tracing::info!(count = messages.len(), %session_id, "replayed session history");
            }
            state.with_mut(|st| {
                st.history_loaded = true;
                if st.messages.is_empty() {
                    st.messages = messages;
                }
            });
        }
        Err(err) => {
            tracing::warn!(%err, "could not replay session history");
            state.with_mut(|st| st.history_loaded = true);
        }
    }
}

/// Sends the queued chat message and appends the assistant's answer to the
/// thread. State reads go through `peek`: a subscription here would restart
/// the in-flight request whenever the thread changes.
async fn deliver_chat(
    mut state: Signal<AppState>,
    mut chat_request: Signal<Option<String>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(text) = chat_request() else {
        return;
    };
    let session_id = state.peek().session_id.clone();

    let Ok(client) = AhsClient::new() else {
        chat_request.set(None);
        push_toast(
            toasts,
            ToastKind::Error,
            "Could not initialise the API client. Check AHS_API_BASE.",
        );
        return;
    };

    let reply_message = match tokio::time::timeout(CHAT_TIMEOUT, client.chat(&text, &session_id)).await
    {
        Ok(Ok(reply)) => {
            let renewed = reply
                .session_id
                .filter(|id| !id.is_empty() && *id != session_id);
            if let Some(new_session) = renewed {
                tracing::info!(%new_session, "backend rotated the chat session");
                state.with_mut(|st| st.session_id = new_session);
                persist_session(&state);
            }
            ChatMessage::now(ChatRole::Assistant, reply.agent_response)
        }
        Ok(Err(err)) => {
            tracing::warn!(%err, "chat request failed");
            ChatMessage::now(
                ChatRole::Assistant,
                "Sorry, I could not reach the rate desk just now. Please try again in a moment.",
            )
        }
        Err(_) => {
            tracing::warn!("chat request timed out");
            ChatMessage::now(
                ChatRole::Assistant,
                "The assistant took too long to respond. Please try again.",
            )
        }
    };

    state.with_mut(|st| st.messages.push(reply_message));
    chat_request.set(None);
}

/// Runs the queued rate search and stores the outcome on the app state.
async fn deliver_rates(
    mut state: Signal<AppState>,
    mut rate_request: Signal<Option<SearchCriteria>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(criteria) = rate_request() else {
        return;
    };

    let Ok(client) = AhsClient::new() else {
        rate_request.set(None);
        push_toast(
            toasts,
            ToastKind::Error,
            "Could not initialise the API client. Check AHS_API_BASE.",
        );
        return;
    };

    match fetch_rates(&client, &criteria).await {
        Ok(response) => {
            let count = response.rates.len();
            state.with_mut(|st| st.rate_results = Some(response));
            if count == 0 {
                push_toast(toasts, ToastKind::Warning, "No rates found for that lane.");
            } else {
                let plural = if count == 1 { "" } else { "s" };
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Found {count} rate{plural}."),
                );
            }
        }
        Err(err) => {
            tracing::warn!(%err, "rate search failed");
            push_toast(toasts, ToastKind::Error, format!("Rate search failed: {err}"));
        }
    }
    rate_request.set(None);
}

/// Tries the typed `/rates` endpoint first and falls back to asking the
/// assistant, extracting whatever structure its reply carries.
async fn fetch_rates(
    client: &AhsClient,
    criteria: &SearchCriteria,
) -> Result<RateResponse, AhsClientError> {
    let filters = RateFilters {
        origin: Some(criteria.origin.clone()),
        destination: Some(criteria.destination.clone()),
        container_type: Some(criteria.container_type.clone()).filter(|c| !c.is_empty()),
    };

    match client.search_rates(&filters).await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::debug!(%err, "typed rate endpoint unavailable, asking the assistant");
            let prompt = format!(
                "Show me rates from {} to {} for {} container",
                criteria.origin, criteria.destination, criteria.container_type
            );
            let reply = client.chat(&prompt, RATE_SEARCH_SESSION).await?;
            let text = reply.agent_response;

            if is_rate_response(&text) {
                Ok(parse_rate_response(&text).unwrap_or_default())
            } else if let Some(rates) = parse_plain_text_rates(&text, FieldGate::Loose) {
                Ok(RateResponse {
                    message: format!(
                        "Found {} shipping rates from {} to {}",
                        rates.len(),
                        criteria.origin,
                        criteria.destination
                    ),
                    rates,
                    search_criteria: Some(criteria.clone()),
                    ..Default::default()
                })
            } else {
                // Prose only. Surface the assistant's wording as a zero-rate
                // response so the page can explain what happened.
                Ok(RateResponse {
                    message: text,
                    search_criteria: Some(criteria.clone()),
                    ..Default::default()
                })
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Chat() -> Element {
    rsx! { Shell { ChatPage {} } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
