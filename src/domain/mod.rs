//! Domain logic for rate extraction and chat state lives here.

pub mod app_state;
pub mod entities;
pub mod extraction;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedSession, DEFAULT_SESSION_ID};
#[allow(unused_imports)]
pub use entities::{ChatMessage, ChatRole, Rate, RateResponse, SearchCriteria, CONTAINER_TYPES};
#[allow(unused_imports)]
pub use extraction::{
    classify_reply, is_rate_response, parse_plain_text_rates, parse_rate_response, ExtractedReply,
    FieldGate, DEFAULT_PREFERRED_CARRIER,
};
