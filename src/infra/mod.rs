pub mod api;

#[allow(unused_imports)]
pub use api::{AhsClient, AhsClientError, ChatReply, HealthStatus, RateFilters};
