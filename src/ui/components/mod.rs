pub mod chat_message;
pub mod rate_card;
pub mod toast;

#[allow(unused_imports)]
pub use chat_message::ChatBubble;
#[allow(unused_imports)]
pub use rate_card::RateCard;
#[allow(unused_imports)]
pub use toast::{push_toast, Toast, ToastKind, ToastMessage};
