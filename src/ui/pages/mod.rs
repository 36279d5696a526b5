pub mod about;
pub mod chat;
pub mod home;
pub mod rates;

pub use about::AboutPage;
pub use chat::ChatPage;
pub use home::HomePage;
pub use rates::RatesPage;
