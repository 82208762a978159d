pub mod checkout_session;
pub mod client;
pub mod restaurant_fetcher;
