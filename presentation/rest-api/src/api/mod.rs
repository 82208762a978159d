pub mod cart;
pub mod checkout;
pub mod error;
pub mod health;
pub mod restaurant;
pub mod session;
pub mod tags;

#[cfg(test)]
pub mod test_support;
