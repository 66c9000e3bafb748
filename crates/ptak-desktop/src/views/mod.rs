//! Top-level screens

mod home;
mod unavailable;

pub use home::Home;
pub use unavailable::Unavailable;
