//! Page components for the card.

mod home;

pub use home::Home;
