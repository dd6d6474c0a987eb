//! Screens

mod home;
mod results;

pub use home::HomePage;
pub use results::ResultsPage;
