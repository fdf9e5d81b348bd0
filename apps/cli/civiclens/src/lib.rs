// Library exports for testing
// The binary (main.rs) imports these as well

pub mod app;
pub mod busy;
pub mod chrome;
pub mod cli;
pub mod error;
pub mod logger;
pub mod oneshot;
pub mod pane;
pub mod session;
pub mod startup;

#[cfg(test)]
mod tests;
