//! Resume-token flow: minting resume links and turning them back into
//! live sessions.

pub mod notifier;
pub mod service;

pub use notifier::ResumeNotifier;
pub use service::{ResumeService, ResumedJourney};

#[cfg(test)]
mod tests;
