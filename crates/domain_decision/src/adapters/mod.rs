//! Adapters wiring external capabilities into the decision domain

mod estonian;

pub use estonian::EstonianAgeSource;
