//! Concrete implementations of the [`crate::services`] traits.

pub mod alphavantage;
pub mod openai;
pub mod pdf;
pub mod sample;
