//! Terminal dashboard for the personal finance statistics of a chat-platform
//! user: balance, monthly income/expense, weekly trend, category breakdowns
//! and transaction history, fetched from the statistics backend.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod logging;
pub mod state;
pub mod ui;
pub mod views;
