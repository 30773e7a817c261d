//! Request handlers

pub mod health;
pub mod auth;
pub mod recommend;
pub mod pest;
pub mod history;
pub mod soil;
