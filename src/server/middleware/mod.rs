//! Request authentication and per-route role guards.

pub mod auth;
