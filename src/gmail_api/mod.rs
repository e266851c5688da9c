//! Gmail API module split into logical submodules
//!
//! This module provides the Gmail API functionality organized into:
//! - auth: Credential loading, token cache lookup, and the consent flow
//! - send: Submitting an encoded message to the send endpoint

pub mod auth;
pub mod send;

// Re-export commonly used functions
pub use auth::{load_client_secret, obtain_token, StdinCodeProvider};
pub use send::send_message;
