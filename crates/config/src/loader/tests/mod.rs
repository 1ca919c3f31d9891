//! Tests for environment and `.env` loading.
//!
//! Every test that touches process-global state (environment, working
//! directory) is `#[serial]` and scopes its changes with `temp_env`.
