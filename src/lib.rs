//! maestera - musician onboarding forms
//!
//! Validates multi-step onboarding drafts, assembles submission payloads and
//! forwards them to a spreadsheet-backed script endpoint.

pub mod config;
pub mod error;
pub mod form;
pub mod proxy;
pub mod server;
pub mod submit;
pub mod types;
