//! Reusable UI components shared across pages.

pub mod toast_host;
