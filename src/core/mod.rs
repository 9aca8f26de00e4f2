// src/core/mod.rs

pub mod browser;
pub mod html;
pub mod sanitize;

pub use browser::{ChromeSession, NavigateError, Session};
