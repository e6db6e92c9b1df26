//! Pulse Core - Survey Domain
//!
//! Survey definitions and the progression state machine for the Pulse
//! survey application. This crate is pure logic: no I/O, no async, no
//! HTTP. The web node (`pulse-web`) owns sessions, cookies, and rendering.
//!
//! # Architecture
//!
//! - **Survey**: immutable survey/question/choice definitions and the
//!   recorded [`Answer`] shape
//! - **Catalog**: read-only named collection of surveys, loaded once at
//!   startup and safe to share across request handlers
//! - **Progress**: the decision logic that keeps visitors answering
//!   questions strictly in order and routes finished visitors to the
//!   terminus

mod catalog;
mod error;
mod progress;
mod survey;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use progress::{advance, gate, Advance, Gate};
pub use survey::{Answer, Choice, Question, Survey};
