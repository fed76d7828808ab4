//! Console front end: the turn controller that drives a session over any
//! reader/writer pair, and the text board renderer.

mod app;
pub mod board_view;

pub use app::{App, SessionSummary};
