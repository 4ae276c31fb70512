//! Platform-independent page logic: content, section tracking, glow state
//! and markup. Nothing in here touches browser APIs, so host tests can
//! include these files directly.

pub mod config;
pub mod content;
pub mod glow;
pub mod markup;
pub mod sections;
pub mod state;

pub use config::TrackerConfig;
pub use glow::TimerTicket;
pub use state::PageState;
