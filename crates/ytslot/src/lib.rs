//! Embedded YouTube players for a static site.
//!
//! # Architecture
//!
//! - `video_id`, `embed` — pure string handling. NO web_sys.
//! - `dom` — the capability traits the page behaviors are written against.
//! - `player_host`, `behaviors`, `bootstrap` — DOM lifecycle, generic over `dom`.
//! - `platform` — `browser` (web_sys + wasm entry points) and `memory`
//!   (in-memory element tree for native tests, behind `memory-dom`).

pub mod behaviors;
pub mod bootstrap;
pub mod dom;
pub mod embed;
pub mod markup;
pub mod platform;
pub mod player_host;
pub mod video_id;

pub use bootstrap::BootReport;
pub use embed::{EmbedConfig, build_url};
pub use markup::Markup;
pub use player_host::PlayerHost;
pub use video_id::extract;
