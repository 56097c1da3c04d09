//! Page-load behaviors. Each one scans the document for its markers and is
//! safe to run more than once.

pub mod autoplay;
pub mod background;
pub mod footer;
pub mod hover;

pub use autoplay::fill_autoplay_panels;
pub use background::install_background;
pub use footer::stamp_footer_year;
pub use hover::{HoverState, PreviewCard, wire_hover_previews};
