//! # TUI Components
//!
//! Stateless, props-based components. Each receives everything it draws as
//! struct fields and renders into the `Rect` it is given:
//!
//! - `TitleBar`: brand label, position counter and status
//! - `LandingPage`: idle screen shown before the first card
//! - `CardView`: the current card, offset vertically while sliding or dragging
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── landing.rs       (Landing page)
//! └── card_view.rs     (Single card renderer)
//! ```

mod card_view;
mod landing;
mod title_bar;

pub use card_view::CardView;
pub use landing::LandingPage;
pub use title_bar::TitleBar;
