pub mod charts;
pub mod controller;
pub mod slides;
pub mod state;
pub mod theme;

pub use controller::Presenter;
pub use slides::{Deck, SlideBody, SlideDescriptor};
pub use state::PresentationState;
pub use theme::Theme;
