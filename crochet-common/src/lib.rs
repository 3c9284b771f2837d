//! Page logic for the crochet catalog that does not touch the DOM.
//!
//! Everything here builds and tests natively; `crochet-web` binds it to the
//! browser.

pub mod config;
pub mod feedback;
pub mod filter;
pub mod markup;
pub mod modal;
pub mod nav;
pub mod recipe;
pub mod share;

pub use config::{ConfigError, Labels, SiteConfig};
pub use feedback::FeedbackPulse;
pub use filter::CategoryFilter;
pub use modal::{
    DisplayedContent, FocusError, ModalContent, ModalController, ModalSlots, ModalView,
};
pub use nav::NavMenu;
pub use recipe::{RecipeError, RecipeRecord};
pub use share::WhatsAppLink;
