//! Recipe preview modal
//!
//! The controller owns the modal's state (open/closed, what is displayed, and
//! which element had focus before opening) and drives a [`ModalView`] that
//! performs the actual DOM writes. Two states exist:
//!
//! - `Closed` (initial) -> `Open` via [`ModalController::open`]
//! - `Open` -> `Closed` via [`ModalController::close`], Escape, or a click on
//!   the overlay itself
//!
//! Opening while already open re-populates the content and keeps the focus
//! target recorded by the first open.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Labels;
use crate::markup;
use crate::share::{self, WhatsAppLink};

/// Key that dismisses the modal.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Error, Debug)]
#[error("Failed to restore focus: {0}")]
pub struct FocusError(pub String);

/// Request to open the modal. Every field is optional in effect: an empty
/// title, no recipe and no share text all have defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub image_src: String,
    pub title: String,
    /// HTML fragment for the recipe pane
    pub recipe_html: Option<String>,
    /// Plain text for the share link
    pub share_text: Option<String>,
}

/// Resolved values written into the modal's slots on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSlots<'a> {
    pub image_src: &'a str,
    pub image_alt: &'a str,
    pub title: &'a str,
    pub recipe_html: &'a str,
    pub share_href: &'a str,
}

/// DOM side of the modal.
pub trait ModalView {
    /// Handle to a focusable element
    type Focus;

    /// Element that currently has keyboard focus, if any.
    fn focused(&self) -> Option<Self::Focus>;

    /// Write image, title, recipe and share link.
    fn render(&mut self, slots: &ModalSlots<'_>);

    /// Empty the image, title and recipe slots.
    fn clear(&mut self);

    /// Toggle the visibility attribute. The modal stays in the layout.
    fn set_visible(&mut self, visible: bool);

    /// Lock or unlock scrolling of the page behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);

    fn focus_close_control(&mut self);

    /// Give focus back to an element recorded earlier. It may have been
    /// removed from the page since.
    fn restore_focus(&mut self, target: &Self::Focus) -> Result<(), FocusError>;

    /// Whether `target` is inside the modal's subtree.
    fn contains(&self, target: &Self::Focus) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalPhase {
    Closed,
    Open,
}

/// What the modal currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedContent {
    pub title: String,
    pub recipe_html: String,
    pub share_message: String,
}

struct ModalState<F> {
    phase: ModalPhase,
    content: Option<DisplayedContent>,
    prior_focus: Option<F>,
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            content: None,
            prior_focus: None,
        }
    }
}

pub struct ModalController<V: ModalView> {
    view: V,
    state: ModalState<V::Focus>,
    share: WhatsAppLink,
    labels: Labels,
}

impl<V: ModalView> ModalController<V> {
    /// Controller for a modal that starts closed.
    pub fn new(view: V, share: WhatsAppLink, labels: Labels) -> Self {
        Self {
            view,
            state: ModalState::default(),
            share,
            labels,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_open(&self) -> bool {
        self.state.phase == ModalPhase::Open
    }

    pub fn content(&self) -> Option<&DisplayedContent> {
        self.state.content.as_ref()
    }

    /// Plain text of the displayed recipe for the clipboard. Empty when closed.
    pub fn copy_text(&self) -> String {
        self.state
            .content
            .as_ref()
            .map(|c| markup::strip_tags(&c.recipe_html))
            .unwrap_or_default()
    }

    pub fn open(&mut self, content: ModalContent) {
        if self.state.phase == ModalPhase::Closed {
            self.state.prior_focus = self.view.focused();
        }

        let ModalContent {
            image_src,
            title,
            recipe_html,
            share_text,
        } = content;
        let recipe_html = recipe_html.unwrap_or_else(|| self.labels.recipe_unavailable.clone());
        let share_message = share_text.unwrap_or_else(|| share::interest_message(&title));
        let share_href = self.share.url(&share_message);
        let image_alt = if title.is_empty() {
            self.labels.image_alt.as_str()
        } else {
            title.as_str()
        };

        self.view.render(&ModalSlots {
            image_src: &image_src,
            image_alt,
            title: &title,
            recipe_html: &recipe_html,
            share_href: &share_href,
        });
        self.view.set_visible(true);
        self.state.phase = ModalPhase::Open;
        self.view.focus_close_control();
        self.view.set_scroll_locked(true);

        info!("Opened recipe modal for {title:?}");
        self.state.content = Some(DisplayedContent {
            title,
            recipe_html,
            share_message,
        });
    }

    /// Hide and clear the modal and give focus back. Safe to call when closed.
    pub fn close(&mut self) {
        self.view.set_visible(false);
        self.state.phase = ModalPhase::Closed;
        self.view.clear();
        self.state.content = None;
        self.view.set_scroll_locked(false);

        if let Some(target) = self.state.prior_focus.take() {
            if let Err(e) = self.view.restore_focus(&target) {
                debug!("{e}");
            }
        }
    }

    /// Keyboard handler. Returns true if the key closed the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Click on the modal element. Only clicks whose target is the overlay
    /// itself, not the panel or anything inside it, close the modal.
    pub fn handle_overlay_click(&mut self, target_is_overlay: bool) -> bool {
        if target_is_overlay {
            self.close();
        }
        target_is_overlay
    }

    /// Focus landed on `target`. While open, focus outside the modal is sent
    /// back to the close control. Returns true if focus was redirected.
    pub fn handle_focus(&mut self, target: &V::Focus) -> bool {
        if !self.is_open() || self.view.contains(target) {
            return false;
        }
        self.view.focus_close_control();
        true
    }
}
