//! Card click -> modal -> close, driven through a recording view.

use std::collections::HashMap;

use crochet_common::modal::ESCAPE_KEY;
use crochet_common::{
    recipe, share, CategoryFilter, FocusError, ModalContent, ModalController, ModalSlots,
    ModalView, SiteConfig, WhatsAppLink,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Focus {
    Card(usize),
    Close,
}

#[derive(Default)]
struct RecordingView {
    focused: Option<Focus>,
    visible: bool,
    title: String,
    recipe_html: String,
    share_href: String,
}

impl ModalView for RecordingView {
    type Focus = Focus;

    fn focused(&self) -> Option<Focus> {
        self.focused.clone()
    }

    fn render(&mut self, slots: &ModalSlots<'_>) {
        self.title = slots.title.to_string();
        self.recipe_html = slots.recipe_html.to_string();
        self.share_href = slots.share_href.to_string();
    }

    fn clear(&mut self) {
        self.title.clear();
        self.recipe_html.clear();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scroll_locked(&mut self, _locked: bool) {}

    fn focus_close_control(&mut self) {
        self.focused = Some(Focus::Close);
    }

    fn restore_focus(&mut self, target: &Focus) -> Result<(), FocusError> {
        self.focused = Some(target.clone());
        Ok(())
    }

    fn contains(&self, target: &Focus) -> bool {
        *target == Focus::Close
    }
}

struct Card {
    title: &'static str,
    category: &'static str,
    recipe_id: Option<&'static str>,
}

const CARDS: [Card; 4] = [
    Card {
        title: "Amigurumi Bear",
        category: "amigurumi",
        recipe_id: Some("x"),
    },
    Card {
        title: "Tapete",
        category: "casa",
        recipe_id: Some("broken"),
    },
    Card {
        title: "Bolsa",
        category: "acessorios",
        recipe_id: None,
    },
    Card {
        title: "Coelho",
        category: "amigurumi",
        recipe_id: Some("missing"),
    },
];

fn blocks() -> HashMap<String, String> {
    HashMap::from([
        (
            "recipe-x".to_string(),
            r#"{"title":"Amigurumi Bear","recipe":"<p>Cotton yarn</p>"}"#.to_string(),
        ),
        ("recipe-broken".to_string(), "{not json".to_string()),
    ])
}

/// What a click on a card image does.
fn click_card_image(
    modal: &mut ModalController<RecordingView>,
    config: &SiteConfig,
    blocks: &HashMap<String, String>,
    card: &Card,
) {
    let record = recipe::lookup(card.recipe_id, |id| blocks.get(id).cloned());
    let share_text = share::card_share_message(record.as_ref(), card.title, config.excerpt_chars);
    modal.open(ModalContent {
        image_src: format!("img/{}.jpg", card.title),
        title: card.title.to_string(),
        recipe_html: record.map(|r| r.recipe),
        share_text: Some(share_text),
    });
}

fn controller(config: &SiteConfig) -> ModalController<RecordingView> {
    ModalController::new(
        RecordingView::default(),
        WhatsAppLink::new(config.whatsapp_number.clone()),
        config.labels.clone(),
    )
}

fn decoded_share_text(href: &str) -> String {
    let (_, text) = href.split_once("?text=").expect("share href has text");
    urlencoding::decode(text).expect("valid encoding").into_owned()
}

#[test]
fn card_with_recipe_fills_modal() {
    let config = SiteConfig::default();
    let blocks = blocks();
    let mut modal = controller(&config);

    click_card_image(&mut modal, &config, &blocks, &CARDS[0]);

    assert_eq!(modal.view().title, "Amigurumi Bear");
    let content = modal.content().expect("modal is open");
    assert_eq!(content.recipe_html, "<p>Cotton yarn</p>");
    assert_eq!(content.share_message, "Amigurumi Bear - Cotton yarn...");
    assert_eq!(
        decoded_share_text(&modal.view().share_href),
        "Amigurumi Bear - Cotton yarn..."
    );
    assert_eq!(modal.copy_text(), "Cotton yarn");
}

#[test]
fn cards_without_usable_recipe_show_placeholder() {
    let config = SiteConfig::default();
    let blocks = blocks();

    for card in &CARDS[1..] {
        let mut modal = controller(&config);
        click_card_image(&mut modal, &config, &blocks, card);

        assert_eq!(modal.view().title, card.title);
        assert_eq!(modal.view().recipe_html, config.labels.recipe_unavailable);
        assert_eq!(
            decoded_share_text(&modal.view().share_href),
            format!("{} - Tenho interesse", card.title)
        );
        assert_eq!(modal.copy_text(), "Receita não disponível para este item.");
    }
}

#[test]
fn open_then_close_restores_focus_for_every_card() {
    let config = SiteConfig::default();
    let blocks = blocks();

    for (i, card) in CARDS.iter().enumerate() {
        let view = RecordingView {
            focused: Some(Focus::Card(i)),
            ..Default::default()
        };
        let mut modal = ModalController::new(
            view,
            WhatsAppLink::new(config.whatsapp_number.clone()),
            config.labels.clone(),
        );

        click_card_image(&mut modal, &config, &blocks, card);
        assert!(modal.view().visible);
        assert_eq!(modal.view().focused, Some(Focus::Close));

        assert!(modal.handle_key(ESCAPE_KEY));
        assert!(!modal.view().visible);
        assert_eq!(modal.view().focused, Some(Focus::Card(i)));
        assert!(!modal.handle_key(ESCAPE_KEY));
    }
}

#[test]
fn filter_matches_card_categories() {
    let categories = CARDS.iter().map(|c| Some(c.category));
    let visible = CategoryFilter::from_attr(Some("amigurumi")).visibility(categories);
    assert_eq!(visible, vec![true, false, false, true]);
}
