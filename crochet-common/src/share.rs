//! WhatsApp share links and the messages embedded in them

use crate::markup;
use crate::recipe::RecipeRecord;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Number shipped in the page before the owner fills in a real one.
const PLACEHOLDER_NUMBER: &str = "SEUNUMERO";

/// Builds `wa.me` links for a fixed recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl WhatsAppLink {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// False while the number is unset or still the placeholder.
    pub fn is_configured(&self) -> bool {
        let number = self.number.trim();
        !number.is_empty() && number != PLACEHOLDER_NUMBER
    }

    /// `https://wa.me/<number>?text=<message>` with the message percent-encoded.
    pub fn url(&self, message: &str) -> String {
        format!(
            "{WHATSAPP_BASE_URL}/{}?text={}",
            self.number,
            urlencoding::encode(message)
        )
    }
}

/// Message used when the modal is opened without an explicit share text.
pub fn interest_message(title: &str) -> String {
    format!("{title} - Estou interessado(a).")
}

/// Message for a card's share button: the recipe title and an excerpt of its
/// body when a recipe exists, otherwise a short note of interest in the card.
pub fn card_share_message(
    record: Option<&RecipeRecord>,
    card_title: &str,
    excerpt_chars: usize,
) -> String {
    match record {
        Some(record) => format!(
            "{} - {}...",
            record.title,
            markup::excerpt(&record.recipe, excerpt_chars)
        ),
        None => format!("{card_title} - Tenho interesse"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(url: &str) -> String {
        let (_, query) = url.split_once("?text=").unwrap();
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn url_shape() {
        let link = WhatsAppLink::new("5542999114157");
        assert_eq!(
            link.url("Olá, tudo bem?"),
            "https://wa.me/5542999114157?text=Ol%C3%A1%2C%20tudo%20bem%3F"
        );
    }

    #[test]
    fn text_decodes_to_message() {
        let link = WhatsAppLink::new("5542999114157");
        for message in [
            "Amigurumi Bear - Cotton yarn...",
            "Tapete & sousplat #2 (100% algodão)",
            "linha 1\nlinha 2",
            "",
        ] {
            assert_eq!(decoded_text(&link.url(message)), message);
        }
    }

    #[test]
    fn placeholder_number_is_not_configured() {
        assert!(WhatsAppLink::new("5542999114157").is_configured());
        assert!(!WhatsAppLink::new("SEUNUMERO").is_configured());
        assert!(!WhatsAppLink::new(" ").is_configured());
    }

    #[test]
    fn card_message_with_recipe() {
        let record = RecipeRecord {
            title: "Amigurumi Bear".to_string(),
            recipe: "<p>Cotton yarn</p>".to_string(),
        };
        assert_eq!(
            card_share_message(Some(&record), "Urso", 120),
            "Amigurumi Bear - Cotton yarn..."
        );
    }

    #[test]
    fn card_message_truncates_excerpt() {
        let record = RecipeRecord {
            title: "Manta".to_string(),
            recipe: format!("<p>{}</p>", "a".repeat(300)),
        };
        let message = card_share_message(Some(&record), "Manta", 120);
        assert_eq!(message, format!("Manta - {}...", "a".repeat(120)));
    }

    #[test]
    fn card_message_without_recipe() {
        assert_eq!(card_share_message(None, "Bolsa", 120), "Bolsa - Tenho interesse");
    }

    #[test]
    fn interest_fallback() {
        assert_eq!(interest_message("Bolsa"), "Bolsa - Estou interessado(a).");
    }
}
