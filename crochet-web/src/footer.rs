//! Footer year and the floating WhatsApp contact button

use crochet_common::{SiteConfig, WhatsAppLink};
use tracing::debug;

const YEAR_ID: &str = "year";
const CONTACT_ID: &str = "whatsapp-float";

pub fn set_year(document: &web_sys_x::Document) {
    if let Some(year) = document.get_element_by_id(YEAR_ID) {
        let current = js_sys_x::Date::new_0().get_full_year();
        year.set_text_content(Some(&current.to_string()));
    }
}

/// Point the floating button at the configured number with the general
/// contact message. Left as authored in the page while no real number is set.
pub fn set_contact_link(document: &web_sys_x::Document, config: &SiteConfig) {
    let Some(button) = document.get_element_by_id(CONTACT_ID) else {
        return;
    };
    let link = WhatsAppLink::new(config.whatsapp_number.clone());
    if !link.is_configured() {
        debug!("No WhatsApp number configured, keeping the page's contact link");
        return;
    }
    let _ = button.set_attribute("href", &link.url(&config.contact_message));
}
