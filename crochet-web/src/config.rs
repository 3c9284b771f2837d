use crochet_common::config::CONFIG_BLOCK_ID;
use crochet_common::SiteConfig;

use crate::{dom, logging};

/// Site configuration from the page's `#site-config` block, or defaults.
///
/// Installs logging at the configured level; a broken block is reported once
/// the subscriber is in place.
pub fn load_and_init_logging(document: &web_sys_x::Document) -> SiteConfig {
    let text = dom::text_by_id(document, CONFIG_BLOCK_ID);
    SiteConfig::load_with(text.as_deref(), |config| logging::init(&config.log_level))
}
