use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Element id of the optional JSON block overriding the defaults.
pub const CONFIG_BLOCK_ID: &str = "site-config";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_whatsapp_number() -> String {
    "5542999114157".to_string()
}

fn default_contact_message() -> String {
    "Olá, tenho interesse nos produtos de crochê".to_string()
}

fn default_scroll_offset() -> f64 {
    70.0
}

fn default_excerpt_chars() -> usize {
    120
}

fn default_copy_feedback_ms() -> u32 {
    1800
}

fn default_log_level() -> String {
    "info".to_string()
}

/// User-visible strings. The page is in Portuguese.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Copy button text at rest
    pub copy_idle: String,
    /// Copy button text right after a successful copy
    pub copy_done: String,
    /// Alt text for the modal image when the card has no title
    pub image_alt: String,
    /// Recipe pane content for cards without a recipe
    pub recipe_unavailable: String,
    pub copy_failed_alert: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            copy_idle: "Copiar receita".to_string(),
            copy_done: "Copiado!".to_string(),
            image_alt: "Imagem do produto".to_string(),
            recipe_unavailable: "<p><em>Receita não disponível para este item.</em></p>"
                .to_string(),
            copy_failed_alert:
                "Não foi possível copiar automaticamente. Selecione e copie manualmente."
                    .to_string(),
        }
    }
}

/// Site configuration, embedded in the page as JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// WhatsApp recipient for every share link
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    /// Message behind the floating contact button
    #[serde(default = "default_contact_message")]
    pub contact_message: String,
    /// Height of the fixed header, in pixels, kept clear when scrolling to anchors
    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: f64,
    /// Characters of recipe text included in a card's share message
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
    /// How long the copy button shows its confirmation label
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub labels: Labels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            contact_message: default_contact_message(),
            scroll_offset: default_scroll_offset(),
            excerpt_chars: default_excerpt_chars(),
            copy_feedback_ms: default_copy_feedback_ms(),
            log_level: default_log_level(),
            labels: Labels::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Config from the page's block text. An absent or blank block gives the
    /// defaults.
    pub fn from_block(text: Option<&str>) -> Result<Self, ConfigError> {
        match text.filter(|t| !t.trim().is_empty()) {
            Some(text) => Self::from_json(text),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the config and hand it to `install_logging` before reporting
    /// an invalid block, so the warning reaches the subscriber configured
    /// from the result. Invalid blocks fall back to the defaults.
    pub fn load_with<F>(text: Option<&str>, install_logging: F) -> Self
    where
        F: FnOnce(&SiteConfig),
    {
        let (config, error) = match Self::from_block(text) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        install_logging(&config);
        if let Some(e) = error {
            warn!("{e}, using defaults");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log output captured from a scoped subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn load_capturing(text: Option<&str>) -> (SiteConfig, String) {
        let logs = CapturedLogs::default();
        let mut guard = None;
        let config = SiteConfig::load_with(text, |config| {
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(
                    config
                        .log_level
                        .parse::<tracing_subscriber::filter::LevelFilter>()
                        .unwrap(),
                )
                .with_ansi(false)
                .without_time()
                .finish();
            guard = Some(tracing::subscriber::set_default(subscriber));
        });
        drop(guard);
        (config, logs.contents())
    }

    #[test]
    fn missing_block_uses_defaults() {
        let config = SiteConfig::from_block(None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.copy_feedback_ms, 1800);
        assert_eq!(config.scroll_offset, 70.0);
        assert_eq!(config.labels.copy_done, "Copiado!");
        assert_eq!(SiteConfig::from_block(Some("   ")).unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_block(Some(
            r#"{"whatsapp_number":"5511999990000","labels":{"copy_done":"Copied!"}}"#,
        ))
        .unwrap();
        assert_eq!(config.whatsapp_number, "5511999990000");
        assert_eq!(config.labels.copy_done, "Copied!");
        assert_eq!(config.labels.copy_idle, "Copiar receita");
        assert_eq!(config.excerpt_chars, 120);
    }

    #[test]
    fn from_json_reports_errors() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"scroll_offset":"high"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(SiteConfig::from_block(Some("{oops")).is_err());
    }

    #[test]
    fn invalid_block_warns_after_logging_is_installed() {
        let (config, logs) = load_capturing(Some("{oops"));
        assert_eq!(config, SiteConfig::default());
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Invalid site config"), "logs: {logs}");
        assert!(logs.contains("using defaults"), "logs: {logs}");
    }

    #[test]
    fn valid_block_configures_logging_quietly() {
        let (config, logs) = load_capturing(Some(r#"{"log_level":"warn","scroll_offset":90}"#));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.scroll_offset, 90.0);
        assert!(logs.is_empty(), "logs: {logs}");
    }
}
