use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Prefix of the element id that holds a card's embedded recipe JSON.
pub const RECIPE_BLOCK_PREFIX: &str = "recipe-";

/// Title and HTML body attached to one product card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    /// HTML fragment rendered into the modal's recipe pane
    pub recipe: String,
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Card has no recipe id")]
    MissingId,
    #[error("No recipe block for id {0}")]
    MissingBlock(String),
    #[error("Invalid recipe JSON for id {id}: {source}")]
    InvalidJson {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Element id of the embedded block for a recipe id.
pub fn block_id(recipe_id: &str) -> String {
    format!("{RECIPE_BLOCK_PREFIX}{recipe_id}")
}

impl RecipeRecord {
    /// Parse the text of a recipe block.
    pub fn from_json(recipe_id: &str, text: &str) -> Result<Self, RecipeError> {
        serde_json::from_str(text).map_err(|source| RecipeError::InvalidJson {
            id: recipe_id.to_string(),
            source,
        })
    }
}

/// Resolve a card's recipe through `fetch_block`, which returns the text of the
/// block with the given element id if it exists.
///
/// Every failure is logged and collapses to `None`.
pub fn lookup<F>(recipe_id: Option<&str>, fetch_block: F) -> Option<RecipeRecord>
where
    F: FnOnce(&str) -> Option<String>,
{
    match try_lookup(recipe_id, fetch_block) {
        Ok(record) => Some(record),
        Err(RecipeError::MissingId) => None,
        Err(e) => {
            warn!("Failed to load recipe: {e}");
            None
        }
    }
}

fn try_lookup<F>(recipe_id: Option<&str>, fetch_block: F) -> Result<RecipeRecord, RecipeError>
where
    F: FnOnce(&str) -> Option<String>,
{
    let id = recipe_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(RecipeError::MissingId)?;
    let text = fetch_block(&block_id(id)).ok_or_else(|| RecipeError::MissingBlock(id.to_string()))?;
    RecipeRecord::from_json(id, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEAR: &str = r#"{"title":"Amigurumi Bear","recipe":"<p>Cotton yarn</p>"}"#;

    #[test]
    fn parses_block() {
        let record = lookup(Some("x"), |id| {
            assert_eq!(id, "recipe-x");
            Some(BEAR.to_string())
        })
        .unwrap();
        assert_eq!(record.title, "Amigurumi Bear");
        assert_eq!(record.recipe, "<p>Cotton yarn</p>");
    }

    #[test]
    fn ignores_extra_fields() {
        let text = r#"{"title":"Cachepot","recipe":"<p>Barbante</p>","price":35}"#;
        let record = RecipeRecord::from_json("c", text).unwrap();
        assert_eq!(record.title, "Cachepot");
    }

    #[test]
    fn missing_id_is_no_record() {
        assert!(lookup(None, |_| panic!("should not fetch")).is_none());
        assert!(lookup(Some("  "), |_| panic!("should not fetch")).is_none());
    }

    #[test]
    fn missing_block_is_no_record() {
        assert!(lookup(Some("nope"), |_| None).is_none());
    }

    #[test]
    fn malformed_json_is_no_record() {
        assert!(lookup(Some("bad"), |_| Some("{title: oops".to_string())).is_none());
        assert!(lookup(Some("partial"), |_| Some(r#"{"title":"Only"}"#.to_string())).is_none());
    }

    #[test]
    fn invalid_json_error_names_the_id() {
        let err = RecipeRecord::from_json("scarf", "[]").unwrap_err();
        assert!(matches!(err, RecipeError::InvalidJson { ref id, .. } if id == "scarf"));
    }
}
