/// Filter value that matches every card.
pub const ALL: &str = "all";

/// Category selected by a filter button's `data-filter` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// A missing filter value only matches cards with an empty category,
    /// the same as comparing against an absent attribute.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some(ALL) => CategoryFilter::All,
            Some(category) => CategoryFilter::Category(category.to_string()),
            None => CategoryFilter::Category(String::new()),
        }
    }

    /// Whether a card with the given `data-category` stays visible.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => category.unwrap_or_default() == wanted.as_str(),
        }
    }

    /// Visibility for each card category, in order.
    pub fn visibility<'a, I>(&self, categories: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        categories.into_iter().map(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Option<&str>; 5] = [
        Some("amigurumi"),
        Some("casa"),
        Some("amigurumi"),
        Some("acessorios"),
        None,
    ];

    #[test]
    fn all_shows_every_card() {
        let filter = CategoryFilter::from_attr(Some("all"));
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.visibility(CARDS).into_iter().all(|v| v));
    }

    #[test]
    fn category_shows_exact_matches() {
        let filter = CategoryFilter::from_attr(Some("amigurumi"));
        assert_eq!(
            filter.visibility(CARDS),
            vec![true, false, true, false, false]
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let filter = CategoryFilter::from_attr(Some("Casa"));
        assert!(!filter.matches(Some("casa")));
    }

    #[test]
    fn unknown_category_hides_everything() {
        let filter = CategoryFilter::from_attr(Some("roupas"));
        assert!(filter.visibility(CARDS).into_iter().all(|v| !v));
    }
}
