use crate::models::runs::RunRecord;

/// Transport-level sentinel meaning "no facet filter".
pub const FILTER_ALL: &str = "Todas";

/// Facet filters for one leaderboard view. `None` means unfiltered; the
/// sentinel never makes it past the constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardFilter {
    pub category: Option<String>,
    pub platform: Option<String>,
}

impl LeaderboardFilter {
    pub fn from_params(category: Option<String>, platform: Option<String>) -> Self {
        Self {
            category: category.filter(|value| !is_all(value)),
            platform: platform.filter(|value| !is_all(value)),
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self::from_params(Some(category.into()), None)
    }

    /// Exact match on the display names; an unknown value simply matches
    /// nothing.
    pub fn matches(&self, record: &RunRecord) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| record.category_name == category)
            && self
                .platform
                .as_deref()
                .is_none_or(|platform| record.platform_name == platform)
    }
}

fn is_all(value: &str) -> bool {
    value.is_empty() || value == FILTER_ALL || value.eq_ignore_ascii_case("all")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_values_mean_unfiltered() {
        let filter = LeaderboardFilter::from_params(
            Some(FILTER_ALL.to_owned()),
            Some(String::new()),
        );
        assert_eq!(filter, LeaderboardFilter::default());

        let filter = LeaderboardFilter::from_params(Some("all".to_owned()), None);
        assert_eq!(filter.category, None);
    }

    #[test]
    fn real_values_survive() {
        let filter =
            LeaderboardFilter::from_params(Some("Any%".to_owned()), Some("PC".to_owned()));
        assert_eq!(filter.category.as_deref(), Some("Any%"));
        assert_eq!(filter.platform.as_deref(), Some("PC"));
    }
}
