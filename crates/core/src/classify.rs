//! Ordered keyword rules: the first rule with a trigger present in the query wins.
//!
//! Matching is plain substring search over the lower-cased query. A query that
//! hits triggers from several rules resolves to the earliest rule, regardless of
//! how many triggers each rule matched.

/// Lower-cases a query. This is the only normalization applied before matching.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// `normalized` must already be lower-cased; `triggers` are compared as given.
pub fn contains_any<S: AsRef<str>>(normalized: &str, triggers: &[S]) -> bool {
    triggers.iter().any(|trigger| normalized.contains(trigger.as_ref()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordRule<C> {
    pub category: C,
    pub triggers: Vec<String>,
}

impl<C> KeywordRule<C> {
    pub fn new(category: C, triggers: &[&str]) -> Self {
        Self { category, triggers: triggers.iter().map(|trigger| trigger.to_lowercase()).collect() }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        contains_any(normalized, &self.triggers)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet<C> {
    rules: Vec<KeywordRule<C>>,
    default: C,
}

impl<C: Copy> RuleSet<C> {
    pub fn new(rules: Vec<KeywordRule<C>>, default: C) -> Self {
        Self { rules, default }
    }

    pub fn default_category(&self) -> C {
        self.default
    }

    /// First matching rule's category, if any rule matched.
    pub fn first_match(&self, query: &str) -> Option<C> {
        let normalized = normalize_query(query);
        self.rules.iter().find(|rule| rule.matches(&normalized)).map(|rule| rule.category)
    }

    pub fn classify(&self, query: &str) -> C {
        self.first_match(query).unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::{contains_any, normalize_query, KeywordRule, RuleSet};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Topic {
        Billing,
        Shipping,
        Other,
    }

    fn rules() -> RuleSet<Topic> {
        RuleSet::new(
            vec![
                KeywordRule::new(Topic::Billing, &["invoice", "Charge"]),
                KeywordRule::new(Topic::Shipping, &["ship", "delivery", "invoice copy"]),
            ],
            Topic::Other,
        )
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(rules().classify("Why was I CHARGED twice?"), Topic::Billing);
        assert_eq!(rules().classify("Delivery is late"), Topic::Shipping);
    }

    #[test]
    fn earlier_rule_wins_over_more_specific_later_rule() {
        assert_eq!(rules().classify("send an invoice copy with the delivery"), Topic::Billing);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(rules().classify("hello"), Topic::Other);
        assert_eq!(rules().classify(""), Topic::Other);
        assert_eq!(rules().first_match("hello"), None);
        assert_eq!(rules().default_category(), Topic::Other);
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        assert_eq!(rules().classify("relationship advice"), Topic::Shipping);
    }

    #[test]
    fn contains_any_handles_empty_trigger_list() {
        let empty: [&str; 0] = [];
        assert!(!contains_any("anything", &empty));
        assert!(contains_any(&normalize_query("Track ORDER"), &["order"]));
    }
}
