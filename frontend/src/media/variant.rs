//! Priority-ordered choice between pre-authored variants.
//!
//! Rules are checked in the order they were given and the first condition
//! that holds wins, so a device fingerprint listed before a generic
//! breakpoint always takes precedence over it. When nothing holds the
//! default is returned.

use crate::media::condition::{Condition, Viewport};
use crate::media::error::MediaError;

#[derive(Debug, Clone, PartialEq)]
pub struct VariantSelector<V> {
    rules: Vec<(Condition, V)>,
    default: V,
}

impl<V> VariantSelector<V> {
    pub fn new(default: V) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Builds a selector from `(condition, variant)` pairs in priority order.
    pub fn from_rules<I, S>(rules: I, default: V) -> Result<Self, MediaError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        rules
            .into_iter()
            .try_fold(Self::new(default), |selector, (condition, variant)| {
                selector.try_when(condition.as_ref(), variant)
            })
    }

    /// Appends a rule with lower priority than every rule already present.
    pub fn try_when(mut self, condition: &str, variant: V) -> Result<Self, MediaError> {
        self.rules.push((Condition::parse(condition)?, variant));
        Ok(self)
    }

    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.rules.iter().map(|(condition, _)| condition)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn default_variant(&self) -> &V {
        &self.default
    }

    /// Returns the variant of the first rule for which `holds` is true.
    pub fn select<F>(&self, mut holds: F) -> &V
    where
        F: FnMut(&Condition) -> bool,
    {
        self.rules
            .iter()
            .find(|(condition, _)| holds(condition))
            .map_or(&self.default, |(_, variant)| variant)
    }

    /// Selects from match states aligned with the rules by position.
    /// Missing states count as "no match".
    pub fn select_with(&self, states: &[bool]) -> &V {
        self.rules
            .iter()
            .zip(states.iter().copied().chain(std::iter::repeat(false)))
            .find(|(_, holds)| *holds)
            .map_or(&self.default, |((_, variant), _)| variant)
    }

    pub fn select_for(&self, viewport: &Viewport) -> &V {
        self.select(|condition| condition.matches(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Layout {
        Device,
        Mobile,
        Desktop,
    }

    fn layouts() -> VariantSelector<Layout> {
        VariantSelector::from_rules(
            [
                ("(width: 414px) and (height: 896px)", Layout::Device),
                ("(max-width: 640px)", Layout::Mobile),
            ],
            Layout::Desktop,
        )
        .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let selector = layouts();
        // Both conditions hold on this viewport.
        assert_eq!(*selector.select_for(&Viewport::new(414.0, 896.0)), Layout::Device);
        assert_eq!(*selector.select_with(&[true, true]), Layout::Device);
    }

    #[test]
    fn test_falls_through_in_order() {
        let selector = layouts();
        assert_eq!(*selector.select_for(&Viewport::new(414.0, 800.0)), Layout::Mobile);
        assert_eq!(*selector.select_with(&[false, true]), Layout::Mobile);
    }

    #[test]
    fn test_default_when_nothing_holds() {
        let selector = layouts();
        assert_eq!(*selector.select_for(&Viewport::new(1280.0, 800.0)), Layout::Desktop);
        assert_eq!(*selector.select_with(&[false, false]), Layout::Desktop);
        assert_eq!(*selector.select_with(&[]), Layout::Desktop);
    }

    #[test]
    fn test_reversed_order_changes_winner() {
        let selector = VariantSelector::from_rules(
            [
                ("(max-width: 640px)", Layout::Mobile),
                ("(width: 414px) and (height: 896px)", Layout::Device),
            ],
            Layout::Desktop,
        )
        .unwrap();
        assert_eq!(*selector.select_for(&Viewport::new(414.0, 896.0)), Layout::Mobile);
    }

    #[test]
    fn test_empty_selector_returns_default() {
        let selector: VariantSelector<&str> = VariantSelector::new("only");
        assert!(selector.is_empty());
        assert_eq!(*selector.select(|_| true), "only");
    }

    #[test]
    fn test_invalid_rule_is_rejected() {
        let err = VariantSelector::from_rules([("(max-width: 640px)", 1), ("(max-width)", 2)], 0)
            .unwrap_err();
        assert!(matches!(err, MediaError::Descriptor { .. }));
    }

    #[test]
    fn test_select_visits_in_priority_order() {
        let selector = layouts();
        let mut seen = Vec::new();
        selector.select(|condition| {
            seen.push(condition.as_str().to_string());
            false
        });
        assert_eq!(
            seen,
            vec!["(width: 414px) and (height: 896px)", "(max-width: 640px)"]
        );
        assert_eq!(selector.len(), 2);
        assert_eq!(*selector.default_variant(), Layout::Desktop);
    }
}
