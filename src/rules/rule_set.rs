#![forbid(unsafe_code)]

//! Ordered collection of skill rules
//!
//! The RuleSet keeps rules in the order they appear in the rule file and
//! guarantees that names are unique.

use crate::rules::SkillRule;
use crate::types::RuleName;

/// Rules keyed by name, iterated in insertion order
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<SkillRule>,
}

impl RuleSet {
    /// Create a new empty RuleSet
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule to the set
    ///
    /// A rule whose name is already present replaces the existing one in
    /// place, the way a later duplicate key wins in a JSON object.
    pub fn insert(&mut self, rule: SkillRule) {
        match self.rules.iter().position(|r| r.name() == rule.name()) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by its name
    pub fn get(&self, name: &RuleName) -> Option<&SkillRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Iterate over the rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SkillRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<SkillRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = SkillRule>>(iter: T) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let set: RuleSet = ["zeta", "alpha", "mid"]
            .into_iter()
            .map(SkillRule::new)
            .collect();

        let names: Vec<&str> = set.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut set = RuleSet::new();
        set.insert(SkillRule::new("first").with_priority("low"));
        set.insert(SkillRule::new("second"));
        set.insert(SkillRule::new("first").with_priority("high"));

        assert_eq!(set.len(), 2);
        let names: Vec<&str> = set.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);

        let first = set.get(&RuleName::from("first")).unwrap();
        assert_eq!(first.priority(), Ok(crate::types::Priority::High));
    }

    #[test]
    fn test_empty_set() {
        let set = RuleSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get(&RuleName::from("missing")).is_none());
    }
}
