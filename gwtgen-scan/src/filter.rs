use std::collections::BTreeSet;

/// Package include/exclude rules applied to scanned resources.
///
/// A package is accepted when it matches at least one include rule (an
/// empty include set matches everything) and matches no exclude rule.
/// Excludes are tested last, so a narrower exclude inside a broader
/// include always carves a hole regardless of rule length.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
}

impl SearchFilter {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        Self {
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
        }
    }

    /// Test a dotted package name against the rules.
    pub fn accepts(&self, package: &str) -> bool {
        if !self.include.is_empty()
            && !self.include.iter().any(|rule| prefix_matches(rule, package))
        {
            return false;
        }
        !self.exclude.iter().any(|rule| prefix_matches(rule, package))
    }
}

/// Segment-aware prefix match: `com.google` covers `com.google` and
/// `com.google.gwt` but not `com.googlex`.
fn prefix_matches(rule: &str, package: &str) -> bool {
    match package.strip_prefix(rule) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}
