use std::borrow::Cow;

use crate::catalog::{Entry, EntryStatus, Store, Translation};
use crate::resolve::plural::PluralRule;

/// Which stored translations the resolver trusts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrustPolicy {
    /// Only entries explicitly marked finished.
    #[default]
    FinishedOnly,
    /// Any non-empty translation, even unfinished or retired ones.
    AnyNonEmpty,
}

/// Runtime translation lookup over an immutable store snapshot.
///
/// `resolve` never fails and never returns an empty string for a non-empty
/// source: when no trusted translation exists the source text itself comes
/// back. Purely functional, so concurrent readers need no coordination.
#[derive(Debug)]
pub struct Resolver<'a> {
    store: &'a Store,
    policy: TrustPolicy,
    rule: PluralRule,
}

impl<'a> Resolver<'a> {
    /// Build a resolver over a store; the plural rule comes from the
    /// catalog's language tag.
    pub fn new(store: &'a Store) -> Self {
        let rule = store
            .language
            .as_deref()
            .map(PluralRule::for_locale)
            .unwrap_or(PluralRule::Dual);
        Self {
            store,
            policy: TrustPolicy::default(),
            rule,
        }
    }

    pub fn with_policy(mut self, policy: TrustPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.rule = rule;
        self
    }

    /// Look up the display string for `(context, source, comment)`,
    /// optionally selecting a plural form for `count`.
    ///
    /// Occurrences of `%n` in the chosen string are replaced by the count.
    pub fn resolve<'s>(
        &'s self,
        context: &str,
        source: &'s str,
        comment: Option<&str>,
        count: Option<i64>,
    ) -> Cow<'s, str> {
        let text: &str = self.lookup(context, source, comment, count).unwrap_or(source);

        match count {
            Some(n) if text.contains("%n") => Cow::Owned(text.replace("%n", &n.to_string())),
            _ => Cow::Borrowed(text),
        }
    }

    /// The trusted stored translation for a key, if any, before `%n`
    /// substitution. `None` means the caller should fall back to the source.
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        count: Option<i64>,
    ) -> Option<&str> {
        self.store
            .find(context, source, comment)
            .and_then(|entry| self.trusted_text(entry, count))
    }

    /// Shorthand for the common no-comment, no-plural lookup.
    pub fn translate<'s>(&'s self, context: &str, source: &'s str) -> Cow<'s, str> {
        self.resolve(context, source, None, None)
    }

    fn trusted(&self, entry: &Entry) -> bool {
        match self.policy {
            TrustPolicy::FinishedOnly => entry.status == EntryStatus::Finished,
            TrustPolicy::AnyNonEmpty => true,
        }
    }

    fn trusted_text<'e>(&self, entry: &'e Entry, count: Option<i64>) -> Option<&'e str> {
        if !self.trusted(entry) {
            return None;
        }
        match &entry.translation {
            Translation::Single(text) => (!text.is_empty()).then_some(text.as_str()),
            Translation::Plural(forms) => {
                let idx = count.map(|n| self.rule.index_for(n)).unwrap_or(0);
                Self::nearest_form(forms, idx)
            }
        }
    }

    /// Pick the form at `idx`, falling back to the nearest lower-cardinality
    /// non-empty form when that one is missing or empty.
    fn nearest_form(forms: &[String], idx: usize) -> Option<&str> {
        if forms.is_empty() {
            return None;
        }
        let idx = idx.min(forms.len() - 1);
        forms[..=idx]
            .iter()
            .rev()
            .find(|f| !f.is_empty())
            .map(String::as_str)
    }
}
