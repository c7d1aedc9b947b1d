//! Section-level differences between two configuration documents.

use dpapi_models::{CompareOptions, Comparable, Configuration, Diff, Diffable};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Added,
    Removed,
    Changed,
}

/// One added, removed or changed section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionChange {
    /// Document key of the section list, `global` for the global section.
    pub section: String,
    /// Section name, or `[index]` for unnamed entries.
    pub name: String,
    pub action: ChangeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet {
    changes: Vec<SectionChange>,
}

impl ChangeSet {
    /// Compare `old` against `new`.
    ///
    /// `defaults`, `backends` and `acme_providers` entries are matched by
    /// name, rules by position.
    pub fn between(old: &Configuration, new: &Configuration, opts: &CompareOptions) -> Self {
        let mut set = ChangeSet::default();

        match (&old.global, &new.global) {
            (Some(a), Some(b)) => {
                let diff = a.diff_with(b, opts);
                if !diff.is_empty() {
                    set.push("global", "global", ChangeAction::Changed, Some(diff));
                }
            }
            _ if old.global.equal_with(&new.global, opts) => {}
            (None, Some(_)) => set.push("global", "global", ChangeAction::Added, None),
            (Some(_), None) => set.push("global", "global", ChangeAction::Removed, None),
            (None, None) => {}
        }

        set.sections("defaults", &old.defaults, &new.defaults, opts, |i, d| {
            d.name.clone().unwrap_or_else(|| format!("[{}]", i))
        });
        set.sections("backends", &old.backends, &new.backends, opts, |i, b| {
            if b.name.is_empty() {
                format!("[{}]", i)
            } else {
                b.name.clone()
            }
        });
        set.sections(
            "acme_providers",
            &old.acme_providers,
            &new.acme_providers,
            opts,
            |i, p| {
                if p.name.is_empty() {
                    format!("[{}]", i)
                } else {
                    p.name.clone()
                }
            },
        );
        set.sections(
            "http_after_response_rules",
            &old.http_after_response_rules,
            &new.http_after_response_rules,
            opts,
            |i, _| format!("[{}]", i),
        );

        debug!("Compared documents: {} section changes", set.len());
        set
    }

    fn push(&mut self, section: &str, name: &str, action: ChangeAction, diff: Option<Diff>) {
        self.changes.push(SectionChange {
            section: section.to_string(),
            name: name.to_string(),
            action,
            diff,
        });
    }

    fn sections<T, K>(
        &mut self,
        section: &str,
        old: &[T],
        new: &[T],
        opts: &CompareOptions,
        key: K,
    ) where
        T: Diffable,
        K: Fn(usize, &T) -> String,
    {
        let mut pending: Vec<(String, &T, bool)> = new
            .iter()
            .enumerate()
            .map(|(i, s)| (key(i, s), s, false))
            .collect();

        // Repeated names pair up in order, each new entry at most once.
        for (i, before) in old.iter().enumerate() {
            let name = key(i, before);
            let matched = pending.iter_mut().find(|(n, _, used)| !*used && *n == name);
            match matched {
                Some((_, after, used)) => {
                    *used = true;
                    let diff = before.diff_with(*after, opts);
                    if !diff.is_empty() {
                        self.push(section, &name, ChangeAction::Changed, Some(diff));
                    }
                }
                None => self.push(section, &name, ChangeAction::Removed, None),
            }
        }

        for (name, _, used) in &pending {
            if !*used {
                self.push(section, name, ChangeAction::Added, None);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[SectionChange] {
        &self.changes
    }

    pub fn find(&self, section: &str, name: &str) -> Option<&SectionChange> {
        self.changes
            .iter()
            .find(|c| c.section == section && c.name == name)
    }

    pub fn count(&self, action: ChangeAction) -> usize {
        self.changes.iter().filter(|c| c.action == action).count()
    }
}
