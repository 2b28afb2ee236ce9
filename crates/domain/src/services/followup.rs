//! Follow-up roster filtering and recipient selection.
//!
//! The follow-up view shows invitees who have not responded, narrowed by a
//! category filter and a free-text search, with a checkbox selection over
//! the currently visible rows.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Invitee, InviteeKind};

/// Category filter for the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Speaker,
    Sponsor,
    Guest,
}

impl CategoryFilter {
    fn matches(self, kind: InviteeKind) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Speaker => kind == InviteeKind::Speaker,
            CategoryFilter::Sponsor => kind == InviteeKind::Sponsor,
            CategoryFilter::Guest => kind == InviteeKind::Guest,
        }
    }
}

/// Returns the invitees matching both the category filter and the search
/// query (case-insensitive substring on name or email), in roster order.
pub fn filter_invitees<'a>(
    roster: &'a [Invitee],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Invitee> {
    let query = query.to_lowercase();
    roster
        .iter()
        .filter(|invitee| {
            category.matches(invitee.kind)
                && (invitee.name.to_lowercase().contains(&query)
                    || invitee.email.to_lowercase().contains(&query))
        })
        .collect()
}

/// The set of invitees currently selected for a follow-up send.
#[derive(Debug, Clone, Default)]
pub struct FollowUpSelection {
    selected: BTreeSet<i64>,
}

impl FollowUpSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the invitee to the selection, or removes them if already present.
    pub fn toggle(&mut self, id: i64) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Selects every visible invitee, or clears the selection when all of
    /// them are already selected.
    pub fn toggle_all(&mut self, visible: &[&Invitee]) {
        let all_selected =
            !visible.is_empty() && visible.iter().all(|i| self.selected.contains(&i.id));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected = visible.iter().map(|i| i.id).collect();
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection, e.g. after the follow-ups have been sent.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.selected.iter().copied()
    }
}
