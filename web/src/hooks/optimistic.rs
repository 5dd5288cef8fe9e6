use std::collections::HashSet;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::ApiResponse;

use crate::components::notifications::Notices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementKind {
    Like,
    Bookmark,
}

impl EngagementKind {
    pub fn applied_label(self) -> &'static str {
        match self {
            EngagementKind::Like => "Liked",
            EngagementKind::Bookmark => "Saved to bookmarks",
        }
    }

    pub fn removed_label(self) -> &'static str {
        match self {
            EngagementKind::Like => "Like removed",
            EngagementKind::Bookmark => "Removed from bookmarks",
        }
    }
}

/// Which items the signed-in user has liked or bookmarked. The membership
/// flag and the ±1 counter delta always come from the same `toggle` call, so
/// the visible count can never drift from the visible flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngagementLedger {
    members: HashSet<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub now_set: bool,
    pub delta: i64,
}

impl EngagementLedger {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            members: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids_sorted(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.members.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn toggle(&mut self, id: i64) -> Toggle {
        if self.members.remove(&id) {
            Toggle {
                now_set: false,
                delta: -1,
            }
        } else {
            self.members.insert(id);
            Toggle {
                now_set: true,
                delta: 1,
            }
        }
    }
}

/// Flips a membership flag and its denormalized counter immediately, then
/// confirms with the backend. A rejected mutation reverts both and
/// re-persists, so confirmed state and visible state converge again.
pub fn optimistic_toggle<F, Fut>(
    item_id: i64,
    ledger: RwSignal<EngagementLedger>,
    apply_delta: impl Fn(i64) + 'static,
    persist: impl Fn() + 'static,
    mutate_remote: F,
    notices: Notices,
    applied_label: &'static str,
    removed_label: &'static str,
) where
    F: FnOnce(bool) -> Fut,
    Fut: Future<Output = ApiResponse<bool>> + 'static,
{
    let mut outcome = Toggle {
        now_set: false,
        delta: 0,
    };
    ledger.update(|l| outcome = l.toggle(item_id));
    persist();
    apply_delta(outcome.delta);

    let fut = mutate_remote(outcome.now_set);
    spawn_local(async move {
        let response = fut.await;
        if response.success {
            notices.success(if outcome.now_set {
                applied_label
            } else {
                removed_label
            });
        } else {
            ledger.update(|l| {
                l.toggle(item_id);
            });
            persist();
            apply_delta(-outcome.delta);
            notices.error(
                response
                    .message
                    .unwrap_or_else(|| "Could not save your change.".to_string()),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sets_flag_and_counter_together() {
        let mut ledger = EngagementLedger::default();
        let on = ledger.toggle(42);
        assert!(on.now_set);
        assert_eq!(on.delta, 1);
        assert!(ledger.contains(42));
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut ledger = EngagementLedger::from_ids([7]);
        let mut counter = 10i64;

        let first = ledger.toggle(3);
        counter += first.delta;
        let second = ledger.toggle(3);
        counter += second.delta;

        assert_eq!(counter, 10);
        assert!(!ledger.contains(3));
        assert_eq!(ledger, EngagementLedger::from_ids([7]));
    }

    #[test]
    fn delta_direction_always_matches_flag() {
        let mut ledger = EngagementLedger::from_ids([1, 2]);
        let off = ledger.toggle(1);
        assert!(!off.now_set);
        assert_eq!(off.delta, -1);
        let on = ledger.toggle(9);
        assert!(on.now_set);
        assert_eq!(on.delta, 1);
    }

    #[test]
    fn ids_sorted_is_deterministic() {
        let ledger = EngagementLedger::from_ids([9, 1, 5]);
        assert_eq!(ledger.ids_sorted(), vec![1, 5, 9]);
    }
}
