//! End-of-request reconciliation between defined and filled slots.
//!
//! An *orphaned fill* is content registered for a slot name that no slot
//! defined during the same request. What happens next depends on the
//! [`ValidationMode`]: nothing, a single warning, or a
//! [`SlottyError::SlotNotFound`].

use strsim::levenshtein;

use super::store::SlotSet;
use crate::config::ValidationMode;
use crate::core::{Result, SlottyError};

/// Maximum edit distance for a suggestion, as a percentage of the orphan's length.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Filled slot names with no matching definition, in fill order.
#[must_use]
pub fn orphaned_fills<'a>(filled: &'a SlotSet, defined: &SlotSet) -> Vec<&'a str> {
    filled
        .iter()
        .filter(|name| !defined.contains(name.as_str()))
        .map(String::as_str)
        .collect()
}

/// Human-readable summary of orphaned fills.
#[must_use]
pub fn orphan_summary(orphans: &[&str]) -> String {
    let listed = orphans.iter().map(|name| format!("'{name}'")).collect::<Vec<_>>().join(", ");
    format!(
        "Found {} orphaned fills (fills without corresponding slots): {listed}",
        orphans.len()
    )
}

/// The defined slot closest to `orphan`, if one is similar enough to be a
/// likely typo.
#[must_use]
pub fn closest_defined_slot<'a>(orphan: &str, defined: &'a SlotSet) -> Option<&'a str> {
    let limit = orphan.len() * SIMILARITY_THRESHOLD_PERCENT / 100;
    defined
        .iter()
        .map(|name| (name, levenshtein(orphan, name)))
        .filter(|(_, distance)| *distance <= limit)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name.as_str())
}

fn with_hints(summary: String, orphans: &[&str], defined: &SlotSet) -> String {
    let hints: Vec<String> = orphans
        .iter()
        .filter_map(|orphan| {
            closest_defined_slot(orphan, defined)
                .map(|slot| format!("'{orphan}' (did you mean '{slot}'?)"))
        })
        .collect();

    if hints.is_empty() {
        summary
    } else {
        format!("{summary}. Possible typos: {}", hints.join(", "))
    }
}

/// Apply `mode` to the defined/filled sets of one request.
///
/// `Silent` returns immediately without looking at the sets. `Log` emits one
/// warning and succeeds. `Throw` fails with the first orphan (in fill order)
/// and the full summary.
pub fn reconcile(mode: ValidationMode, defined: &SlotSet, filled: &SlotSet) -> Result<()> {
    if !mode.tracks_slots() {
        return Ok(());
    }

    let orphans = orphaned_fills(filled, defined);
    let Some(first) = orphans.first() else {
        return Ok(());
    };

    let message = with_hints(orphan_summary(&orphans), &orphans, defined);

    match mode {
        // Unreachable through the early return above.
        ValidationMode::Silent => Ok(()),
        ValidationMode::Log => {
            tracing::warn!(orphaned = orphans.len(), "Slot validation warning: {}", message);
            Ok(())
        }
        ValidationMode::Throw => Err(SlottyError::SlotNotFound {
            slot_name: (*first).to_string(),
            message,
        }),
    }
}
