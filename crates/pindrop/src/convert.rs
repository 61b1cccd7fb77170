//! Pin to raindrop conversion.
//!
//! Pure field mapping. The only decision made here is which collection a
//! record is filed under; both target ids are resolved before conversion
//! starts, so this module never fails.

use crate::connectors::Pin;
use crate::raindrop::{CollectionRef, CollectionTargets, Raindrop};

/// Converts one pin to a raindrop.
///
/// `created` and `lastUpdate` both take the pin's single timestamp. A pin
/// still marked to-read is filed in no collection at all, leaving it in
/// Raindrop's Unsorted; otherwise its visibility picks the public or
/// private target.
#[must_use]
pub fn to_raindrop(pin: &Pin, targets: &CollectionTargets) -> Raindrop {
    let collection = if pin.toread.is_yes() {
        None
    } else if pin.shared.is_yes() {
        Some(CollectionRef { id: targets.public })
    } else {
        Some(CollectionRef {
            id: targets.private,
        })
    };

    Raindrop {
        link: pin.href.clone(),
        title: pin.description.clone(),
        note: pin.extended.clone(),
        created: pin.time.clone(),
        last_update: pin.time.clone(),
        tags: pin.tags.split_whitespace().map(str::to_string).collect(),
        collection,
    }
}

/// Converts a full export in order, one raindrop per pin.
#[must_use]
pub fn convert(pins: &[Pin], targets: &CollectionTargets) -> Vec<Raindrop> {
    pins.iter().map(|pin| to_raindrop(pin, targets)).collect()
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
