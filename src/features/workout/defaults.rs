//! Built-in workout sequence used when nothing has been saved or imported.

use super::item::{Exercise, WorkoutItem};

/// The four sample exercises shipped with roundtimer.
#[must_use]
pub fn default_items() -> Vec<WorkoutItem> {
    [
        ("No Money's", "Perform the No Money's exercise"),
        (
            "FREE WEIGHT - BILATERAL SCAPTION",
            "Perform the Bilateral Scaption exercise",
        ),
        (
            "CERVICAL RETRACTION / CHIN TUCK",
            "Perform the Chin Tuck exercise",
        ),
        (
            "TRUNK EXTENSION - TOWEL - AROM - MOBILIZATION",
            "Perform the Trunk Extension exercise",
        ),
    ]
    .into_iter()
    .map(|(name, description)| {
        WorkoutItem::Exercise(Exercise::new(name, description).with_prescription(10, 2, 5))
    })
    .collect()
}
