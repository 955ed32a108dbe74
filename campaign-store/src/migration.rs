//! Schema migrations for stored activities
//!
//! Steps are keyed by the version they upgrade from and run in order. Each
//! step reports whether it changed anything; the caller persists once after
//! the whole chain instead of after every step.
//!
//! To evolve the schema: bump [`SCHEMA_VERSION`] and append a step keyed by
//! the previous version. Old steps stay while any installed snapshot may
//! still predate them.

use shared::models::{Activity, Product};

use crate::schema::SCHEMA_VERSION;
use crate::seed;

type Step = fn(&mut [Activity]) -> bool;

const ACTIVITY_STEPS: &[(u32, Step)] = &[(0, backfill_legacy_seed)];

/// Outcome of migrating a loaded activity collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub from: u32,
    /// Some step rewrote a record
    pub changed: bool,
}

impl Migration {
    /// Stored copy must be rewritten (content changed or version stamp is stale)
    pub fn needs_save(&self) -> bool {
        self.changed || self.from < SCHEMA_VERSION
    }
}

pub fn migrate_activities(from: u32, activities: &mut [Activity]) -> Migration {
    let mut changed = false;
    for (version, step) in ACTIVITY_STEPS {
        if *version >= from && step(activities) {
            tracing::info!(from_version = *version, "Activity migration step applied");
            changed = true;
        }
    }
    Migration { from, changed }
}

/// v0 -> v1: repair the first-release seed activity.
///
/// Only runs when the first stored activity is the seed. Renames the old
/// default title and backfills subtitles that the first release lacked;
/// populated fields are never touched.
fn backfill_legacy_seed(activities: &mut [Activity]) -> bool {
    let Some(first) = activities.first_mut() else {
        return false;
    };
    if first.id != seed::SEED_ACTIVITY_ID {
        return false;
    }

    let mut changed = false;

    if first.name == seed::LEGACY_SEED_NAME {
        first.name = seed::SEED_ACTIVITY_NAME.into();
        first.subtitle = Some(seed::SEED_ACTIVITY_SUBTITLE.into());
        changed = true;
    }

    changed |= backfill_subtitles(&mut first.recommended_foods, seed::food_subtitle);
    changed |= backfill_subtitles(&mut first.recommended_products, seed::product_subtitle);

    changed
}

fn backfill_subtitles(items: &mut [Product], lookup: fn(&str) -> Option<&'static str>) -> bool {
    let mut changed = false;
    for item in items.iter_mut().filter(|p| p.lacks_subtitle()) {
        if let Some(subtitle) = lookup(&item.id) {
            item.subtitle = Some(subtitle.into());
            changed = true;
        }
    }
    changed
}
