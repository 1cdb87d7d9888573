//! Scaffold command: one directory per catalog zone.

use crate::app::AppContext;
use crate::domain::{Catalog, ScaffoldReport, ZoneOutcome, ZoneReport};
use crate::ports::ZoneDirectoryStore;

/// Try to create every zone directory, in catalog order.
///
/// A failure is recorded for the zone and the pass continues.
pub fn execute<S: ZoneDirectoryStore>(ctx: &AppContext<S>) -> ScaffoldReport {
    execute_with(ctx, |_| {})
}

/// Like [`execute`], calling `on_failure` as soon as a zone fails.
pub fn execute_with<S: ZoneDirectoryStore>(
    ctx: &AppContext<S>,
    mut on_failure: impl FnMut(&ZoneReport),
) -> ScaffoldReport {
    let mut report = ScaffoldReport::default();

    for (act, zone) in ctx.catalog().zones() {
        let outcome = match ctx.store().create_dir(&zone.dir_name()) {
            Ok(()) => ZoneOutcome::Created,
            Err(err) => ZoneOutcome::Failed { kind: err.kind(), reason: err.to_string() },
        };

        let entry = ZoneReport {
            act: act.name.clone(),
            code: zone.code.clone(),
            name: zone.name.clone(),
            outcome,
        };
        if entry.is_failed() {
            on_failure(&entry);
        }
        report.push(entry);
    }

    report
}

/// Directory names a pass would try to create.
pub fn plan(catalog: &Catalog) -> Vec<String> {
    catalog.zones().map(|(_, zone)| zone.dir_name()).collect()
}
