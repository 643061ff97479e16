use crate::errors::AppResult;
use crate::store::{Labels, TableStore, UpsertOutcome};
use crate::ui::messages::info;

/// High-level logic behind `add` and `stop`: put seconds on a task.
pub struct AddLogic;

impl AddLogic {
    /// Accumulate `seconds` on `task`.
    ///
    /// With `create`, a missing sheet is bootstrapped first; otherwise a
    /// missing sheet is reported as `StoreNotFound`.
    pub fn apply(
        store: &TableStore,
        labels: &Labels,
        task: &str,
        seconds: u64,
        create: bool,
    ) -> AppResult<UpsertOutcome> {
        if create && !store.is_unset() && !store.exists() {
            store.bootstrap(labels)?;
            info(format!("Created new sheet: {}", store.path().display()));
        }

        store.upsert(task, seconds, labels)
    }
}
