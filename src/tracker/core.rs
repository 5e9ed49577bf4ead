//! The tracker's domain operations over the week store.

use crate::{
    Error,
    store::{INITIAL_TOTAL, StorageAdapter, WeekStore},
    tracker::Entry,
};

/// The result of submitting the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The expense was appended to the log and subtracted from the total.
    Recorded,
    /// The expense draft did not parse as a number; nothing was recorded.
    ///
    /// The drafts are still cleared, so the reason text is discarded too.
    /// This mirrors the form's observed behaviour; no error is shown.
    InvalidAmount,
}

/// Commit the current drafts as a log entry.
///
/// Parses the expense draft as a number. On success, appends an entry
/// holding the raw draft text, decrements the total by the parsed amount,
/// and clears both drafts. On a malformed amount nothing is recorded, but
/// both drafts are cleared all the same.
pub fn submit_expense<S: StorageAdapter>(store: &mut WeekStore<S>) -> Result<SubmitOutcome, Error> {
    let outcome = match store.draft_expense().parse::<f64>() {
        Ok(amount) => {
            let mut log = store.log().to_vec();
            log.push(Entry {
                expense: store.draft_expense().to_owned(),
                reason: store.draft_reason().to_owned(),
            });

            store.set_log(log)?;
            store.set_total(store.total() - amount)?;

            SubmitOutcome::Recorded
        }
        Err(_) => SubmitOutcome::InvalidAmount,
    };

    store.set_draft_expense("")?;
    store.set_draft_reason("")?;

    Ok(outcome)
}

/// Remove the entry at `index` and restore its amount to the total.
///
/// The remaining entries keep their order. The stored amount is not
/// re-validated: text that no longer parses restores NaN, which poisons the
/// running total. That can only happen if the storage was edited from
/// outside, since submission rejects unparseable amounts.
///
/// # Errors
/// Returns [Error::DeleteMissingExpense] if `index` is not in the log.
pub fn delete_expense<S: StorageAdapter>(
    store: &mut WeekStore<S>,
    index: usize,
) -> Result<(), Error> {
    if index >= store.log().len() {
        return Err(Error::DeleteMissingExpense(index));
    }

    let mut log = store.log().to_vec();
    let entry = log.remove(index);
    let amount = entry.expense.parse::<f64>().unwrap_or(f64::NAN);

    store.set_log(log)?;
    store.set_total(store.total() + amount)
}

/// Empty the log and hard-reset the total to the starting budget.
///
/// The total becomes [INITIAL_TOTAL] unconditionally; it is not recomputed
/// from the entries being removed.
pub fn clear_expenses<S: StorageAdapter>(store: &mut WeekStore<S>) -> Result<(), Error> {
    store.set_log(Vec::new())?;
    store.set_total(INITIAL_TOTAL)
}



#[cfg(test)]
mod clear_expenses_tests {
    use crate::store::{INITIAL_TOTAL, MemoryStorage, WeekStore};

    use super::{clear_expenses, submit_expense};

    #[test]
    fn empties_log_and_resets_total() {
        let mut store = WeekStore::new(MemoryStorage::new()).unwrap();

        for expense in ["50", "20", "9.99"] {
            store.set_draft_expense(expense).unwrap();
            store.set_draft_reason("stuff").unwrap();
            submit_expense(&mut store).unwrap();
        }

        clear_expenses(&mut store).unwrap();

        assert!(store.log().is_empty());
        assert_eq!(store.total(), INITIAL_TOTAL);
    }

    #[test]
    fn resets_rather_than_recomputes() {
        // The reset ignores whatever the total drifted to.
        let mut store = WeekStore::new(MemoryStorage::new()).unwrap();
        store.set_total(-1234.5).unwrap();

        clear_expenses(&mut store).unwrap();

        assert_eq!(store.total(), INITIAL_TOTAL);
    }
}
