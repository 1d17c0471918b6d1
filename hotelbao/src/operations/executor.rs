//! Plan execution engine.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::store::HotelStore;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry run (no changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in a dry run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation as stored after an insert or update. Always `None`
    /// in a dry run.
    pub reservation: Option<Reservation>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, reservation: Option<Reservation>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation,
        }
    }
}

/// Applies operation plans to a store.
///
/// # Examples
///
/// ```no_run
/// use hotelbao::operations::{OperationPlan, PlanExecutor};
/// use hotelbao::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/hotelbao.db")).unwrap();
/// let plan = OperationPlan::new("Nothing to do");
///
/// let result = PlanExecutor::new(db.connection()).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a, S: HotelStore + ?Sized> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: HotelStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode: the plan is reported but not applied.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. An update or delete whose row
    /// vanished since planning fails with `NotFound`.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::new(plan, true, None));
        }

        let mut reservation = None;
        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            if let Some(stored) = self.execute_action(action)? {
                reservation = Some(stored);
            }
        }

        Ok(ExecutionResult::new(plan, false, reservation))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Option<Reservation>> {
        match action {
            PlanAction::InsertReservation(request) => {
                self.store.insert_reservation(request).map(Some)
            }
            PlanAction::UpdateReservation { id, request } => {
                if !self.store.update_reservation(*id, request)? {
                    return Err(Error::not_found(id.describe()));
                }
                self.store.find_reservation(*id)
            }
            PlanAction::DeleteReservation(id) => {
                if !self.store.delete_reservation(*id)? {
                    return Err(Error::not_found(id.describe()));
                }
                Ok(None)
            }
        }
    }
}

/// Builds and executes a plan inside one `IMMEDIATE` transaction.
///
/// Planning reads (existence and overlap checks) and the writes they justify
/// see the same snapshot, and no other writer can slip in between. The
/// transaction is committed only if both phases succeed.
///
/// # Errors
///
/// Returns any error from planning, execution, or the transaction itself.
pub fn execute_atomically<F>(db: &mut Database, dry_run: bool, build: F) -> Result<ExecutionResult>
where
    F: FnOnce(&Connection) -> Result<OperationPlan>,
{
    let tx = db.begin_transaction()?;
    let plan = build(&tx)?;

    let mut executor = PlanExecutor::new(&*tx);
    if dry_run {
        executor = executor.dry_run();
    }
    let result = executor.execute(&plan)?;

    tx.commit()?;
    Ok(result)
}
