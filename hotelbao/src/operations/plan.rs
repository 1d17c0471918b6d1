//! Plan types for reservation operations.
//!
//! A plan describes the writes an operation will make without making them,
//! so callers can inspect it, log it or dry-run it.

use crate::id::ReservationId;
use crate::reservation::NewReservation;

/// A single write to be made during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new reservation.
    InsertReservation(NewReservation),

    /// Replace an existing reservation's client, room and period.
    UpdateReservation {
        /// The reservation to change.
        id: ReservationId,
        /// Its new logical fields.
        request: NewReservation,
    },

    /// Delete a reservation.
    DeleteReservation(ReservationId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertReservation(r) => format!(
                "Book {} for {} over {}",
                r.accommodation_id.describe(),
                r.client_id.describe(),
                r.period
            ),
            Self::UpdateReservation { id, request } => format!(
                "Move {} to {} for {} over {}",
                id.describe(),
                request.accommodation_id.describe(),
                request.client_id.describe(),
                request.period
            ),
            Self::DeleteReservation(id) => format!("Delete {}", id.describe()),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel reservation 4");
    /// assert_eq!(plan.description, "Cancel reservation 4");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelbao::operations::{OperationPlan, PlanAction};
    /// use hotelbao::ReservationId;
    ///
    /// let plan = OperationPlan::new("Cancel")
    ///     .add_action(PlanAction::DeleteReservation(ReservationId::new(4)));
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
