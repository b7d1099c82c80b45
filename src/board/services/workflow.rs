//! Create, edit, and two-step delete workflow.
//!
//! The form and the delete confirmation are each one tagged state, so a
//! combination such as "creating while editing" cannot be represented.
//! Entering either workflow also closes the other, so a card is never being
//! edited while a delete confirmation is pending.

use super::BoardStore;
use crate::board::{
    domain::{BoardError, BoardResult, Card, CardForm, CardId, Stage},
    ports::IdGenerator,
};
use mockable::Clock;
use std::sync::Arc;

/// State of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// No form is shown.
    #[default]
    Closed,
    /// A new card is being entered.
    Creating(CardForm),
    /// An existing card's fields are being edited.
    Editing {
        /// Card being edited.
        card_id: CardId,
        /// Form contents.
        form: CardForm,
    },
}

/// State of the delete confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    /// No deletion is pending.
    #[default]
    Idle,
    /// Waiting for the user to confirm deleting the card.
    Confirming(CardId),
}

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A card was appended to the board.
    Created(CardId),
    /// An existing card's fields were replaced.
    Updated(CardId),
}

/// Form and delete states captured before a persisted submission.
pub(crate) type WorkflowSnapshot = (FormState, DeleteState);

/// Gates board mutations behind form validation and delete confirmation.
pub struct LifecycleController<C>
where
    C: Clock,
{
    clock: Arc<C>,
    form: FormState,
    delete: DeleteState,
}

impl<C> LifecycleController<C>
where
    C: Clock,
{
    /// Creates a controller with the form closed and no pending delete.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            form: FormState::Closed,
            delete: DeleteState::Idle,
        }
    }

    /// Returns the form state.
    #[must_use]
    pub const fn form_state(&self) -> &FormState {
        &self.form
    }

    /// Returns the delete confirmation state.
    #[must_use]
    pub const fn delete_state(&self) -> &DeleteState {
        &self.delete
    }

    /// Returns the open form's contents.
    #[must_use]
    pub const fn form(&self) -> Option<&CardForm> {
        match &self.form {
            FormState::Closed => None,
            FormState::Creating(form) | FormState::Editing { form, .. } => Some(form),
        }
    }

    /// Returns the open form's contents for editing.
    pub const fn form_mut(&mut self) -> Option<&mut CardForm> {
        match &mut self.form {
            FormState::Closed => None,
            FormState::Creating(form) | FormState::Editing { form, .. } => Some(form),
        }
    }

    pub(crate) fn snapshot(&self) -> WorkflowSnapshot {
        (self.form.clone(), self.delete.clone())
    }

    pub(crate) fn restore(&mut self, (form, delete): WorkflowSnapshot) {
        self.form = form;
        self.delete = delete;
    }

    /// Opens a blank form for a new card and dismisses any pending delete.
    ///
    /// The stage defaults to `lane` when the user started from a lane's add
    /// button, otherwise to the configured default. The due date defaults to
    /// today.
    pub fn open_new<G>(&mut self, store: &BoardStore<G>, lane: Option<Stage>)
    where
        G: IdGenerator,
    {
        let config = store.config();
        let stage = lane.unwrap_or(config.default_stage);
        let today = self.clock.utc().date_naive();
        self.form = FormState::Creating(CardForm::blank(
            stage,
            config.default_assignee_count,
            today,
        ));
        self.delete = DeleteState::Idle;
    }

    /// Opens the form on an existing card, copying its fields but not its
    /// checklist. Any pending delete is dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if no card has the identifier.
    pub fn open_edit<G>(&mut self, store: &BoardStore<G>, card_id: &CardId) -> BoardResult<()>
    where
        G: IdGenerator,
    {
        let card = store
            .get(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.clone()))?;
        self.form = FormState::Editing {
            card_id: card_id.clone(),
            form: CardForm::from(card),
        };
        self.delete = DeleteState::Idle;
        Ok(())
    }

    /// Closes the form without touching the board.
    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Submits the open form.
    ///
    /// Creating calls [`BoardStore::create`]; editing calls
    /// [`BoardStore::update`]. On success the form closes. On failure the
    /// form stays open with its contents so the errors can be shown next to
    /// their fields. Returns `Ok(None)` when no form is open.
    ///
    /// # Errors
    ///
    /// Returns the store's error when validation fails or the edited card no
    /// longer exists.
    pub fn submit<G>(&mut self, store: &mut BoardStore<G>) -> BoardResult<Option<SubmitOutcome>>
    where
        G: IdGenerator,
    {
        let outcome = match &self.form {
            FormState::Closed => return Ok(None),
            FormState::Creating(form) => SubmitOutcome::Created(store.create(form)?),
            FormState::Editing { card_id, form } => {
                store.update(card_id, form)?;
                SubmitOutcome::Updated(card_id.clone())
            }
        };
        self.form = FormState::Closed;
        Ok(Some(outcome))
    }

    /// Asks for confirmation before deleting a card and closes any open form.
    /// The board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if no card has the identifier.
    pub fn request_delete<G>(&mut self, store: &BoardStore<G>, card_id: &CardId) -> BoardResult<()>
    where
        G: IdGenerator,
    {
        if store.get(card_id).is_none() {
            return Err(BoardError::CardNotFound(card_id.clone()));
        }
        self.form = FormState::Closed;
        self.delete = DeleteState::Confirming(card_id.clone());
        Ok(())
    }

    /// Deletes the card awaiting confirmation.
    ///
    /// Returns the removed card, or `None` when nothing was pending or the
    /// card had already gone.
    pub fn confirm_delete<G>(&mut self, store: &mut BoardStore<G>) -> Option<Card>
    where
        G: IdGenerator,
    {
        match std::mem::take(&mut self.delete) {
            DeleteState::Idle => None,
            DeleteState::Confirming(card_id) => store.remove(&card_id),
        }
    }

    /// Dismisses a pending delete confirmation without touching the board.
    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::Idle;
    }

    /// Returns the card awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&CardId> {
        match &self.delete {
            DeleteState::Idle => None,
            DeleteState::Confirming(card_id) => Some(card_id),
        }
    }
}
