//! Single serialized mutation entry point.
//!
//! UI layers that prefer message passing submit `StoreCommand`s; every
//! variant maps onto exactly one typed store operation. A multi-user
//! deployment puts its lock around `AwardsStore::apply`.

use crate::model::category::{AwardCategory, CategoryId, CategoryPatch, NewCategory};
use crate::model::nomination::{NewNomination, Nomination, NominationId, NominationPatch};
use crate::model::session::{User, UserRole};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::nomination_repo::NominationRepository;
use crate::store::awards_store::{AwardsStore, DeletedCategory, StoreResult};

/// One store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    SetUser(User),
    SetRole(UserRole),
    AddCategory(NewCategory),
    UpdateCategory { id: CategoryId, patch: CategoryPatch },
    DeleteCategory { id: CategoryId },
    ToggleCategoryStatus { id: CategoryId },
    AddNomination(NewNomination),
    UpdateNomination { id: NominationId, patch: NominationPatch },
}

/// Outcome of an applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    UserChanged,
    RoleChanged(UserRole),
    CategoryAdded(AwardCategory),
    CategoryUpdated(AwardCategory),
    CategoryDeleted(DeletedCategory),
    NominationAdded(Nomination),
    NominationUpdated(Nomination),
}

impl<C: CategoryRepository, N: NominationRepository> AwardsStore<C, N> {
    /// Applies one command through the matching typed operation.
    pub fn apply(&mut self, command: StoreCommand) -> StoreResult<StoreEvent> {
        match command {
            StoreCommand::SetUser(user) => {
                self.set_user(user);
                Ok(StoreEvent::UserChanged)
            }
            StoreCommand::SetRole(role) => {
                self.set_role(role);
                Ok(StoreEvent::RoleChanged(role))
            }
            StoreCommand::AddCategory(input) => {
                self.add_category(input).map(StoreEvent::CategoryAdded)
            }
            StoreCommand::UpdateCategory { id, patch } => self
                .update_category(&id, patch)
                .map(StoreEvent::CategoryUpdated),
            StoreCommand::DeleteCategory { id } => {
                self.delete_category(&id).map(StoreEvent::CategoryDeleted)
            }
            StoreCommand::ToggleCategoryStatus { id } => self
                .toggle_category_status(&id)
                .map(StoreEvent::CategoryUpdated),
            StoreCommand::AddNomination(input) => {
                self.add_nomination(input).map(StoreEvent::NominationAdded)
            }
            StoreCommand::UpdateNomination { id, patch } => self
                .update_nomination(&id, patch)
                .map(StoreEvent::NominationUpdated),
        }
    }
}
