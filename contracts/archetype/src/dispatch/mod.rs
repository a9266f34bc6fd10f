mod admin;
mod collections;
mod payments;
mod scarce;
mod withdrawals;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match &action {
            Action::CreateCollection { .. }
            | Action::SetInvite { .. }
            | Action::SetInvites { .. }
            | Action::SetBaseUri { .. }
            | Action::SetMaxSupply { .. }
            | Action::SetMaxBatchSize { .. }
            | Action::SetAffiliateFee { .. }
            | Action::SetDiscounts { .. }
            | Action::LockUri { .. }
            | Action::LockMaxSupply { .. }
            | Action::LockMaxBatchSize { .. }
            | Action::LockAffiliateFee { .. }
            | Action::LockDiscounts { .. } => self.dispatch_collections(action, actor_id),

            Action::Mint { .. } => self.dispatch_payments(action, actor_id),

            Action::Withdraw { .. } => self.dispatch_withdrawals(action, actor_id),

            Action::SetTokenMsg { .. } => self.dispatch_scarce(action, actor_id),

            Action::SetArchetype { .. }
            | Action::TransferOwnership { .. }
            | Action::SetPlatformAccount { .. } => self.dispatch_admin(action, actor_id),
        }
    }
}
