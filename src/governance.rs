use crate::*;

#[near_bindgen]
impl Contract {
    pub(crate) fn assert_governance(&self) {
        if env::predecessor_account_id() != self.governance {
            env::panic_str("This method can be called only by governance")
        }
    }

    pub(crate) fn assert_manager_or_governance(&self) {
        let predecessor_id = env::predecessor_account_id();
        if predecessor_id != self.governance && predecessor_id != self.manager {
            env::panic_str("This method can be called only by governance or manager")
        }
    }

    /// Nominates a new governance account. The handoff is pull-based: the
    /// nominee has to call `accept_governance` before it takes effect.
    pub fn set_governance(&mut self, new_governance: AccountId) {
        self.assert_governance();
        if new_governance == self.governance {
            env::panic_str("Already governance");
        }
        event::emit::governance_proposed(&self.governance, &new_governance);
        self.pending_governance = Some(new_governance);
    }

    /// Promotes the pending governance account. Only the nominee itself can
    /// accept, so funds can never be handed to an unreachable account.
    pub fn accept_governance(&mut self) -> bool {
        let pending = match self.pending_governance.clone() {
            Some(pending) => pending,
            None => env::panic_str("No pending governance"),
        };
        if env::predecessor_account_id() != pending {
            env::panic_str("This method can be called only by pending governance")
        }
        event::emit::governance_accepted(&self.governance, &pending);
        self.governance = pending;
        self.pending_governance = None;
        true
    }

    /// Rotates the manager. Only can be called by governance.
    pub fn set_manager(&mut self, new_manager: AccountId) {
        self.assert_governance();
        self.manager = new_manager;
    }

    pub fn governance(&self) -> AccountId {
        self.governance.clone()
    }

    pub fn pending_governance(&self) -> Option<AccountId> {
        self.pending_governance.clone()
    }

    pub fn manager(&self) -> AccountId {
        self.manager.clone()
    }
}
