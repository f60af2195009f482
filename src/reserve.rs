use crate::*;

/// Tracked balances of the NEP-141 tokens held by the treasury. Credited by
/// `ft_on_transfer`, debited by retrieval and vault entry. Tokens sent with a
/// plain `ft_transfer` bypass the hook and stay invisible to the ledger.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Reserve {
    tokens: UnorderedMap<AccountId, Balance>,
}

impl Reserve {
    pub fn new<S>(prefix: S) -> Self
    where
        S: IntoStorageKey,
    {
        Self {
            tokens: UnorderedMap::new(prefix),
        }
    }

    pub fn balance_of(&self, token_id: &AccountId) -> Balance {
        self.tokens.get(token_id).unwrap_or(0)
    }

    pub fn credit(&mut self, token_id: &AccountId, amount: Balance) {
        let balance = self
            .balance_of(token_id)
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Reserve balance overflow"));
        self.tokens.insert(token_id, &balance);
    }

    pub fn debit(&mut self, token_id: &AccountId, amount: Balance) {
        let balance = self.balance_of(token_id);
        if amount > balance {
            env::panic_str("The treasury doesn't have enough balance");
        }
        let remaining = balance - amount;
        if remaining > 0 {
            self.tokens.insert(token_id, &remaining);
        } else {
            self.tokens.remove(token_id);
        }
    }

    pub fn to_vec(&self) -> Vec<(AccountId, U128)> {
        self.tokens
            .iter()
            .map(|(token_id, balance)| (token_id, U128(balance)))
            .collect()
    }
}
