//! Balance bookkeeping for the token contract.

use contract_std::hashmap::HashMap;
use types::address::Address;

use crate::keys;

/// Longest collision chain the token contract tolerates. Since account ids
/// are caller-controlled, every insert of a new key is guarded by this bound;
/// the map itself never refuses growth.
pub const MAX_BUCKET: u32 = 8;

/// Units credited to the deployer on init.
pub const INITIAL_GRANT: u64 = 100_000;

pub struct BalanceBook {
    map: HashMap<Address, u64>,
}

impl BalanceBook {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(keys::address_eq, keys::address_hash),
        }
    }

    pub fn balance_of(&self, who: &Address) -> u64 {
        self.map.get(who).copied().unwrap_or(0)
    }

    pub fn accounts(&self) -> u32 {
        self.map.count()
    }

    fn can_insert(&self, who: &Address) -> bool {
        self.map.bucket_size(who) < MAX_BUCKET || self.map.get(who).is_ok()
    }

    /// Credits `amount` to `who`. Fails when `who` is a new key and its
    /// bucket is already at the bound.
    pub fn credit(&mut self, who: Address, amount: u64) -> Result<(), &'static str> {
        if !self.can_insert(&who) {
            return Err("account bucket is full");
        }
        let next = self.balance_of(&who) + amount;
        self.map.set(who, next);
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. The recipient's bucket is checked
    /// before the sender is debited, so a refused insert never leaves the
    /// book half-updated.
    pub fn transfer(&mut self, from: Address, to: Address, amount: u64) -> Result<(), &'static str> {
        if amount == 0 {
            return Err("amount must be greater than 0");
        }

        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err("sender does not have enough balance");
        }

        if !self.can_insert(&to) {
            return Err("recipient bucket is full");
        }

        self.map.set(from, from_balance - amount);

        let to_balance = self.balance_of(&to);
        self.map.set(to, to_balance + amount);

        Ok(())
    }
}

impl Default for BalanceBook {
    fn default() -> Self {
        Self::new()
    }
}
