#![no_std]
#![no_main]

extern crate alloc;

use contract_std::cell::InstanceCell;
use contract_std::{contract, log};
use contract_std::hostio;
use contract_std::params::Parameters;
use contracts::balances::{BalanceBook, INITIAL_GRANT};
use types::address::Address;

static BALANCES: InstanceCell<BalanceBook> = InstanceCell::new();

contract! {
    pub fn _contract_init() {
        let params = Parameters::load();

        BALANCES.with(BalanceBook::new, |book| {
            if let Err(reason) = book.credit(params.sender_id, INITIAL_GRANT) {
                hostio::abort(reason);
            }
        });
    }

    pub fn _contract_balance() {
        let mut params = Parameters::load();
        let target = Address::from_slice(&params.read_bytes(32));

        let balance = BALANCES.with(BalanceBook::new, |book| book.balance_of(&target));
        log!("Balance: {}", balance);
    }

    pub fn _contract_transfer() {
        let mut params = Parameters::load();
        let recipient = Address::from_slice(&params.read_bytes(32));
        let amount = params.read_u64();

        BALANCES.with(BalanceBook::new, |book| {
            if let Err(reason) = book.transfer(params.sender_id, recipient, amount) {
                hostio::abort(reason);
            }
        });
    }
}
