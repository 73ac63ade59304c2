#![no_std]
#![no_main]

extern crate alloc;

use contract_std::contract;
use contract_std::hostio::send_transaction;
use contract_std::params::Parameters;
use contract_std::payload::Transfer;
use types::transaction::Tag;

contract! {
    pub fn _contract_init() {}

    pub fn _contract_on_money_received() {
        let params = Parameters::load();

        let tx = Transfer::new(params.sender_id, params.amount / 2);
        send_transaction(Tag::Transfer, &tx.marshal());
    }
}
