#![no_std]
#![no_main]

extern crate alloc;

use contract_std::cell::InstanceCell;
use contract_std::contract;
use contract_std::hexutil::to_hex;
use contract_std::hostio;
use contract_std::params::Parameters;
use contracts::messages::MessageLog;

static MESSAGES: InstanceCell<MessageLog> = InstanceCell::new();

contract! {
    pub fn _contract_init() {}

    pub fn _contract_send_message() {
        let mut params = Parameters::load();
        let msg = params.read_string();

        let sender = to_hex(&params.sender_id.0);
        MESSAGES.with(MessageLog::new, |log| {
            if let Err(reason) = log.push(&sender, &msg) {
                hostio::abort(reason);
            }
        });
    }

    pub fn _contract_get_messages() {
        MESSAGES.with(MessageLog::new, |log| {
            for line in log.lines() {
                hostio::log(line);
            }
        });
    }
}
