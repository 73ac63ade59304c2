//! Outgoing transaction payload builders. Each record marshals itself into
//! the exact byte layout the host's transaction processing expects; field
//! validation is the calling contract's business, not the builder's.

use alloc::string::String;
use alloc::vec::Vec;

use types::address::Address;
use types::transaction::StakeOp;

use crate::writer::PayloadWriter;

/// Native value transfer, optionally invoking a function on the recipient.
pub struct Transfer {
    pub recipient: Address,
    pub amount: u64,
    pub gas_limit: u64,
    pub gas_deposit: u64,
    pub func_name: Option<String>,
    pub func_params: Option<Vec<u8>>,
}

impl Transfer {
    /// Plain transfer: zero gas fields, no function call.
    pub fn new(recipient: Address, amount: u64) -> Self {
        Self {
            recipient,
            amount,
            gas_limit: 0,
            gas_deposit: 0,
            func_name: None,
            func_params: None,
        }
    }

    /// `recipient | amount | gas_limit | gas_deposit`, then the
    /// length-prefixed function name and parameters, each present only when
    /// a non-empty function name is set.
    pub fn marshal(&self) -> Vec<u8> {
        let mut w = PayloadWriter::new();
        w.write_bytes(&self.recipient.0);
        w.write_u64(self.amount);

        w.write_u64(self.gas_limit);
        w.write_u64(self.gas_deposit);

        if let Some(name) = &self.func_name {
            if !name.is_empty() {
                w.write_u32(name.len() as u32);
                w.write_string(name, false);

                if let Some(params) = &self.func_params {
                    w.write_u32(params.len() as u32);
                    w.write_bytes(params);
                }
            }
        }

        w.into_bytes()
    }
}

/// Stake placement/withdrawal instruction.
pub struct Stake {
    pub op: StakeOp,
    pub amount: u64,
}

impl Stake {
    pub fn new(op: StakeOp, amount: u64) -> Self {
        Self { op, amount }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut w = PayloadWriter::new();
        w.write_u8(self.op as u8);
        w.write_u64(self.amount);
        w.into_bytes()
    }
}

/// Contract deployment: init parameters are length-prefixed, the code blob
/// runs to the end of the payload.
pub struct ContractDeploy {
    pub gas_limit: u64,
    pub gas_deposit: u64,
    pub params: Vec<u8>,
    pub code: Vec<u8>,
}

impl ContractDeploy {
    pub fn new(gas_limit: u64, gas_deposit: u64, params: Vec<u8>, code: Vec<u8>) -> Self {
        Self { gas_limit, gas_deposit, params, code }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut w = PayloadWriter::new();
        w.write_u64(self.gas_limit);
        w.write_u64(self.gas_deposit);

        w.write_u32(self.params.len() as u32);

        w.write_bytes(&self.params);
        w.write_bytes(&self.code);

        w.into_bytes()
    }
}
