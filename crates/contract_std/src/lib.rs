#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
pub mod allocator;
pub mod avl;
pub mod cell;
pub mod hashmap;
pub mod hexutil;
pub mod hostio;
#[macro_use]
pub mod log;
#[macro_use]
pub mod entrypoint;
#[cfg(target_arch = "wasm32")]
mod panic;
pub mod params;
pub mod payload;
pub mod writer;

pub use types;

pub use avl::AvlMap;
pub use cell::InstanceCell;
pub use hashmap::HashMap;
pub use hexutil::to_hex;
pub use hostio::{abort, payload_bytes, require, send_transaction, set_result};
pub use params::{Parameters, HEADER_LEN};
pub use payload::{ContractDeploy, Stake, Transfer};
pub use writer::PayloadWriter;
