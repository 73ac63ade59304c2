#![no_std]

extern crate alloc;

pub mod balances;
pub mod keys;
pub mod messages;
