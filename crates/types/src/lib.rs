#![no_std]

pub mod address;
pub use address::{Address, ADDRESS_LEN};

pub mod hash;
pub use hash::{Hash, HASH_LEN};

pub mod transaction;
pub use transaction::{StakeOp, Tag};

pub mod error;
pub use error::MapError;
