//! Call-context decoder over the host-supplied parameter buffer.

use alloc::string::String;
use alloc::vec::Vec;

use types::address::Address;
use types::hash::Hash;

use crate::hostio::{self, abort};

/// Fixed size of the call-context header: round_index (u64), round_id,
/// transaction_id, sender_id (32 bytes each), amount (u64).
pub const HEADER_LEN: usize = 8 + 32 + 32 + 32 + 8;

/// The decoded call context. Header fields are parsed eagerly; the
/// variable-length tail is consumed sequentially through the typed `read_*`
/// methods, each entry point defining its own tail format. The cursor only
/// moves forward.
pub struct Parameters {
    pub round_index: u64,
    pub round_id: Hash,
    pub transaction_id: Hash,
    pub sender_id: Address,
    pub amount: u64,

    tail: Vec<u8>,
    offset: usize,
    string_scan_limit: usize,
}

impl Parameters {
    /// Fetches the current call's parameter bytes from the host and decodes
    /// the header.
    pub fn load() -> Self {
        Self::from_bytes(hostio::payload_bytes())
    }

    /// Decodes a parameter buffer. The tail is empty, not absent, when the
    /// buffer is exactly one header long.
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        if buf.len() < HEADER_LEN {
            abort("parameter buffer shorter than header");
        }

        let round_index = u64::from_le_bytes(buf[0..8].try_into().unwrap());
        let round_id = Hash::from_slice(&buf[8..40]);
        let transaction_id = Hash::from_slice(&buf[40..72]);
        let sender_id = Address::from_slice(&buf[72..104]);
        let amount = u64::from_le_bytes(buf[104..112].try_into().unwrap());

        Self {
            round_index,
            round_id,
            transaction_id,
            sender_id,
            amount,
            tail: buf[HEADER_LEN..].to_vec(),
            offset: 0,
            string_scan_limit: 0,
        }
    }

    /// Bounds the `read_string` terminator scan. Zero (the default) keeps
    /// the scan unbounded, as the wire format allows.
    pub fn limit_string_scan(&mut self, max: usize) {
        self.string_scan_limit = max;
    }

    pub fn remaining(&self) -> usize {
        self.tail.len() - self.offset
    }

    fn ensure(&self, bytes: usize) {
        if self.offset + bytes > self.tail.len() {
            abort("insufficient input data");
        }
    }

    fn read_array<const N: usize>(&mut self) -> [u8; N] {
        self.ensure(N);
        let mut out = [0u8; N];
        out.copy_from_slice(&self.tail[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    /// Reads exactly `len` bytes, or, when `len == 0`, a u32 length prefix
    /// followed by that many bytes.
    pub fn read_bytes(&mut self, len: usize) -> Vec<u8> {
        let len = if len > 0 { len } else { self.read_u32() as usize };
        self.ensure(len);
        let out = self.tail[self.offset..self.offset + len].to_vec();
        self.offset += len;
        out
    }

    /// Scans forward for a NUL terminator and decodes the preceding bytes
    /// as UTF-8 (lossily), advancing the cursor past the terminator. The
    /// scan is unbounded unless `limit_string_scan` was set; contracts
    /// reading attacker-supplied strings enforce their own length rules
    /// after decoding.
    pub fn read_string(&mut self) -> String {
        let start = self.offset;
        let mut end = start;
        loop {
            if end >= self.tail.len() {
                abort("unterminated string");
            }
            if self.string_scan_limit != 0 && end - start >= self.string_scan_limit {
                abort("string exceeds scan limit");
            }
            if self.tail[end] == 0 {
                break;
            }
            end += 1;
        }

        let s = String::from_utf8_lossy(&self.tail[start..end]).into_owned();
        self.offset = end + 1;
        s
    }

    pub fn read_bool(&mut self) -> bool {
        self.read_u8() == 1
    }

    pub fn read_u8(&mut self) -> u8 {
        u8::from_le_bytes(self.read_array())
    }

    pub fn read_u16(&mut self) -> u16 {
        u16::from_le_bytes(self.read_array())
    }

    pub fn read_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.read_array())
    }

    pub fn read_u64(&mut self) -> u64 {
        u64::from_le_bytes(self.read_array())
    }

    pub fn read_i8(&mut self) -> i8 {
        i8::from_le_bytes(self.read_array())
    }

    pub fn read_i16(&mut self) -> i16 {
        i16::from_le_bytes(self.read_array())
    }

    pub fn read_i32(&mut self) -> i32 {
        i32::from_le_bytes(self.read_array())
    }

    pub fn read_i64(&mut self) -> i64 {
        i64::from_le_bytes(self.read_array())
    }
}
