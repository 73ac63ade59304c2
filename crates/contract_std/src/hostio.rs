//! Host import surface: the `env` functions the sandbox exposes to a loaded
//! module, plus safe wrappers over them. On non-wasm targets the imports are
//! replaced by inert fallbacks so the crate builds and tests on the host.

use alloc::vec::Vec;
use types::transaction::Tag;

#[cfg(target_arch = "wasm32")]
unsafe extern "C" {
    fn _payload_len() -> usize;
    fn _payload(ptr: *mut u8);
    fn _log(ptr: *const u8, len: usize) -> i32;
    fn _result(ptr: *const u8, len: usize);
    fn _send_transaction(tag: u8, ptr: *const u8, len: usize);
}

/// Copies the current call's parameter bytes out of the host.
pub fn payload_bytes() -> Vec<u8> {
    #[cfg(target_arch = "wasm32")]
    unsafe {
        let len = _payload_len();
        let mut buf = alloc::vec![0u8; len];
        _payload(buf.as_mut_ptr());
        buf
    }

    #[cfg(not(target_arch = "wasm32"))]
    Vec::new()
}

/// Emits one log line through the host.
pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    unsafe {
        _log(msg.as_ptr(), msg.len());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Sets the call's final result bytes without ending execution.
pub fn set_result(bytes: &[u8]) {
    #[cfg(target_arch = "wasm32")]
    unsafe {
        _result(bytes.as_ptr(), bytes.len());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = bytes;
}

pub(crate) fn abort_bytes(msg: &[u8]) -> ! {
    #[cfg(target_arch = "wasm32")]
    {
        unsafe {
            _result(msg.as_ptr(), msg.len());
        }
        core::arch::wasm32::unreachable()
    }

    #[cfg(not(target_arch = "wasm32"))]
    panic!("abort: {}", alloc::string::String::from_utf8_lossy(msg));
}

/// Reports `msg` as the call's abort value and stops execution.
pub fn abort(msg: &str) -> ! {
    abort_bytes(msg.as_bytes())
}

/// Aborts the invocation unless `cond` holds.
pub fn require(cond: bool, msg: &str) {
    if !cond {
        abort(msg);
    }
}

/// Hands one outgoing transaction payload to the host for dispatch.
pub fn send_transaction(tag: Tag, payload: &[u8]) {
    #[cfg(target_arch = "wasm32")]
    unsafe {
        _send_transaction(tag as u8, payload.as_ptr(), payload.len());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (tag, payload);
}
