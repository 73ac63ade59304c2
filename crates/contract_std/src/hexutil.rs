use alloc::string::String;

/// Hex-encodes `bytes` for log output and display.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
