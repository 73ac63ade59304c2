use core::fmt::Write;

// Reports the panic through the host result channel before trapping, so an
// aborted invocation carries its reason instead of dying silently.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let mut buf = [0u8; 256];

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let space = self.buf.len().saturating_sub(self.pos);
            let len = core::cmp::min(s.len(), space);
            self.buf[self.pos..self.pos + len].copy_from_slice(&s.as_bytes()[..len]);
            self.pos += len;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf: &mut buf, pos: 0 };

    if let Some(location) = info.location() {
        let _ = write!(
            &mut writer,
            "panic at {}:{}:{}: ",
            location.file(),
            location.line(),
            location.column()
        );
    }

    let _ = write!(&mut writer, "{}", info.message());

    crate::hostio::abort_bytes(&writer.buf[..writer.pos])
}
