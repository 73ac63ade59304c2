/// Declares the module's exported entry points. Each function becomes a
/// `#[no_mangle] extern "C"` export the host invokes by name.
#[macro_export]
macro_rules! contract {
    (
        $(
            pub fn $name:ident () $body:block
        )*
    ) => {
        $(
            #[unsafe(no_mangle)]
            pub extern "C" fn $name() $body
        )*
    };
}
