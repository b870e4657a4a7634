//! Assertions for panicking code paths, for use in unit tests.

/// Asserts that the given block panics when run.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

/// Asserts that the given block panics and that the panic message contains the
/// provided substring.
#[allow(unused_macros)]
macro_rules! assert_panics_with {
    ($run:block, $needle:literal) => {{
        let payload = match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($needle),
            "panic message {:?} does not contain {:?}",
            message,
            $needle
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
#[allow(unused_imports)]
pub(crate) use assert_panics_with;
