/// Asserts that the provided block panics. The `with` form also checks that the panic message
/// contains the expected text, which is how contract violations are told apart.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block, with $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {:?} should contain {:?}",
                    message,
                    $expected
                );
                println!("^ panic caught");
            },
        }
    };
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
