/// Asserts that `$run` panics. With `contains`, the panic message must also contain the given
/// text, which lets tests check that an operator fails the same way a native integer would.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block, contains $expected:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("expression was expected to panic with {:?}", $expected),
            Err(payload) => {
                let message = crate::util::panic::payload_message(&*payload);
                assert!(
                    message.contains($expected),
                    "panicked with {:?}, expected {:?}",
                    message,
                    $expected
                );
                println!("^ expected panic caught");
            },
        }
    };
    ($run:block) => {
        assert_panics!($run, "expression was expected to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ expected panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the message from a panic payload, which is a `&str` for literal messages and a
/// `String` for formatted ones.
#[cfg(test)]
pub(crate) fn payload_message(payload: &(dyn std::any::Any + Send)) -> &str {
    match payload.downcast_ref::<&str>() {
        Some(message) => *message,
        None => payload.downcast_ref::<String>().map_or("", String::as_str),
    }
}
