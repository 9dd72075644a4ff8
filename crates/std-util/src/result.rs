/// Unwraps an `Err`, returning the error value.
///
/// An optional trailing argument checks that the error's display output
/// contains the given text.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $contains:expr) => {{
        let err = $crate::assert_err!($e);
        let msg = err.to_string();
        assert!(
            msg.contains($contains),
            "expected error to contain {:?}; actual={:?}",
            $contains,
            msg
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            actual => panic!("expected `Ok`; actual={:?}", actual),
        }
    };
}
