/// Try block with typed handler clauses.
///
/// ```
/// use trycatch::{throw, try_catch};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("negative input {0}")]
/// struct Negative(i32);
///
/// fn double(x: i32) -> i32 {
///     if x < 0 {
///         throw!(Negative(x));
///     }
///     x * 2
/// }
///
/// let value = try_catch! {
///     try { double(4) }
///     catch (e: Negative) { e.0 }
///     catch_all { 0 }
/// };
/// assert_eq!(value, 8);
/// ```
///
/// Clauses are tried in order and the first match runs. If none matches the
/// condition keeps propagating unchanged.
///
/// | clause                          | matches                                          |
/// |---------------------------------|--------------------------------------------------|
/// | `catch (name: Type) { .. }`     | a `Type` raised by `throw!`, `throw_any!` or `panic_any` |
/// | `catch_error (name) { .. }`     | any `std::error::Error` raised by `throw!`       |
/// | `catch_all { .. }`              | anything, including plain panics; must be last   |
/// | `catch_all (name) { .. }`       | same, binding `&Caught`; must be last            |
/// | `catch_std_warn` / `catch_std_error` | like `catch_error`, logging `exception: ..` |
/// | `catch_all_warn` / `catch_all_error` | like `catch_all`, logging `unknown exception` |
///
/// The four logging clauses optionally take a `{ body }` that runs after the
/// log line, and the `std` pair also accepts `(name) { body }` to bind the
/// error. They log through `tc_warn!`/`tc_error!`, so the build-time logging
/// gates apply.
///
/// The try body runs in a closure: `return` leaves the body only and `?` does
/// not reach the enclosing function. Raise with `throw!` instead.
///
/// When the build cannot unwind the whole construct still compiles, the body
/// runs, and the handlers never do.
///
/// `try_catch! { in Personality => try { .. } .. }` pins a specific
/// [`StructuredExit`](crate::exit::StructuredExit) implementation instead of
/// [`Active`](crate::exit::Active).
#[macro_export]
macro_rules! try_catch {
    (in $exit:ty => try { $($body:tt)* } $($clauses:tt)+) => {
        match <$exit as $crate::exit::StructuredExit>::run(|| { $($body)* }) {
            ::core::result::Result::Ok(__tc_value) => __tc_value,
            ::core::result::Result::Err(__tc_caught) => {
                <$exit as $crate::exit::StructuredExit>::dispatch(
                    __tc_caught,
                    |__tc_caught: &$crate::exit::Caught| {
                        $crate::__tc_clauses!(__tc_caught; $($clauses)+)
                    },
                )
            }
        }
    };

    (try { $($body:tt)* } $($clauses:tt)+) => {
        $crate::try_catch!(in $crate::exit::Active => try { $($body)* } $($clauses)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tc_clauses {
    ($c:ident;) => {
        ::core::option::Option::None
    };

    // typed
    ($c:ident; catch ($name:ident : $ty:ty) { $($body:tt)* } $($rest:tt)*) => {
        if let ::core::option::Option::Some($name) = $c.downcast_ref::<$ty>() {
            ::core::option::Option::Some({ $($body)* })
        } else {
            $crate::__tc_clauses!($c; $($rest)*)
        }
    };

    ($c:ident; catch_error ($name:ident) { $($body:tt)* } $($rest:tt)*) => {
        if let ::core::option::Option::Some($name) = $c.as_error() {
            ::core::option::Option::Some({ $($body)* })
        } else {
            $crate::__tc_clauses!($c; $($rest)*)
        }
    };

    ($c:ident; catch_all ($name:ident) { $($body:tt)* }) => {{
        let $name: &$crate::exit::Caught = $c;
        ::core::option::Option::Some({ $($body)* })
    }};

    ($c:ident; catch_all { $($body:tt)* }) => {{
        let _ = $c;
        ::core::option::Option::Some({ $($body)* })
    }};

    // logging helpers over std errors
    ($c:ident; catch_std_warn ($name:ident) { $($body:tt)* } $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_error ($name) {
            $crate::tc_warn!("exception: {}", $name);
            $($body)*
        } $($rest)*)
    };

    ($c:ident; catch_std_warn { $($body:tt)* } $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_std_warn (__tc_e) { $($body)* } $($rest)*)
    };

    ($c:ident; catch_std_warn $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_std_warn (__tc_e) {} $($rest)*)
    };

    ($c:ident; catch_std_error ($name:ident) { $($body:tt)* } $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_error ($name) {
            $crate::tc_error!("exception: {}", $name);
            $($body)*
        } $($rest)*)
    };

    ($c:ident; catch_std_error { $($body:tt)* } $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_std_error (__tc_e) { $($body)* } $($rest)*)
    };

    ($c:ident; catch_std_error $($rest:tt)*) => {
        $crate::__tc_clauses!($c; catch_std_error (__tc_e) {} $($rest)*)
    };

    // logging helpers over anything
    ($c:ident; catch_all_warn { $($body:tt)* }) => {
        $crate::__tc_clauses!($c; catch_all {
            $crate::tc_warn!("unknown exception");
            $($body)*
        })
    };

    ($c:ident; catch_all_warn) => {
        $crate::__tc_clauses!($c; catch_all_warn {})
    };

    ($c:ident; catch_all_error { $($body:tt)* }) => {
        $crate::__tc_clauses!($c; catch_all {
            $crate::tc_error!("unknown exception");
            $($body)*
        })
    };

    ($c:ident; catch_all_error) => {
        $crate::__tc_clauses!($c; catch_all_error {})
    };
}

/// Raises an error value. In builds without unwinding this is fatal.
#[macro_export]
macro_rules! throw {
    ($error:expr $(,)?) => {
        $crate::exit::throw($error, $crate::site!())
    };
}

/// Raises any `Send + 'static` value, like throwing a non-exception type.
#[macro_export]
macro_rules! throw_any {
    ($payload:expr $(,)?) => {
        $crate::exit::throw_any($payload, $crate::site!())
    };
}

/// Re-raises the condition the enclosing handler is handling.
///
/// Fatal outside a handler, and fatal in builds without unwinding.
#[macro_export]
macro_rules! rethrow {
    () => {
        $crate::exit::rethrow($crate::site!())
    };
}

/// `true` if `expr` ran without raising.
///
/// Without unwinding this is always `true`; see [`crate::exit`].
#[macro_export]
macro_rules! guard {
    ($op:expr $(,)?) => {
        $crate::try_catch! {
            try {
                let _ = $op;
                true
            }
            catch_all { false }
        }
    };
}
