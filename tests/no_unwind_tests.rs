//! The non-raising personality, pinned explicitly so it is exercised in every
//! build, plus checks that only apply when the build itself cannot unwind.

use trycatch::{exit::AbortOnRaise, try_catch, StructuredExit};

#[derive(Debug, thiserror::Error)]
#[error("x must be non-negative")]
struct Negative;

fn checked(x: i32) -> Result<i32, Negative> {
    if x < 0 {
        Err(Negative)
    } else {
        Ok(x * 2)
    }
}

#[test]
fn test_body_runs_and_handlers_never_do() {
    let mut body_ran = false;
    let mut handler_ran = false;

    try_catch! {
        in AbortOnRaise => try {
            body_ran = true;
        }
        catch (_e: Negative) { handler_ran = true; }
        catch_error (_e) { handler_ran = true; }
        catch_all { handler_ran = true; }
    }

    assert!(body_ran);
    assert!(!handler_ran);
}

#[test]
fn test_body_value_is_returned() {
    let value = try_catch! {
        in AbortOnRaise => try { checked(4).unwrap_or(-1) }
        catch_all { 0 }
    };
    assert_eq!(value, 8);
}

#[test]
fn test_return_code_path_reports_failure() {
    let value = try_catch! {
        in AbortOnRaise => try { checked(-2).unwrap_or(-1) }
        catch_all { 0 }
    };
    assert_eq!(value, -1);
}

#[test]
fn test_guard_is_always_true() {
    assert!(AbortOnRaise::guard(|| checked(1)));
    assert!(AbortOnRaise::guard(|| checked(-1)));
}

#[test]
fn test_logging_helpers_compile_without_running() {
    let mut n = 0;
    try_catch! {
        in AbortOnRaise => try { n += 1; }
        catch_std_warn (e) { let _ = e.to_string(); n += 10; }
        catch_all_error { n += 100; }
    }
    assert_eq!(n, 1);
}

#[cfg(not(all(panic = "unwind", not(feature = "no-unwind"))))]
mod build_without_unwinding {
    use trycatch::{config, guard, try_catch, Active, StructuredExit};

    #[test]
    fn test_active_is_non_raising() {
        assert!(!config::UNWIND_ENABLED);
        assert!(!<Active as StructuredExit>::UNWINDS);
    }

    #[test]
    fn test_default_macros_use_non_raising_personality() {
        let mut handled = false;
        let value = try_catch! {
            try { 7 }
            catch_all { handled = true; 0 }
        };
        assert_eq!(value, 7);
        assert!(!handled);
        assert!(guard!(super::checked(-1)));
    }
}
