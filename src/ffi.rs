//! The C ABI. Declarations for C and Fortran callers are in
//! `include/mt_random.h`.
//!
//! Every call records its [`Status`] in a thread-local slot read by
//! `random_last_error`. Calls that cannot return a status report failure
//! in-band: a null handle from construct, NaN from `random_get_number`.

use std::cell::Cell;
use std::ffi::c_void;
use std::ptr;

use libc::{c_char, c_double, c_int, size_t};
use tracing::{debug, warn};

use crate::handle::{self, Handle};
use crate::{mt, Error, RandomSource, Result, Status};

thread_local! {
    static LAST_STATUS: Cell<Status> = const { Cell::new(Status::Ok) };
}

fn record<T>(op: &'static str, result: Result<T>) -> Result<T> {
    let status = match &result {
        Ok(_) => Status::Ok,
        Err(err) => {
            warn!(op, error = %err, "rejected call");
            Status::from(err)
        }
    };
    LAST_STATUS.with(|last| last.set(status));
    result
}

fn status(result: Result<()>) -> c_int {
    match result {
        Ok(()) => Status::Ok.code(),
        Err(err) => Status::from(&err).code(),
    }
}

fn construct(seed: u64) -> Result<Handle> {
    let handle = handle::global()?.insert(RandomSource::new(seed))?;
    debug!(handle = handle.get(), seed, "constructed random source");
    Ok(handle)
}

fn draw(raw: *mut c_void) -> Result<f64> {
    let handle = Handle::from_raw(raw)?;
    let value = handle::global()?.get_mut(handle)?.next_value();
    Ok(value)
}

fn fill(raw: *mut c_void, out: &mut [f64]) -> Result<()> {
    let handle = Handle::from_raw(raw)?;
    handle::global()?.get_mut(handle)?.fill(out);
    Ok(())
}

fn destroy(raw: *mut c_void) -> Result<()> {
    let handle = Handle::from_raw(raw)?;
    let source = handle::global()?.remove(handle)?;
    debug!(handle = handle.get(), draws = source.draws(), "destroyed random source");
    Ok(())
}

/// Creates a source from a C `int` seed, sign-extended to 64 bits.
/// Returns null on failure.
#[no_mangle]
pub extern "C" fn random_construct(seed: c_int) -> *mut c_void {
    random_construct_u64(mt::widen_seed(seed))
}

#[no_mangle]
pub extern "C" fn random_construct_u64(seed: u64) -> *mut c_void {
    match record("construct", construct(seed)) {
        Ok(handle) => handle.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Next value in `[0.0, 1.0)`, or NaN if `r` is not a live handle.
#[no_mangle]
pub extern "C" fn random_get_number(r: *mut c_void) -> c_double {
    record("get_number", draw(r)).unwrap_or(f64::NAN)
}

#[no_mangle]
pub extern "C" fn random_destroy(r: *mut c_void) {
    let _ = record("destroy", destroy(r));
}

#[no_mangle]
pub extern "C" fn random_try_destroy(r: *mut c_void) -> c_int {
    status(record("destroy", destroy(r)))
}

/// # Safety
///
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn random_try_get_number(r: *mut c_void, out: *mut c_double) -> c_int {
    // SAFETY: the caller guarantees `out` is null or writable.
    let result = match unsafe { out.as_mut() } {
        Some(out) => draw(r).map(|value| *out = value),
        None => Err(Error::NullPointer),
    };
    status(record("try_get_number", result))
}

/// Writes `len` successive draws to `out`.
///
/// # Safety
///
/// When `len > 0`, `out` must be null or valid for writes of `len` doubles.
#[no_mangle]
pub unsafe extern "C" fn random_fill(r: *mut c_void, out: *mut c_double, len: size_t) -> c_int {
    let result = if len == 0 {
        fill(r, &mut [])
    } else if out.is_null() {
        Err(Error::NullPointer)
    } else {
        // SAFETY: non-null, and the caller guarantees room for `len` doubles.
        fill(r, unsafe { std::slice::from_raw_parts_mut(out, len) })
    };
    status(record("fill", result))
}

/// Status of the most recent call made on this thread.
#[no_mangle]
pub extern "C" fn random_last_error() -> c_int {
    LAST_STATUS.with(Cell::get).code()
}

/// Static NUL-terminated description of a status code. Never null.
#[no_mangle]
pub extern "C" fn random_error_message(code: c_int) -> *const c_char {
    Status::from_code(code)
        .map_or(c"unknown status", Status::message)
        .as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_status_per_call() {
        let r = random_construct(3);
        assert!(!r.is_null());
        assert_eq!(random_last_error(), Status::Ok.code());

        random_destroy(r);
        assert_eq!(random_last_error(), Status::Ok.code());

        random_destroy(r);
        assert_eq!(random_last_error(), Status::InvalidHandle.code());
    }

    #[test]
    fn null_handle_yields_nan() {
        assert!(random_get_number(ptr::null_mut()).is_nan());
        assert_eq!(random_last_error(), Status::InvalidHandle.code());
    }

    #[test]
    fn unknown_code_has_message() {
        let msg = unsafe { std::ffi::CStr::from_ptr(random_error_message(99)) };
        assert_eq!(msg.to_str().unwrap(), "unknown status");
    }
}
