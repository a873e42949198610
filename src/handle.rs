//! Opaque handles for sources owned on behalf of a foreign caller.
//!
//! A handle is a token, not an address: it is issued from a counter and
//! looked up in a [`Registry`], so a stale or forged handle is reported as
//! [`Error::InvalidHandle`] instead of being dereferenced.

use std::collections::HashMap;
use std::ffi::c_void;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::{Error, RandomSource, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(NonZeroUsize);

impl Handle {
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Reads a handle back from the pointer-sized value a caller holds.
    pub fn from_raw(raw: *mut c_void) -> Result<Handle> {
        NonZeroUsize::new(raw as usize)
            .map(Handle)
            .ok_or(Error::InvalidHandle(0))
    }

    pub fn into_raw(self) -> *mut c_void {
        self.get() as *mut c_void
    }
}

#[derive(Debug)]
pub struct Registry {
    next: usize,
    live: HashMap<Handle, RandomSource>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            next: 0,
            live: HashMap::new(),
        }
    }

    /// Takes ownership of `source` and returns the handle naming it.
    pub fn insert(&mut self, source: RandomSource) -> Result<Handle> {
        self.live.try_reserve(1)?;
        let handle = self.issue();
        self.live.insert(handle, source);
        Ok(handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut RandomSource> {
        self.live
            .get_mut(&handle)
            .ok_or(Error::InvalidHandle(handle.get()))
    }

    pub fn remove(&mut self, handle: Handle) -> Result<RandomSource> {
        self.live
            .remove(&handle)
            .ok_or(Error::InvalidHandle(handle.get()))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    // Only tokens that are not currently live are handed out, even after
    // the counter wraps.
    fn issue(&mut self) -> Handle {
        loop {
            self.next = self.next.wrapping_add(1);
            if let Some(token) = NonZeroUsize::new(self.next) {
                let handle = Handle(token);
                if !self.live.contains_key(&handle) {
                    return handle;
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

/// Locks the process-wide registry used by the C boundary.
pub fn global() -> Result<MutexGuard<'static, Registry>> {
    Ok(REGISTRY.get_or_init(|| Mutex::new(Registry::new())).lock()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut registry = Registry::new();
        let h = registry.insert(RandomSource::new(42)).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_mut(h).unwrap().seed(), 42);
        assert_eq!(registry.remove(h).unwrap().seed(), 42);
        assert!(registry.is_empty());
    }

    #[test]
    fn released_handle_is_invalid() {
        let mut registry = Registry::new();
        let h = registry.insert(RandomSource::new(1)).unwrap();
        registry.remove(h).unwrap();
        assert!(matches!(registry.get_mut(h), Err(Error::InvalidHandle(n)) if n == h.get()));
        assert!(matches!(registry.remove(h), Err(Error::InvalidHandle(_))));
    }

    #[test]
    fn handles_are_not_reused() {
        let mut registry = Registry::new();
        let a = registry.insert(RandomSource::new(1)).unwrap();
        registry.remove(a).unwrap();
        let b = registry.insert(RandomSource::new(1)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrapped_counter_skips_zero_and_live_tokens() {
        let mut registry = Registry::new();
        let first = registry.insert(RandomSource::new(1)).unwrap();
        assert_eq!(first.get(), 1);
        registry.next = usize::MAX - 1;
        let last = registry.insert(RandomSource::new(2)).unwrap();
        assert_eq!(last.get(), usize::MAX);
        let wrapped = registry.insert(RandomSource::new(3)).unwrap();
        assert_eq!(wrapped.get(), 2);
    }

    #[test]
    fn raw_round_trip_and_null() {
        let mut registry = Registry::new();
        let h = registry.insert(RandomSource::new(1)).unwrap();
        assert_eq!(Handle::from_raw(h.into_raw()).unwrap(), h);
        assert!(matches!(
            Handle::from_raw(std::ptr::null_mut()),
            Err(Error::InvalidHandle(0))
        ));
    }
}
