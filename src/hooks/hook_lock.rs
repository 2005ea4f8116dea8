use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Storage for a process-wide hook.
///
/// Spin locks never poison, so a hook that panicked while registering another
/// one cannot take report printing down with it.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Send + Sync>(RwLock<Option<T>>);

#[repr(transparent)]
pub(crate) struct HookLockReadGuard<T: 'static + Send + Sync>(RwLockReadGuard<'static, Option<T>>);

#[repr(transparent)]
pub(crate) struct HookLockWriteGuard<T: 'static + Send + Sync>(
    RwLockWriteGuard<'static, Option<T>>,
);

impl<T: 'static + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(RwLock::new(None))
    }

    #[inline]
    pub(crate) fn read(&'static self) -> HookLockReadGuard<T> {
        HookLockReadGuard(self.0.read())
    }

    #[inline]
    pub(crate) fn write(&'static self) -> HookLockWriteGuard<T> {
        HookLockWriteGuard(self.0.write())
    }
}

impl<T: 'static + Send + Sync> HookLockReadGuard<T> {
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: 'static + Send + Sync> HookLockWriteGuard<T> {
    #[inline]
    pub(crate) fn get(&mut self) -> &mut Option<T> {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LOCK: HookLock<u32> = HookLock::new();

    #[test]
    fn test_read_write() {
        assert_eq!(LOCK.read().get(), None);
        *LOCK.write().get() = Some(7);
        assert_eq!(LOCK.read().get(), Some(&7));
        *LOCK.write().get().get_or_insert_default() += 1;
        assert_eq!(LOCK.read().get().copied(), Some(8));
    }
}
