//! Lock primitive used by the graph container.
//!
//! Normal builds use `parking_lot::RwLock`. Builds with `--cfg loom` and the
//! `loom` feature swap in `loom::sync::RwLock` behind the same guard-returning
//! API so the container's lock discipline can be model-checked.
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test -p simple-graph --features loom --release
//! ```

#[cfg(not(all(loom, feature = "loom")))]
pub(crate) use parking_lot::RwLock;

#[cfg(all(loom, feature = "loom"))]
pub(crate) use self::loom_lock::RwLock;

#[cfg(all(loom, feature = "loom"))]
mod loom_lock {
    use std::sync::PoisonError;

    /// Poison-free facade over `loom::sync::RwLock`.
    #[derive(Debug)]
    pub(crate) struct RwLock<T>(loom::sync::RwLock<T>);

    impl<T> RwLock<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(loom::sync::RwLock::new(value))
        }

        pub(crate) fn read(&self) -> loom::sync::RwLockReadGuard<'_, T> {
            self.0.read().unwrap_or_else(PoisonError::into_inner)
        }

        pub(crate) fn write(&self) -> loom::sync::RwLockWriteGuard<'_, T> {
            self.0.write().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
