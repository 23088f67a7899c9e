//! Element lifecycle strategies
//!
//! A container never copies, drops, or conjures elements on its own. It asks
//! its [`ElementOps`] value, which is chosen once at construction.

use std::fmt;

/// Copy, destroy, and default-construct operations for elements of type `T`
pub trait ElementOps<T> {
    /// Produce the value the container will own from a caller's value
    fn duplicate(&self, value: &T) -> T;

    /// Release an element that is leaving the container
    fn destroy(&self, value: T) {
        drop(value);
    }

    /// Produce a fresh element for slots opened by `resize`
    fn make_default(&self) -> T;
}

/// Store handles as-is.
///
/// Duplicating clones the handle itself, so for `&U`, `Rc<U>` or `Option<&U>`
/// the referent is shared rather than copied. Destroying drops only the
/// handle, and the default element is `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shallow;

impl<T: Clone + Default> ElementOps<T> for Shallow {
    fn duplicate(&self, value: &T) -> T {
        value.clone()
    }

    fn make_default(&self) -> T {
        T::default()
    }
}

type DuplicateFn<T> = Box<dyn Fn(&T) -> T>;
type DestroyFn<T> = Box<dyn Fn(T)>;
type DefaultFn<T> = Box<dyn Fn() -> T>;

/// Caller-supplied lifecycle operations.
///
/// Any operation left unset keeps the [`Shallow`] behavior.
pub struct Callbacks<T> {
    duplicate: DuplicateFn<T>,
    destroy: DestroyFn<T>,
    make_default: DefaultFn<T>,
}

impl<T: Clone + Default + 'static> Callbacks<T> {
    pub fn new() -> Self {
        Self {
            duplicate: Box::new(|value: &T| value.clone()),
            destroy: Box::new(drop::<T>),
            make_default: Box::new(T::default),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Callbacks<T> {
    /// Build from all three operations, with no bounds on `T`
    pub fn from_fns<D, X, M>(duplicate: D, destroy: X, make_default: M) -> Self
    where
        D: Fn(&T) -> T + 'static,
        X: Fn(T) + 'static,
        M: Fn() -> T + 'static,
    {
        Self {
            duplicate: Box::new(duplicate),
            destroy: Box::new(destroy),
            make_default: Box::new(make_default),
        }
    }

    pub fn with_duplicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        self.duplicate = Box::new(f);
        self
    }

    pub fn with_destroy<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        self.destroy = Box::new(f);
        self
    }

    pub fn with_make_default<F>(mut self, f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.make_default = Box::new(f);
        self
    }
}

impl<T> ElementOps<T> for Callbacks<T> {
    fn duplicate(&self, value: &T) -> T {
        (self.duplicate)(value)
    }

    fn destroy(&self, value: T) {
        (self.destroy)(value)
    }

    fn make_default(&self) -> T {
        (self.make_default)()
    }
}

impl<T> fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_shallow_shares_referent() {
        let shared = Rc::new(String::from("hello"));
        let copy: Rc<String> = Shallow.duplicate(&shared);
        assert!(Rc::ptr_eq(&shared, &copy));
        assert_eq!(Rc::strong_count(&shared), 2);

        ElementOps::<Rc<String>>::destroy(&Shallow, copy);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_shallow_default_is_null_handle() {
        let value: Option<&str> = Shallow.make_default();
        assert!(value.is_none());
    }

    #[test]
    fn test_callbacks_fall_back_to_shallow() {
        let ops = Callbacks::<i32>::new();
        assert_eq!(ops.duplicate(&7), 7);
        assert_eq!(ops.make_default(), 0);
    }

    #[test]
    fn test_callbacks_override() {
        let destroyed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&destroyed);

        let ops = Callbacks::<i32>::new()
            .with_duplicate(|v| v * 10)
            .with_destroy(move |_| counter.set(counter.get() + 1))
            .with_make_default(|| -1);

        assert_eq!(ops.duplicate(&3), 30);
        assert_eq!(ops.make_default(), -1);
        ops.destroy(30);
        ops.destroy(-1);
        assert_eq!(destroyed.get(), 2);
    }

    #[test]
    fn test_callbacks_from_fns_without_bounds() {
        struct Token(u32);

        let ops = Callbacks::from_fns(|t: &Token| Token(t.0 + 1), drop, || Token(0));
        assert_eq!(ops.duplicate(&Token(4)).0, 5);
        assert_eq!(ops.make_default().0, 0);
    }
}
