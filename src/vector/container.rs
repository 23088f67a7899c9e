//! The growable array
//!
//! `Vector` owns a contiguous backing store and tracks its own capacity
//! according to a [`GrowthPolicy`], so the growth schedule is reproducible
//! regardless of how the allocator rounds requests. Every element that enters
//! goes through [`ElementOps::duplicate`] (or `make_default`), and every
//! element that leaves goes through [`ElementOps::destroy`] exactly once.
//!
//! References handed out by `get`, `at`, `front` and `back` borrow the
//! vector, so they cannot outlive the next mutating call.

use std::fmt;

use super::growth::GrowthPolicy;
use super::lifecycle::{ElementOps, Shallow};
use crate::error::{GrowError, Result};

pub struct Vector<T, O = Shallow>
where
    O: ElementOps<T>,
{
    elements: Vec<T>,
    capacity: usize,
    ops: O,
    policy: GrowthPolicy,
}

impl<T: Clone + Default> Vector<T, Shallow> {
    /// Create an empty vector that stores handles as-is
    pub fn new() -> Result<Self> {
        Self::with_ops(Shallow)
    }
}

impl<T, O: ElementOps<T>> Vector<T, O> {
    /// Create an empty vector using the given lifecycle operations
    pub fn with_ops(ops: O) -> Result<Self> {
        Self::with_policy(ops, GrowthPolicy::default())
    }

    /// Create an empty vector with explicit lifecycle operations and growth policy
    pub fn with_policy(ops: O, policy: GrowthPolicy) -> Result<Self> {
        let capacity = policy.capacity_for(policy.initial_capacity())?;
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|_| GrowError::AllocationFailed {
                requested: capacity,
            })?;

        Ok(Self {
            elements,
            capacity,
            ops,
            policy,
        })
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Ensure room for at least `n` elements. Never shrinks.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n <= self.capacity {
            return Ok(());
        }

        let new_capacity = self.policy.capacity_for(n)?;
        let additional = new_capacity - self.elements.len();
        self.elements
            .try_reserve_exact(additional)
            .map_err(|_| GrowError::AllocationFailed {
                requested: new_capacity,
            })?;

        log::debug!(
            "vector grew from {} to {} slots (requested {})",
            self.capacity,
            new_capacity,
            n
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Shrink by destroying the tail, or grow by filling with default elements
    pub fn resize(&mut self, n: usize) -> Result<()> {
        let len = self.elements.len();
        if n < len {
            log::trace!("resize destroying {} elements", len - n);
            for value in self.elements.drain(n..) {
                self.ops.destroy(value);
            }
        } else if n > len {
            self.reserve(n)?;
            for _ in len..n {
                self.elements.push(self.ops.make_default());
            }
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.elements.len();
        self.elements
            .get(index)
            .ok_or(GrowError::IndexOutOfBounds { index, len })
    }

    /// Mutable access to the slot at `index`
    pub fn at(&mut self, index: usize) -> Result<&mut T> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(GrowError::IndexOutOfBounds { index, len })
    }

    /// Replace the element at `index` with a duplicate of `value`.
    ///
    /// The previous occupant is destroyed.
    pub fn set(&mut self, index: usize, value: &T) -> Result<()> {
        let len = self.elements.len();
        if index >= len {
            return Err(GrowError::IndexOutOfBounds { index, len });
        }

        let copy = self.ops.duplicate(value);
        let previous = std::mem::replace(&mut self.elements[index], copy);
        self.ops.destroy(previous);
        Ok(())
    }

    pub fn front(&self) -> Result<&T> {
        self.elements.first().ok_or(GrowError::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.elements.first_mut().ok_or(GrowError::Empty)
    }

    pub fn back(&self) -> Result<&T> {
        self.elements.last().ok_or(GrowError::Empty)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.elements.last_mut().ok_or(GrowError::Empty)
    }

    /// Append a duplicate of `value`. Amortized O(1).
    pub fn push_back(&mut self, value: &T) -> Result<()> {
        let len = self.elements.len();
        if len + 1 > self.capacity {
            self.reserve(len + 1)?;
        }
        self.elements.push(self.ops.duplicate(value));
        Ok(())
    }

    /// Destroy the last element
    pub fn pop_back(&mut self) -> Result<()> {
        let value = self.elements.pop().ok_or(GrowError::Empty)?;
        self.ops.destroy(value);
        Ok(())
    }

    /// Insert a duplicate of `value` at `position`, shifting later elements right
    pub fn insert(&mut self, position: usize, value: &T) -> Result<()> {
        let len = self.elements.len();
        if position > len {
            return Err(GrowError::InsertOutOfBounds { position, len });
        }
        if len + 1 > self.capacity {
            self.reserve(len + 1)?;
        }
        self.elements.insert(position, self.ops.duplicate(value));
        Ok(())
    }

    /// Destroy the element at `position`, shifting later elements left
    pub fn erase(&mut self, position: usize) -> Result<()> {
        let len = self.elements.len();
        if position >= len {
            return Err(GrowError::IndexOutOfBounds {
                index: position,
                len,
            });
        }
        let value = self.elements.remove(position);
        self.ops.destroy(value);
        Ok(())
    }

    /// Destroy every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        if !self.elements.is_empty() {
            log::trace!("clear destroying {} elements", self.elements.len());
        }
        for value in self.elements.drain(..) {
            self.ops.destroy(value);
        }
    }

    /// Destroy every element and release the backing store
    pub fn destroy(mut self) {
        self.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Build a new vector holding duplicates of every element
    pub fn try_clone(&self) -> Result<Self>
    where
        O: Clone,
    {
        let mut copy = Self::with_policy(self.ops.clone(), self.policy)?;
        copy.reserve(self.capacity)?;
        for value in &self.elements {
            copy.push_back(value)?;
        }
        Ok(copy)
    }
}

impl<T, O: ElementOps<T>> Drop for Vector<T, O> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T, O: ElementOps<T>> IntoIterator for &'a Vector<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug, O: ElementOps<T>> fmt::Debug for Vector<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("elements", &self.elements)
            .field("capacity", &self.capacity)
            .finish()
    }
}
