//! The [`ArrayD`] container.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// Largest capacity the allocator can serve for `f64` elements.
const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Growable, exclusively-owned array of `f64`.
///
/// Storage is a boxed slice whose length is the capacity; the logical
/// size is tracked separately. Slots in `[size, capacity)` hold stale or
/// zero data and are never exposed.
///
/// Cloning allocates independent storage of the same capacity.
#[derive(Clone)]
pub struct ArrayD {
    /// Backing storage. `storage.len()` is the capacity.
    storage: Box<[f64]>,
    /// Logical element count, always `<= storage.len()`.
    size: usize,
    config: ArrayConfig,
}

impl ArrayD {
    /// Create an empty array with no storage and the default growth policy.
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            size: 0,
            config: ArrayConfig::default(),
        }
    }

    /// Create an empty array with a custom growth policy.
    ///
    /// Returns `InvalidArgument` if the policy does not grow geometrically.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Create an array of `size` zero-initialised elements.
    ///
    /// Capacity equals `size`. Returns `InvalidArgument` for a negative size.
    pub fn with_size(size: isize) -> Result<Self, ArrayError> {
        let len = checked_len(size)?;
        Ok(Self {
            storage: zeroed_storage(len)?,
            size: len,
            config: ArrayConfig::default(),
        })
    }

    /// Logical element count.
    pub fn size(&self) -> isize {
        self.size as isize
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> isize {
        self.storage.len() as isize
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The growth policy in use.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The logical elements `[0, size)` as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.storage[..self.size]
    }

    /// The logical elements `[0, size)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.storage[..self.size]
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: isize) -> Result<&f64, ArrayError> {
        let i = self.check_index(index)?;
        Ok(&self.storage[i])
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut f64, ArrayError> {
        let i = self.check_index(index)?;
        Ok(&mut self.storage[i])
    }

    /// Change the logical size to `new_size`.
    ///
    /// Within capacity this only moves the size; slots that become visible
    /// are zeroed. Beyond capacity the storage is reallocated to exactly
    /// `new_size` slots, preserving existing elements. If that allocation
    /// fails the array is left as it was.
    pub fn resize(&mut self, new_size: isize) -> Result<(), ArrayError> {
        let new_len = checked_len(new_size)?;
        if new_len > self.storage.len() {
            self.reallocate(new_len)?;
        } else if new_len > self.size {
            self.storage[self.size..new_len].fill(0.0);
        }
        self.size = new_len;
        Ok(())
    }

    /// Ensure at least `capacity` slots are allocated. Never shrinks.
    pub fn reserve(&mut self, capacity: isize) -> Result<(), ArrayError> {
        let cap = checked_len(capacity)?;
        if cap > self.storage.len() {
            self.reallocate(cap)?;
        }
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, size)` one slot right.
    ///
    /// `index == size` appends. Grows capacity per the [`ArrayConfig`]
    /// when the array is full.
    pub fn insert(&mut self, value: f64, index: isize) -> Result<(), ArrayError> {
        if index < 0 || index as usize > self.size {
            return Err(ArrayError::OutOfRange {
                index,
                bound: self.size() + 1,
            });
        }
        let i = index as usize;
        if self.size == self.storage.len() {
            self.grow()?;
        }
        self.storage.copy_within(i..self.size, i + 1);
        self.storage[i] = value;
        self.size += 1;
        Ok(())
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: f64) -> Result<(), ArrayError> {
        self.insert(value, self.size())
    }

    /// Remove and return the element at `index`, shifting `(index, size)`
    /// one slot left. Capacity is unchanged.
    pub fn remove(&mut self, index: isize) -> Result<f64, ArrayError> {
        let i = self.check_index(index)?;
        let value = self.storage[i];
        self.storage.copy_within(i + 1..self.size, i);
        self.size -= 1;
        Ok(value)
    }

    /// Remove and return the last element, if any.
    pub fn pop(&mut self) -> Option<f64> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(self.storage[self.size])
    }

    /// Drop all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Release unused capacity so that `capacity() == size()`.
    ///
    /// Keeps the current storage if the smaller allocation fails.
    pub fn shrink_to_fit(&mut self) {
        if self.storage.len() > self.size {
            let _ = self.reallocate(self.size);
        }
    }

    fn check_index(&self, index: isize) -> Result<usize, ArrayError> {
        if index < 0 || index as usize >= self.size {
            return Err(ArrayError::OutOfRange {
                index,
                bound: self.size(),
            });
        }
        Ok(index as usize)
    }

    /// Grow for one more element according to the growth policy.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let required = self.size + 1;
        if required > MAX_CAPACITY {
            return Err(ArrayError::InvalidArgument {
                reason: format!("capacity overflow: {required} elements"),
            });
        }
        let new_cap = self
            .config
            .next_capacity(self.storage.len(), required)
            .min(MAX_CAPACITY);
        self.reallocate(new_cap)
    }

    /// Move the logical elements into fresh zeroed storage of `capacity`
    /// slots. `capacity` must be at least `size`. On allocation failure the
    /// old storage is kept.
    fn reallocate(&mut self, capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(capacity >= self.size);
        let mut storage = zeroed_storage(capacity)?;
        storage[..self.size].copy_from_slice(&self.storage[..self.size]);
        self.storage = storage;
        Ok(())
    }
}

/// Allocate `capacity` zeroed slots, reporting allocator failure instead of
/// aborting.
fn zeroed_storage(capacity: usize) -> Result<Box<[f64]>, ArrayError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|err| ArrayError::InvalidArgument {
            reason: format!("cannot allocate {capacity} elements: {err}"),
        })?;
    storage.resize(capacity, 0.0);
    Ok(storage.into_boxed_slice())
}

/// Validate a signed size or capacity request.
fn checked_len(requested: isize) -> Result<usize, ArrayError> {
    if requested < 0 {
        return Err(ArrayError::InvalidArgument {
            reason: format!("negative size {requested}"),
        });
    }
    let len = requested as usize;
    if len > MAX_CAPACITY {
        return Err(ArrayError::InvalidArgument {
            reason: format!("size {requested} exceeds maximum capacity {MAX_CAPACITY}"),
        });
    }
    Ok(len)
}

impl Default for ArrayD {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics with the [`ArrayError`] message when `index` is out of range.
impl Index<isize> for ArrayD {
    type Output = f64;

    fn index(&self, index: isize) -> &f64 {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Panics with the [`ArrayError`] message when `index` is out of range.
impl IndexMut<isize> for ArrayD {
    fn index_mut(&mut self, index: isize) -> &mut f64 {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<&[f64]> for ArrayD {
    fn from(values: &[f64]) -> Self {
        Self {
            storage: values.into(),
            size: values.len(),
            config: ArrayConfig::default(),
        }
    }
}

impl From<Vec<f64>> for ArrayD {
    fn from(values: Vec<f64>) -> Self {
        let size = values.len();
        Self {
            storage: values.into_boxed_slice(),
            size,
            config: ArrayConfig::default(),
        }
    }
}

/// Equal when the logical contents match; capacity is ignored.
impl PartialEq for ArrayD {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for ArrayD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayD")
            .field("size", &self.size)
            .field("capacity", &self.storage.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for ArrayD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
