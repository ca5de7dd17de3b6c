use std::fmt;

use seqkit_common::{error::Error, verify_arg, Result};

use crate::GrowthPolicy;

/// A fixed-capacity sequence of `i32` values with positional insert and remove.
///
/// `BoundedSequence` owns a contiguous block of `capacity` slots and tracks how many
/// of them, starting from slot zero, currently hold meaningful values. Elements at
/// logical indices `0..len()` are the sequence contents in order; slots past `len()`
/// are scratch space and are never observable through the public API.
///
/// Every mutating call has a statically known worst case: appends and tail removals
/// are O(1), positional insert and remove shift the tail by one slot and are
/// O(len - index). When the sequence is full, inserting fails with
/// `CapacityExceeded` unless the sequence was created with [`GrowthPolicy::Doubling`].
///
/// # Examples
///
/// ```
/// use seqkit_bounded_seq::BoundedSequence;
///
/// let mut seq = BoundedSequence::new(10).unwrap();
/// seq.append(10).unwrap();
/// seq.append(20).unwrap();
/// seq.append(30).unwrap();
/// seq.insert_at(1, 15).unwrap();
/// assert_eq!(seq.to_string(), "[10, 15, 20, 30]");
///
/// assert_eq!(seq.remove_at(1).unwrap(), 15);
/// assert_eq!(seq.index_of(30), Some(2));
/// assert_eq!(seq.index_of(99), None);
/// ```
#[derive(Clone)]
pub struct BoundedSequence {
    /// Backing slots; `storage.len()` is the capacity.
    storage: Box<[i32]>,
    /// Number of leading slots holding live elements.
    len: usize,
    policy: GrowthPolicy,
}

impl BoundedSequence {
    /// Creates an empty sequence with room for exactly `capacity` elements.
    ///
    /// Fails with `InvalidArgument` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<BoundedSequence> {
        Self::with_policy(capacity, GrowthPolicy::Fixed)
    }

    /// Creates an empty sequence with the given initial capacity and growth policy.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Result<BoundedSequence> {
        verify_arg!(capacity, capacity > 0);
        Ok(BoundedSequence {
            storage: vec![0; capacity].into_boxed_slice(),
            len: 0,
            policy,
        })
    }

    /// Creates a fixed-capacity sequence pre-populated with `values`.
    pub fn from_slice(capacity: usize, values: &[i32]) -> Result<BoundedSequence> {
        let mut seq = Self::new(capacity)?;
        if values.len() > capacity {
            return Err(Error::capacity_exceeded("from_slice", capacity));
        }
        seq.storage[..values.len()].copy_from_slice(values);
        seq.len = values.len();
        Ok(seq)
    }

    /// Returns the number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Returns the number of slots currently allocated.
    ///
    /// Constant for [`GrowthPolicy::Fixed`] sequences.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.as_slice().iter().copied()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.check_index("get", index)?;
        Ok(self.storage[index])
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_index("set", index)?;
        self.storage[index] = value;
        Ok(())
    }

    /// Returns the last element without removing it, or `None` when empty.
    pub fn last(&self) -> Option<i32> {
        self.as_slice().last().copied()
    }

    /// Appends `value` after the current last element.
    pub fn append(&mut self, value: i32) -> Result<()> {
        self.reserve_one("append")?;
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, moving every element at or after `index` one slot
    /// toward the end.
    ///
    /// `index` may equal `len()`, in which case this is an append. For a
    /// [`GrowthPolicy::Fixed`] sequence capacity is checked before the index; a
    /// growable sequence checks the index first so a rejected call never
    /// reallocates.
    pub fn insert_at(&mut self, index: usize, value: i32) -> Result<()> {
        if self.policy == GrowthPolicy::Fixed {
            self.reserve_one("insert_at")?;
            self.check_insert_index(index)?;
        } else {
            self.check_insert_index(index)?;
            self.reserve_one("insert_at")?;
        }
        // Overlapping move: `copy_within` copies as if through a temporary buffer,
        // so the highest slot is written first and no unread value is clobbered.
        self.storage.copy_within(index..self.len, index + 1);
        self.storage[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn remove_last(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(Error::underflow("remove_last"));
        }
        self.len -= 1;
        Ok(self.storage[self.len])
    }

    /// Removes and returns the element at `index`, moving every later element one
    /// slot toward the start.
    pub fn remove_at(&mut self, index: usize) -> Result<i32> {
        self.check_index("remove_at", index)?;
        let removed = self.storage[index];
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(removed)
    }

    /// Returns the first index holding `value`, or `None`.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        seqkit_search::linear_search(self.as_slice(), value)
    }

    /// Linear search over the live elements.
    pub fn linear_search(&self, target: i32) -> Option<usize> {
        seqkit_search::linear_search(self.as_slice(), target)
    }

    /// Binary search over the live elements.
    ///
    /// The contents must be sorted ascending; otherwise the result is unspecified
    /// (but never out of bounds).
    pub fn binary_search(&self, target: i32) -> Option<usize> {
        seqkit_search::binary_search(self.as_slice(), target)
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    fn check_index(&self, op: &'static str, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::out_of_range(op, index, self.len))
        }
    }

    #[inline]
    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index <= self.len {
            Ok(())
        } else {
            Err(Error::out_of_range("insert_at", index, self.len))
        }
    }

    /// Ensures there is room for one more element, growing the storage if the
    /// policy allows it.
    fn reserve_one(&mut self, op: &'static str) -> Result<()> {
        if !self.is_full() {
            return Ok(());
        }
        let capacity = self.capacity();
        let Some(new_capacity) = self.policy.next_capacity(capacity) else {
            return Err(Error::capacity_exceeded(op, capacity));
        };
        log::debug!("{op}: growing sequence storage {capacity} -> {new_capacity}");
        let mut storage = vec![0; new_capacity].into_boxed_slice();
        storage[..self.len].copy_from_slice(self.as_slice());
        self.storage = storage;
        Ok(())
    }
}

impl PartialEq for BoundedSequence {
    /// Two sequences are equal when their live elements are equal; capacity and
    /// growth policy are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for BoundedSequence {}

impl fmt::Debug for BoundedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedSequence")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("policy", &self.policy)
            .finish()
    }
}

impl fmt::Display for BoundedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a BoundedSequence {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
