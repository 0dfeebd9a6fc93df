//! Node allocators with stable, generation-checked handles.
//!
//! A pool hands out a [`NodeRef`] for every value it stores. The handle stays
//! valid until the value is freed; after that the slot's generation moves on and
//! the old handle no longer resolves, even once the slot is reused. A slot whose
//! generation is exhausted is retired instead of wrapping back to an old value.

use alloc::vec::Vec;
use core::fmt;

/// A handle to a node stored in a pool.
///
/// Handles are plain `Copy` values made of a slot index and the generation of
/// the slot at allocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

impl NodeRef {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index of the handle.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns the slot generation the handle was issued for.
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Error returned when a pool refuses an allocation.
///
/// Carries the value that could not be stored so the caller gets it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError<T>(pub T);

impl<T> AllocError<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for AllocError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node allocation failed")
    }
}

impl<T: fmt::Debug> core::error::Error for AllocError<T> {}

/// A trait for the allocator backing a chain.
///
/// This is the only collaborator of [`Chain`](super::list::Chain). Hosts that
/// need a custom heap provide their own implementation.
pub trait NodeAlloc<T> {
    /// Stores `value` and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns the value inside [`AllocError`] when no slot can be provided.
    fn allocate(&mut self, value: T) -> Result<NodeRef, AllocError<T>>;

    /// Frees the slot behind `node` and returns its value.
    ///
    /// Returns `None` if the handle is dead or was never issued by this pool.
    fn free(&mut self, node: NodeRef) -> Option<T>;

    /// Get the value behind a live handle
    fn get(&self, node: NodeRef) -> Option<&T>;

    /// Get a mutable reference to the value behind a live handle
    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T>;

    /// Get the number of live slots
    fn len(&self) -> usize;

    /// Check if no slot is in use
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the maximum number of live slots, `None` if only bounded by the heap
    fn capacity(&self) -> Option<usize>;
}

enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
    Retired,
}

fn lookup<T>(slots: &[Slot<T>], node: NodeRef) -> Option<&T> {
    match slots.get(node.index()) {
        Some(Slot::Occupied { generation, value }) if *generation == node.generation => Some(value),
        _ => None,
    }
}

fn lookup_mut<T>(slots: &mut [Slot<T>], node: NodeRef) -> Option<&mut T> {
    match slots.get_mut(node.index()) {
        Some(Slot::Occupied { generation, value }) if *generation == node.generation => Some(value),
        _ => None,
    }
}

/// Fills the vacant slot at `index`, returning the new handle and the next free slot.
fn occupy<T>(slots: &mut [Slot<T>], index: u32, value: T) -> (NodeRef, Option<u32>) {
    let slot = &mut slots[index as usize];
    let (generation, next_free) = match *slot {
        Slot::Vacant { generation, next_free } => (generation, next_free),
        Slot::Occupied { .. } | Slot::Retired => {
            unreachable!("free list points at a slot in use or retired")
        }
    };
    *slot = Slot::Occupied { generation, value };
    (NodeRef::new(index, generation), next_free)
}

/// Vacates the slot behind `node` and pushes it on the free list.
///
/// A slot at the last generation is retired and never handed out again.
fn vacate<T>(slots: &mut [Slot<T>], node: NodeRef, free_head: &mut Option<u32>) -> Option<T> {
    let slot = slots.get_mut(node.index())?;
    match slot {
        Slot::Occupied { generation, .. } if *generation == node.generation => {}
        _ => return None,
    }

    let next = match node.generation.checked_add(1) {
        Some(generation) => Slot::Vacant {
            generation,
            next_free: *free_head,
        },
        None => Slot::Retired,
    };
    let reusable = matches!(next, Slot::Vacant { .. });
    match core::mem::replace(slot, next) {
        Slot::Occupied { value, .. } => {
            if reusable {
                *free_head = Some(node.index);
            }
            Some(value)
        }
        Slot::Vacant { .. } | Slot::Retired => unreachable!(),
    }
}

/// Moves the vacant slot at `index` to `generation`.
#[cfg(test)]
fn force_generation<T>(slots: &mut [Slot<T>], index: usize, generation: u32) {
    match &mut slots[index] {
        Slot::Vacant { generation: current, .. } => *current = generation,
        _ => panic!("slot {index} is not vacant"),
    }
}

/// A growable pool on the global heap.
///
/// Freed slots are recycled before the pool grows. Both growth and
/// [`with_capacity`](Self::with_capacity) go through [`Vec::try_reserve`], so
/// heap exhaustion surfaces as [`AllocError`] instead of aborting.
pub struct HeapPool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> HeapPool<T> {
    /// Creates an empty pool without allocating.
    pub const fn new() -> Self {
        HeapPool {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns the requested capacity if the heap cannot provide it.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError<usize>> {
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            return Err(AllocError(capacity));
        }
        Ok(HeapPool {
            slots,
            free_head: None,
            len: 0,
        })
    }

    #[cfg(test)]
    pub(crate) fn force_generation(&mut self, index: usize, generation: u32) {
        force_generation(&mut self.slots, index, generation);
    }
}

impl<T> Default for HeapPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeAlloc<T> for HeapPool<T> {
    fn allocate(&mut self, value: T) -> Result<NodeRef, AllocError<T>> {
        if let Some(index) = self.free_head {
            let (node, next_free) = occupy(&mut self.slots, index, value);
            self.free_head = next_free;
            self.len += 1;
            return Ok(node);
        }

        let index = match u32::try_from(self.slots.len()) {
            Ok(index) => index,
            Err(_) => return Err(AllocError(value)),
        };
        if self.slots.try_reserve(1).is_err() {
            return Err(AllocError(value));
        }
        self.slots.push(Slot::Occupied { generation: 0, value });
        self.len += 1;
        Ok(NodeRef::new(index, 0))
    }

    fn free(&mut self, node: NodeRef) -> Option<T> {
        let value = vacate(&mut self.slots, node, &mut self.free_head)?;
        self.len -= 1;
        Some(value)
    }

    fn get(&self, node: NodeRef) -> Option<&T> {
        lookup(&self.slots, node)
    }

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        lookup_mut(&mut self.slots, node)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}

/// A pool of `N` slots held inline, for targets without a heap.
///
/// The pool can live in a `static` cell or on the stack. Allocation fails once
/// all `N` slots are live, or once every free slot has been retired.
pub struct FixedPool<T, const N: usize> {
    slots: [Slot<T>; N],
    free_head: Option<u32>,
    len: usize,
}

impl<T, const N: usize> FixedPool<T, N> {
    /// Creates a pool with every slot free.
    ///
    /// # Panics
    ///
    /// Panics if `N` does not fit a slot index.
    pub fn new() -> Self {
        assert!(N <= u32::MAX as usize, "FixedPool capacity exceeds u32 indices");
        let slots = core::array::from_fn(|i| Slot::Vacant {
            generation: 0,
            next_free: if i + 1 < N { Some(i as u32 + 1) } else { None },
        });
        FixedPool {
            slots,
            free_head: if N > 0 { Some(0) } else { None },
            len: 0,
        }
    }
}

#[cfg(test)]
impl<T, const N: usize> FixedPool<T, N> {
    pub(crate) fn force_generation(&mut self, index: usize, generation: u32) {
        force_generation(&mut self.slots, index, generation);
    }
}

impl<T, const N: usize> Default for FixedPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> NodeAlloc<T> for FixedPool<T, N> {
    fn allocate(&mut self, value: T) -> Result<NodeRef, AllocError<T>> {
        let Some(index) = self.free_head else {
            return Err(AllocError(value));
        };
        let (node, next_free) = occupy(&mut self.slots, index, value);
        self.free_head = next_free;
        self.len += 1;
        Ok(node)
    }

    fn free(&mut self, node: NodeRef) -> Option<T> {
        let value = vacate(&mut self.slots, node, &mut self.free_head)?;
        self.len -= 1;
        Some(value)
    }

    fn get(&self, node: NodeRef) -> Option<&T> {
        lookup(&self.slots, node)
    }

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        lookup_mut(&mut self.slots, node)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(N)
    }
}

/// Caps the number of live slots of another pool.
///
/// Useful to keep a heap-backed chain within a memory budget, and to force
/// allocation failures at a chosen point.
pub struct Limited<A> {
    inner: A,
    max_live: usize,
}

impl<A> Limited<A> {
    /// Wraps `inner`, refusing allocations once `max_live` slots are live.
    pub const fn new(inner: A, max_live: usize) -> Self {
        Limited { inner, max_live }
    }

    /// Get the configured cap
    pub const fn max_live(&self) -> usize {
        self.max_live
    }

    /// Returns the wrapped pool.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<T, A> NodeAlloc<T> for Limited<A>
where
    A: NodeAlloc<T>,
{
    fn allocate(&mut self, value: T) -> Result<NodeRef, AllocError<T>> {
        if self.inner.len() >= self.max_live {
            return Err(AllocError(value));
        }
        self.inner.allocate(value)
    }

    fn free(&mut self, node: NodeRef) -> Option<T> {
        self.inner.free(node)
    }

    fn get(&self, node: NodeRef) -> Option<&T> {
        self.inner.get(node)
    }

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.inner.get_mut(node)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> Option<usize> {
        Some(match self.inner.capacity() {
            Some(inner) => inner.min(self.max_live),
            None => self.max_live,
        })
    }
}
