//! Low-level primitives for buffer memory.
//!
//! The only module in the workspace that talks to the allocator. Blocks are
//! byte arrays (`align = 1`) obtained from the global allocator, which is
//! what `Vec<u8>` uses, so ownership can be handed to a `Vec` unchanged.
//!
//! Every byte of a block is initialized: fresh blocks come back zeroed and
//! [`reallocate`] zero-fills any grown tail. Callers can therefore view the
//! whole block as `&[u8]`.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::BufError;

fn layout(capacity: usize) -> Result<Layout, BufError> {
    Layout::array::<u8>(capacity).map_err(|_| BufError::CapacityOverflow)
}

/// Allocate a zeroed block of `capacity` bytes. `capacity` must be non-zero.
pub(crate) fn allocate_zeroed(capacity: usize) -> Result<NonNull<u8>, BufError> {
    debug_assert!(capacity > 0);
    let layout = layout(capacity)?;
    // SAFETY: layout has non-zero size.
    let ptr = unsafe { alloc::alloc_zeroed(layout) };
    NonNull::new(ptr).ok_or(BufError::AllocFailed {
        requested: capacity,
    })
}

/// Move a block to `new_capacity` bytes, keeping the first
/// `min(old_capacity, new_capacity)` bytes and zeroing the rest.
///
/// On error the original block is untouched and still owned by the caller.
///
/// # Safety
///
/// `ptr` must come from [`allocate_zeroed`] or [`reallocate`] with exactly
/// `old_capacity` bytes, and must not be used again if this returns `Ok`.
pub(crate) unsafe fn reallocate(
    ptr: NonNull<u8>,
    old_capacity: usize,
    new_capacity: usize,
) -> Result<NonNull<u8>, BufError> {
    debug_assert!(new_capacity > 0);
    // Validate the new size before handing anything to the allocator.
    layout(new_capacity)?;
    // SAFETY: the old layout is the one the block was allocated with (caller
    // contract), and `new_capacity` is non-zero and fits a valid layout.
    let new_ptr = unsafe {
        alloc::realloc(
            ptr.as_ptr(),
            Layout::from_size_align_unchecked(old_capacity, 1),
            new_capacity,
        )
    };
    let new_ptr = NonNull::new(new_ptr).ok_or(BufError::AllocFailed {
        requested: new_capacity,
    })?;
    if new_capacity > old_capacity {
        // SAFETY: `[old_capacity, new_capacity)` lies inside the new block.
        unsafe {
            new_ptr
                .as_ptr()
                .add(old_capacity)
                .write_bytes(0, new_capacity - old_capacity);
        }
    }
    Ok(new_ptr)
}

/// Release a block.
///
/// # Safety
///
/// `ptr` must come from [`allocate_zeroed`] or [`reallocate`] with exactly
/// `capacity` bytes and must not be used afterwards.
pub(crate) unsafe fn free(ptr: NonNull<u8>, capacity: usize) {
    // SAFETY: same layout the block was allocated with (caller contract).
    unsafe { alloc::dealloc(ptr.as_ptr(), Layout::from_size_align_unchecked(capacity, 1)) }
}

/// View a whole block.
///
/// # Safety
///
/// `ptr` must be a live block of `capacity` initialized bytes, not mutated
/// for the lifetime `'a`.
#[inline]
pub(crate) unsafe fn bytes<'a>(ptr: NonNull<u8>, capacity: usize) -> &'a [u8] {
    // SAFETY: caller contract.
    unsafe { std::slice::from_raw_parts(ptr.as_ptr(), capacity) }
}

/// Mutably view a whole block.
///
/// # Safety
///
/// `ptr` must be a live block of `capacity` initialized bytes with no other
/// live reference for the lifetime `'a`.
#[inline]
pub(crate) unsafe fn bytes_mut<'a>(ptr: NonNull<u8>, capacity: usize) -> &'a mut [u8] {
    // SAFETY: caller contract.
    unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr(), capacity) }
}

/// Abort on an error from the infallible growth path.
///
/// Size overflow panics (as `Vec` does); allocator exhaustion goes to
/// [`alloc::handle_alloc_error`], which aborts the process by default.
#[cold]
#[inline(never)]
pub(crate) fn fatal(err: BufError) -> ! {
    match err {
        BufError::AllocFailed { requested } => match layout(requested) {
            Ok(layout) => alloc::handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
        _ => panic!("capacity overflow"),
    }
}
