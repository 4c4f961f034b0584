//! The growable text buffer.
//!
//! A [`TextBuf`] owns one contiguous byte block. `len` bytes at the front
//! hold content; the rest of the block up to `capacity` is spare room that
//! formatters write into before the length is committed.

use std::borrow::Borrow;
use std::ffi::CStr;
use std::fmt;
use std::io;
use std::mem::{self, ManuallyDrop};
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;
use std::sync::atomic::{compiler_fence, Ordering};

use crate::append::Append;
use crate::config::{BufConfig, GrowthPolicy};
use crate::error::BufError;
use crate::raw;

/// Owned, growable byte buffer for building text.
///
/// The buffer is move-only: it has no `Clone`, and [`take`](Self::take)
/// or a plain Rust move are the only ways to hand the block to a new owner.
/// `len <= capacity` holds after every operation, capacity never shrinks,
/// and the block is released exactly once on drop.
///
/// ```
/// use scribe_buf::TextBuf;
///
/// let mut buf = TextBuf::new();
/// buf.append(true).append('-').append(42u32).append("end");
/// assert_eq!(buf.as_bytes(), b"true-42end");
/// ```
pub struct TextBuf {
    /// Owned block, `None` iff `cap == 0`.
    ptr: Option<NonNull<u8>>,
    cap: usize,
    len: usize,
    growth: GrowthPolicy,
}

// SAFETY: `TextBuf` uniquely owns its block and exposes it only through
// `&self`/`&mut self`, exactly like `Vec<u8>`.
#[allow(unsafe_code)]
unsafe impl Send for TextBuf {}

// SAFETY: no interior mutability; shared references only read.
#[allow(unsafe_code)]
unsafe impl Sync for TextBuf {}

impl TextBuf {
    /// Create an empty buffer. Nothing is allocated until the first write.
    pub const fn new() -> Self {
        Self {
            ptr: None,
            cap: 0,
            len: 0,
            growth: GrowthPolicy::Amortized,
        }
    }

    /// Create an empty buffer holding exactly `capacity` bytes.
    ///
    /// Allocation failure is fatal (see [`std::alloc::handle_alloc_error`]).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        buf.reserve(capacity);
        buf
    }

    /// Create a buffer from a [`BufConfig`].
    pub fn with_config(config: &BufConfig) -> Self {
        let mut buf = Self::with_capacity(config.initial_capacity);
        buf.growth = config.growth;
        buf
    }

    /// Number of content bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Bytes that can be written before the next reallocation.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// The growth policy in effect.
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Pointer to the first byte, dangling when nothing is allocated.
    ///
    /// Valid for `len()` reads until the next mutating call.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    #[inline]
    #[allow(unsafe_code)]
    fn block(&self) -> &[u8] {
        match self.ptr {
            // SAFETY: a live block of `cap` initialized bytes borrowed with `self`.
            Some(ptr) => unsafe { raw::bytes(ptr, self.cap) },
            None => &[],
        }
    }

    #[inline]
    #[allow(unsafe_code)]
    fn block_mut(&mut self) -> &mut [u8] {
        match self.ptr {
            // SAFETY: a live block of `cap` initialized bytes borrowed mutably with `self`.
            Some(ptr) => unsafe { raw::bytes_mut(ptr, self.cap) },
            None => &mut [],
        }
    }

    /// The content bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.block()[..self.len]
    }

    /// The content bytes, mutably.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.block_mut()[..len]
    }

    /// The spare region `[len, capacity)`.
    ///
    /// Bytes here are initialized but hold no content; write into them and
    /// then [`advance`](Self::advance) to commit.
    #[inline]
    pub fn spare_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.block_mut()[len..]
    }

    /// Commit `n` bytes written into [`spare_mut`](Self::spare_mut).
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`spare_capacity`](Self::spare_capacity).
    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.cap - self.len, "advance past capacity");
        self.len += n;
    }

    /// Set the logical size without a bounds check.
    ///
    /// Every byte below capacity is initialized, so shrinking or growing
    /// within capacity only changes which bytes count as content.
    ///
    /// # Safety
    ///
    /// `len` must not exceed [`capacity`](Self::capacity).
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.cap);
        self.len = len;
    }

    /// Reserve `additional` bytes, let `write` fill the spare region, and
    /// commit the count it returns.
    ///
    /// This is the hook for formatters outside this crate.
    ///
    /// # Panics
    ///
    /// Panics if `write` reports more bytes than the spare region holds.
    #[inline]
    pub fn append_with<F>(&mut self, additional: usize, write: F) -> &mut Self
    where
        F: FnOnce(&mut [u8]) -> usize,
    {
        self.ensure(additional);
        let n = write(self.spare_mut());
        self.advance(n);
        self
    }

    /// Grow to at least `capacity` bytes. Never shrinks.
    ///
    /// Unlike [`ensure`](Self::ensure), this allocates exactly `capacity`.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            raw::fatal(err);
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// On error the buffer is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), BufError> {
        if self.cap < capacity {
            self.realloc_to(capacity)?;
        }
        Ok(())
    }

    /// Make room for `additional` more bytes after the content.
    ///
    /// Grows by the buffer's [`GrowthPolicy`] when the spare region is too
    /// small. Allocation failure is fatal.
    #[inline]
    pub fn ensure(&mut self, additional: usize) {
        if self.cap - self.len < additional {
            self.grow_for(additional);
        }
    }

    /// Fallible [`ensure`](Self::ensure).
    ///
    /// On error the buffer is unchanged.
    pub fn try_ensure(&mut self, additional: usize) -> Result<(), BufError> {
        if self.cap - self.len < additional {
            let capacity = self
                .growth
                .next_capacity(self.cap, self.len, additional)
                .ok_or(BufError::CapacityOverflow)?;
            self.realloc_to(capacity)?;
        }
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn grow_for(&mut self, additional: usize) {
        if let Err(err) = self.try_ensure(additional) {
            raw::fatal(err);
        }
    }

    #[allow(unsafe_code)]
    fn realloc_to(&mut self, capacity: usize) -> Result<(), BufError> {
        debug_assert!(capacity > self.cap);
        let ptr = match self.ptr {
            None => raw::allocate_zeroed(capacity)?,
            // SAFETY: `ptr` is our block of exactly `cap` bytes; on success
            // it is replaced below and never touched again.
            Some(ptr) => unsafe { raw::reallocate(ptr, self.cap, capacity)? },
        };
        log::trace!("text buffer grown from {} to {} bytes", self.cap, capacity);
        self.ptr = Some(ptr);
        self.cap = capacity;
        Ok(())
    }

    /// Set the length to `len`, growing to exactly `len` bytes if needed.
    ///
    /// Exposed bytes are not cleared: they hold zeros or earlier content.
    /// Used after writing through [`spare_mut`](Self::spare_mut) or
    /// [`as_mut_bytes`](Self::as_mut_bytes).
    pub fn resize(&mut self, len: usize) {
        self.reserve(len);
        self.len = len;
    }

    /// Truncate to zero length, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Zero the content, then truncate to zero length.
    ///
    /// The zeroing uses volatile writes, so it is not optimized away even
    /// if the buffer is dropped right after.
    #[allow(unsafe_code)]
    pub fn secure_clear(&mut self) {
        for byte in self.as_mut_bytes() {
            // SAFETY: `byte` is a valid, exclusive reference.
            unsafe { std::ptr::write_volatile(byte, 0) };
        }
        compiler_fence(Ordering::SeqCst);
        log::trace!("text buffer securely cleared ({} bytes)", self.len);
        self.len = 0;
    }

    /// Append one byte.
    #[inline]
    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.ensure(1);
        let len = self.len;
        self.block_mut()[len] = byte;
        self.len += 1;
        self
    }

    /// Append `n` copies of `byte`.
    pub fn append_repeat(&mut self, n: usize, byte: u8) -> &mut Self {
        self.ensure(n);
        self.spare_mut()[..n].fill(byte);
        self.len += n;
        self
    }

    /// Append a byte slice.
    #[inline]
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        let n = bytes.len();
        self.ensure(n);
        self.spare_mut()[..n].copy_from_slice(bytes);
        self.len += n;
        self
    }

    /// Append the text form of `value`.
    ///
    /// See [`Append`] for the supported types. No separator is inserted.
    #[inline]
    pub fn append<T: Append>(&mut self, value: T) -> &mut Self {
        value.append_to(self);
        self
    }

    /// Write a `0` byte just past the content and return content plus
    /// terminator.
    ///
    /// `len` and the content are unchanged; the terminator lives in spare
    /// capacity and is overwritten by the next append.
    pub fn as_null_terminated(&mut self) -> &[u8] {
        let len = self.len;
        self.reserve(len + 1);
        self.block_mut()[len] = 0;
        &self.block()[..=len]
    }

    /// View the content as a C string.
    ///
    /// Writes the terminator like [`as_null_terminated`](Self::as_null_terminated).
    pub fn as_c_str(&mut self) -> Result<&CStr, BufError> {
        if let Some(position) = self.as_bytes().iter().position(|&b| b == 0) {
            return Err(BufError::InteriorNul { position });
        }
        let len = self.len;
        CStr::from_bytes_with_nul(self.as_null_terminated())
            .map_err(|_| BufError::InteriorNul { position: len })
    }

    /// View the content as UTF-8 text.
    pub fn as_str(&self) -> Result<&str, BufError> {
        std::str::from_utf8(self.as_bytes()).map_err(|e| BufError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// First content byte.
    pub fn front(&self) -> Option<&u8> {
        self.as_bytes().first()
    }

    /// Last content byte.
    pub fn back(&self) -> Option<&u8> {
        self.as_bytes().last()
    }

    /// First content byte, mutably.
    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_bytes().first_mut()
    }

    /// Last content byte, mutably.
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_bytes().last_mut()
    }

    /// Content byte at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](Self::len).
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &u8 {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len <= cap`.
        unsafe { self.block().get_unchecked(index) }
    }

    /// Move the block out, leaving this buffer empty with no allocation.
    ///
    /// The growth policy stays with both buffers.
    pub fn take(&mut self) -> TextBuf {
        let empty = TextBuf {
            ptr: None,
            cap: 0,
            len: 0,
            growth: self.growth,
        };
        mem::replace(self, empty)
    }

    /// Exchange blocks with `other` without reallocating.
    #[inline]
    pub fn swap(&mut self, other: &mut TextBuf) {
        mem::swap(self, other);
    }

    /// Hand the block to a `Vec<u8>` without copying.
    #[allow(unsafe_code)]
    pub fn into_vec(self) -> Vec<u8> {
        let this = ManuallyDrop::new(self);
        match this.ptr {
            // SAFETY: the block came from the global allocator with a `[u8; cap]`
            // layout, holds `len <= cap` initialized bytes, and `this` will
            // not free it.
            Some(ptr) => unsafe { Vec::from_raw_parts(ptr.as_ptr(), this.len, this.cap) },
            None => Vec::new(),
        }
    }
}

impl Drop for TextBuf {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: our block of exactly `cap` bytes, released once.
            unsafe { raw::free(ptr, self.cap) };
        }
    }
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for TextBuf {
    fn from(mut vec: Vec<u8>) -> Self {
        if vec.capacity() == 0 {
            return Self::new();
        }
        // Spare capacity must be initialized before the block is viewed as `&[u8]`.
        vec.spare_capacity_mut().fill(mem::MaybeUninit::new(0));
        let mut vec = ManuallyDrop::new(vec);
        Self {
            ptr: NonNull::new(vec.as_mut_ptr()),
            cap: vec.capacity(),
            len: vec.len(),
            growth: GrowthPolicy::default(),
        }
    }
}

impl From<&[u8]> for TextBuf {
    fn from(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len());
        buf.append_bytes(bytes);
        buf
    }
}

impl From<&str> for TextBuf {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<TextBuf> for Vec<u8> {
    fn from(buf: TextBuf) -> Self {
        buf.into_vec()
    }
}

impl AsRef<[u8]> for TextBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for TextBuf {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Index<usize> for TextBuf {
    type Output = u8;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl IndexMut<usize> for TextBuf {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.as_mut_bytes()[index]
    }
}

impl PartialEq for TextBuf {
    fn eq(&self, other: &TextBuf) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextBuf {}

impl PartialEq<[u8]> for TextBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for TextBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for TextBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Extend<u8> for TextBuf {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure(iter.size_hint().0);
        for byte in iter {
            self.push(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for TextBuf {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl fmt::Debug for TextBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuf")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl fmt::Write for TextBuf {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_bytes(s.as_bytes());
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append(c);
        Ok(())
    }
}

impl io::Write for TextBuf {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append_bytes(buf);
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.append_bytes(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
