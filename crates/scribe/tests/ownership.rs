//! Move-only ownership, swapping, and the null-terminated view.

use scribe::prelude::*;

fn consume(buf: TextBuf) -> Vec<u8> {
    buf.into_vec()
}

#[test]
fn take_moves_content_and_empties_source() {
    let mut a = TextBuf::new();
    a.append("original content");
    let cap = a.capacity();

    let b = a.take();
    assert_eq!(a.capacity(), 0);
    assert_eq!(a.len(), 0);
    assert_eq!(b, "original content");
    assert_eq!(b.capacity(), cap);
}

#[test]
fn plain_move_keeps_block() {
    let mut a = TextBuf::with_capacity(32);
    a.append(12345u32);
    let ptr = a.as_ptr();
    let b = a;
    assert_eq!(b.as_ptr(), ptr);
    assert_eq!(consume(b), b"12345");
}

#[test]
fn swap_is_constant_time_exchange() {
    let mut a = TextBuf::from("one");
    let mut b = TextBuf::from("two!");
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    a.swap(&mut b);
    assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
    assert_eq!(a, "two!");
    assert_eq!(b, "one");
}

#[test]
fn null_terminated_view_of_hi() {
    let mut buf = TextBuf::new();
    buf.append("hi");
    let view = buf.as_null_terminated();
    assert_eq!(view.len(), 3);
    assert_eq!(view[2], 0);
    assert_eq!(&view[..2], b"hi");
    assert_eq!(buf.len(), 2);

    // The terminator sits in spare capacity and is overwritten by later appends.
    buf.append('!');
    assert_eq!(buf, "hi!");
}

#[test]
fn buffer_moves_across_threads() {
    let mut buf = TextBuf::new();
    buf.append("main:");
    let handle = std::thread::spawn(move || {
        buf.append("worker");
        buf
    });
    let buf = handle.join().unwrap();
    assert_eq!(buf, "main:worker");
}

#[test]
fn growth_is_amortized() {
    let mut buf = TextBuf::new();
    let mut reallocations = 0;
    let mut last_cap = buf.capacity();
    for i in 0..10_000u32 {
        buf.append(i).append(',');
        if buf.capacity() != last_cap {
            assert!(buf.capacity() > last_cap);
            reallocations += 1;
            last_cap = buf.capacity();
        }
        assert!(buf.len() <= buf.capacity());
    }
    assert!(reallocations < 40, "{reallocations} reallocations");
}
