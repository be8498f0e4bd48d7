//! Default algorithms shared by every iterable

use std::mem::MaybeUninit;

use crate::protocol::IteratorProtocol;

/// Move elements from `cursor` into `buf` until either runs out
///
/// Returns the cursor and the number of leading slots now initialized.
pub fn copy_into<I: IteratorProtocol>(
    mut cursor: I,
    buf: &mut [MaybeUninit<I::Element>],
) -> (I, usize) {
    let mut written = 0;
    for slot in buf.iter_mut() {
        match cursor.next() {
            Some(element) => {
                slot.write(element);
                written += 1;
            }
            None => break,
        }
    }
    (cursor, written)
}

/// Scan `cursor` for an element equal to `target`, stopping at the first hit
pub fn linear_contains<I>(mut cursor: I, target: &I::Element) -> bool
where
    I: IteratorProtocol,
    I::Element: PartialEq,
{
    while let Some(element) = cursor.next() {
        if element == *target {
            return true;
        }
    }
    false
}
