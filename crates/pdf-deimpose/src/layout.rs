//! Reading-order calculation for scanned booklet sheets
//!
//! A saddle-stitched booklet scanned flat produces one double-wide image per
//! physical sheet side, carrying one early page and one late page next to
//! each other ("head to tail"). For a two-sheet booklet the scans look like:
//!
//! ```text
//! +-----+-----+
//! |  4  |  1  |   physical page 1 (outside of the fold)
//! +-----+-----+
//! |  2  |  3  |   physical page 2 (inside of the fold)
//! +-----+-----+
//! ```
//!
//! Splitting every scan down the middle and renumbering the halves by the
//! rule below restores linear reading order 1, 2, 3, 4.

/// Which half of a double-wide scanned sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetHalf {
    /// Left half of the scan
    Left,
    /// Right half of the scan
    Right,
}

/// Calculate the reading-order position of one half of a physical page.
///
/// Even physical pages keep their own number on the left half and push the
/// right half to the tail of the book; odd physical pages do the opposite.
/// With `tail = num_pages * 2 - (page_num - 1)`:
///
/// - even `page_num`: left → `page_num`, right → `tail`
/// - odd  `page_num`: left → `tail`,     right → `page_num`
///
/// The mapping is a bijection from `{1..=num_pages} × {Left, Right}` onto
/// `{1..=2 * num_pages}`. Positions are 1-based. Calling this with
/// `page_num` outside `1..=num_pages` is a caller bug, not a handled error.
pub fn reading_position(page_num: usize, num_pages: usize, half: SheetHalf) -> usize {
    debug_assert!(
        (1..=num_pages).contains(&page_num),
        "page {page_num} outside 1..={num_pages}"
    );

    let tail = num_pages * 2 - (page_num - 1);
    match half {
        SheetHalf::Left if page_num % 2 == 0 => page_num,
        SheetHalf::Left => tail,
        SheetHalf::Right if page_num % 2 == 0 => tail,
        SheetHalf::Right => page_num,
    }
}

/// The inverse permutation: which physical `(page, half)` supplies each
/// reading position.
///
/// Index `pos - 1` of the returned vector names the half that ends up at
/// reading position `pos`.
pub fn reading_order(num_pages: usize) -> Vec<(usize, SheetHalf)> {
    let mut order = vec![(0, SheetHalf::Left); num_pages * 2];
    for page_num in 1..=num_pages {
        for half in [SheetHalf::Left, SheetHalf::Right] {
            let position = reading_position(page_num, num_pages, half);
            order[position - 1] = (page_num, half);
        }
    }
    order
}
