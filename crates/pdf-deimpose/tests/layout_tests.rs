use pdf_deimpose::{SheetHalf, reading_order, reading_position};
use std::collections::HashSet;

#[test]
fn test_every_reading_slot_is_covered_exactly_once() {
    for num_pages in 1..=24 {
        let positions: HashSet<usize> = (1..=num_pages)
            .flat_map(|page_num| {
                [
                    reading_position(page_num, num_pages, SheetHalf::Left),
                    reading_position(page_num, num_pages, SheetHalf::Right),
                ]
            })
            .collect();

        let expected: HashSet<usize> = (1..=num_pages * 2).collect();
        assert_eq!(
            positions, expected,
            "reading positions for {num_pages} pages are not a permutation"
        );
    }
}

#[test]
fn test_final_reading_order_for_a_two_sheet_booklet() {
    // Positions 1..4 must read: page1-right, page2-left, page2-right, page1-left.
    assert_eq!(
        reading_order(2),
        vec![
            (1, SheetHalf::Right),
            (2, SheetHalf::Left),
            (2, SheetHalf::Right),
            (1, SheetHalf::Left),
        ]
    );
}

#[test]
fn test_first_and_last_positions_come_from_the_cover_sheet() {
    for num_pages in 1..=15 {
        assert_eq!(reading_position(1, num_pages, SheetHalf::Right), 1);
        assert_eq!(reading_position(1, num_pages, SheetHalf::Left), num_pages * 2);
    }
}
