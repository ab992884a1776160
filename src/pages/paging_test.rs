use super::*;

#[test]
fn empty_results_still_have_one_page() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(-5, 10), 1);
}

#[test]
fn pages_round_up() {
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(95, 10), 10);
}

#[test]
fn zero_page_size_does_not_divide_by_zero() {
    assert_eq!(total_pages(50, 0), 1);
}

#[test]
fn clamp_keeps_pages_in_range() {
    assert_eq!(clamp_page(0, 50, 10), 1);
    assert_eq!(clamp_page(3, 50, 10), 3);
    assert_eq!(clamp_page(99, 11, 10), 2);
    assert_eq!(clamp_page(1, 0, 10), 1);
}
