//! In-place array utilities.
//!
//! Variables:
//!   nums : &mut [T]  — caller-owned slice, reordered in place
//!   N    : usize     — nums.len()
//!
//! Equations:
//!   count_unique_sorted:  sort, 1 + |{ i : nums[i-1] < nums[i] }|     O(N log N), O(1) extra
//!   count_unique_hashed:  |set(nums)|                                  O(N),       O(N) extra
//!   remove_duplicates:    sort, compact distinct values to the front   O(N log N)
//!   shift_element_to_last(i): nums[i..] rotated left by one            O(N)

use std::collections::HashSet;
use std::hash::Hash;

/// Number of distinct values, counted by sorting `nums` in place.
pub fn count_unique_sorted<T: Ord>(nums: &mut [T]) -> usize {
    nums.sort_unstable();
    if nums.len() <= 1 {
        return nums.len();
    }
    1 + nums.windows(2).filter(|pair| pair[0] < pair[1]).count()
}

/// Number of distinct values, counted with a hash set. Leaves `nums` untouched.
pub fn count_unique_hashed<T: Eq + Hash>(nums: &[T]) -> usize {
    nums.iter().collect::<HashSet<_>>().len()
}

/// Sort `nums` and move each distinct value to the front. Returns how many
/// there are; `nums[..len]` is then strictly increasing.
pub fn remove_duplicates<T: Ord>(nums: &mut [T]) -> usize {
    if nums.len() <= 1 {
        return nums.len();
    }
    nums.sort_unstable();
    let mut unique = 0;
    for i in 1..nums.len() {
        if nums[i] != nums[unique] {
            unique += 1;
            nums.swap(i, unique);
        }
    }
    unique + 1
}

/// Move `nums[i]` to the end, keeping the order of everything after it.
/// Out-of-range `i` leaves the slice unchanged.
pub fn shift_element_to_last<T>(i: usize, nums: &mut [T]) {
    if let Some(tail) = nums.get_mut(i..) {
        if !tail.is_empty() {
            tail.rotate_left(1);
        }
    }
}
