use std::cmp::Ordering;

/// Closed-interval binary search over a sorted slice: the live window is
/// `lo ..= hi`. Returns the index of a match, or `None` on a miss.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0, arr.len() - 1);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater if mid == 0 => return None,
            Ordering::Greater => hi = mid - 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_element() {
        let arr = [-5, -1, 0, 3, 8, 13, 21];
        for (i, v) in arr.iter().enumerate() {
            assert_eq!(binary_search(&arr, v), Some(i));
        }
    }

    #[test]
    fn misses() {
        let arr = [1, 3, 5];
        assert_eq!(binary_search(&arr, &0), None);
        assert_eq!(binary_search(&arr, &4), None);
        assert_eq!(binary_search(&arr, &6), None);
        assert_eq!(binary_search::<i32>(&[], &1), None);
    }
}
