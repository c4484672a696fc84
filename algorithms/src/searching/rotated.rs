/// Index of the minimum in a sorted array of distinct values that has been
/// rotated, e.g. `[4, 5, 6, 7, 0, 1, 2]` → `4`. An unrotated array yields `0`.
///
/// Each step compares the midpoint with its neighbours; the pivot is the
/// only place where a value is smaller than its left neighbour.
pub fn find_rotation_min<T: Ord>(arr: &[T]) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0, arr.len() - 1);
    if arr[lo] <= arr[hi] {
        return Some(lo);
    }
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if mid > 0 && arr[mid] < arr[mid - 1] {
            return Some(mid);
        }
        if mid + 1 < arr.len() && arr[mid] > arr[mid + 1] {
            return Some(mid + 1);
        }
        if arr[mid] >= arr[lo] {
            lo = mid + 1;
        } else {
            // arr[mid] < arr[lo] puts mid strictly right of lo
            hi = mid - 1;
        }
    }
    None
}
