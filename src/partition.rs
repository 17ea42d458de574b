/// Lomuto partition around the last element of `v`.
///
/// Moves every element that is not greater than the pivot `v[v.len() - 1]` to the front, then
/// places the pivot directly after them. Returns the final pivot position `mid`, so that
/// `v[..mid] <= v[mid] < v[mid + 1..]`. Elements equal to the pivot go to the left side.
///
/// One comparison per non-pivot element. Only swaps are used, so if `is_less` panics `v` is
/// still a permutation of its original elements.
pub fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // This would be a logic bug in other code.
    debug_assert!(len >= 2);

    let pivot_pos = len - 1;
    let (rest, pivot) = v.split_at_mut(pivot_pos);
    let pivot = &pivot[0];

    let mut lt_or_eq = 0;
    for i in 0..rest.len() {
        if !is_less(pivot, &rest[i]) {
            rest.swap(lt_or_eq, i);
            lt_or_eq += 1;
        }
    }

    v.swap(lt_or_eq, pivot_pos);

    lt_or_eq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_partitioned(v: &[i32], mid: usize) {
        let pivot = v[mid];
        assert!(v[..mid].iter().all(|x| *x <= pivot));
        assert!(v[mid + 1..].iter().all(|x| *x > pivot));
    }

    #[test]
    fn splits_around_last() {
        let mut v = [5, 3, 8, 1, 9, 2];
        let mid = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(mid, 1);
        assert_eq!(v[mid], 2);
        check_partitioned(&v, mid);
    }

    #[test]
    fn all_equal_moves_pivot_to_end() {
        let mut v = [7; 20];
        let mut comps = 0;
        let mid = partition(&mut v, &mut |a, b| {
            comps += 1;
            a < b
        });

        assert_eq!(mid, 19);
        assert_eq!(comps, 19);
        assert_eq!(v, [7; 20]);
    }

    #[test]
    fn extreme_pivots() {
        let mut ascending = (0..10).collect::<Vec<i32>>();
        assert_eq!(partition(&mut ascending, &mut |a, b| a < b), 9);
        assert!(ascending.iter().copied().eq(0..10));

        let mut descending = (0..10).rev().collect::<Vec<i32>>();
        let mid = partition(&mut descending, &mut |a, b| a < b);
        assert_eq!(mid, 0);
        assert_eq!(descending, [0, 8, 7, 6, 5, 4, 3, 2, 1, 9]);
    }

    #[test]
    fn duplicates_of_pivot_go_left() {
        let mut v = [4, 9, 4, 1, 4, 6, 4];
        let mid = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(mid, 4);
        check_partitioned(&v, mid);
        assert_eq!(v[..mid].iter().filter(|x| **x == 4).count(), 3);
    }
}
