/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]`.
///
/// Every element strictly greater than the tail is shifted one position to the right, and the
/// tail takes the vacated slot. All comparisons happen before the slice is modified, so a
/// panicking `is_less` leaves `v` untouched.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    if hole != tail {
        v[hole..].rotate_right(1);
    }
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// *O*(*n*^2) worst case, *O*(*n*) on already sorted or nearly sorted input.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // This would be a logic bug in other code.
    debug_assert!(offset != 0 && offset <= len);

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_inputs() {
        let mut v = [5, 3, 8, 1, 9, 2];
        insertion_sort_shift_left(&mut v, 1, &mut |a, b| a < b);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn sorted_input_needs_one_comparison_per_element() {
        let mut v = (0..100).collect::<Vec<i32>>();
        let mut comps = 0;
        insertion_sort_shift_left(&mut v, 1, &mut |a, b| {
            comps += 1;
            a < b
        });

        assert_eq!(comps, 99);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn equal_keys_are_not_shifted() {
        // Only strictly greater elements move, so equal keys keep their relative order.
        let mut v = [(1, 'a'), (0, 'x'), (1, 'b'), (1, 'c'), (0, 'y')];
        insertion_sort_shift_left(&mut v, 1, &mut |a, b| a.0 < b.0);
        assert_eq!(v, [(0, 'x'), (0, 'y'), (1, 'a'), (1, 'b'), (1, 'c')]);
    }

    #[test]
    fn respects_presorted_offset() {
        let mut v = [1, 4, 7, 3, 2];
        insertion_sort_shift_left(&mut v, 3, &mut |a, b| a < b);
        assert_eq!(v, [1, 2, 3, 4, 7]);
    }
}
