/// Restores the max-heap property for the subtree rooted at `node`, assuming both child subtrees
/// already are max-heaps.
///
/// Iterative, each step moves `node` one level down, so at most `log2(v.len())` steps are taken.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && is_less(&v[largest], &v[left]) {
            largest = left;
        }
        if right < len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == node {
            return;
        }

        v.swap(node, largest);
        node = largest;
    }
}

/// Sorts `v` using heapsort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Never recurses, which makes it the fallback once quicksort has used up its depth budget.
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Build the heap in linear time, from the last internal node up to the root.
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}
