/// Runs at or below this length are finished with insertion sort.
pub const INSERTION_THRESHOLD: usize = 24;

/// Stable sort driven by a strict "less than" predicate.
///
/// An inconsistent predicate leaves the order unspecified but never panics
/// and never loses or duplicates elements.
pub fn sort_by_less<T, F>(data: &mut Vec<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    if is_sorted_by_less(data, less) {
        return;
    }

    let owned = std::mem::take(data);
    *data = merge_sort(owned, less);
}

pub fn is_sorted_by_less<T, F>(data: &[T], less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}

fn merge_sort<T, F>(mut data: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort(&mut data, less);
        return data;
    }

    let right = data.split_off(len >> 1);
    let mut left = merge_sort(data, less);
    let right = merge_sort(right, less);

    // Halves already in order: concatenate.
    if !less(&right[0], &left[left.len() - 1]) {
        left.extend(right);
        return left;
    }

    merge(left, right, less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties go left to keep equal elements in input order.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        if take_right {
            out.extend(right.next());
        } else {
            out.extend(left.next());
        }
    }

    out
}

fn insertion_sort<T, F>(data: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && less(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}
