/// In-place quicksort, Lomuto partition with the last element as pivot.
///
/// Recurses into the smaller side and loops on the larger one, so stack depth
/// stays logarithmic even on sorted input.
pub fn quicksort<T: Ord>(data: &mut [T]) {
    let mut rest = data;
    while rest.len() > 1 {
        let p = partition(rest);
        let (left, right) = std::mem::take(&mut rest).split_at_mut(p);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left);
            rest = right;
        } else {
            quicksort(right);
            rest = left;
        }
    }
}

/// Returns the final pivot index. `data` must not be empty.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let high = data.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if data[j] < data[high] {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_data, XorShift32};

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        quicksort(&mut v);
        v
    }

    #[test]
    fn trivial_inputs() {
        assert_eq!(sorted(vec![]), Vec::<i32>::new());
        assert_eq!(sorted(vec![5]), vec![5]);
        assert_eq!(sorted(vec![2, 1]), vec![1, 2]);
    }

    #[test]
    fn duplicates_and_negatives() {
        assert_eq!(sorted(vec![3, -1, 3, 0, -1, 3]), vec![-1, -1, 0, 3, 3, 3]);
    }

    #[test]
    fn already_sorted_and_reversed() {
        let asc: Vec<i32> = (0..5_000).collect();
        assert_eq!(sorted(asc.clone()), asc);

        let desc: Vec<i32> = (0..5_000).rev().collect();
        assert_eq!(sorted(desc), asc);
    }

    #[test]
    fn matches_std_sort_on_random_data() {
        let mut rng = XorShift32::new(1234);
        let data = random_data(20_000, &mut rng);

        let mut expected = data.clone();
        expected.sort_unstable();

        assert_eq!(sorted(data), expected);
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [4, 8, 1, 9, 5];
        let p = partition(&mut v);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|&x| x < 5));
        assert!(v[p + 1..].iter().all(|&x| x >= 5));
    }
}
