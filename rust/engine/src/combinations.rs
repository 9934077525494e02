/// Returns every distinct `k`-element subset of `items`, each exactly once.
///
/// Subsets keep the input order of their elements. `k == 0` yields the single
/// empty subset and `k > items.len()` yields nothing.
///
/// ```
/// use showdown_engine::combinations::combinations;
///
/// let subsets = combinations(&[1, 2, 3, 4], 2);
/// assert_eq!(subsets.len(), 6);
/// assert!(subsets.contains(&vec![2, 4]));
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    if k > items.len() {
        return out;
    }
    let mut current = Vec::with_capacity(k);
    collect(items, k, &mut current, &mut out);
    out
}

fn collect<T: Clone>(rest: &[T], k: usize, current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    let needed = k - current.len();
    for i in 0..rest.len() {
        // Too few elements left to fill the subset.
        if rest.len() - i < needed {
            break;
        }
        current.push(rest[i].clone());
        collect(&rest[i + 1..], k, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seven_choose_five_yields_21_unique_subsets() {
        let items: Vec<u8> = (0..7).collect();
        let subsets = combinations(&items, 5);
        assert_eq!(subsets.len(), 21);
        let unique: HashSet<Vec<u8>> = subsets.iter().cloned().collect();
        assert_eq!(unique.len(), 21);
        assert!(subsets.iter().all(|s| s.len() == 5));
    }

    #[test]
    fn zero_k_yields_one_empty_subset() {
        let subsets = combinations(&['a', 'b'], 0);
        assert_eq!(subsets, vec![Vec::<char>::new()]);
    }

    #[test]
    fn k_larger_than_n_yields_nothing() {
        assert!(combinations(&[1, 2, 3], 4).is_empty());
        assert!(combinations::<u8>(&[], 1).is_empty());
    }

    #[test]
    fn counts_match_binomial_coefficients() {
        let items: Vec<u32> = (0..8).collect();
        let expected = [1, 8, 28, 56, 70, 56, 28, 8, 1];
        for (k, &n) in expected.iter().enumerate() {
            assert_eq!(combinations(&items, k).len(), n, "C(8, {})", k);
        }
    }

    #[test]
    fn full_selection_returns_input() {
        assert_eq!(combinations(&[3, 1, 2], 3), vec![vec![3, 1, 2]]);
    }
}
