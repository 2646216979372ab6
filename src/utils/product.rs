/// Cartesian product over a slice of alternative sets.
///
/// Iterates the rightmost set fastest, like a mileage counter, so the output
/// order is the standard product order. Any empty set makes the whole
/// product empty; an empty slice yields one empty tuple.
pub fn cartesian_product<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    if sets.iter().any(|set| set.is_empty()) {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices = vec![0usize; sets.len()];

    loop {
        result.push(
            indices
                .iter()
                .zip(sets)
                .map(|(&i, set)| set[i].clone())
                .collect(),
        );

        let mut pos = sets.len();
        loop {
            if pos == 0 {
                return result;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < sets[pos].len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_rightmost_fastest() {
        let sets = vec![vec!["a", "b"], vec!["1", "2", "3"]];
        let product = cartesian_product(&sets);
        assert_eq!(
            product,
            vec![
                vec!["a", "1"],
                vec!["a", "2"],
                vec!["a", "3"],
                vec!["b", "1"],
                vec!["b", "2"],
                vec!["b", "3"],
            ]
        );
    }

    #[test]
    fn product_sizes_multiply() {
        let sets = vec![vec![0, 1], vec![0, 1, 2], vec![0, 1]];
        assert_eq!(cartesian_product(&sets).len(), 12);
    }

    #[test]
    fn product_with_empty_set_is_empty() {
        let sets: Vec<Vec<i32>> = vec![vec![1, 2], vec![]];
        assert!(cartesian_product(&sets).is_empty());
    }

    #[test]
    fn product_of_no_sets_is_one_empty_tuple() {
        let sets: Vec<Vec<i32>> = vec![];
        assert_eq!(cartesian_product(&sets), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn product_of_singletons_is_one_tuple() {
        let sets = vec![vec!["x"], vec!["y"]];
        assert_eq!(cartesian_product(&sets), vec![vec!["x", "y"]]);
    }
}
