use crate::utils::LibData;

/// L1 distance between two time steps' feature vectors.
#[inline]
pub fn manhattan<A: LibData>(point_a: &[A], point_b: &[A]) -> A {
    point_a
        .iter()
        .zip(point_b.iter())
        .map(|(a_, b_)| (*a_ - *b_).abs())
        .sum()
}

/// True if every feature differs by strictly less than `epsilon`.
#[inline]
pub fn within_epsilon<A: LibData>(point_a: &[A], point_b: &[A], epsilon: A) -> bool {
    point_a
        .iter()
        .zip(point_b.iter())
        .all(|(a_, b_)| (*a_ - *b_).abs() < epsilon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = [0.0, 1.0, 2.0];
        let b = [3.0, 4.0, 1.0];

        assert_eq!(manhattan(&a, &b), 7.0)
    }

    #[test]
    fn test_manhattan_empty_feature_vector() {
        let a: [f64; 0] = [];

        assert_eq!(manhattan(&a, &a), 0.0)
    }

    #[test]
    fn test_within_epsilon_needs_all_features() {
        let a = [0.0, 1.0];
        let b = [0.2, 1.6];

        assert!(within_epsilon(&a, &b, 0.7));
        assert!(!within_epsilon(&a, &b, 0.5));
        assert!(!within_epsilon(&a, &a, 0.0));
        assert!(within_epsilon(&a, &b, f64::INFINITY));
    }
}
