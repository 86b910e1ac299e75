//! Index helpers

/// Index of the first `true` entry
pub fn find_1st_ind(flags: &[bool]) -> Option<usize> {
    flags.iter().position(|&flag| flag)
}

/// `p` roughly equispaced integers between 0 and `m - 1`
///
/// The points span `[floor(m/p/2), ceil(m - m/p/2 - 1)]`, centring each pick
/// within its bin of width `m / p`.
pub fn equi_spaced_integers(m: usize, p: usize) -> Vec<usize> {
    if p == 0 {
        return Vec::new();
    }
    let (mf, pf) = (m as f64, p as f64);
    let start = (mf / pf / 2.0).floor();
    let stop = (mf - mf / pf / 2.0 - 1.0).ceil();

    if p == 1 {
        return vec![start.round_ties_even().max(0.0) as usize];
    }
    let step = (stop - start) / (pf - 1.0);
    (0..p)
        .map(|i| (start + step * i as f64).round_ties_even().max(0.0) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_1st_ind() {
        assert_eq!(find_1st_ind(&[false, false, true, true]), Some(2));
        assert_eq!(find_1st_ind(&[true]), Some(0));
        assert_eq!(find_1st_ind(&[false, false]), None);
        assert_eq!(find_1st_ind(&[]), None);
    }

    #[test]
    fn test_equi_spaced_integers() {
        assert_eq!(equi_spaced_integers(10, 5), vec![1, 3, 4, 6, 8]);
        assert_eq!(equi_spaced_integers(40, 4), vec![5, 15, 24, 34]);
        assert_eq!(equi_spaced_integers(4, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_equi_spaced_integers_edge_counts() {
        assert!(equi_spaced_integers(10, 0).is_empty());
        assert_eq!(equi_spaced_integers(10, 1), vec![5]);
    }
}
