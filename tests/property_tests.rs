use std::collections::HashSet;

use kseed::seeding::{flatten_rows, select_initial_codebook, PointSet, Seeder, Weighting};
use kseed::Error;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rows whose points are pairwise distinct (index encoded in the first coordinate),
/// so no seeding run can hit a zero distance sum.
fn distinct_rows() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 1..4), 1..30).prop_map(|rows| {
        let d = rows[0].len();
        rows.into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.resize(d, 0.0);
                r[0] = i as f32 * 100.0;
                r
            })
            .collect()
    })
}

fn weighting() -> impl Strategy<Value = Weighting> {
    prop_oneof![Just(Weighting::LastCenter), Just(Weighting::NearestCenter)]
}

proptest! {
    #[test]
    fn prop_codebook_has_k_distinct_source_points(
        rows in distinct_rows(),
        k in 1usize..30,
        seed in any::<u64>(),
        weighting in weighting(),
    ) {
        let (flat, dim) = flatten_rows(&rows).unwrap();
        let points = PointSet::from_flat(&flat, dim).unwrap();

        let result = Seeder::new(k)
            .with_seed(seed)
            .with_weighting(weighting)
            .with_progress_interval(None)
            .seed(&points);

        if k > rows.len() {
            let is_invalid_size = matches!(result, Err(Error::InvalidCodebookSize { .. }));
            prop_assert!(is_invalid_size);
        } else {
            let cb = result.unwrap();
            prop_assert_eq!(cb.len(), k);
            prop_assert_eq!(cb.dim(), dim);

            let distinct: HashSet<usize> = cb.source_indices().iter().copied().collect();
            prop_assert_eq!(distinct.len(), k);

            for (n, &src) in cb.source_indices().iter().enumerate() {
                prop_assert!(src < rows.len());
                prop_assert_eq!(cb.codevector(n), &rows[src][..]);
            }
        }
    }

    #[test]
    fn prop_same_seed_same_codebook(rows in distinct_rows(), seed in any::<u64>()) {
        let (flat, dim) = flatten_rows(&rows).unwrap();
        let points = PointSet::from_flat(&flat, dim).unwrap();
        let k = rows.len().min(5);

        let a = select_initial_codebook(&points, k, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = select_initial_codebook(&points, k, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_k_equals_n_selects_every_point(rows in distinct_rows(), seed in any::<u64>()) {
        let (flat, dim) = flatten_rows(&rows).unwrap();
        let points = PointSet::from_flat(&flat, dim).unwrap();
        let n = points.len();

        let cb = select_initial_codebook(&points, n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mut idx = cb.source_indices().to_vec();
        idx.sort_unstable();
        prop_assert_eq!(idx, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_f64_codevectors_are_exact_copies(
        rows in prop::collection::vec(prop::collection::vec(-1e6f64..1e6, 3), 2..20),
        seed in any::<u64>(),
    ) {
        let (flat, dim) = flatten_rows(&rows).unwrap();
        let points = PointSet::from_flat(&flat, dim).unwrap();

        // Random f64 rows are distinct with overwhelming probability; skip the rare tie.
        if let Ok(cb) = select_initial_codebook(&points, 2, &mut StdRng::seed_from_u64(seed)) {
            for (n, &src) in cb.source_indices().iter().enumerate() {
                prop_assert_eq!(cb.codevector(n), points.point(src));
            }
        }
    }
}
