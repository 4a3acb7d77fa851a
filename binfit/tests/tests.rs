#[cfg(test)]
mod tests {
    use binfit::entities::Bin;
    use binfit::util::assertions::{conserves_items, is_descending, loads_within_capacity};
    use binfit::util::{OversizePolicy, PackConfig};
    use binfit::{
        Algorithm, PackError, Packer, Packing, count_first_fit, count_first_fit_decreasing,
        pack_first_fit, pack_first_fit_decreasing,
    };
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const SAMPLE: [u32; 10] = [3, 8, 2, 5, 7, 1, 9, 4, 6, 2];
    const CAPACITY: u32 = 10;

    fn pack(algorithm: Algorithm, items: &[u32], capacity: u32) -> Packing<u32> {
        Packer::default().pack(algorithm, items, capacity).unwrap()
    }

    fn random_items(rng: &mut SmallRng, n: usize) -> Vec<u32> {
        (0..n).map(|_| rng.random_range(1..=10)).collect()
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn sample_respects_capacity_and_conserves_items(algorithm: Algorithm) {
        let packing = pack(algorithm, &SAMPLE, CAPACITY);
        assert!(packing.loads().all(|load| load <= CAPACITY));
        assert!(conserves_items(&SAMPLE, &packing));
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn empty_input(algorithm: Algorithm) {
        let packing = pack(algorithm, &[], CAPACITY);
        assert_eq!(packing.bin_count(), 0);
        assert!(packing.into_contents().is_empty());
        assert_eq!(Packer::default().count(algorithm, &[], CAPACITY), Ok(0));
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn item_equal_to_capacity(algorithm: Algorithm) {
        let packing = pack(algorithm, &[10], CAPACITY);
        assert_eq!(packing.into_contents(), vec![vec![10]]);
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn oversized_item_gets_its_own_bin(algorithm: Algorithm) {
        let packing = pack(algorithm, &[11], CAPACITY);
        assert_eq!(packing.bins()[0].load(), 11);
        assert!(loads_within_capacity(packing.bins(), CAPACITY));
        assert_eq!(packing.into_contents(), vec![vec![11]]);
    }

    #[test]
    fn oversized_item_never_shares_a_bin() {
        let items = [2, 15, 3, 0, 12, 8];
        let packing = pack(Algorithm::FirstFit, &items, CAPACITY);
        assert_eq!(
            packing.into_contents(),
            vec![vec![2, 3, 0], vec![15], vec![12], vec![8]]
        );
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn oversized_item_is_rejected_under_strict_policy(algorithm: Algorithm) {
        let packer = Packer::new(PackConfig {
            oversize_policy: OversizePolicy::Reject,
        });
        assert!(matches!(
            packer.pack(algorithm, &[11], CAPACITY),
            Err(PackError::ItemExceedsCapacity { index: 0, .. })
        ));
        assert!(packer.pack(algorithm, &[10], CAPACITY).is_ok());
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn full_items_use_one_bin_each(algorithm: Algorithm) {
        let packing = pack(algorithm, &[10, 10, 10], CAPACITY);
        assert_eq!(packing.into_contents(), vec![vec![10], vec![10], vec![10]]);
    }

    #[test]
    fn ffd_leaves_input_untouched() {
        let items = SAMPLE.to_vec();
        let _ = pack_first_fit_decreasing(&items, CAPACITY).unwrap();
        let _ = count_first_fit_decreasing(&items, CAPACITY).unwrap();
        assert_eq!(items, SAMPLE.to_vec());
    }

    #[test]
    fn ffd_on_descending_input_equals_ff() {
        let mut items = SAMPLE.to_vec();
        items.sort_unstable_by(|a, b| b.cmp(a));
        assert!(is_descending(&items));
        assert_eq!(
            pack_first_fit_decreasing(&items, CAPACITY),
            pack_first_fit(&items, CAPACITY)
        );
    }

    #[test]
    fn float_sizes() {
        let items = [0.5, 0.7, 0.5, 0.2, 0.4, 0.2, 0.5, 0.1, 0.6];
        let packing = pack_first_fit_decreasing(&items, 1.0).unwrap();
        assert!(packing.loads().all(|load| load <= 1.0));
        assert!(conserves_items(&items, &packing));
        assert_eq!(packing.bin_count(), 4);
    }

    #[test]
    fn loads_near_integer_max_do_not_overflow() {
        let packing = pack_first_fit(&[u32::MAX - 1, 5], u32::MAX).unwrap();
        assert_eq!(packing.bin_count(), 2);
        assert_eq!(packing.into_contents(), vec![vec![u32::MAX - 1], vec![5]]);

        let items = [u64::MAX - 3, 2, 4, 1];
        assert_eq!(pack_first_fit_decreasing(&items, u64::MAX).unwrap().bin_count(), 2);
    }

    #[test_case(Algorithm::FirstFit; "ff")]
    #[test_case(Algorithm::FirstFitDecreasing; "ffd")]
    fn oversized_max_item_does_not_overflow_later_fits(algorithm: Algorithm) {
        let packer = Packer::new(PackConfig {
            oversize_policy: OversizePolicy::Permit,
        });
        assert_eq!(packer.count(algorithm, &[u64::MAX, 1], 10), Ok(2));
        assert_eq!(count_first_fit(&[u64::MAX, 1], 10), Ok(2));
    }

    #[test]
    fn invalid_capacity_is_reported_for_every_entry_point() {
        assert!(pack_first_fit(&[1u64], 0).is_err());
        assert!(pack_first_fit_decreasing(&[1u64], 0).is_err());
        assert!(count_first_fit(&[1u64], 0).is_err());
        assert!(count_first_fit_decreasing(&[1u64], 0).is_err());
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn random_instances_hold_all_properties(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for n in [0, 1, 2, 17, 100, 1000] {
            let items = random_items(&mut rng, n);
            for algorithm in [Algorithm::FirstFit, Algorithm::FirstFitDecreasing] {
                let packing = pack(algorithm, &items, CAPACITY);

                assert!(packing.loads().all(|load| load <= CAPACITY));
                assert!(conserves_items(&items, &packing));
                assert_eq!(packing.bin_count() == 0, items.is_empty());
                assert_eq!(
                    Packer::default().count(algorithm, &items, CAPACITY),
                    Ok(packing.bin_count())
                );
                // deterministic
                assert_eq!(packing, pack(algorithm, &items, CAPACITY));
            }
        }
    }

    #[test]
    fn ascending_input_is_bad_for_ff() {
        // the ascending order written by the worst case generator
        let mut items = vec![];
        for size in [2u32, 3, 7] {
            items.extend(std::iter::repeat_n(size, 6));
        }
        let ff = count_first_fit(&items, CAPACITY).unwrap();
        let ffd = count_first_fit_decreasing(&items, CAPACITY).unwrap();
        assert_eq!(ff, 9);
        assert_eq!(ffd, 8);
    }
}
