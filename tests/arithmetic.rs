use bignum::{BigUint, Limb};

use num_bigint::BigUint as Reference;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn big(limbs: &[Limb]) -> BigUint {
    BigUint::from_limbs(limbs).unwrap()
}

/// Arbitrary limb vectors; the empty vector stands for zero.
fn arbitrary(limbs: Vec<Limb>) -> BigUint {
    BigUint::from_limb_vec(limbs).unwrap_or_default()
}

fn reference(x: &BigUint) -> Reference {
    Reference::from_bytes_be(&x.to_be_bytes())
}

fn random_big(rng: &mut StdRng, len: usize) -> BigUint {
    let mut limbs: Vec<Limb> = (0..len).map(|_| rng.random()).collect();
    // Keep the requested length.
    limbs[0] |= 1;
    big(&limbs)
}

fn is_canonical(x: &BigUint) -> bool {
    x.len() == x.limbs().len() && (x.len() == 1 || x.limbs()[0] != 0)
}

fn check_against_reference(a: &BigUint, b: &BigUint) {
    let sum = a + b;
    let product = a * b;

    assert!(is_canonical(&sum), "non-canonical sum {sum:?}");
    assert!(is_canonical(&product), "non-canonical product {product:?}");
    assert_eq!(reference(&sum), reference(a) + reference(b), "{a:?} + {b:?}");
    assert_eq!(reference(&product), reference(a) * reference(b), "{a:?} * {b:?}");
}

#[test]
fn max_plus_one_grows_by_one_limb() {
    let a = big(&[Limb::MAX]);
    let b = BigUint::from_word(1);

    let sum = a.add_big(&b);
    assert_eq!(sum.limbs(), &[1, 0]);
    assert_eq!(sum.len(), 2);

    assert_eq!(a.add_word(1), sum);
}

#[test]
fn max_times_max_splits_into_high_and_low() {
    let a = BigUint::from_word(Limb::MAX);
    let b = BigUint::from_word(Limb::MAX);

    let product = a.mul_big(&b);
    assert_eq!(product.limbs(), &[Limb::MAX - 1, 1]);
    assert_eq!(reference(&product), reference(&a) * reference(&b));

    assert_eq!(a.mul_word(Limb::MAX), product);
}

#[test]
fn product_length_is_sum_of_lengths_or_one_less() {
    let full = big(&[Limb::MAX, Limb::MAX]).mul_big(&big(&[Limb::MAX, Limb::MAX, Limb::MAX]));
    assert_eq!(full.len(), 5);

    let short = big(&[1, 0]).mul_big(&big(&[1, 0]));
    assert_eq!(short.limbs(), &[1, 0, 0]);
}

#[test]
fn sum_length_is_max_length_or_one_more() {
    let no_carry = big(&[1, 2, 3]).add_big(&big(&[4]));
    assert_eq!(no_carry.len(), 3);

    let carry = big(&[Limb::MAX, Limb::MAX, Limb::MAX]).add_big(&big(&[Limb::MAX]));
    assert_eq!(carry.len(), 4);
    assert_eq!(carry.limbs(), &[1, 0, 0, Limb::MAX - 1]);
}

#[test]
fn zero_and_one_short_circuits() {
    let x = big(&[3, Limb::MAX, 0]);

    assert_eq!(x.add_big(&BigUint::zero()), x);
    assert_eq!(BigUint::zero().add_big(&x), x);
    assert_eq!(x.add_word(0), x);

    assert_eq!(x.mul_big(&BigUint::one()), x);
    assert_eq!(BigUint::one().mul_big(&x), x);
    assert_eq!(x.mul_word(1), x);

    assert_eq!(x.mul_big(&BigUint::zero()), BigUint::zero());
    assert_eq!(BigUint::zero().mul_big(&x), BigUint::zero());
    assert_eq!(x.mul_word(0), BigUint::zero());
    assert_eq!(BigUint::zero().mul_word(Limb::MAX), BigUint::zero());
}

#[test]
fn cross_check_single_limb_operands() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..256 {
        let a = random_big(&mut rng, 1);
        let b = random_big(&mut rng, 1);
        check_against_reference(&a, &b);
    }
}

#[test]
fn cross_check_equal_length_operands() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..128 {
        let len = rng.random_range(2..12);
        let a = random_big(&mut rng, len);
        let b = random_big(&mut rng, len);
        check_against_reference(&a, &b);
    }
}

#[test]
fn cross_check_differing_length_operands() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..128 {
        let (short, long) = (rng.random_range(1..6), rng.random_range(6..16));
        let a = random_big(&mut rng, short);
        let b = random_big(&mut rng, long);
        check_against_reference(&a, &b);
        check_against_reference(&b, &a);
    }
}

#[test]
fn cross_check_saturated_operands() {
    let mut rng = StdRng::seed_from_u64(4);
    let max = BigUint::from_word(Limb::MAX);

    for len in 1..10 {
        let all_ones = big(&vec![Limb::MAX; len]);
        check_against_reference(&all_ones, &max);
        check_against_reference(&all_ones, &all_ones);

        let other = random_big(&mut rng, len);
        check_against_reference(&max, &other);
        check_against_reference(&all_ones, &other);
    }
}

#[test]
fn sampled_associativity() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..128 {
        let lens: [usize; 3] = [
            rng.random_range(1..8),
            rng.random_range(1..8),
            rng.random_range(1..8),
        ];
        let a = random_big(&mut rng, lens[0]);
        let b = random_big(&mut rng, lens[1]);
        let c = random_big(&mut rng, lens[2]);

        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }
}

#[test]
fn word_operations_match_reference() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..128 {
        let len = rng.random_range(1..10);
        let a = random_big(&mut rng, len);
        let w: Limb = rng.random();

        assert_eq!(reference(&a.add_word(w)), reference(&a) + Reference::from(w));
        assert_eq!(reference(&a.mul_word(w)), reference(&a) * Reference::from(w));
    }
}

#[test]
fn assign_operators_and_folds() {
    let mut acc = BigUint::from_word(Limb::MAX);
    acc += Limb::MAX;
    acc *= 3 as Limb;
    acc += &BigUint::one();
    acc *= BigUint::from_word(2);

    let expected = (Reference::from(Limb::MAX) * 2u32 * 3u32 + 1u32) * 2u32;
    assert_eq!(reference(&acc), expected);

    let values: Vec<BigUint> = (1..=20).map(|i| BigUint::from_word(i as Limb)).collect();
    let factorial: BigUint = values.iter().product();
    let triangle: BigUint = values.iter().sum();

    assert_eq!(reference(&factorial), (1u32..=20).map(Reference::from).product::<Reference>());
    assert_eq!(triangle, BigUint::from_word(210));
    assert_eq!(values.into_iter().sum::<BigUint>(), triangle);
}

#[quickcheck]
fn prop_add_matches_reference(a: Vec<Limb>, b: Vec<Limb>) -> bool {
    let (a, b) = (arbitrary(a), arbitrary(b));
    let sum = a.add_big(&b);

    is_canonical(&sum) && reference(&sum) == reference(&a) + reference(&b)
}

#[quickcheck]
fn prop_mul_matches_reference(a: Vec<Limb>, b: Vec<Limb>) -> TestResult {
    if a.len() > 48 || b.len() > 48 {
        return TestResult::discard();
    }

    let (a, b) = (arbitrary(a), arbitrary(b));
    let product = a.mul_big(&b);

    if !is_canonical(&product) {
        return TestResult::error(format!("non-canonical product {product:?}"));
    }

    TestResult::from_bool(reference(&product) == reference(&a) * reference(&b))
}

#[quickcheck]
fn prop_add_commutes(a: Vec<Limb>, b: Vec<Limb>) -> bool {
    let (a, b) = (arbitrary(a), arbitrary(b));
    a.add_big(&b) == b.add_big(&a)
}

#[quickcheck]
fn prop_mul_commutes(a: Vec<Limb>, b: Vec<Limb>) -> bool {
    let (a, b) = (arbitrary(a), arbitrary(b));
    a.mul_big(&b) == b.mul_big(&a)
}

#[quickcheck]
fn prop_identities(a: Vec<Limb>) -> bool {
    let x = arbitrary(a);

    x.add_big(&BigUint::zero()) == x
        && x.mul_big(&BigUint::one()) == x
        && x.mul_big(&BigUint::zero()) == BigUint::zero()
}

#[quickcheck]
fn prop_word_paths_match_big_paths(a: Vec<Limb>, w: Limb) -> bool {
    let x = arbitrary(a);
    let word = BigUint::from_word(w);

    x.add_word(w) == x.add_big(&word) && x.mul_word(w) == x.mul_big(&word)
}

#[quickcheck]
fn prop_try_variants_match(a: Vec<Limb>, b: Vec<Limb>) -> bool {
    let (a, b) = (arbitrary(a), arbitrary(b));

    a.try_add_big(&b) == Ok(a.add_big(&b)) && a.try_mul_big(&b) == Ok(a.mul_big(&b))
}
