//! Tests for the Mash seed hasher
//!
//! Values are fixed by the reference algorithm and must never change.

use alea_prng::Mash;

#[test]
fn test_mash_space_sequence() {
    let mut mash = Mash::new();

    assert_eq!(mash.mash(" "), 0.8633289230056107);
    assert_eq!(mash.mash(" "), 0.15019597788341343);
    assert_eq!(mash.mash(" "), 0.9176952994894236);
}

#[test]
fn test_mash_continues_accumulator() {
    let mut mash = Mash::new();
    mash.mash(" ");
    mash.mash(" ");
    mash.mash(" ");

    assert_eq!(mash.mash("test"), 0.37453924934379756);
}

#[test]
fn test_fresh_mash_is_uncorrelated_with_used_one() {
    let mut used = Mash::new();
    used.mash("warm up");

    let mut fresh = Mash::new();
    assert_ne!(used.mash("x"), fresh.mash("x"));
}

#[test]
fn test_mash_numbers_hash_as_text() {
    let mut a = Mash::new();
    let mut b = Mash::new();

    assert_eq!(a.mash(12345u32), b.mash("12345"));
    assert_eq!(a.mash(-1i32), b.mash("-1"));
}

#[test]
fn test_mash_outputs_in_unit_interval() {
    let mut mash = Mash::new();
    let long = "z".repeat(10_000);

    for input in ["", "a", "héllo 😀", "\u{ffff}", long.as_str()] {
        let value = mash.mash(input);
        assert!(
            (0.0..1.0).contains(&value),
            "mash({:?}) produced {} outside [0, 1)",
            input,
            value
        );
    }
}
