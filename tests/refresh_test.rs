use num_bigint::BigUint;
use prime_shamir::{ShamirError, ShamirShare, Share};

#[test]
fn test_refreshed_shares_reconstruct_correctly() {
    let mut shamir = ShamirShare::new(5, 3).unwrap();
    let secret = BigUint::from(0x5ec2e7_u32);

    let original_shares = shamir.split(&secret).unwrap();

    // Refresh a valid subset (we need at least threshold shares)
    let refreshed_shares = shamir.refresh_shares(&original_shares[0..3]).unwrap();

    let reconstructed_secret = shamir.reconstruct(&refreshed_shares).unwrap();
    assert_eq!(reconstructed_secret, secret);
}

#[test]
fn test_refreshed_shares_are_different_from_original() {
    let mut shamir = ShamirShare::new(5, 3).unwrap();
    let original_shares = shamir.split(&BigUint::from(17u32)).unwrap();
    let refreshed_shares = shamir.refresh_shares(&original_shares).unwrap();

    for (original, refreshed) in original_shares.iter().zip(&refreshed_shares) {
        assert_eq!(original.x, refreshed.x);
        assert_ne!(original.y, refreshed.y);
    }
}

#[test]
fn test_mixing_old_and_new_shares_gives_wrong_secret() {
    let mut shamir = ShamirShare::new(5, 3).unwrap();
    let secret = BigUint::from(99u32);

    let shares_v1 = shamir.split(&secret).unwrap();
    let shares_v2 = shamir.refresh_shares(&shares_v1).unwrap();

    let mixed_shares: Vec<Share> = vec![
        shares_v1[0].clone(), // Old share
        shares_v1[1].clone(), // Old share
        shares_v2[2].clone(), // New share
    ];

    assert_ne!(shamir.reconstruct(&mixed_shares).unwrap(), secret);
}

#[test]
fn test_repeated_refresh() {
    let mut shamir = ShamirShare::new(4, 2).unwrap();
    let secret = BigUint::from(1u32);
    let mut shares = shamir.split(&secret).unwrap();
    for _ in 0..10 {
        shares = shamir.refresh_shares(&shares).unwrap();
    }
    assert_eq!(shamir.reconstruct(&shares[2..]).unwrap(), secret);
}

#[test]
fn test_refresh_with_insufficient_shares() {
    let mut shamir = ShamirShare::new(5, 3).unwrap();
    let shares = shamir.split(&BigUint::from(3u32)).unwrap();

    assert!(matches!(
        shamir.refresh_shares(&shares[0..2]),
        Err(ShamirError::InsufficientShares { needed: 3, got: 2 })
    ));
}
