#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use prime_shamir::{PrimeField, Share, interpolate_at, reconstruct, reconstruct_with_field};

// Fuzzing target for share reconstruction
//
// Arbitrary shares are decoded from the input and fed to reconstruction. Zero
// and duplicate x-coordinates, unreduced values, tiny or composite moduli and
// out-of-range thresholds must all come back as errors, never as panics.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let threshold = u32::from(data[0] % 24);
    let modulus = BigUint::from(u32::from_le_bytes([data[1], data[2], data[3], 0]));
    let mut offset = 4;

    // Each share: 2-byte x, 1-byte value length, value bytes
    let mut shares = Vec::new();
    while offset + 3 <= data.len() && shares.len() < 32 {
        let x = u32::from(u16::from_le_bytes([data[offset], data[offset + 1]]));
        let len = (data[offset + 2] % 20) as usize;
        offset += 3;
        let end = (offset + len).min(data.len());
        let y = BigUint::from_bytes_le(&data[offset..end]);
        offset = end;
        shares.push(Share::new(x, y));
    }

    let _result = reconstruct(&shares, threshold);
    let _result = reconstruct(&[], threshold);

    if let Ok(field) = PrimeField::new(modulus) {
        let _result = reconstruct_with_field(&shares, threshold, &field);
        let _result = interpolate_at(&shares, &BigUint::from(threshold), &field);
    }

    if shares.len() >= 2 {
        let duplicate_shares = vec![shares[0].clone(), shares[0].clone()];
        let _result = reconstruct(&duplicate_shares, 2);
    }
});
