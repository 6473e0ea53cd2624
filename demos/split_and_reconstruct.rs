//! Splits a fixed secret, prints the shares and reconstructs it from a random
//! subset of `k` shares.
//!
//! Usage: `cargo run --example split_and_reconstruct -- <n> <k>`; missing
//! arguments are read from standard input, one per line.

use std::io::{self, BufRead};

use num_bigint::BigUint;
use prime_shamir::ShamirShare;
use rand::seq::IndexedRandom;

fn read_count(args: &mut impl Iterator<Item = String>, stdin: &mut impl BufRead) -> Result<u32, Box<dyn std::error::Error>> {
    let raw = match args.next() {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            stdin.read_line(&mut line)?;
            line
        }
    };
    Ok(raw.trim().parse()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut stdin = io::stdin().lock();
    let n = read_count(&mut args, &mut stdin)?;
    let k = read_count(&mut args, &mut stdin)?;

    let secret = BigUint::from(12_345_678_901_234_567_890u64);
    println!("Original secret: {secret}");

    let mut shamir = ShamirShare::new(n, k)?;
    let shares = shamir.split(&secret)?;
    println!("Generated {n} shares (need any {k} to reconstruct):");
    for share in &shares {
        println!("{share}");
    }

    // Pick any k shares for reconstruction
    let selected: Vec<_> = shares
        .choose_multiple(&mut rand::rng(), k as usize)
        .cloned()
        .collect();
    println!(
        "\nSelected shares for reconstruction: {:?}",
        selected.iter().map(|s| s.x).collect::<Vec<_>>()
    );

    let recovered = shamir.reconstruct(&selected)?;
    println!("Reconstructed secret: {recovered}");

    assert_eq!(secret, recovered, "Reconstruction failed!");
    Ok(())
}
