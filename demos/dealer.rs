use num_bigint::BigUint;
use prime_shamir::ShamirShare;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Prime Shamir Dealer Demo ===\n");

    let mut shamir = ShamirShare::builder(10, 5).build()?;
    let secret = BigUint::from(0xC0FFEE_u32);

    println!("Secret: {secret}");
    println!("Configuration: 10 total shares, threshold of 5\n");

    // Demo 1: Generate only the shares we need
    println!("Demo 1: Generate only 5 shares (threshold)");
    let shares: Vec<_> = shamir.dealer(&secret)?.take(5).collect();
    println!(
        "Generated {} shares with x-coordinates: {:?}",
        shares.len(),
        shares.iter().map(|s| s.x).collect::<Vec<_>>()
    );
    println!(
        "Reconstruction successful: {}\n",
        shamir.reconstruct(&shares)? == secret
    );

    // Demo 2: Lazy evaluation - generate shares one by one
    println!("Demo 2: Lazy evaluation - generate shares one by one");
    let mut dealer = shamir.dealer(&secret)?;
    for _ in 1..=3 {
        if let Some(share) = dealer.next() {
            println!("{share}");
        }
    }
    println!("Remaining shares available: {}\n", dealer.len());

    // Demo 3: Use iterator methods for filtering
    println!("Demo 3: Filter shares using iterator methods");
    let even_shares: Vec<_> = shamir
        .dealer(&secret)?
        .filter(|share| share.x % 2 == 0)
        .collect();
    println!(
        "Generated {} even shares: {:?}",
        even_shares.len(),
        even_shares.iter().map(|s| s.x).collect::<Vec<_>>()
    );
    println!(
        "Reconstruction successful: {}",
        shamir.reconstruct(&even_shares)? == secret
    );

    Ok(())
}
