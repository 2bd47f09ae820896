// Split a random secret with Shamir secret sharing and recover it.

use std::{env, error::Error, process::exit, sync::Arc, time::Instant};

use console::style;
use rand::{rngs::OsRng, CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sss::{
    build_polynomial, compute_all_shares, generate_prime, reconstruct_from_shares,
    ParticipantIds, SecretSharer, ShamirSecretSharing, SharingParametersBuilder,
};
use tracing_subscriber::EnvFilter;

fn print_notice_and_exit(error: Option<String>) -> ! {
    println!(
        "{} Shamir secret sharing over a random prime field",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} demo [-h] [--help] [--threshold=<value>] [--num_parties=<value>] [--bits=<value>] [--seed=<value>]",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} must be at least 1 and at most {}; {} must be at least 2",
        style("constraints:").magenta().bold(),
        style("threshold").blue(),
        style("num_parties").blue(),
        style("bits").blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
    }
    exit(0);
}

fn parse_arg<T: std::str::FromStr>(arg: &str, name: &str) -> T {
    let parts: Vec<&str> = arg.rsplit('=').collect();
    match parts.first().map(|v| v.parse::<T>()) {
        Some(Ok(value)) if parts.len() == 2 => value,
        _ => print_notice_and_exit(Some(format!("Invalid `--{name}` argument"))),
    }
}

fn run<R: RngCore + CryptoRng>(
    threshold: usize,
    num_parties: usize,
    bits: usize,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    // Field and secret.
    let now = Instant::now();
    let prime = generate_prime(bits, rng)?;
    println!("\tprime = {prime} ({} bits, {:?})", prime.bits(), now.elapsed());

    let secret = prime.random(rng)?;
    println!("\tsecret = {}", style(&secret).green());

    // Participants receive the identifiers 2, 4, ..., 2n.
    let identifiers = ParticipantIds::stepped(num_parties, 2, &prime)?;
    let polynomial = build_polynomial(&secret, threshold, &prime, rng)?;
    println!("\tpolynomial = {polynomial:?}");

    let now = Instant::now();
    let shares = compute_all_shares(&identifiers, &polynomial, &prime);
    println!("# Shares ({:?})", now.elapsed());
    for share in &shares {
        println!("\t{share}");
    }

    let now = Instant::now();
    let recovered = reconstruct_from_shares(&shares, threshold, &prime)?;
    println!(
        "# Reconstruction from the first {threshold} shares ({:?})",
        now.elapsed()
    );
    println!("\trecovered = {}", style(&recovered).green());

    // The same session through the parameter builder.
    let params = SharingParametersBuilder::new()
        .set_threshold(threshold)
        .set_share_count(num_parties)
        .set_prime(prime)
        .set_identifiers(identifiers.as_slice())
        .build(rng)?;
    let sss = ShamirSecretSharing::new(Arc::new(params));
    let fresh = sss.split(&secret, rng)?;
    let again = sss.recover(&fresh[num_parties - threshold..])?;

    if recovered == secret && again == secret {
        println!("{}", style("# Secret recovered").green().bold());
    } else {
        println!("{}", style("# Reconstruction mismatch").red().bold());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sss=debug,sss_math=debug".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    // Print the help if requested.
    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut threshold = 3;
    let mut num_parties = 4;
    let mut bits = 14;
    let mut seed = None;

    for arg in &args {
        if arg.starts_with("--threshold") {
            threshold = parse_arg(arg, "threshold");
        } else if arg.starts_with("--num_parties") {
            num_parties = parse_arg(arg, "num_parties");
        } else if arg.starts_with("--bits") {
            bits = parse_arg(arg, "bits");
        } else if arg.starts_with("--seed") {
            seed = Some(parse_arg::<u64>(arg, "seed"));
        } else {
            print_notice_and_exit(Some(format!("Unrecognized argument: {arg}")))
        }
    }

    if threshold == 0 || num_parties < threshold {
        print_notice_and_exit(Some(
            "Threshold must be nonzero and at most the number of parties".to_string(),
        ))
    }
    if bits < 2 {
        print_notice_and_exit(Some("The prime needs at least 2 bits".to_string()))
    }

    println!("# Shamir secret sharing");
    println!("\tthreshold = {threshold}");
    println!("\tnum_parties = {num_parties}");
    println!("\tbits = {bits}");

    match seed {
        Some(seed) => run(
            threshold,
            num_parties,
            bits,
            &mut ChaCha20Rng::seed_from_u64(seed),
        ),
        None => run(threshold, num_parties, bits, &mut OsRng),
    }
}
