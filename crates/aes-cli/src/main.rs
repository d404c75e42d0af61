//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::time::Instant;

use aes_core::{
    add_round_key, decrypt, encrypt, encrypt_block, expand_key, mix_columns, process_blocks,
    shift_rows, sub_bytes, transform, Aes128Key, Block, Operation, ProcessingHint, RoundKeys,
    ROUNDS,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// AES-128 CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "AES-128 single-block cipher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Processing strategy; never changes the output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Mode {
    #[default]
    Standard,
    Batch,
}

impl From<Mode> for ProcessingHint {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => ProcessingHint::Standard,
            Mode::Batch => ProcessingHint::BatchOptimized,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Processing mode (does not affect the result).
        #[arg(long, value_enum, default_value_t)]
        mode: Mode,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Processing mode (does not affect the result).
        #[arg(long, value_enum, default_value_t)]
        mode: Mode,
    },
    /// Check the FIPS-197 known-answer vectors.
    Vectors,
    /// Print the round keys and the state after every transformation step.
    Trace {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Encrypt random blocks under both processing modes and compare.
    Batch {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Number of blocks to encrypt.
        #[arg(long, default_value_t = 1000)]
        blocks: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Worker threads for batch mode (defaults to one per core).
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            block_hex,
            mode,
        } => cmd_block(&key_hex, &block_hex, Operation::Encrypt, mode),
        Commands::Dec {
            key_hex,
            block_hex,
            mode,
        } => cmd_block(&key_hex, &block_hex, Operation::Decrypt, mode),
        Commands::Vectors => cmd_vectors(),
        Commands::Trace { key_hex, block_hex } => cmd_trace(&key_hex, &block_hex),
        Commands::Batch {
            key_hex,
            blocks,
            seed,
            threads,
        } => cmd_batch(&key_hex, blocks, seed, threads),
    }
}

fn cmd_block(key_hex: &str, block_hex: &str, operation: Operation, mode: Mode) -> Result<()> {
    let key = decode_hex(key_hex, "key")?;
    let block = decode_hex(block_hex, "block")?;
    let out = transform(&block, &key, operation, mode.into())?;
    println!("{}", hex::encode(out));
    Ok(())
}

/// FIPS-197 Appendix C.1 and Appendix B: (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 2] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
];

fn cmd_vectors() -> Result<()> {
    for (key_hex, pt_hex, ct_hex) in KNOWN_ANSWERS {
        let key = decode_hex(key_hex, "key")?;
        let pt = decode_hex(pt_hex, "plaintext")?;
        let ct = decode_hex(ct_hex, "ciphertext")?;

        check("encrypt", pt_hex, &encrypt(&pt, &key)?, &ct)?;
        check("decrypt", ct_hex, &decrypt(&ct, &key)?, &pt)?;
    }

    let (key_hex, pt_hex, ct_hex) = KNOWN_ANSWERS[0];
    let key = decode_hex(key_hex, "key")?;
    let pt = decode_hex(pt_hex, "plaintext")?;
    let batched = transform(&pt, &key, Operation::Encrypt, ProcessingHint::BatchOptimized)?;
    check("encrypt (batch mode)", pt_hex, &batched, &decode_hex(ct_hex, "ciphertext")?)?;

    println!("all known-answer vectors passed");
    Ok(())
}

fn check(label: &str, input_hex: &str, actual: &Block, expected: &[u8]) -> Result<()> {
    if actual.as_slice() != expected {
        bail!(
            "{label} {input_hex}: expected {}, got {}",
            hex::encode(expected),
            hex::encode(actual)
        );
    }
    println!("{label} {input_hex}: ok");
    Ok(())
}

fn cmd_trace(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let round_keys = expand_key(&key);

    for (round, rk) in round_keys.iter().enumerate() {
        println!("round key {round:>2}:    {}", hex::encode(rk));
    }
    println!();
    println!("input:            {}", hex::encode(block));
    let state = trace_encrypt(&round_keys, block, |line| println!("{line}"));
    println!("output:           {}", hex::encode(state));

    if state != encrypt_block(&block, &round_keys) {
        bail!("traced rounds disagree with encrypt_block");
    }
    Ok(())
}

/// Runs the encryption rounds step by step, reporting the state after each step.
fn trace_encrypt(round_keys: &RoundKeys, block: Block, mut emit: impl FnMut(String)) -> Block {
    let mut state = add_round_key(block, round_keys.get(0));
    emit(format!("round  0 add key: {}", hex::encode(state)));

    for round in 1..=ROUNDS {
        state = sub_bytes(state);
        emit(format!("round {round:>2} sub:     {}", hex::encode(state)));
        state = shift_rows(state);
        emit(format!("round {round:>2} shift:   {}", hex::encode(state)));
        if round != ROUNDS {
            state = mix_columns(state);
            emit(format!("round {round:>2} mix:     {}", hex::encode(state)));
        }
        state = add_round_key(state, round_keys.get(round));
        emit(format!("round {round:>2} add key: {}", hex::encode(state)));
    }
    state
}

fn cmd_batch(
    key_hex: &str,
    blocks: usize,
    seed: Option<u64>,
    threads: Option<usize>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let mut rng = seeded_rng(seed);
    let data: Vec<Block> = (0..blocks)
        .map(|_| {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            block
        })
        .collect();

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().context("build worker pool")?;

    let mut standard = data.clone();
    let start = Instant::now();
    process_blocks(&mut standard, &key, Operation::Encrypt, ProcessingHint::Standard);
    let standard_elapsed = start.elapsed();

    let mut batched = data;
    let start = Instant::now();
    pool.install(|| {
        process_blocks(
            &mut batched,
            &key,
            Operation::Encrypt,
            ProcessingHint::BatchOptimized,
        )
    });
    let batched_elapsed = start.elapsed();

    tracing::info!(blocks, elapsed = ?standard_elapsed, "standard mode");
    tracing::info!(
        blocks,
        threads = pool.current_num_threads(),
        elapsed = ?batched_elapsed,
        "batch mode"
    );

    if standard != batched {
        bail!("batch mode output differs from standard mode");
    }
    let speedup = standard_elapsed.as_secs_f64() / batched_elapsed.as_secs_f64().max(f64::EPSILON);
    println!("{blocks} blocks identical across modes (speedup {speedup:.2}x)");
    Ok(())
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = decode_hex(hex_str, "key")?;
    Ok(Aes128Key::try_from(bytes.as_slice())?)
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = decode_hex(hex_str, "block")?;
    Ok(aes_core::block_from_slice(&bytes, "block")?)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
