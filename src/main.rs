//! # waves-core CLI
//!
//! Small command-line front end over the library:
//!
//! - `generate`: new passphrase with its keys and address
//! - `address` : keys and address of an existing passphrase
//! - `validate`: check an address for a network (exit status 0 or 1)

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use waves_core::crypto::OsEntropy;
use waves_core::utils::logging::{set_log_level, LogLevel};
use waves_core::wallet::{self, DerivedAccount};
use waves_core::{NetworkConfig, WavesResult};

/// Waves wallet keys and addresses.
#[derive(Parser, Debug)]
#[command(name = "waves-core", about = "Waves wallet keys and addresses", version)]
struct Cli {
    /// Log debug details to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new passphrase and print its keys and address.
    Generate(GenerateArgs),
    /// Derive keys and address from a passphrase.
    Address(AddressArgs),
    /// Check that an address is well formed for the network.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Network name or code: mainnet/W, testnet/T, devnet.
    #[arg(long, short = 'n', default_value = "mainnet")]
    network: String,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    network: NetworkArgs,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AddressArgs {
    /// The passphrase, quoted as one argument.
    passphrase: String,

    #[command(flatten)]
    network: NetworkArgs,

    /// Account nonce; defaults to the network's initial nonce.
    #[arg(long)]
    nonce: Option<u32>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Address, with or without the display prefix.
    address: String,

    #[command(flatten)]
    network: NetworkArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    passphrase: Option<&'a str>,
    network: char,
    nonce: u32,
    address: &'a str,
    public_key: &'a str,
    private_key: &'a str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        set_log_level(LogLevel::Debug);
    }

    let result = match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Address(args) => address(args),
        Commands::Validate(args) => validate(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn generate(args: GenerateArgs) -> WavesResult<ExitCode> {
    let config = NetworkConfig::by_name(&args.network.network)?;
    let passphrase = wallet::generate_passphrase(&OsEntropy)?;
    let account = wallet::address_from_passphrase(&passphrase, &config)?;
    print_account(&mut io::stdout().lock(), Some(passphrase.as_str()), &account, &config, args.json)?;
    Ok(ExitCode::SUCCESS)
}

fn address(args: AddressArgs) -> WavesResult<ExitCode> {
    let config = NetworkConfig::by_name(&args.network.network)?;
    let nonce = args.nonce.unwrap_or(config.initial_nonce);
    let account = wallet::derive_account(&args.passphrase, nonce, &config)?;
    print_account(&mut io::stdout().lock(), None, &account, &config, args.json)?;
    Ok(ExitCode::SUCCESS)
}

fn validate(args: ValidateArgs) -> WavesResult<ExitCode> {
    let config = NetworkConfig::by_name(&args.network.network)?;
    let mut out = io::stdout().lock();
    if wallet::verify_address(&args.address, &config) {
        writeln!(out, "valid")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out, "invalid")?;
        Ok(ExitCode::FAILURE)
    }
}

fn print_account(
    out: &mut impl Write,
    passphrase: Option<&str>,
    account: &DerivedAccount,
    config: &NetworkConfig,
    json: bool,
) -> WavesResult<()> {
    if json {
        let output = AccountOutput {
            passphrase,
            network: config.network_code,
            nonce: account.nonce,
            address: &account.address,
            public_key: &account.keys.public_key,
            private_key: &account.keys.private_key,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    if let Some(passphrase) = passphrase {
        writeln!(out, "Passphrase:  {}", passphrase)?;
    }
    writeln!(out, "Network:     {}", config.network_code)?;
    writeln!(out, "Nonce:       {}", account.nonce)?;
    writeln!(out, "Address:     {}", account.address)?;
    writeln!(out, "Public key:  {}", account.keys.public_key)?;
    writeln!(out, "Private key: {}", account.keys.private_key)?;
    Ok(())
}
