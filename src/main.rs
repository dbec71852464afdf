use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod auth;
use saltpass::{Credential, ITERATIONS};

/// Credential checked by the demonstration run; it encodes "hello".
const DEMO_CREDENTIAL: &str =
    "7196f3f4a1a487cc79c2e51c49d1f5e0f3e9a4798a9750b9d687a585edd947759aa64c0a2953d737";

#[derive(Debug, Parser)]
#[command(name = "saltpass")]
#[command(
    version,
    about = "Salted, iterated SHA-256 password encoding and verification."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encodes a password with a fresh random salt
    Encode {
        /// Password to encode (read from stdin or prompt when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Checks a password against an encoded credential
    #[command(arg_required_else_help = true)]
    Verify {
        encoded: String,

        /// Password to check (read from stdin or prompt when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Shows the salt and checksum of an encoded credential
    #[command(arg_required_else_help = true)]
    Info { encoded: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match args.command {
        None => {
            println!("{}", saltpass::encode("hello")?);
            println!("{}", saltpass::matches("hello", DEMO_CREDENTIAL));
        }
        Some(Commands::Encode { password }) => {
            let password = auth::read_password(password)?;
            println!("{}", saltpass::encode(&password)?);
        }
        Some(Commands::Verify { encoded, password }) => {
            let password = auth::read_password(password)?;
            let matched =
                saltpass::verify(&password, &encoded).context("cannot verify credential")?;
            println!("{matched}");
        }
        Some(Commands::Info { encoded }) => {
            let cred: Credential = encoded.parse().context("invalid credential")?;
            println!("algorithm:  sha256 x {ITERATIONS}");
            println!("salt:       {}", saltpass::hex::encode(cred.salt()));
            println!("checksum:   {}", saltpass::hex::encode(cred.checksum()));
        }
    }

    Ok(())
}
