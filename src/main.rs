use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use triple_des::crypto::key_derivation::KeySet;
use triple_des::{CipherContext, CipherError, CipherInput, CipherOutput};

#[derive(Parser)]
#[command(name = "triple_des", about = "Three-key DES-EDE file encryption")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive a 21-byte key file from a password
    Genkey { password: String, key_file: String },
    /// Encrypt a file with a key file
    Encrypt {
        input: String,
        key_file: String,
        output: String,
    },
    /// Decrypt a file with a key file
    Decrypt {
        input: String,
        key_file: String,
        output: String,
    },
}

fn load_key_set(path: &str) -> Result<KeySet, CipherError> {
    let bytes = fs::read(path)?;
    KeySet::from_bytes(&bytes)
}

async fn run(cli: Cli) -> Result<(), CipherError> {
    match cli.command {
        Command::Genkey { password, key_file } => {
            let key_set = KeySet::derive(password.as_bytes());
            fs::write(&key_file, key_set.to_bytes())?;
            log::info!("wrote key file {key_file}");
            log::debug!("key material {}", hex::encode(key_set.to_bytes()));
            Ok(())
        }
        Command::Encrypt {
            input,
            key_file,
            output,
        } => {
            let context = CipherContext::new(&load_key_set(&key_file)?);
            context
                .encrypt(CipherInput::File(input), &mut CipherOutput::File(output))
                .await
        }
        Command::Decrypt {
            input,
            key_file,
            output,
        } => {
            let context = CipherContext::new(&load_key_set(&key_file)?);
            context
                .decrypt(CipherInput::File(input), &mut CipherOutput::File(output))
                .await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
