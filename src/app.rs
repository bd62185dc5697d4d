use aesgcm_hex::config::KEY_ENV;
use aesgcm_hex::{AuthenticatedCipherHandle, SecretKey};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text, printing hex ciphertext.
    Encrypt {
        text: String,

        /// Hex nonce for this call instead of the default nonce.
        #[arg(long)]
        with_nonce: Option<String>,
    },

    /// Decrypt hex ciphertext, printing the plaintext.
    Decrypt {
        ciphertext: String,

        /// Hex nonce for this call instead of the default nonce.
        #[arg(long)]
        with_nonce: Option<String>,
    },
}

#[derive(Parser)]
#[command(name = "aesgcm-hex", version, about = "Encrypt and decrypt text with AES-GCM, exchanging ciphertext as hex.")]
pub struct App {
    /// AES key, 16 bytes for AES-128 or 32 bytes for AES-256. Prompted for when absent.
    #[arg(short, long, global = true, env = KEY_ENV, hide_env_values = true)]
    key: Option<String>,

    /// Default nonce as 24 hex digits.
    #[arg(short, long, global = true, default_value = "")]
    nonce: String,

    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub fn execute(self) -> Result<()> {
        let key = match self.key {
            Some(key) => SecretKey::from_string(key),
            None => Self::prompt_key()?,
        };

        let handle = AuthenticatedCipherHandle::configure(key.expose_secret(), &self.nonce).context("failed to configure cipher")?;
        println!("{}", Self::run(&handle, self.command)?);
        Ok(())
    }

    fn run(handle: &AuthenticatedCipherHandle, command: Commands) -> Result<String> {
        match command {
            Commands::Encrypt { text, with_nonce } => match with_nonce {
                Some(nonce) => handle.encrypt_with_nonce(&text, &nonce),
                None => handle.encrypt(&text),
            }
            .context("encryption failed"),
            Commands::Decrypt { ciphertext, with_nonce } => match with_nonce {
                Some(nonce) => handle.decrypt_with_nonce(&ciphertext, &nonce),
                None => handle.decrypt(&ciphertext),
            }
            .context("decryption failed"),
        }
    }

    fn prompt_key() -> Result<SecretKey> {
        let key = inquire::Password::new("Key:").without_confirmation().prompt().context("failed to read key")?;
        Ok(SecretKey::from_string(key))
    }
}
