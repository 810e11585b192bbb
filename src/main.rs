//! # label-printer CLI
//!
//! Command-line interface for encoding label print jobs.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a JSON print job to a file
//! label-printer encode --job job.json --out job.bin
//!
//! # Inspect the encoded job as escaped text
//! label-printer encode --job job.json --text
//!
//! # List supported commands
//! label-printer commands
//!
//! # Serve the encoder over HTTP
//! label-printer serve --listen 0.0.0.0:8080
//! ```
//!
//! Set `RUST_LOG=debug` to see how a job is resolved.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use label_printer::{
    protocol::Kind,
    server::{self, ServerConfig},
    LabelPrinterError, PrintJob,
};

/// label-printer - Label printer command encoder
#[derive(Parser, Debug)]
#[command(name = "label-printer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON print job into printer bytes
    Encode {
        /// Print job file (template and label values)
        #[arg(long, value_name = "FILE")]
        job: PathBuf,

        /// Write the bytes to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print one escaped command per line instead of raw bytes
        #[arg(long)]
        text: bool,
    },

    /// List the commands the encoder supports
    Commands,

    /// Start the HTTP encoder
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LabelPrinterError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { job, out, text } => {
            let source = fs::read_to_string(&job)?;
            let print_job: PrintJob = serde_json::from_str(&source)?;
            let bytes = print_job.output()?;

            let rendered = if text { escape(&bytes).into_bytes() } else { bytes };

            match out {
                Some(path) => {
                    fs::write(&path, &rendered)?;
                    eprintln!("Wrote {} bytes to {}", rendered.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&rendered)?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Commands => {
            println!("Available commands:");
            for kind in Kind::ALL {
                println!("  {:<3} {}", kind.prefix(), kind.name());
            }
        }
        Commands::Serve { listen } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(ServerConfig {
                listen_addr: listen,
            }))?;
        }
    }

    Ok(())
}

/// Render framed commands one per line, with ESC and NUL spelled out.
fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 16);
    for &byte in bytes {
        match byte {
            0x1B => out.push_str("<ESC>"),
            0x0A => out.push_str("<LF>"),
            0x00 => out.push_str("<NUL>\n"),
            b if b.is_ascii_graphic() || b == b' ' => out.push(b as char),
            b => out.push_str(&format!("<{:02X}>", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_framing() {
        let bytes = b"\x1bC\n\x00\x1bRC001;A B\n\x00";
        assert_eq!(escape(bytes), "<ESC>C<LF><NUL>\n<ESC>RC001;A B<LF><NUL>\n");
    }

    #[test]
    fn test_escape_non_ascii() {
        let bytes = "\x1bRC001;\u{c5}\n\x00".as_bytes();
        assert_eq!(escape(bytes), "<ESC>RC001;<C3><85><LF><NUL>\n");
    }
}
