//! Command-line surface.

use crate::core::rpcauth;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rpcauth",
    version,
    about = "Generate an rpcauth line for bitcoin.conf"
)]
pub struct Cli {
    /// Username for the rpcauth entry
    pub username: String,
}

impl Cli {
    /// Parse arguments, printing a usage line to stdout and exiting 1 on a
    /// wrong argument count. `--help` and `--version` keep clap's behavior.
    pub fn parse_or_usage() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => {
                let program = std::env::args().next().unwrap_or_else(|| "rpcauth".into());
                println!("Usage: {} <username>", program);
                std::process::exit(1);
            }
        }
    }

    pub fn run(self) -> Result<()> {
        let password = rpcauth::generate_password()?;
        let (line, password) = rpcauth::generate_rpcauth(&self.username, &password)?;
        println!("String to be appended to bitcoin.conf:");
        println!("{}", line);
        println!("Your password:");
        println!("{}", &*password);
        Ok(())
    }
}
