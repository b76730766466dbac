use anyhow::Result;

fn main() -> Result<()> {
    let cli = rpcauth::cli::Cli::parse_or_usage();
    cli.run()
}
