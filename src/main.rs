use std::io;

use anyhow::Result;
use tracing::info;

use parlor_term::Terminal;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("parlor starting");

    let stdin = io::stdin();
    Terminal::new().run(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
