use anyhow::Result;

pub fn run() -> Result<()> {
    println!("abacus {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
