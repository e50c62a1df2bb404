//! Arcade Binary
//!
//! Interactive rock-paper-scissors against the computer, with a simulated
//! camera and model standing in for the real ones.

use rochambeau::*;
use rochambeau::util::Unique;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let session = arcade::Arcade::run().await?;
    log::info!(
        "[arcade] session {} ended at {} after {} rounds",
        session.id(),
        session.score(),
        session.rounds()
    );
    Ok(())
}
