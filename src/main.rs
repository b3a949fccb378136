use r53_sweep::{build_cli, init_logging, run_command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = build_cli();
    let matches = app.get_matches();

    // Parse args before logging init; the verbose flag picks the level
    init_logging(matches.get_flag("verbose"));

    run_command(&matches).await?;

    Ok(())
}
