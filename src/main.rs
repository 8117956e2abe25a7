/*!
 * Ready Queue - Main Entry Point
 *
 * Reads commands until '#' or end of input:
 * - Insert processes in priority order
 * - Delete and query processes by id
 * - Print the queue in ascending and descending order on exit
 */

use clap::Parser;
use tracing::info;

use ready_queue::{init_tracing, Config, Dispatcher};

fn main() -> miette::Result<()> {
    let config = Config::parse();

    // Initialize structured tracing
    init_tracing(&config)?;

    info!(
        input = ?config.input,
        output = ?config.output,
        "ready queue starting"
    );

    let input = config.open_input()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut dispatcher = Dispatcher::new(config.output);
    dispatcher.run(input, &mut out)?;

    Ok(())
}
