//! channel-demo: exercise the informational and alert channels

use channel_logger::config::ChannelsBuilder;
use channel_logger::demo::{self, DemoArgs};
use channel_logger::registry;
use clap::Parser;

fn main() {
    let args = DemoArgs::parse();
    let program = env!("CARGO_BIN_NAME");

    let logger = match ChannelsBuilder::new()
        .destination(args.destination())
        .build(registry::global(), program)
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();
    demo::run(&args, &logger, program, &mut stdout);

    if let Err(e) = registry::global().shutdown() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
