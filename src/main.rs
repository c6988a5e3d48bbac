use maskerade::config::{CommandLine, Config};
use maskerade::logging::init_logging;
use maskerade::menu::Menu;
use maskerade::output::write_banner;
use maskerade::{describe, NetworkBlock};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CommandLine::parse_args();
    init_logging(&args.log_config)?;
    log::info!("#Start main()");

    if args.json {
        let network = args.network.as_deref().ok_or("--json requires --network")?;
        let block = NetworkBlock::parse(network)?;
        println!("{}", serde_json::to_string_pretty(&describe(&block))?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.no_banner {
        write_banner(&mut out)?;
    }

    let mut menu = Menu::new(io::stdin().lock(), out, Config::from(&args));
    let loaded = match args.network.as_deref().map(|network| menu.load(network)) {
        Some(Ok(_)) => true,
        Some(Err(e)) => {
            log::info!("Ignoring --network: {e}");
            eprintln!("Invalid --network: {e}");
            menu.load_network_interactive()?
        }
        None => menu.load_network_interactive()?,
    };
    if loaded {
        menu.show_summary()?;
        menu.run()?;
    }

    log::info!("#End main()");
    Ok(())
}
