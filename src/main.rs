use clap::Parser;
use triage::cli::{
    handle_completions, handle_config_init, handle_route, handle_signals, Cli, Commands,
    ConfigCommands,
};
use triage::config::TriageConfig;

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Route(args) => {
            // A missing config file is fine; defaults back every setting.
            let config = TriageConfig::load(Some(&args.config))
                .unwrap_or_else(|_| TriageConfig::default())
                .with_env_overrides();
            triage::logging::init(&config.logging);

            match config.validate() {
                Err(e) => Err(e.into()),
                Ok(()) => match handle_route(&args, &config) {
                    Ok(output) => {
                        println!("{}", output);
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            }
        }
        Commands::Signals(args) => {
            println!("{}", handle_signals(&args));
            Ok(())
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
