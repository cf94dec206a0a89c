use xgit::core::executor::GitExecutor;
use xgit::{cli, config, setup_logging};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    // Build the registry; a broken config file is fatal before dispatch
    let registry = match config::load_registry(None) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    };

    // Dispatch and mirror the resulting exit code
    let mut executor = GitExecutor::new();
    let code = cli::execute(&registry, &args.argv, &mut executor);
    std::process::exit(code);
}
