use clap::Parser;
use miette::Result;
use mechworks::cli::{Cli, Commands, GlobalOpts};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(&global);

    match cli.command {
        Commands::Demo(args) => mechworks::cli::commands::demo::run(args, &global),
        Commands::Show => mechworks::cli::commands::robot::run_show(&global),
        Commands::Fly => mechworks::cli::commands::robot::run_fly(&global),
        Commands::Work => mechworks::cli::commands::robot::run_work(&global),
        Commands::Parts(cmd) => mechworks::cli::commands::parts::run(cmd, &global),
        Commands::Remove(args) => mechworks::cli::commands::remove::run(args, &global),
        Commands::Config(cmd) => mechworks::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => mechworks::cli::commands::completions::run(args),
    }
}

/// Logs go to stderr so they never mix with display output.
/// `MECHWORKS_LOG` overrides the level chosen by `--verbose` / `--quiet`.
fn init_logging(global: &GlobalOpts) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("MECHWORKS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("mechworks={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
