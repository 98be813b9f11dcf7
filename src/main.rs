use blog_nest::{config, nest, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "blog-nest")]
#[command(about = "Nest date-prefixed blog posts into year/month/day sections")]
#[command(long_about = "\
Nest date-prefixed blog posts into year/month/day sections

Every file in the blog directory is moved under the directory named by the
first three hyphen-separated parts of its filename. Each new level gets an
_index.md that hides the section and redirects to the blog root.

  content/blog/                      content/blog/
  ├── _index.md                      ├── _index.md          (left alone)
  └── 2023-05-01-hello.md     →      └── 2023/
                                         ├── _index.md
                                         └── 05/
                                             ├── _index.md
                                             └── 01/
                                                 ├── _index.md
                                                 └── 2023-05-01-hello.md

Run 'blog-nest gen-config' to print a documented blog-nest.toml.")]
#[command(version)]
struct Cli {
    /// Blog directory (overrides base_dir from the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Move every flat post into its year/month/day directory (default)
    Nest,
    /// Print a stock blog-nest.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Nest) {
        Command::Nest => {
            let mut nest_config = config::load_config(&cli.config)?;
            if let Some(source) = cli.source {
                nest_config.base_dir = source;
            }

            println!("==> Nesting posts in {}", nest_config.base_dir.display());
            let (tx, rx) = mpsc::channel();
            let result = nest::run(&nest_config.base_dir, &nest_config, Some(tx));
            let events: Vec<nest::NestEvent> = rx.try_iter().collect();
            output::print_events(&events);

            let report = result?;
            output::print_summary(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
