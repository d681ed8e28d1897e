//! create-vite - Interactive scaffolding for Vite projects

use clap::{Parser, ValueEnum};
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{OverwriteDecision, ProductConfig, TemplateCatalog};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Vite product configuration
#[derive(Clone)]
pub struct ViteConfig;

impl ProductConfig for ViteConfig {
    fn name(&self) -> &'static str {
        "create-vite"
    }

    fn display_name(&self) -> &'static str {
        "create-vite"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new Vite project in JavaScript or TypeScript."
    }

    fn default_target_dir(&self) -> &'static str {
        "vite-project"
    }

    fn catalog(&self) -> TemplateCatalog {
        TemplateCatalog::builtin()
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_VITE_TEMPLATE_DIR"
    }

    fn default_template_root(&self) -> PathBuf {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
            .filter(|dir| dir.is_dir());

        beside_exe.unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")))
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-vite")]
#[command(about = "Create a new Vite project in JavaScript or TypeScript.")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Project directory to create
    pub directory: Option<String>,

    /// Template id to use
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    pub template: Option<String>,

    /// What to do when the target directory is not empty
    #[arg(long, value_enum)]
    pub overwrite: Option<OverwriteArg>,

    /// Directory containing template-<id> trees (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Print usage and exit
    #[arg(short, long)]
    pub help: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OverwriteArg {
    Yes,
    No,
    Ignore,
}

impl From<OverwriteArg> for OverwriteDecision {
    fn from(arg: OverwriteArg) -> Self {
        match arg {
            OverwriteArg::Yes => OverwriteDecision::RemoveAndContinue,
            OverwriteArg::No => OverwriteDecision::Cancel,
            OverwriteArg::Ignore => OverwriteDecision::IgnoreAndContinue,
        }
    }
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            template: args.template,
            directory: args.directory,
            overwrite: args.overwrite.map(Into::into),
        }
    }
}

fn help_text<C: ProductConfig>(config: &C) -> String {
    format!(
        "\
Usage: {name} [OPTION]... [DIRECTORY]

{description}
With no arguments, start the CLI in interactive mode.

Options:
  -t, --template NAME        use a specific template
      --overwrite ACTION     yes, no or ignore when the directory is not empty
      --template-dir DIR     read templates from DIR

Available templates:
{templates}",
        name = config.name(),
        description = config.cli_description(),
        templates = config.catalog().help_listing(),
    )
}

fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = std::env::var("CREATE_VITE_LOG").unwrap_or_else(|_| "warn".to_string());
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");
    let config = ViteConfig;

    if args.help {
        println!("{}", help_text(&config));
        return;
    }

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_template_flag_counts_as_absent() {
        let args = Args::try_parse_from(["create-vite", "app", "--template"]).unwrap();
        assert_eq!(args.template.as_deref(), Some(""));
        assert_eq!(args.directory.as_deref(), Some("app"));
    }

    #[test]
    fn test_overwrite_flag_maps_to_decision() {
        let args = Args::try_parse_from(["create-vite", "--overwrite", "ignore"]).unwrap();
        let create: CreateArgs = args.into();
        assert_eq!(create.overwrite, Some(OverwriteDecision::IgnoreAndContinue));
    }

    #[test]
    fn test_help_lists_template_pairs() {
        let help = help_text(&ViteConfig);
        assert!(help.starts_with("Usage: create-vite [OPTION]... [DIRECTORY]"));
        assert!(help.contains("react-swc-ts"));
        assert!(help.contains("qwik-ts"));
    }

    #[test]
    fn test_bundled_templates_ship_with_the_crate() {
        let root = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"));
        for id in ["vanilla", "vanilla-ts", "vue", "vue-ts", "react", "react-ts"] {
            let manifest = root.join(format!("template-{}", id)).join("package.json");
            assert!(manifest.is_file(), "missing {}", manifest.display());
        }
    }
}
