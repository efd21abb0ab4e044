mod cmd;
mod logging;
mod picker;

use clap::{Args, Parser, Subcommand};
use mdmeta_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdm", version, about = "Frontmatter metadata for markdown vaults")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Note to operate on (defaults to the focused note)
    #[arg(long, global = true)]
    note: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Toggle a tag on the active note
    AddTag(AddValueArgs),

    /// Toggle a category on the active note
    AddCategory(AddValueArgs),

    /// Guided add of any metadata field
    Add(AddArgs),

    /// Browse, modify, or delete the active note's metadata
    Remove(RemoveArgs),

    /// Print ranked value suggestions for a field
    Suggest(SuggestArgs),

    /// Show the active note's metadata
    Show,

    /// Set, show, or clear the focused note
    Focus(FocusArgs),

    /// Validate configuration and print resolved paths
    Doctor,

    /// Open the guided add flow whenever a new note appears in the vault
    Watch,
}

#[derive(Debug, Args)]
pub struct AddValueArgs {
    /// Value to toggle without opening a picker
    #[arg(long)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Field to modify without opening the field picker
    #[arg(long)]
    pub field: Option<String>,

    /// Value to toggle (requires --field)
    #[arg(long)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Field to modify without opening the browser
    #[arg(long)]
    pub field: Option<String>,

    /// Value to remove (requires --field)
    #[arg(long)]
    pub value: Option<String>,

    /// Replace the removed value with this one instead of deleting it
    #[arg(long)]
    pub replace: Option<String>,
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Field to suggest values for (e.g. tags, category, author)
    pub field: String,

    /// Query to filter by
    pub query: Option<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not synthesize a "create new" entry
    #[arg(long)]
    pub no_create: bool,
}

#[derive(Debug, Args)]
pub struct FocusArgs {
    /// Note to focus
    #[arg(value_name = "NOTE")]
    pub target: Option<PathBuf>,

    /// Clear the current focus
    #[arg(long)]
    pub clear: bool,
}

fn main() {
    let cli = Cli::parse();

    // Best-effort logging init; commands report config errors themselves.
    if let Ok(cfg) = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref()) {
        logging::init(&cfg);
    }

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();
    let note = cli.note.as_deref();

    match cli.command {
        Commands::AddTag(args) => cmd::tag::run(config, profile, note, &args),
        Commands::AddCategory(args) => cmd::category::run(config, profile, note, &args),
        Commands::Add(args) => cmd::add::run(config, profile, note, &args),
        Commands::Remove(args) => cmd::remove::run(config, profile, note, &args),
        Commands::Suggest(args) => cmd::suggest::run(config, profile, note, &args),
        Commands::Show => cmd::show::run(config, profile, note),
        Commands::Focus(args) => cmd::focus::run(config, profile, &args),
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Watch => cmd::watch::run(config, profile),
    }
}
