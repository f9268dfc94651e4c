//! Seekr CLI application entry point
//!
//! This is the main executable for the seekr query builder. It loads the
//! configured datasets, then either opens the interactive browser or runs
//! one of the non-interactive commands.
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive browser (default command)
//! seekr
//! seekr browse
//!
//! # Assemble a query from flags
//! seekr build -c Music -g Rock -f HD -x shorts
//!
//! # Assemble, add noise, and open it on YouTube
//! seekr build -c Music -g Rock --noise -e youtube --open
//!
//! # Print the catalog
//! seekr list --words
//!
//! # Quiet mode (only output the query)
//! seekr -q build -c Music -g Rock
//! ```
//!
//! # Configuration
//!
//! On first run, seekr will prompt for a dataset directory. Configuration
//! is stored in the user's config directory
//! (`~/.config/seekr/config.toml` on Linux).

use seekr::{
    SeekrError,
    cli::{Cli, Commands, ConfigCommands},
    config::SeekrConfig,
    dataset::Catalog,
    output,
    search::{self, SearchEngine},
    session::QuerySession,
    ui,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SeekrError>;

/// Resolve the dataset directory from the CLI override or the config
fn resolve_dataset_dir(config: &SeekrConfig, cli_dir: Option<PathBuf>) -> Result<PathBuf> {
    cli_dir
        .or_else(|| config.dataset_dir.clone())
        .ok_or_else(|| {
            SeekrError::InvalidInput(
                "No dataset directory configured. Use --data-dir <DIR> or \
                 'seekr config set dataset_dir=<DIR>'."
                    .into(),
            )
        })
}

/// Handle the browse command - interactive query builder
///
/// # Errors
///
/// Returns `SeekrError` if the terminal cannot be driven.
fn handle_browse_command(catalog: Catalog) -> Result<()> {
    let mut session = QuerySession::new(catalog);
    ui::run_browse(&mut session)?;
    Ok(())
}

/// Parameters for the build command, lifted out of the CLI enum
struct BuildParams {
    category: Option<String>,
    genre: Option<String>,
    features: Vec<String>,
    excludes: Vec<String>,
    noise: bool,
    no_random_word: bool,
    engine: Option<SearchEngine>,
    open: bool,
}

/// Handle the build command - assemble a query from flags
///
/// Selections mirror the interactive flow: category before genre, the
/// genre selection triggers the random draw, catalog excludes use their
/// substitution token and unknown excludes fall back to free text.
///
/// # Errors
///
/// Returns `SeekrError` for unknown category/genre names, a genre with an
/// empty word pool, or an empty final query.
fn handle_build_command(
    catalog: Catalog,
    config: &SeekrConfig,
    params: BuildParams,
    quiet: bool,
) -> Result<()> {
    let mut session = QuerySession::new(catalog);
    let mut rng = rand::thread_rng();

    if params.no_random_word || config.no_random_word {
        session.toggle_no_random_word();
    }

    if let Some(category) = &params.category {
        session.select_category_by_name(category)?;
    }
    if let Some(genre) = &params.genre {
        session.select_genre_by_name(genre, &mut rng)?;
    }

    for feature in &params.features {
        session.add_feature_text(feature);
    }

    for exclude in &params.excludes {
        // Catalog tags carry their own substitution token
        if let Some(index) = session
            .catalog()
            .excludes
            .iter()
            .position(|e| e.name == *exclude)
        {
            session.toggle_exclude(index)?;
        } else {
            session.add_exclude_text(exclude);
        }
    }

    if params.noise {
        session.generate_noise(&mut rng);
    }

    let query = session.build_query()?;

    if !quiet {
        println!("{}", output::preview_line(session.state(), quiet));
    }
    println!("{}", output::query_line(&query, quiet));

    if params.open {
        let engine = params.engine.unwrap_or(config.engine);
        let url = search::dispatch(engine, &query)?;
        if !quiet {
            println!("{}", output::opened_line(&url));
        }
    }

    Ok(())
}

/// Handle the list command - print the catalog
fn handle_list_command(catalog: &Catalog, words: bool, quiet: bool) {
    print!("{}", output::catalog_tree(catalog, words, quiet));
}

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `SeekrError` if the configuration key is invalid, value parsing
/// fails, or configuration save fails.
fn handle_config_command(
    mut config: SeekrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(SeekrError::InvalidInput(
                    "Invalid format. Use: seekr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "dataset_dir" => {
                    config.set_dataset_dir(PathBuf::from(value))?;
                    if !quiet {
                        println!("Set dataset_dir = {value}");
                    }
                }
                "engine" => {
                    let engine = match value {
                        "video" => SearchEngine::VideoSearch,
                        "youtube" => SearchEngine::Youtube,
                        _ => {
                            return Err(SeekrError::InvalidInput(format!(
                                "Invalid value for engine: '{value}'. Use 'video' or 'youtube'"
                            )));
                        }
                    };
                    config.engine = engine;
                    config.save()?;
                    if !quiet {
                        println!("Set engine = {engine}");
                    }
                }
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        SeekrError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                "no_random_word" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        SeekrError::InvalidInput(format!(
                            "Invalid value for no_random_word: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.no_random_word = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set no_random_word = {new_value}");
                    }
                }
                _ => {
                    return Err(SeekrError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: \
                         dataset_dir, engine, quiet, no_random_word"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "dataset_dir" => match &config.dataset_dir {
                Some(dir) => println!("{}", dir.display()),
                None => println!("(unset)"),
            },
            "engine" => println!("{}", config.engine),
            "quiet" => println!("{}", config.quiet),
            "no_random_word" => println!("{}", config.no_random_word),
            _ => {
                return Err(SeekrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: \
                     dataset_dir, engine, quiet, no_random_word"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the seekr application
///
/// Loads configuration, parses command-line arguments, loads the catalog
/// for catalog-backed commands, and dispatches to the appropriate handler.
///
/// # Errors
///
/// Returns `SeekrError` if configuration loading fails, the dataset cannot
/// be loaded, or any command handler returns an error.
fn main() -> Result<()> {
    let config = SeekrConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        handle_config_command(config, command, quiet)?;
    } else {
        // All remaining commands need the catalog; load failure aborts
        // before any interaction starts.
        let data_dir = resolve_dataset_dir(&config, cli.data_dir)?;
        let catalog = Catalog::load(&data_dir)?;

        match command {
            Commands::Browse => handle_browse_command(catalog)?,
            Commands::Build {
                category,
                genre,
                features,
                excludes,
                noise,
                no_random_word,
                engine,
                open,
            } => handle_build_command(
                catalog,
                &config,
                BuildParams {
                    category,
                    genre,
                    features,
                    excludes,
                    noise,
                    no_random_word,
                    engine,
                    open,
                },
                quiet,
            )?,
            Commands::List { words } => handle_list_command(&catalog, words, quiet),
            Commands::Config { .. } => unreachable!(),
        }
    }

    Ok(())
}
