// propseek - AI-assisted search over the city asset manager's
// commercial property portfolio.
//
// Without a subcommand the interactive TUI starts; subcommands cover
// one-shot searches, favorites management, category listing and
// configuration diagnostics.

mod cards;
mod exit_codes;
mod shell;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use propseek_client::{fixture, is_sentinel, ClientError, RecommendationClient};
use propseek_config::ai::{AiDiagnostics, ResolvedAiConfig, ENV_KEY};
use propseek_config::favorites::{FavoritesStore, JsonFileBackend};
use propseek_config::settings::Settings;
use propseek_model::labels::{categories, Labels};
use propseek_model::{Language, RecommendationResponse};

use exit_codes::*;

#[derive(Parser)]
#[command(
    name = "propseek",
    version,
    about = "AI-assisted commercial property search (Pécs asset portfolio)",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a one-shot search and print the recommendations
    #[command(after_help = "EXAMPLES:\n    \
        propseek search \"small office near Király street\"\n    \
        propseek search --lang de --json \"Ladenfläche in der Innenstadt\"\n    \
        propseek search --offline test")]
    Search {
        /// Free-text query
        query: String,
        /// Response language (hu, en, de); defaults to the configured one
        #[arg(short, long)]
        lang: Option<Language>,
        /// Print the raw recommendation JSON
        #[arg(long)]
        json: bool,
        /// Never touch the network; serve the built-in demo data
        #[arg(long)]
        offline: bool,
    },
    /// Manage saved listings
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
        /// Override the favorites file (default: ~/.config/propseek/favorites.json)
        #[arg(long, global = true)]
        store: Option<PathBuf>,
    },
    /// List the quick-search categories
    Categories {
        /// Label language (hu, en, de); defaults to the configured one
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Check AI configuration and report problems
    Doctor,
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// Print saved listing links in insertion order
    List,
    /// Save a listing link, or remove it if already saved
    Toggle { link: String },
    /// Remove all saved listings
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        None => match tui::run() {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("error: {}", e);
                EXIT_ERROR
            }
        },
        Some(Commands::Search {
            query,
            lang,
            json,
            offline,
        }) => run_search(&query, lang, json, offline),
        Some(Commands::Favorites { command, store }) => run_favorites(command, store),
        Some(Commands::Categories { lang }) => run_categories(lang),
        Some(Commands::Doctor) => run_doctor(),
    };

    ExitCode::from(code)
}

fn effective_lang(flag: Option<Language>) -> Language {
    flag.unwrap_or_else(|| Settings::load().language)
}

fn run_search(query: &str, lang: Option<Language>, json: bool, offline: bool) -> u8 {
    let query = query.trim();
    if query.is_empty() {
        eprintln!("error: empty query - tell me what kind of property you are looking for");
        return EXIT_USAGE;
    }
    let lang = effective_lang(lang);

    // The demo path never needs a key or the network
    let result = if offline || is_sentinel(query) {
        Ok(fixture::for_lang(lang))
    } else {
        let config = ResolvedAiConfig::load();
        match RecommendationClient::from_config(&config) {
            Ok(client) => client.fetch(query, lang),
            Err(e) => Err(e),
        }
    };

    match result {
        Ok(response) => {
            if json {
                match serde_json::to_string_pretty(&response) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("error: failed to serialize response: {}", e);
                        return EXIT_ERROR;
                    }
                }
            } else {
                print_response(&response, lang);
            }
            EXIT_SUCCESS
        }
        Err(ClientError::MissingKey) => {
            eprintln!(
                "error: missing Gemini API key - set {} or store one in the keychain",
                ENV_KEY
            );
            EXIT_AI_MISSING_KEY
        }
        Err(e) => {
            eprintln!("error: {}", e);
            EXIT_ERROR
        }
    }
}

fn print_response(response: &RecommendationResponse, lang: Language) {
    let t = Labels::for_lang(lang);

    println!("{}", response.summary);
    println!();

    if response.suggestions.is_empty() {
        println!("{}", t.no_results_title);
        println!("{}", t.no_results_sub);
    } else {
        let favorites = FavoritesStore::open(JsonFileBackend::default()).ok();
        for property in &response.suggestions {
            let is_favorite = favorites
                .as_ref()
                .map(|f| f.contains(&property.link))
                .unwrap_or(false);
            println!("{}", cards::plain(property, is_favorite, lang));
        }
    }

    if !response.sources.is_empty() {
        println!("Sources:");
        for source in &response.sources {
            println!("  {} - {}", source.title, source.uri);
        }
    }
}

fn run_favorites(command: FavoritesCommands, store: Option<PathBuf>) -> u8 {
    let backend = match store {
        Some(path) => JsonFileBackend::new(path),
        None => JsonFileBackend::default(),
    };
    let mut store = match FavoritesStore::open(backend) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: failed to open favorites: {}", e);
            return EXIT_ERROR;
        }
    };

    let result = match command {
        FavoritesCommands::List => {
            for link in store.links() {
                println!("{}", link);
            }
            Ok(())
        }
        FavoritesCommands::Toggle { link } => store.toggle(&link).map(|now_favorite| {
            println!("{} {}", if now_favorite { "saved" } else { "removed" }, link);
        }),
        FavoritesCommands::Clear => store.clear(),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_categories(lang: Option<Language>) -> u8 {
    let lang = effective_lang(lang);
    for cat in categories(lang) {
        println!("{:<10} {:<16} {}", cat.id, cat.label, cat.query);
    }
    EXIT_SUCCESS
}

fn run_doctor() -> u8 {
    let settings = Settings::load();
    let config = ResolvedAiConfig::from_settings(&settings.ai);
    let diagnostics = AiDiagnostics::from_resolved(&config);

    print!("{}", diagnostics);
    println!("Language:          {}", settings.language);

    if let Some(reason) = &config.blocking_reason {
        println!();
        println!("Problem: {}", reason);
        return EXIT_ERROR;
    }
    EXIT_SUCCESS
}
