//! Command-line argument definition and processing.

use std::path::PathBuf;

use afa_i18n::i18n::{
    I18nContext, Language, TranslationStore, detect_system_locale, find_locales_dir,
};
use afa_i18n::storage::FileStorage;
use afa_i18n::util::paths;
use clap::Parser;

use crate::args::utils::{load_discovered_store, load_store};

/// afa-i18n - Localize Aran Football Academy pages and inspect translations
#[derive(Parser, Debug, Default)]
#[command(name = "afa-i18n")]
#[command(version)]
#[command(about = "Localize Aran Football Academy pages and inspect translations", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Language to use (es, ca, fr, en); defaults to the saved selection, then the system locale
    #[arg(short = 'L', long)]
    pub lang: Option<String>,

    /// Print the translation of a dot-notation key (e.g., afa-i18n -t hero.slider.dot --arg index=2)
    #[arg(short = 't', long)]
    pub translate: Option<String>,

    /// Placeholder argument for --translate as name=value (repeatable)
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Localize an HTML page carrying data-i18n markers
    #[arg(short = 'r', long, value_name = "FILE")]
    pub render: Option<PathBuf>,

    /// Write the rendered page to FILE instead of stdout (use with --render)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the selected language for later runs (unsupported codes select Spanish)
    #[arg(long, value_name = "CODE")]
    pub set_language: Option<String>,

    /// List keys each language is missing compared to Spanish
    #[arg(long)]
    pub coverage: bool,

    /// Print machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Storage file holding the saved language (default: ~/.config/afa-i18n/storage.json)
    #[arg(long, value_name = "FILE")]
    pub storage: Option<PathBuf>,

    /// Load locale files from DIR instead of the built-in copies
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Run every action requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` when every action succeeded
///
/// # Errors
/// - Returns a message when locales cannot be loaded, a file cannot be read or written,
///   an argument is malformed, or the language cannot be saved
///
/// Details:
/// - Locales come from `--locales-dir`, else a discovered development/installed
///   directory, else the embedded copies
/// - Actions run in order: set language, translate, render, coverage
/// - Without any action the resolved current language is printed
pub fn process_args(args: &Args) -> Result<(), String> {
    if let Some(dir) = args.locales_dir.as_deref() {
        return run_actions(args, &load_store(dir)?);
    }
    if let Some(store) = load_discovered_store(find_locales_dir().as_deref()) {
        return run_actions(args, &store);
    }
    run_actions(args, TranslationStore::embedded())
}

/// Run the requested actions against `store`.
fn run_actions(args: &Args, store: &TranslationStore) -> Result<(), String> {
    use crate::args::{coverage, language, render, translate};

    let storage_path = args.storage.clone().unwrap_or_else(paths::storage_path);
    tracing::debug!(path = %storage_path.display(), "using storage file");
    let mut ctx = I18nContext::new(store, Box::new(FileStorage::new(storage_path)));

    // Handle --set-language
    if let Some(code) = &args.set_language {
        language::handle_set_language(&mut ctx, code, args.json)?;
    }

    let lang = resolve_language(&ctx, args);
    let mut acted = args.set_language.is_some();

    // Handle --translate
    if let Some(key) = &args.translate {
        translate::handle_translate(&ctx, key, &args.args, lang, args.json)?;
        acted = true;
    }

    // Handle --render
    if let Some(input) = &args.render {
        render::handle_render(store, input, args.output.as_deref(), lang, args.json)?;
        acted = true;
    } else if args.output.is_some() {
        tracing::warn!("--output has no effect without --render");
    }

    // Handle --coverage
    if args.coverage {
        coverage::handle_coverage(store, args.json)?;
        acted = true;
    }

    if !acted {
        language::print_current_language(lang, args.json)?;
    }
    Ok(())
}

/// What: Pick the language for this run.
///
/// Inputs:
/// - `ctx`: Context reading the saved selection
/// - `args`: Parsed arguments
///
/// Output:
/// - `--lang` when given (unsupported codes select the default), otherwise the saved
///   selection, the system locale or the default, in that order
fn resolve_language(ctx: &I18nContext<'_>, args: &Args) -> Language {
    args.lang.as_deref().map_or_else(
        || ctx.resolve_initial_language(detect_system_locale().as_deref()),
        |code| {
            if Language::from_code(code).is_none() {
                tracing::warn!(code = %code, "unsupported language requested");
            }
            Language::from_code_or_default(code)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_parse() {
        let args = Args::try_parse_from([
            "afa-i18n",
            "--lang",
            "fr",
            "-t",
            "hero.slider.dot",
            "--arg",
            "index=2",
            "--arg",
            "label=x",
            "--json",
        ])
        .expect("valid flags");
        assert_eq!(args.lang.as_deref(), Some("fr"));
        assert_eq!(args.translate.as_deref(), Some("hero.slider.dot"));
        assert_eq!(args.args, vec!["index=2".to_string(), "label=x".to_string()]);
        assert!(args.json);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_explicit_lang_wins_over_storage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"afa-lang":"ca"}"#).expect("write storage");
        let ctx = I18nContext::new(
            TranslationStore::embedded(),
            Box::new(FileStorage::new(path)),
        );

        let explicit = Args {
            lang: Some("en".to_string()),
            ..Args::default()
        };
        assert_eq!(resolve_language(&ctx, &explicit), Language::En);
        assert_eq!(resolve_language(&ctx, &Args::default()), Language::Ca);

        let bogus = Args {
            lang: Some("de".to_string()),
            ..Args::default()
        };
        assert_eq!(resolve_language(&ctx, &bogus), Language::Es);
    }

    #[test]
    fn test_set_language_then_translate() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = dir.path().join("storage.json");
        let args = Args {
            set_language: Some("fr".to_string()),
            translate: Some("nav.home".to_string()),
            storage: Some(storage.clone()),
            ..Args::default()
        };
        process_args(&args).expect("actions succeed");
        let saved = std::fs::read_to_string(storage).expect("storage written");
        assert!(saved.contains("\"afa-lang\": \"fr\""));
    }
}
