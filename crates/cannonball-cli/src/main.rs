use anyhow::{Context, Result, bail};
use cannonball_config::Settings;
use cannonball_engine::{
    CursorPos, NoteBuffer, PromptRequest, build_prompt, classify, detect_trigger,
    extract_context, parse_document, parsing::snapshot::dump_tree, round_trip,
};
use cannonball_llm::{HttpTransport, complete};
use clap::{Args, Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "cannonball")]
#[command(about = "Cursor-aware AI text generation for markdown notes", long_about = None)]
struct Cli {
    /// Settings file (default: ~/.config/cannonball/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate text for an instruction at the cursor
    Prompt {
        #[command(flatten)]
        target: Target,
        /// What to ask for
        instruction: String,
        #[command(flatten)]
        generation: Generation,
    },
    /// Run the instruction typed after the trigger phrase on the cursor line
    Trigger {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        generation: Generation,
    },
    /// Show the label and context window the cursor resolves to
    Context {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        json: bool,
    },
    /// Print the document tree
    Tree {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Write a settings file with default values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Normalize a note to canonical markdown
    Fmt {
        file: PathBuf,
        /// Rewrite the file instead of printing
        #[arg(long)]
        write: bool,
    },
}

/// A note and a zero-based cursor in it.
#[derive(Args)]
struct Target {
    file: PathBuf,
    #[arg(long)]
    line: usize,
    #[arg(long)]
    ch: usize,
}

impl Target {
    fn cursor(&self) -> CursorPos {
        CursorPos::new(self.line, self.ch)
    }
}

#[derive(Args)]
struct Generation {
    /// Write the result into the note at the cursor instead of printing it
    #[arg(long)]
    insert: bool,
    /// Print the prompts without calling the API
    #[arg(long)]
    dry_run: bool,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    max_tokens: Option<u32>,
    #[arg(long)]
    temperature: Option<f32>,
}

impl Generation {
    fn apply(&self, settings: &mut Settings) {
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            settings.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = temperature;
        }
    }
}

/// Info by default; `RUST_LOG` replaces the default when set.
fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    logger_builder().init();

    let cli = Cli::parse();
    if let Command::Init { force } = cli.command {
        return init_settings(cli.config.as_deref(), force);
    }
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Prompt {
            target,
            instruction,
            generation,
        } => run_prompt(&target, &instruction, &generation, settings).await,
        Command::Trigger { target, generation } => {
            run_trigger(&target, &generation, settings).await
        }
        Command::Context { target, json } => show_context(&target, json),
        Command::Tree { file, json } => show_tree(&file, json),
        Command::Fmt { file, write } => format_note(&file, write),
        Command::Init { .. } => Ok(()),
    }
}

fn init_settings(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(Settings::config_path, Path::to_path_buf);
    if path.exists() && !force {
        bail!("{} already exists; pass --force to replace it", path.display());
    }
    Settings::default()
        .save_to_path(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote default settings to {}", path.display());
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from_path(path)?
            .with_context(|| format!("no settings file at {}", path.display()))?,
        None => {
            log::debug!("settings path: {}", Settings::config_path().display());
            Settings::load_or_default()?
        }
    };
    Ok(settings)
}

fn read_note(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_note(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

async fn run_prompt(
    target: &Target,
    instruction: &str,
    generation: &Generation,
    mut settings: Settings,
) -> Result<()> {
    generation.apply(&mut settings);
    settings.validate()?;

    let text = read_note(&target.file)?;
    let cursor = target.cursor();
    let request = build_prompt(&text, cursor, instruction);
    if generation.dry_run {
        print_prompt(&request);
        return Ok(());
    }

    let reply = generate(&request, &settings).await?;
    if generation.insert {
        let mut buffer = NoteBuffer::new(&text);
        buffer.insert_at(cursor, &reply);
        write_note(&target.file, &buffer.get_value())?;
        log::info!(
            "inserted {} chars into {}",
            reply.chars().count(),
            target.file.display()
        );
    } else {
        println!("{reply}");
    }
    Ok(())
}

/// The inline-suggest flow: the phrase and the query typed after it are
/// removed from the note, then the query runs as the instruction at the
/// phrase's start.
async fn run_trigger(
    target: &Target,
    generation: &Generation,
    mut settings: Settings,
) -> Result<()> {
    if !settings.is_enabled {
        log::info!("cannonball is disabled in settings");
        return Ok(());
    }
    generation.apply(&mut settings);
    settings.validate()?;

    let text = read_note(&target.file)?;
    let cursor = target.cursor();
    let mut buffer = NoteBuffer::new(&text);
    let line = buffer
        .get_line(cursor.line)
        .with_context(|| format!("{} has no line {}", target.file.display(), cursor.line))?;

    let Some(trigger) = detect_trigger(&line, cursor, &settings.trigger_phrase) else {
        bail!(
            "no {:?} before the cursor on line {}",
            settings.trigger_phrase,
            cursor.line
        );
    };
    let instruction = trigger.query.trim();
    if instruction.is_empty() {
        bail!("nothing typed after {:?}", settings.trigger_phrase);
    }

    buffer.replace_range("", trigger.start, trigger.end);
    let request = build_prompt(&buffer.get_value(), trigger.start, instruction);
    if generation.dry_run {
        print_prompt(&request);
        return Ok(());
    }

    let reply = generate(&request, &settings).await?;
    if generation.insert {
        buffer.insert_at(trigger.start, &reply);
        write_note(&target.file, &buffer.get_value())?;
        log::info!("replaced trigger in {}", target.file.display());
    } else {
        println!("{reply}");
    }
    Ok(())
}

async fn generate(request: &PromptRequest, settings: &Settings) -> Result<String> {
    let transport = HttpTransport::from_settings(settings)?;
    let reply = complete(&request.system, &request.user, settings, &transport)
        .await
        .with_context(|| format!("completion with {} failed", settings.model))?;
    Ok(reply)
}

fn print_prompt(request: &PromptRequest) {
    println!("label: {}", request.label);
    println!("--- system ---\n{}", request.system);
    println!("--- user ---\n{}", request.user);
}

fn show_context(target: &Target, json: bool) -> Result<()> {
    let text = read_note(&target.file)?;
    let cursor = target.cursor();
    let label = classify(&text, cursor);
    let context = extract_context(&text, cursor);
    if json {
        let value = serde_json::json!({ "label": label, "context": context });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("label: {label}");
        println!("first line: {}", context.first_line);
        println!("{}", context.text);
    }
    Ok(())
}

fn show_tree(file: &Path, json: bool) -> Result<()> {
    let tree = parse_document(&read_note(file)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print!("{}", dump_tree(&tree));
    }
    Ok(())
}

fn format_note(file: &Path, write: bool) -> Result<()> {
    let text = read_note(file)?;
    let formatted = round_trip(&text);
    if write {
        if formatted != text {
            write_note(file, &formatted)?;
            log::info!("reformatted {}", file.display());
        }
    } else {
        print!("{formatted}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_prompt_with_overrides() {
        let cli = Cli::try_parse_from([
            "cannonball",
            "prompt",
            "notes.md",
            "--line",
            "3",
            "--ch",
            "7",
            "add tasks",
            "--model",
            "gpt-4o-mini",
            "--temperature",
            "0.1",
            "--insert",
        ])
        .unwrap();
        let Command::Prompt {
            target,
            instruction,
            generation,
        } = cli.command
        else {
            panic!("expected prompt");
        };
        assert_eq!(target.cursor(), CursorPos::new(3, 7));
        assert_eq!(instruction, "add tasks");
        assert!(generation.insert);
        assert!(!generation.dry_run);

        let mut settings = Settings::default();
        generation.apply(&mut settings);
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.temperature, 0.1);
        assert_eq!(settings.max_tokens, 1000);
    }

    #[test]
    fn rust_log_overrides_info_default() {
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(logger_builder().build().filter(), log::LevelFilter::Info);

        unsafe {
            std::env::set_var("RUST_LOG", "debug");
        }
        assert_eq!(logger_builder().build().filter(), log::LevelFilter::Debug);

        unsafe {
            std::env::remove_var("RUST_LOG");
        }
    }

    #[test]
    fn cursor_is_required() {
        assert!(Cli::try_parse_from(["cannonball", "context", "notes.md", "--line", "1"]).is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cannonball", "tree", "notes.md", "--config", "/tmp/c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn missing_explicit_settings_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn init_writes_loadable_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cannonball").join("config.toml");
        init_settings(Some(&path), false).unwrap();
        assert_eq!(load_settings(Some(&path)).unwrap(), Settings::default());

        assert!(init_settings(Some(&path), false).is_err());
        init_settings(Some(&path), true).unwrap();
    }

    #[test]
    fn fmt_write_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "* a\n* b\n").unwrap();
        format_note(&file, true).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "- a\n- b\n");
    }

    #[tokio::test]
    async fn trigger_dry_run_leaves_the_note_alone() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "- [ ] pack !!list essentials").unwrap();
        let target = Target {
            file: file.clone(),
            line: 0,
            ch: 28,
        };
        let generation = Generation {
            insert: true,
            dry_run: true,
            model: None,
            max_tokens: None,
            temperature: None,
        };
        run_trigger(&target, &generation, Settings::default())
            .await
            .unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "- [ ] pack !!list essentials");
    }

    #[tokio::test]
    async fn trigger_without_phrase_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "- [ ] pack").unwrap();
        let target = Target {
            file,
            line: 0,
            ch: 10,
        };
        let generation = Generation {
            insert: false,
            dry_run: true,
            model: None,
            max_tokens: None,
            temperature: None,
        };
        assert!(run_trigger(&target, &generation, Settings::default()).await.is_err());
    }
}
