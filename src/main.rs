use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use pixelpad::config::Config;
use pixelpad::gallery::{GalleryOptions, GalleryStore, options_from_config};
use pixelpad::input::{DrawingMode, EditorState};
use pixelpad::script::{parse_script, run_script};
use pixelpad::ui::{self, RenderStyle};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pixelpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PIXELPAD_GIT_HASH"), ")"),
    about = "Pixel-art grid editor with palettes, mirrored drawing and a local gallery"
)]
struct Cli {
    /// Use this directory for the gallery instead of the configured location
    #[arg(long, global = true, value_name = "DIR")]
    gallery_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available palettes and their colors
    Palettes {
        /// Show color swatches using 24-bit ANSI colors
        #[arg(long, action = ArgAction::SetTrue)]
        color: bool,
    },

    /// Paint a drawing from a stroke script and print the result
    Draw(DrawArgs),

    /// Browse and manage saved drawings
    Gallery {
        #[command(subcommand)]
        command: GalleryCommand,
    },

    /// Write the documented example config to ~/.config/pixelpad/config.toml
    InitConfig,
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Stroke script to run ("-" reads standard input)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Start from an empty grid of this size
    #[arg(long, value_name = "N", conflicts_with = "edit")]
    size: Option<usize>,

    /// Palette to start with
    #[arg(long, short = 'p', value_name = "NAME")]
    palette: Option<String>,

    /// Start in mirror mode
    #[arg(long, action = ArgAction::SetTrue)]
    mirror: bool,

    /// Start from a saved drawing (full id or unique prefix)
    #[arg(long, value_name = "ID")]
    edit: Option<String>,

    /// Save the result to the gallery under this title
    #[arg(long, short = 't', value_name = "TITLE")]
    title: Option<String>,

    /// Render with 24-bit ANSI colors
    #[arg(long, action = ArgAction::SetTrue)]
    color: bool,
}

#[derive(Subcommand, Debug)]
enum GalleryCommand {
    /// List saved drawings, newest first
    List,
    /// Show a drawing's details and preview
    Show {
        id: String,
        /// Render with 24-bit ANSI colors
        #[arg(long, action = ArgAction::SetTrue)]
        color: bool,
    },
    /// Delete a drawing
    Delete { id: String },
    /// Change a drawing's title
    Rename { id: String, title: String },
    /// Protect a drawing from deletion and eviction
    Pin { id: String },
    /// Remove a drawing's protection
    Unpin { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Palettes { color } => list_palettes(style(color)),
        Command::Draw(args) => draw(args, cli.gallery_dir.as_deref()),
        Command::Gallery { command } => gallery(command, cli.gallery_dir.as_deref()),
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Wrote example config to {}", path.display());
            Ok(())
        }
    }
}

fn style(color: bool) -> RenderStyle {
    if color {
        RenderStyle::Ansi
    } else {
        RenderStyle::Plain
    }
}

fn list_palettes(style: RenderStyle) -> Result<()> {
    let config = Config::load()?;
    let palettes = config.palette_set();
    for palette in palettes.iter() {
        let marker = if palette.name() == config.editor.default_palette {
            " (default)"
        } else {
            ""
        };
        println!("{} - {} colors{}", palette.name(), palette.len(), marker);
        print!("{}", ui::render_palette(palette, style));
    }
    Ok(())
}

fn draw(args: DrawArgs, gallery_dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let mut state = EditorState::from_config(&config);

    if let Some(id) = &args.edit {
        let drawing = open_gallery(&config, gallery_dir)?.get_drawing(id)?;
        log::info!("Editing '{}' ({})", drawing.title, drawing.id);
        state.load_grid(drawing.snapshot())?;
    }
    if let Some(size) = args.size {
        state.resize_grid(size)?;
    }
    if let Some(name) = &args.palette {
        state.set_palette(name)?;
    }
    if args.mirror {
        state.set_drawing_mode(DrawingMode::Mirror);
    }

    let (source_name, text) = read_script(&args.script)?;
    let commands = parse_script(&text).with_context(|| format!("invalid script {source_name}"))?;
    run_script(&mut state, &commands)
        .with_context(|| format!("script {source_name} failed"))?;
    // A script that never releases the pointer still ends its stroke.
    state.end_stroke();

    print!("{}", ui::render_state(&state, style(args.color)));
    println!("{}", state.status_line());

    if let Some(title) = &args.title {
        let saved = open_gallery(&config, gallery_dir)?.save_drawing(title, &state.export_snapshot())?;
        println!("Saved '{}' as {}", saved.title, saved.id);
    }
    Ok(())
}

fn read_script(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        return Ok(("<stdin>".to_string(), text));
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    Ok((path.display().to_string(), text))
}

fn gallery(command: GalleryCommand, gallery_dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let store = open_gallery(&config, gallery_dir)?;

    match command {
        GalleryCommand::List => {
            let drawings = store.list_drawings()?;
            if drawings.is_empty() {
                println!("No drawings yet");
            }
            for drawing in &drawings {
                println!("{}", ui::render_drawing_line(drawing));
            }
        }
        GalleryCommand::Show { id, color } => {
            let drawing = store.get_drawing(&id)?;
            let palettes = config.palette_set();
            print!("{}", ui::render_drawing_details(&drawing));
            println!();
            print!(
                "{}",
                ui::render_rows(
                    &drawing.grid_data,
                    palettes.resolve(&drawing.palette_name),
                    style(color)
                )
            );
        }
        GalleryCommand::Delete { id } => {
            let removed = store.delete_drawing(&id)?;
            println!("Deleted '{}' ({})", removed.title, removed.id);
        }
        GalleryCommand::Rename { id, title } => {
            let renamed = store.rename_drawing(&id, &title)?;
            println!("Renamed {} to '{}'", renamed.id, renamed.title);
        }
        GalleryCommand::Pin { id } => {
            let pinned = store.set_permanent(&id, true)?;
            println!("Pinned '{}' ({})", pinned.title, pinned.id);
        }
        GalleryCommand::Unpin { id } => {
            let unpinned = store.set_permanent(&id, false)?;
            println!("Unpinned '{}' ({})", unpinned.title, unpinned.id);
        }
    }
    Ok(())
}

fn open_gallery(config: &Config, override_dir: Option<&Path>) -> Result<GalleryStore> {
    let options = match override_dir {
        Some(dir) => {
            let mut options = GalleryOptions::new(dir.to_path_buf());
            options.backup_retention = config.gallery.backup_retention;
            options.max_drawings = config.gallery.max_drawings;
            options
        }
        None => {
            let config_path = Config::get_config_path()?;
            let config_dir = config_path
                .parent()
                .context("Config path has no parent directory")?;
            options_from_config(&config.gallery, config_dir)?
        }
    };
    log::debug!("Using gallery at {}", options.base_dir.display());
    Ok(GalleryStore::new(options))
}
