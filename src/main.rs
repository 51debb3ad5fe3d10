//! JsonUI editor CLI
//!
//! Usage:
//!   jsonui-editor [OPTIONS] [FILE]
//!
//! Loads a JsonUI layout (file or stdin), resolves it against the
//! canvas, and prints the canonical normalized document. The resolved
//! control tree can be inspected with --debug.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsonui_editor::{EditorConfig, LayoutContext, Scene, Session, SyncCoordinator, TextureStore};

#[derive(Parser)]
#[command(name = "jsonui-editor")]
#[command(about = "Layout resolution engine for JsonUI documents")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas size as WIDTHxHEIGHT, overriding the config
    #[arg(long)]
    canvas: Option<String>,

    /// Texture root directory, overriding the config
    #[arg(short, long)]
    textures: Option<PathBuf>,

    /// Debug mode: dump the resolved control tree to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let mut config = match &cli.config {
        Some(path) => match EditorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EditorConfig::default(),
    };
    if let Some(spec) = &cli.canvas {
        match parse_canvas(spec) {
            Some((w, h)) => config.canvas = LayoutContext::new().with_canvas(w, h),
            None => {
                eprintln!("Error: invalid canvas '{}', expected WIDTHxHEIGHT", spec);
                std::process::exit(1);
            }
        }
    }
    if let Some(root) = cli.textures {
        config.texture_root = root;
    }

    let mut session = Session::new();
    let (source, filename) = match &cli.input {
        Some(path) => match session.open(path) {
            Ok(text) => (text, path.display().to_string()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut sync = SyncCoordinator::new(config.canvas, TextureStore::new(config.texture_root));
    match sync.load_text(&source) {
        Ok(regen) => {
            if cli.debug {
                dump_tree(sync.scene());
            }
            println!("{}", regen.text);
        }
        Err(errors) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
    }
}

fn parse_canvas(spec: &str) -> Option<(i32, i32)> {
    let (w, h) = spec.split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn dump_tree(scene: &Scene) {
    for (id, node) in scene.iter() {
        let depth = std::iter::successors(node.parent, |p| scene.node(*p).parent).count();
        let abs = scene.absolute_position(id);
        eprintln!(
            "{:indent$}{} at ({}, {}) size {}x{}",
            "",
            node.key,
            abs.x,
            abs.y,
            node.size.width,
            node.size.height,
            indent = depth * 2
        );
    }
}

fn print_intro() {
    println!(
        r#"jsonui-editor - Layout resolution engine for JsonUI documents

USAGE:
    jsonui-editor [OPTIONS] [FILE]
    cat layout.json | jsonui-editor

OPTIONS:
    -c, --config <FILE>     Config file (TOML)
        --canvas <WxH>      Canvas size override (default 1920x1080)
    -t, --textures <DIR>    Texture root override
    -d, --debug             Dump the resolved control tree to stderr
    -h, --help              Print help

Input may contain comments, trailing commas, single quotes, and
unquoted keys; output is canonical 2-space JSON with sizes resolved
to pixels."#
    );
}
