//! # Placehold CLI
//!
//! Command-line interface for generating placeholder images.
//!
//! ## Usage
//!
//! ```bash
//! # Print a data URI for a 250x250 PNG
//! placehold render
//!
//! # Save a JPEG with a random background
//! placehold render --width 640 --height 360 --bg rand --format jpeg -o out.jpg
//!
//! # Label with the background color
//! placehold render --bg 'hsl(90,90%,50%)' --text '{bg}'
//!
//! # Serve images over HTTP
//! placehold serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use placehold::{
    FontResolver, PlaceholdError,
    params::PlaceholderParams,
    server::{self, ServerConfig},
};

/// Placehold - placeholder image generator
#[derive(Parser, Debug)]
#[command(name = "placehold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .ttf/.otf fonts
    #[arg(long, global = true, env = "PLACEHOLD_FONTS", value_name = "DIR")]
    fonts: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one placeholder image
    Render {
        #[command(flatten)]
        params: PlaceholderParams,

        /// Write the encoded image to FILE instead of printing a data URI
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Serve placeholders over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlaceholdError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { params, output } => {
            let fonts = match cli.fonts {
                Some(dir) => FontResolver::new(dir),
                None => FontResolver::builtin(),
            };
            let placeholder = params.build()?;

            match output {
                Some(path) => {
                    let bytes = placeholder.render(&fonts)?;
                    std::fs::write(&path, &bytes)?;
                    let (width, height) = placeholder.dimensions();
                    println!(
                        "Saved {}x{} {} to {}",
                        width,
                        height,
                        placeholder.output_format(),
                        path.display()
                    );
                }
                None => println!("{}", placeholder.render_data_uri(&fonts)?),
            }
        }
        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
                fonts_dir: cli.fonts,
            };
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
