use std::path::Path;

use clap::Parser;
use tracing::{error, info};

use blog_backend::scaffold::{create_post, BLOG_DIR};

#[derive(Parser, Debug)]
#[command(version, about = "Scaffold a new blog post folder", long_about = None)]
struct Args {
    // Validated by hand so a missing name exits 1, not clap's usual 2.
    #[arg(help = "The post name.")]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(name) = args.name else {
        error!("Please supply a valid post name");
        std::process::exit(1);
    };

    match create_post(Path::new(BLOG_DIR), &name) {
        Ok(created) => {
            info!("Creating post folder: {}", created.folder.display());
            info!("Creating MD file: {}", created.file.display());
            info!("Success! Start writing!");
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
