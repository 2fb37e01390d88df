use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lifx_products_codegen::{Backend, RenderOptions};

#[cfg(test)]
mod tests;

/// Converts the LIFX product catalog (products.json) into a C array of product descriptors
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog document to read
    #[arg(short, long, value_name = "FILE", default_value = "products.json")]
    input: PathBuf,

    /// File to write the generated table to, replacing any existing content
    #[arg(short, long, value_name = "FILE", default_value = "products.txt")]
    output: PathBuf,

    /// Language of the generated table
    #[arg(long, value_enum, default_value = "c")]
    backend: Language,

    /// Type name of each array element
    #[arg(long, default_value = "lifx_product_info_t")]
    element_type: String,

    /// Name of the generated array
    #[arg(long, default_value = "lifx_products")]
    array_name: String,

    /// Log every product as it is read
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Language {
    C,
    Rust,
}

impl From<Language> for Backend {
    fn from(language: Language) -> Backend {
        match language {
            Language::C => Backend::C,
            Language::Rust => Backend::Rust,
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args { input, output, backend, element_type, array_name, .. } = args;
    let options = RenderOptions { element_type, array_name };

    lifx_products_codegen::transcode(&input, &output, &options, backend.into()).with_context(
        || format!("failed to generate {} from {}", output.display(), input.display()),
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
