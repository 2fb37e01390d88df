use std::{env, error::Error, path::Path};

use lifx_products_codegen::{Backend, RenderOptions};

const CATALOG: &str = "products.json";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={}", CATALOG);

    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let out_path = Path::new(&out_dir).join("lifx_products.rs");

    lifx_products_codegen::transcode(CATALOG, out_path, &RenderOptions::default(), Backend::Rust)?;

    Ok(())
}
