mod catalog_def;
mod codegen;
mod error;
mod repr;


use std::path::Path;

pub use crate::{
    codegen::{escape_c_string, generate_c, generate_rust, Backend, CTable, RenderOptions},
    error::{Error, Result, SchemaError},
    repr::{Capability, Catalog, Product, TemperatureRange},
};

/// Parses a catalog document that has already been read into memory.
pub fn parse_catalog(data: &[u8]) -> Result<Catalog> {
    let def = catalog_def::parse(data)?;
    Ok(repr::parse_catalog(def))
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());

    let catalog = parse_catalog(&data)?;
    for product in &catalog.products {
        log::debug!("product {}: {:?}", product.id, product.name);
    }

    Ok(catalog)
}

pub fn generate(catalog: &Catalog, options: &RenderOptions, backend: Backend) -> Result<String> {
    match backend {
        Backend::C => Ok(generate_c(catalog, options)),
        Backend::Rust => generate_rust(catalog, options),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub products: usize,
    pub bytes_written: usize,
}

/// Reads the catalog at `input`, renders it, and replaces the contents of `output` with the result.
///
/// The output is only touched once the whole table has been rendered, so a failure at any stage
/// leaves an existing output file as it was.
pub fn transcode(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RenderOptions,
    backend: Backend,
) -> Result<Summary> {
    let output = output.as_ref();

    let catalog = load_catalog(input)?;
    let code = generate(&catalog, options, backend)?;

    std::fs::write(output, &code).map_err(|e| Error::io(output, e))?;
    log::info!(
        "wrote {} products ({} bytes) to {}",
        catalog.products.len(),
        code.len(),
        output.display()
    );

    Ok(Summary { products: catalog.products.len(), bytes_written: code.len() })
}
