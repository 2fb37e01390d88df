//! Code for constructing an internal representation of the product catalog which is closer to
//! the structure needed for code generation

use crate::catalog_def::{self, FeaturesDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// The hardware product identifier
    pub id: u32,

    /// Human readable name, unescaped
    pub name: String,

    /// The supported capabilities, always in declaration order
    pub capabilities: Vec<Capability>,

    pub temperature_range: Option<TemperatureRange>,
}

/// Inclusive color temperature bounds in Kelvin
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capability {
    Hev,
    Color,
    Chain,
    Matrix,
    Relays,
    Buttons,
    Infrared,
    Multizone,
    ExtendedMultizone,
}

impl Capability {
    /// Every capability, in the order fields are emitted.
    pub const ALL: [Capability; 9] = [
        Capability::Hev,
        Capability::Color,
        Capability::Chain,
        Capability::Matrix,
        Capability::Relays,
        Capability::Buttons,
        Capability::Infrared,
        Capability::Multizone,
        Capability::ExtendedMultizone,
    ];

    /// Name of the capability in the catalog and of the matching struct field.
    #[rustfmt::skip]
    pub fn field_name(self) -> &'static str {
        match self {
            Capability::Hev               => "hev",
            Capability::Color             => "color",
            Capability::Chain             => "chain",
            Capability::Matrix            => "matrix",
            Capability::Relays            => "relays",
            Capability::Buttons           => "buttons",
            Capability::Infrared          => "infrared",
            Capability::Multizone         => "multizone",
            Capability::ExtendedMultizone => "extended_multizone",
        }
    }

    #[rustfmt::skip]
    fn lookup(self, features: &FeaturesDef) -> bool {
        match self {
            Capability::Hev               => features.hev,
            Capability::Color             => features.color,
            Capability::Chain             => features.chain,
            Capability::Matrix            => features.matrix,
            Capability::Relays            => features.relays,
            Capability::Buttons           => features.buttons,
            Capability::Infrared          => features.infrared,
            Capability::Multizone         => features.multizone,
            Capability::ExtendedMultizone => features.extended_multizone,
        }
    }
}

pub fn parse_catalog(def: catalog_def::CatalogDef) -> Catalog {
    let products = def.products.into_iter().map(parse_product).collect();
    Catalog { products }
}

fn parse_product(def: catalog_def::ProductDef) -> Product {
    let features = def.features.unwrap_or_default();

    let capabilities = Capability::ALL
        .iter()
        .copied()
        .filter(|capability| capability.lookup(&features))
        .collect();

    let temperature_range =
        features.temperature_range.map(|[min, max]| TemperatureRange { min, max });

    Product { id: def.id, name: def.name, capabilities, temperature_range }
}
