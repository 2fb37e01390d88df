//! Static descriptions of LIFX hardware products.
//!
//! The table is generated at build time from the vendor catalog in `products.json`.


include!(concat!(env!("OUT_DIR"), "/lifx_products.rs"));

/// Name reported for product ids missing from the catalog
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

pub fn products() -> &'static [LifxProductInfo] {
    LIFX_PRODUCTS
}

pub fn find(id: u32) -> Option<&'static LifxProductInfo> {
    LIFX_PRODUCTS.iter().find(|product| product.id == id)
}

pub fn product_name(id: u32) -> &'static str {
    find(id).map_or(UNKNOWN_PRODUCT, |product| product.product_name)
}

/// Whether a device reporting `id` is a light. Anything with relays is a switch; unknown products
/// are never treated as lights.
pub fn is_light(id: u32) -> bool {
    find(id).map_or(false, |product| !product.relays)
}
