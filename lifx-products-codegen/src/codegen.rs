use std::fmt::{self, Write};

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::{
    error::{Error, Result},
    repr::{Capability, Catalog, Product, TemperatureRange},
};

/// Names embedded into the generated table. These never come from the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// C type of each element, e.g. `lifx_product_info_t`
    pub element_type: String,

    /// C identifier of the array, e.g. `lifx_products`
    pub array_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            element_type: "lifx_product_info_t".to_owned(),
            array_name: "lifx_products".to_owned(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    /// A C array initializer using designated initializers
    C,

    /// A Rust struct definition followed by a slice constant
    Rust,
}

/// A catalog rendered as a C array literal.
///
/// Fields are emitted in a fixed order (id, product_name, capabilities, temperature bounds) and
/// optional fields are left out entirely, relying on the C struct zero-initializing them.
pub struct CTable<'a> {
    catalog: &'a Catalog,
    options: &'a RenderOptions,
}

impl<'a> CTable<'a> {
    pub fn new(catalog: &'a Catalog, options: &'a RenderOptions) -> Self {
        CTable { catalog, options }
    }
}

impl fmt::Display for CTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "const static {} {}[] =", self.options.element_type, self.options.array_name)?;
        writeln!(f, "{{")?;
        for product in &self.catalog.products {
            define_c_entry(f, product)?;
        }
        writeln!(f, "}};")
    }
}

fn define_c_entry(f: &mut fmt::Formatter, product: &Product) -> fmt::Result {
    writeln!(f, "    {{")?;
    writeln!(f, "        .id = {},", product.id)?;
    writeln!(f, "        .product_name = \"{}\",", escape_c_string(&product.name))?;

    for capability in &product.capabilities {
        writeln!(f, "        .{} = true,", capability.field_name())?;
    }

    if let Some(TemperatureRange { min, max }) = product.temperature_range {
        writeln!(f, "        .temp_min = {},", min)?;
        writeln!(f, "        .temp_max = {},", max)?;
    }

    writeln!(f, "    }},")
}

/// Escapes `value` so that it can be placed between double quotes in C source.
pub fn escape_c_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            // Three digit octal escapes never swallow a following digit
            c if c.is_ascii_control() => {
                let _ = write!(output, "\\{:03o}", c as u32);
            }
            c => output.push(c),
        }
    }
    output
}

pub fn generate_c(catalog: &Catalog, options: &RenderOptions) -> String {
    CTable::new(catalog, options).to_string()
}

pub fn generate_rust(catalog: &Catalog, options: &RenderOptions) -> Result<String> {
    let ty = rust_type_ident(&options.element_type)?;
    let table = rust_const_ident(&options.array_name)?;

    let struct_def = define_struct(&ty);
    let entries = catalog.products.iter().map(|product| define_rust_entry(&ty, product));

    let body = quote! {
        #struct_def

        pub const #table: &[#ty] = &[
            #(#entries,)*
        ];
    };

    Ok(format!("// Generated from the LIFX product catalog, do not edit.\n{}\n", body))
}

fn define_struct(ident: &Ident) -> TokenStream {
    let fields: Vec<Ident> = Capability::ALL.iter().map(|c| capability_ident(*c)).collect();
    let fields = &fields;

    quote! {
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub struct #ident {
            pub id: u32,
            pub product_name: &'static str,
            #(pub #fields: bool,)*
            /// Inclusive color temperature bounds in Kelvin
            pub temperature_range: Option<(u32, u32)>,
        }

        impl #ident {
            /// A product with no capabilities, used as the base of every entry.
            pub const EMPTY: #ident = #ident {
                id: 0,
                product_name: "",
                #(#fields: false,)*
                temperature_range: None,
            };
        }
    }
}

fn define_rust_entry(ty: &Ident, product: &Product) -> TokenStream {
    let id = Literal::u32_unsuffixed(product.id);
    let name = Literal::string(&product.name);
    let capabilities = product.capabilities.iter().map(|c| capability_ident(*c));

    let temperature_range = product.temperature_range.map(|TemperatureRange { min, max }| {
        let min = Literal::u32_unsuffixed(min);
        let max = Literal::u32_unsuffixed(max);
        quote!(temperature_range: Some((#min, #max)),)
    });

    quote! {
        #ty {
            id: #id,
            product_name: #name,
            #(#capabilities: true,)*
            #temperature_range
            ..#ty::EMPTY
        }
    }
}

fn capability_ident(capability: Capability) -> Ident {
    Ident::new(capability.field_name(), Span::call_site())
}

fn rust_type_ident(element_type: &str) -> Result<Ident> {
    use heck::CamelCase;

    let base = element_type.strip_suffix("_t").unwrap_or(element_type);
    parse_ident(&base.to_camel_case(), element_type)
}

fn rust_const_ident(array_name: &str) -> Result<Ident> {
    use heck::ShoutySnakeCase;

    parse_ident(&array_name.to_shouty_snake_case(), array_name)
}

fn parse_ident(name: &str, source: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name).map_err(|_| Error::InvalidIdentifier(source.to_owned()))
}
