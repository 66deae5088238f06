#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod derive;

/// Implements `Scan` (and the `PokeStruct` handle it returns) for a struct
/// with named fields.
///
/// Field attributes: `#[scan(tag = "key")]` and `#[scan(skip)]`
/// (the same as `#[scan(tag = "-")]`).
#[proc_macro_derive(Scan, attributes(scan))]
pub fn derive_scan(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    derive::derive_scan(input.into()).into()
}
