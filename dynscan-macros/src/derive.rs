//! Implementation of `#[derive(Scan)]`.

use proc_macro2::{Delimiter, Literal, Spacing, TokenStream, TokenTree};
use quote::quote;
use unsynn::*;

// unsynn's glob brings a one-parameter `Result` alias
use core::result::Result;

keyword! {
    KStruct = "struct";
    KEnum = "enum";
    KUnion = "union";
    KPub = "pub";
    KScan = "scan";
    KTag = "tag";
    KSkip = "skip";
}

operator! {
    Equals = "=";
}

unsynn! {
    /// Visibility: `pub`, `pub(...)` or nothing
    enum Vis {
        PubIn(Cons<KPub, ParenthesisGroup>),
        Pub(KPub),
    }

    /// An attribute: `#[...]`
    struct Attribute {
        _pound: Pound,
        content: BracketGroup,
    }

    /// Everything `#[derive]` may be attached to
    enum DeriveInput {
        Struct(StructDecl),
        Enum(EnumDecl),
        Union(UnionDecl),
    }

    /// A struct declaration; the tokens after the name are checked by hand
    struct StructDecl {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_struct: KStruct,
        name: Ident,
        rest: Vec<TokenTree>,
    }

    /// An enum declaration, only parsed to be refused
    struct EnumDecl {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_enum: KEnum,
        name: Ident,
        _rest: Vec<TokenTree>,
    }

    /// A union declaration, only parsed to be refused
    struct UnionDecl {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_union: KUnion,
        name: Ident,
        _rest: Vec<TokenTree>,
    }

    /// One named field, split out of the struct body
    struct NamedField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        name: Ident,
        _colon: Colon,
        ty: Vec<TokenTree>,
    }

    /// `scan(...)` inside an attribute
    struct ScanAttr {
        _scan: KScan,
        args: ParenthesisGroupContaining<CommaDelimitedVec<ScanArg>>,
    }

    /// One argument of `#[scan(...)]`
    enum ScanArg {
        Tag(Cons<KTag, Equals, Literal>),
        Skip(KSkip),
    }
}

/// What the derive learned about one field.
#[derive(Debug)]
struct FieldInfo {
    ident: Ident,
    name: String,
    ty: TokenStream,
    tag: Option<String>,
}

/// Entry point; always returns tokens, emitting `compile_error!` on bad input.
pub fn derive_scan(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => quote! { ::core::compile_error!(#err); },
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, String> {
    let mut iter = input.to_token_iter();
    let parsed = iter
        .parse::<Cons<DeriveInput, EndOfStream>>()
        .map_err(|e| format!("Scan derive could not parse its input: {e}"))?
        .first;

    match parsed {
        DeriveInput::Struct(decl) => {
            let fields = struct_fields(&decl)?;
            Ok(emit(&decl.name, &fields))
        }
        DeriveInput::Enum(decl) => Err(format!(
            "Scan cannot be derived for enum `{}`: only structs with named fields are supported",
            decl.name
        )),
        DeriveInput::Union(decl) => Err(format!(
            "Scan cannot be derived for union `{}`: only structs with named fields are supported",
            decl.name
        )),
    }
}

fn struct_fields(decl: &StructDecl) -> Result<Vec<FieldInfo>, String> {
    for attr in &decl.attrs {
        if is_scan_attr(attr) {
            return Err(format!(
                "`#[scan(...)]` is only allowed on fields, not on struct `{}`",
                decl.name
            ));
        }
    }

    let body = match decl.rest.as_slice() {
        [TokenTree::Group(group)] if group.delimiter() == Delimiter::Brace => group.stream(),
        [TokenTree::Punct(p), ..] if p.as_char() == '<' => {
            return Err(format!(
                "Scan cannot be derived for generic struct `{}`",
                decl.name
            ));
        }
        [TokenTree::Group(group), ..] if group.delimiter() == Delimiter::Parenthesis => {
            return Err(format!(
                "Scan cannot be derived for tuple struct `{}`: fields need names",
                decl.name
            ));
        }
        [TokenTree::Punct(p)] if p.as_char() == ';' => {
            return Err(format!(
                "Scan cannot be derived for unit struct `{}`",
                decl.name
            ));
        }
        _ => {
            return Err(format!(
                "Scan cannot be derived for struct `{}`: where clauses are not supported",
                decl.name
            ));
        }
    };

    split_fields(body)
        .into_iter()
        .map(|tokens| {
            let field = tokens
                .clone()
                .to_token_iter()
                .parse::<Cons<NamedField, EndOfStream>>()
                .map_err(|e| format!("could not parse field `{tokens}`: {e}"))?
                .first;
            field_info(field)
        })
        .collect()
}

/// Splits a struct body on top-level commas.
///
/// Commas inside groups are already hidden by the token tree; commas inside
/// generic arguments (`HashMap<String, u8>`) are not, so angle brackets are
/// counted. The `>` of `->` does not close anything.
fn split_fields(body: TokenStream) -> Vec<TokenStream> {
    let mut fields = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0_usize;
    let mut after_joint_dash = false;

    for tt in body {
        let mut joint_dash = false;
        if let TokenTree::Punct(p) = &tt {
            match p.as_char() {
                '<' => depth += 1,
                '>' if !after_joint_dash => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    fields.push(current.drain(..).collect());
                    after_joint_dash = false;
                    continue;
                }
                '-' => joint_dash = p.spacing() == Spacing::Joint,
                _ => {}
            }
        }
        after_joint_dash = joint_dash;
        current.push(tt);
    }

    if !current.is_empty() {
        fields.push(current.into_iter().collect());
    }
    fields
}

fn field_info(field: NamedField) -> Result<FieldInfo, String> {
    let raw = field.name.to_string();
    let name = raw.strip_prefix("r#").unwrap_or(&raw).to_owned();

    let mut tag = None;
    for attr in field.attrs.iter().filter(|attr| is_scan_attr(attr)) {
        let parsed = attr
            .content
            .0
            .stream()
            .to_token_iter()
            .parse::<Cons<ScanAttr, EndOfStream>>()
            .map_err(|_| {
                format!(
                    "unknown attribute on field `{name}`: expected `#[scan(tag = \"...\")]` or `#[scan(skip)]`"
                )
            })?
            .first;

        for arg in parsed.args.content.iter() {
            let value = match &arg.value {
                ScanArg::Tag(cons) => unquote(&cons.third).ok_or_else(|| {
                    format!("the tag of field `{name}` must be a plain string literal")
                })?,
                ScanArg::Skip(_) => "-".to_owned(),
            };
            if tag.replace(value).is_some() {
                return Err(format!("field `{name}` has more than one tag"));
            }
        }
    }

    Ok(FieldInfo {
        ident: field.name,
        name,
        ty: field.ty.into_iter().collect(),
        tag,
    })
}

fn is_scan_attr(attr: &Attribute) -> bool {
    matches!(
        attr.content.0.stream().into_iter().next(),
        Some(TokenTree::Ident(ident)) if ident == "scan"
    )
}

/// Contents of a `"..."` literal, with the simple escapes resolved.
fn unquote(lit: &Literal) -> Option<String> {
    let repr = lit.to_string();
    let inner = repr.strip_prefix('"')?.strip_suffix('"')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            '\'' => out.push('\''),
            _ => return None,
        }
    }
    Some(out)
}

fn emit(name: &Ident, fields: &[FieldInfo]) -> TokenStream {
    let name_str = name.to_string();
    let count = fields.len();

    let field_defs = fields.iter().map(|f| {
        let FieldInfo {
            name, ty, tag, ..
        } = f;
        let tag = tag.as_ref().map(|tag| quote! { .tag(#tag) });
        quote! {
            ::dynscan::Field::new(#name, || <#ty as ::dynscan::Scan>::SHAPE) #tag
        }
    });

    let zero_fields = fields.iter().map(|f| {
        let FieldInfo { ident, ty, .. } = f;
        quote! { #ident: <#ty as ::dynscan::Scan>::zero() }
    });

    let poke_arms = fields.iter().enumerate().map(|(index, f)| {
        let ident = &f.ident;
        let index = Literal::usize_unsuffixed(index);
        quote! {
            #index => ::core::option::Option::Some(::dynscan::Scan::poke(&mut self.#ident)),
        }
    });

    quote! {
        #[automatically_derived]
        impl ::dynscan::Scan for #name {
            const SHAPE: &'static ::dynscan::Shape = &const {
                ::dynscan::Shape::builder(#name_str)
                    .module_path(::core::module_path!())
                    .def(::dynscan::Def::Struct(::dynscan::StructDef::new(&const {
                        let fields: [::dynscan::Field; #count] = [#(#field_defs),*];
                        fields
                    })))
                    .build()
            };

            fn zero() -> Self {
                Self {
                    #(#zero_fields),*
                }
            }

            fn poke(&mut self) -> ::dynscan::Poke<'_> {
                ::dynscan::Poke::Struct(self)
            }
        }

        #[automatically_derived]
        impl ::dynscan::PokeStruct for #name {
            fn shape(&self) -> &'static ::dynscan::Shape {
                <Self as ::dynscan::Scan>::SHAPE
            }

            fn field(&mut self, index: usize) -> ::core::option::Option<::dynscan::Poke<'_>> {
                match index {
                    #(#poke_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
