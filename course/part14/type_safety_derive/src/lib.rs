use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::{quote, ToTokens};
use syn::{visit::Visit, Data, DeriveInput, Fields, Type};

/// Derives `type_safety::annotations::Annotated` for a struct with named fields.
///
/// Every field contributes one `Annotation` holding its type as it was written in the source,
/// the type the compiler resolved it to and whether the type refers back to the struct being
/// derived (a forward/self reference such as `Option<Box<Node>>` inside `Node`).
#[proc_macro_derive(Annotated)]
pub fn derive_annotated(items: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse(items) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error().into(),
    };

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Annotated can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Annotated can only be derived for structs",
            ))
        }
    };

    let annotations = fields.iter().filter_map(|field| {
        let name = field.ident.as_ref()?.to_string();
        let ty = &field.ty;
        let source = normalise(&ty.to_token_stream().to_string());
        let self_referential = refers_to(ty, ident);

        Some(quote!(
            ::type_safety::annotations::Annotation {
                name: #name,
                source: #source,
                resolved: ::std::any::type_name::<#ty>(),
                self_referential: #self_referential,
            }
        ))
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote!(
        impl #impl_generics ::type_safety::annotations::Annotated for #ident #ty_generics #where_clause {
            fn annotations() -> ::std::vec::Vec<::type_safety::annotations::Annotation> {
                ::std::vec![#(#annotations),*]
            }
        }
    ))
}

/// Whether `ty` mentions `target` (or `Self`) anywhere in its paths.
fn refers_to(ty: &Type, target: &Ident) -> bool {
    struct Finder<'a> {
        target: &'a Ident,
        found: bool,
    }

    impl<'ast> Visit<'ast> for Finder<'_> {
        fn visit_path_segment(&mut self, segment: &'ast syn::PathSegment) {
            if segment.ident == *self.target || segment.ident == "Self" {
                self.found = true;
            }
            syn::visit::visit_path_segment(self, segment);
        }
    }

    let mut finder = Finder {
        target,
        found: false,
    };
    finder.visit_type(ty);
    finder.found
}

/// Token streams print with a space between every token, this collapses them back into
/// what a person would write: `Option < Box < Node > >` becomes `Option<Box<Node>>`.
fn normalise(raw: &str) -> String {
    const GLUE: [(&str, &str); 12] = [
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ::", "::"),
        (":: ", "::"),
        (" ,", ","),
        ("& ", "&"),
        ("[ ", "["),
        (" ]", "]"),
        ("( ", "("),
        (" )", ")"),
        (" ;", ";"),
    ];

    GLUE.iter()
        .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to))
}
