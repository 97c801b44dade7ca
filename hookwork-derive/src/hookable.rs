//! Implementation of the `#[hookable]` attribute.
//!
//! The attribute keeps the annotated function unchanged and emits a sibling
//! function that returns it as a described callable.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! #[hookable]
//! pub fn volume(width: i64, height: i64, depth: i64) -> i64 { ... }
//! ```
//!
//! the macro generates:
//!
//! ```text
//! pub fn volume(width: i64, height: i64, depth: i64) -> i64 { ... }
//!
//! pub fn volume_callable() -> ::hookwork::hook::Described<
//!     impl Fn(::hookwork::hook::Arguments<i64>)
//!         -> ::core::result::Result<i64, ::hookwork::hook::ArgumentError>
//!         + Clone + Send + Sync + 'static,
//! > {
//!     let __hookwork_signature = ::hookwork::hook::Signature::new(["width", "height", "depth"]);
//!     let __hookwork_parameters = __hookwork_signature.clone();
//!     ::hookwork::hook::describe(__hookwork_signature, move |__hookwork_arguments| {
//!         let [width, height, depth] =
//!             __hookwork_arguments.bind_array::<3>(&__hookwork_parameters)?;
//!         ::core::result::Result::Ok(volume(width, height, depth))
//!     })
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{FnArg, Ident, ItemFn, Pat, ReturnType, Type, parse_macro_input};

/// The parameters of an annotated function.
struct Parameters {
    names: Vec<Ident>,
    element: Type,
}

pub fn hookable_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let attribute = TokenStream2::from(attribute);
    let function = parse_macro_input!(item as ItemFn);

    let generated = expand(&attribute, &function).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(quote! {
        #function
        #generated
    })
}

fn expand(attribute: &TokenStream2, function: &ItemFn) -> syn::Result<TokenStream2> {
    if !attribute.is_empty() {
        return Err(syn::Error::new(
            attribute.span(),
            "#[hookable] does not take arguments",
        ));
    }

    let signature = &function.sig;
    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[hookable] does not support async functions",
        ));
    }
    if let Some(unsafety) = &signature.unsafety {
        return Err(syn::Error::new(
            unsafety.span(),
            "#[hookable] does not support unsafe functions",
        ));
    }
    if !signature.generics.params.is_empty() {
        return Err(syn::Error::new(
            signature.generics.span(),
            "#[hookable] does not support generic functions",
        ));
    }

    let Parameters { names, element } = collect_parameters(signature)?;

    let function_name = &signature.ident;
    let callable_name = format_ident!("{}_callable", function_name.unraw());
    let visibility = &function.vis;
    let output = match &signature.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, output) => quote! { #output },
    };
    let name_literals: Vec<String> = names.iter().map(|name| name.unraw().to_string()).collect();
    let arity = names.len();
    let documentation = format!(
        "Returns [`{}`] as a described callable with parameters `{}`.",
        function_name.unraw(),
        name_literals.join("`, `"),
    );

    Ok(quote! {
        #[doc = #documentation]
        #[must_use]
        #visibility fn #callable_name() -> ::hookwork::hook::Described<
            impl Fn(::hookwork::hook::Arguments<#element>)
                -> ::core::result::Result<#output, ::hookwork::hook::ArgumentError>
                + Clone
                + Send
                + Sync
                + 'static,
        > {
            let __hookwork_signature = ::hookwork::hook::Signature::new([#(#name_literals),*]);
            let __hookwork_parameters = __hookwork_signature.clone();
            ::hookwork::hook::describe(
                __hookwork_signature,
                move |__hookwork_arguments: ::hookwork::hook::Arguments<#element>|
                    -> ::core::result::Result<#output, ::hookwork::hook::ArgumentError> {
                    let [#(#names),*] =
                        __hookwork_arguments.bind_array::<#arity>(&__hookwork_parameters)?;
                    ::core::result::Result::Ok(#function_name(#(#names),*))
                },
            )
        }
    })
}

fn collect_parameters(signature: &syn::Signature) -> syn::Result<Parameters> {
    let mut names = Vec::with_capacity(signature.inputs.len());
    let mut element: Option<Type> = None;

    for input in &signature.inputs {
        let typed = match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "#[hookable] does not support methods; describe them with Signature::method",
                ));
            }
            FnArg::Typed(typed) => typed,
        };

        let name = match typed.pat.as_ref() {
            Pat::Ident(binding) if binding.by_ref.is_none() && binding.subpat.is_none() => {
                binding.ident.clone()
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "#[hookable] parameters must be plain identifiers",
                ));
            }
        };

        let parameter_type = typed.ty.as_ref();
        if let Some(expected) = &element {
            if !same_type(expected, parameter_type) {
                return Err(syn::Error::new(
                    parameter_type.span(),
                    format!(
                        "#[hookable] parameters must share one type: expected `{}`",
                        quote!(#expected)
                    ),
                ));
            }
        } else {
            element = Some(parameter_type.clone());
        }

        names.push(name);
    }

    let element = element.ok_or_else(|| {
        syn::Error::new(
            signature.ident.span(),
            "#[hookable] requires at least one parameter",
        )
    })?;

    Ok(Parameters { names, element })
}

fn same_type(first: &Type, second: &Type) -> bool {
    quote!(#first).to_string() == quote!(#second).to_string()
}
