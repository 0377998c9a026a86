// Snappy Rust Library for OpenStack Swift Compatible Object Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use darling::FromMeta;
use darling_core::Error;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{FnArg, ItemFn, ReturnType};

#[derive(Debug, FromMeta)]
pub(crate) struct MacroArgs {
    flavor: Option<String>,
    worker_threads: Option<usize>,
    /// Space separated features the cluster must support, e.g. `features = "tempurl slo"`.
    features: Option<String>,
    no_container: darling::util::Flag,
    no_cleanup: darling::util::Flag,
}

impl MacroArgs {
    pub(crate) fn validate(&self, func: &ItemFn) -> Result<(), proc_macro::TokenStream> {
        if self.no_container.is_present() && self.no_cleanup.is_present() {
            let error_msg = "The `no_cleanup` argument cannot be used with `no_container`";
            return Err(proc_macro::TokenStream::from(
                Error::custom(error_msg)
                    .with_span(&func.sig.span())
                    .write_errors(),
            ));
        }

        if self.no_container.is_present() && func.sig.inputs.len() != 1 {
            let error_msg = "When using `no_container`, the test function must have exactly one argument: (ctx: TestContext)";
            return Err(proc_macro::TokenStream::from(
                Error::custom(error_msg)
                    .with_span(&func.sig.inputs.span())
                    .write_errors(),
            ));
        }

        if (func.sig.inputs.len() != 2) && !self.no_container.is_present() {
            let error_msg = "Snappy test function must have exactly two arguments: (ctx: TestContext, container: String)";
            return Err(proc_macro::TokenStream::from(
                Error::custom(error_msg)
                    .with_span(&func.sig.inputs.span())
                    .write_errors(),
            ));
        }

        let mut iter = func.sig.inputs.iter();

        if let Some(FnArg::Typed(pat_type)) = iter.next() {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("TestContext") {
                let error_msg = "The first argument must be of type TestContext";
                return Err(proc_macro::TokenStream::from(
                    Error::custom(error_msg)
                        .with_span(&pat_type.span())
                        .write_errors(),
                ));
            }
        }

        if !self.no_container.is_present()
            && let Some(FnArg::Typed(pat_type)) = iter.next()
        {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("String") {
                let error_msg = "The second argument must be of type String";
                return Err(proc_macro::TokenStream::from(
                    Error::custom(error_msg)
                        .with_span(&pat_type.span())
                        .write_errors(),
                ));
            }
        }

        Ok(())
    }

    fn feature_list(&self) -> Vec<String> {
        self.features
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

pub(crate) fn expand_test_macro(
    args: MacroArgs,
    mut func: ItemFn,
) -> Result<TokenStream, proc_macro::TokenStream> {
    let input_span = func.sig.paren_token.span.span();
    func.sig.output = ReturnType::Default;
    let old_inps = func.sig.inputs.clone();
    func.sig.inputs = Punctuated::default();
    let sig = func.sig.clone().into_token_stream();

    let header = generate_tokio_test_header(&args, sig);

    let test_function_block = func.block.clone().into_token_stream();

    let inner_inputs = quote_spanned!(input_span=> #old_inps);
    let inner_fn_name = create_inner_func_name(&func);
    let inner_header = quote_spanned!(func.sig.span()=> async fn #inner_fn_name(#inner_inputs));

    let maybe_skip_unsupported = generate_feature_skip_logic(&args, func.sig.span());

    let prelude = quote!(
            use ::futures_util::FutureExt;
            use ::std::panic::AssertUnwindSafe;
            use ::snappy::swift::types::SwiftApi;

            let _ = ::env_logger::builder().is_test(true).try_init();
            let ctx = match ::snappy_common::test_context::TestContext::new_from_env().await {
                Some(ctx) => ctx,
                None => {
                    println!("Skipping test: neither SWIFT_STORAGE_URL nor SWIFT_AUTH_ENDPOINT is set");
                    return;
                }
            };
    );

    let outer_body = if args.no_container.is_present() {
        generate_no_container_body(
            prelude,
            maybe_skip_unsupported,
            inner_fn_name,
            func.block.span(),
        )
    } else {
        generate_with_container_body(
            prelude,
            maybe_skip_unsupported,
            inner_fn_name,
            &args,
            func.block.span(),
        )
    };

    let inner_impl = quote_spanned!(func.span()=>
        #inner_header
        #test_function_block
    );

    let mut out = TokenStream::new();
    out.extend(header);
    out.extend(outer_body);
    out.extend(inner_impl);

    Ok(out)
}

fn generate_tokio_test_header(args: &MacroArgs, sig: TokenStream) -> TokenStream {
    let flavor = args
        .flavor
        .as_ref()
        .map(ToString::to_string)
        .or(std::env::var("SNAPPY_TEST_TOKIO_RUNTIME_FLAVOR").ok());
    match (flavor, args.worker_threads) {
        (Some(flavor), None) => {
            quote!(#[::tokio::test(flavor = #flavor)]
            #sig
                )
        }
        (None, Some(worker_threads)) => {
            quote!(#[::tokio::test(worker_threads = #worker_threads)]
            #sig
                )
        }
        (None, None) => {
            quote!(#[::tokio::test]
            #sig
                )
        }
        (Some(flavor), Some(worker_threads)) => {
            quote!(#[::tokio::test(flavor = #flavor, worker_threads = #worker_threads)]
            #sig
                )
        }
    }
}

fn generate_feature_skip_logic(args: &MacroArgs, span: proc_macro2::Span) -> TokenStream {
    let features = args.feature_list();
    if features.is_empty() {
        return TokenStream::new();
    }
    let joined = features.join(" ");
    quote_spanned!(span=>
    if !ctx.supports(&[#(#features),*]) {
        println!("Skipping test because the cluster does not support: {}", #joined);
        return;
    })
}

fn generate_no_container_body(
    prelude: TokenStream,
    maybe_skip_unsupported: TokenStream,
    inner_fn_name: TokenStream,
    span: proc_macro2::Span,
) -> TokenStream {
    quote_spanned!(span=> {
        #prelude
        #maybe_skip_unsupported
        #inner_fn_name(ctx).await;
    })
}

fn generate_with_container_body(
    prelude: TokenStream,
    maybe_skip_unsupported: TokenStream,
    inner_fn_name: TokenStream,
    args: &MacroArgs,
    span: proc_macro2::Span,
) -> TokenStream {
    let maybe_cleanup = if args.no_cleanup.is_present() {
        quote! {}
    } else {
        quote! {
            guard.cleanup().await;
        }
    };
    quote_spanned!(span=> {
        #prelude
        #maybe_skip_unsupported

        let (container, guard) = ctx.create_container_helper().await;
        let res = AssertUnwindSafe(#inner_fn_name(ctx, container.clone())).catch_unwind().await;
        #maybe_cleanup
        if let Err(e) = res {
            ::std::panic::resume_unwind(e);
        }
    })
}

fn create_inner_func_name(func: &ItemFn) -> TokenStream {
    let inner_name = format!("{}_test_impl", func.sig.ident);
    let ident = proc_macro2::Ident::new(&inner_name, func.sig.span());
    quote! { #ident }
}
