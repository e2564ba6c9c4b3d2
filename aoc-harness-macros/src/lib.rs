//! Procedural macros for the aoc-harness library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse_macro_input, ItemFn, LitInt, LitStr};

/// Properties given in `#[puzzle(...)]`
#[derive(Default)]
struct PuzzleArgs {
    year: Option<LitInt>,
    day: Option<LitInt>,
    tags: Vec<LitStr>,
}

impl PuzzleArgs {
    fn parse_meta(&mut self, meta: syn::meta::ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("year") {
            self.year = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("day") {
            let day: LitInt = meta.value()?.parse()?;
            let number: u8 = day.base10_parse()?;
            if !(1..=25).contains(&number) {
                return Err(syn::Error::new(day.span(), "day must be between 1 and 25"));
            }
            self.day = Some(day);
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                self.tags.push(content.parse()?);
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle property, expected `year`, `day` or `tags`"));
        }
        Ok(())
    }
}

/// Attribute macro registering a day definition with the plugin system
///
/// The annotated function takes no arguments and returns anything that
/// implements `IntoDynDay` (a `Day` or a `DayBuilder`). The macro keeps the
/// function as written and submits a `PuzzlePlugin` for it, so
/// `YearBuilder::register_all_plugins` can find it.
///
/// # Attributes
///
/// - `year`: Required. The puzzle set (e.g., 2023)
/// - `day`: Required. The day number (1-25); must match the day the function builds
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "grid"])
///
/// # Example
///
/// ```ignore
/// use aoc_harness::{puzzle, Day, DayBuilder, Expected};
///
/// #[puzzle(year = 2023, day = 1, tags = ["easy"])]
/// fn trebuchet() -> DayBuilder<String> {
///     Day::builder(1)
///         .identity()
///         .part1(|text: &str| text.lines().count())
///         .example("a\nb", Expected::part1(2))
/// }
/// ```
#[proc_macro_attribute]
pub fn puzzle(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = PuzzleArgs::default();
    let parser = syn::meta::parser(|meta| args.parse_meta(meta));
    parse_macro_input!(attr with parser);

    let func = parse_macro_input!(item as ItemFn);

    match expand(args, func) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: PuzzleArgs, func: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let year = args
        .year
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing required `year` property"))?;
    let day = args
        .day
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing required `day` property"))?;
    if !func.sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig.inputs,
            "puzzle definitions take no arguments",
        ));
    }

    let name = &func.sig.ident;
    let define = format_ident!("__aoc_puzzle_define_{}", name);
    let tags = &args.tags;

    Ok(quote! {
        #func

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #define() -> ::std::boxed::Box<dyn ::aoc_harness::DynDay> {
            ::aoc_harness::IntoDynDay::into_dyn_day(#name())
        }

        ::aoc_harness::inventory::submit! {
            ::aoc_harness::PuzzlePlugin {
                year: #year,
                day: #day,
                define: #define,
                tags: &[#(#tags),*],
            }
        }
    })
}
