use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, LitStr, Path};
use thompson_regular_expressions::{parse_regex, Regex};

#[cfg(feature = "dot")]
use std::fs::File;
#[cfg(feature = "dot")]
use syn::{Expr, ExprLit, Lit, Meta, MetaNameValue};

pub(crate) struct RegexInput {
    attrs: Vec<Attribute>,
    pattern: LitStr,
}

impl Parse for RegexInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let pattern = input.parse()?;
        Ok(Self { attrs, pattern })
    }
}

impl RegexInput {
    pub fn expand(self) -> TokenStream {
        match self.try_expand() {
            Ok(tokens) => tokens.into(),
            Err(err) => err.to_compile_error().into(),
        }
    }

    fn try_expand(self) -> syn::Result<proc_macro2::TokenStream> {
        let mut errors = Vec::new();
        #[cfg(feature = "dot")]
        let mut graph = None;

        for i in self.attrs {
            let attr = i.meta.clone();
            match attr {
                #[cfg(feature = "dot")]
                Meta::NameValue(MetaNameValue {
                    path,
                    value:
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(s), ..
                        }),
                    ..
                }) if path.is_ident("graph") => {
                    graph = Some(s);
                }
                i => errors.push(syn::Error::new_spanned(i, "unexpected attribute")),
            }
        }

        let regex = parse_regex(self.pattern.value()).map_err(|e| {
            syn::Error::new(
                self.pattern.span(),
                format!("invalid regular expression: {e}"),
            )
        });

        let regex: Regex = match regex {
            Ok(regex) => regex,
            Err(e) => {
                errors.push(e);
                return Err(combine(errors));
            }
        };
        if !errors.is_empty() {
            return Err(combine(errors));
        }

        #[cfg(feature = "dot")]
        if let Some(path) = graph {
            let compiled = regex.compile();
            let file = path.value();
            File::create(&file)
                .and_then(|mut f| compiled.output_dot(&mut f))
                .map_err(|e| {
                    syn::Error::new(path.span(), format!("failed while graphing at {file}: {e}"))
                })?;
        }

        let krate: Path = syn::parse_quote!(::thompson);
        Ok(regex.emit(&krate))
    }
}

fn combine(errors: Vec<syn::Error>) -> syn::Error {
    errors
        .into_iter()
        .reduce(|mut all, e| {
            all.combine(e);
            all
        })
        .unwrap_or_else(|| syn::Error::new(Span::call_site(), "invalid regular expression"))
}
