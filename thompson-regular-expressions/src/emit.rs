use crate::regex::Folded;
use crate::Regex;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::Path;

impl Regex {
    /// Convert this regex into rust code that constructs an identical regex at runtime.
    /// `krate` is the path under which the [`Regex`] type is reachable from the emitted code.
    ///
    /// The code is a block that builds the tree bottom-up, one `let` per node, so the
    /// nesting of the emitted expressions does not grow with the depth of the regex.
    pub fn emit(&self, krate: &Path) -> TokenStream {
        if let Some(atom) = self.emit_atom(krate) {
            return atom;
        }

        let mut statements = Vec::new();
        let last = self.fold(|node| {
            let name = Ident::new(&format!("r{}", statements.len()), Span::mixed_site());
            let value = match node {
                Folded::Empty => quote!(#krate::Regex::Empty),
                Folded::Literal(c) => quote!(#krate::Regex::Literal(#c)),
                Folded::Any => quote!(#krate::Regex::Any),
                Folded::Concat(l, r) => quote!(#krate::Regex::concat(#l, #r)),
                Folded::Alternation(l, r) => quote!(#krate::Regex::alternation(#l, #r)),
                Folded::Repeat(inner) => quote!(#krate::Regex::repeat(#inner)),
            };
            statements.push(quote!(let #name = #value;));
            name
        });

        quote!({
            #(#statements)*
            #last
        })
    }

    fn emit_atom(&self, krate: &Path) -> Option<TokenStream> {
        match self {
            Regex::Empty => Some(quote!(#krate::Regex::Empty)),
            Regex::Literal(c) => Some(quote!(#krate::Regex::Literal(#c))),
            Regex::Any => Some(quote!(#krate::Regex::Any)),
            _ => None,
        }
    }
}
