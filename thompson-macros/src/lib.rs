use proc_macro::TokenStream;
use syn::parse_macro_input;

mod regex;

use crate::regex::RegexInput;

#[proc_macro]
pub fn regex(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RegexInput);
    input.expand()
}
