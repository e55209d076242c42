//! 从枚举变体的文档注释生成命令帮助信息。

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// 提取文档注释，每行去除`///`之后的一个前导空格。
fn extract_doc(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 摘要：文档中不以空白开头的行，即命令所在的行。
fn extract_usage(doc: &str) -> String {
    doc.lines().filter(|line| !line.starts_with(char::is_whitespace)).collect::<Vec<_>>().join("\n")
}

#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "CmdHelp can only be derived on enums")
            .to_compile_error()
            .into();
    };

    // help(&self)：单个变体的完整帮助
    let help_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = extract_doc(&v.attrs);
        let pattern = match &v.fields {
            Fields::Unit => quote! { #variant_name },
            Fields::Unnamed(_) => quote! { #variant_name(..) },
            Fields::Named(_) => quote! { #variant_name { .. } },
        };
        quote! { Self::#pattern => #doc, }
    });

    let docs = variants.iter().map(|v| extract_doc(&v.attrs)).collect::<Vec<_>>();
    let usages = docs.iter().map(|doc| extract_usage(doc)).collect::<Vec<_>>();

    let expanded = quote! {
        #[allow(dead_code)]
        impl #enum_name {
            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_arms)*
                }
            }

            /// 获取全部变体的完整帮助信息。
            pub fn all_help() -> &'static [&'static str] {
                &[#(#docs),*]
            }

            /// 获取全部变体的命令摘要。
            pub fn all_usage() -> &'static [&'static str] {
                &[#(#usages),*]
            }
        }
    };

    TokenStream::from(expanded)
}
