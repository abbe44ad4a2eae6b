//! Implementations for structs with named fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::{ImplGenerics, impl_generics, type_label};
use crate::derive::parse::{FieldSpec, MappableInput, RedirectAttr};

pub(super) fn emit(input: &MappableInput, fields: &[FieldSpec], krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let descriptor = descriptor(input, fields, krate);
    let ImplGenerics { params, args, bounds } =
        impl_generics(&input.generics, &accessible_types(fields), &quote!(#krate::Reflect));
    let source = source_impls(input, fields, krate);
    let target = if input.attrs.read_only {
        TokenStream::new()
    } else {
        target_impls(input, fields, krate)
    };
    quote! {
        static DESCRIPTOR: #krate::RecordDescriptor = #descriptor;

        impl #params #krate::Reflect for #ident #args #bounds {
            fn type_key(&self) -> #krate::TypeKey {
                #krate::TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn reflect(&self) -> #krate::Reflected<'_> {
                #krate::Reflected::Record(self)
            }
        }

        #source
        #target
    }
}

fn accessible_types(fields: &[FieldSpec]) -> Vec<&syn::Type> {
    fields
        .iter()
        .filter(|field| field.is_accessible())
        .map(|field| &field.ty)
        .collect()
}

fn descriptor(input: &MappableInput, fields: &[FieldSpec], krate: &TokenStream) -> TokenStream {
    let type_name = input.ident.unraw().to_string();
    let entries = fields.iter().map(|field| {
        let name = field.name();
        let ty = type_label(&field.ty);
        let access = if field.attrs.skip {
            quote!(Skipped)
        } else if field.public {
            quote!(Public)
        } else {
            quote!(Private)
        };
        let redirects = field.attrs.redirects.iter().map(|redirect| match redirect {
            RedirectAttr::Field(source) => quote!(#krate::Redirect::Field(#source)),
            RedirectAttr::Method(method) => {
                let name = method.unraw().to_string();
                quote!(#krate::Redirect::Method(#name))
            }
        });
        quote! {
            #krate::FieldDescriptor {
                name: #name,
                type_name: #ty,
                access: #krate::Access::#access,
                redirects: &[#(#redirects),*],
            }
        }
    });
    let methods = input
        .attrs
        .methods
        .iter()
        .map(|method| method.unraw().to_string());
    quote! {
        #krate::RecordDescriptor {
            type_name: ::core::concat!(::core::module_path!(), "::", #type_name),
            fields: &[#(#entries),*],
            methods: &[#(#methods),*],
        }
    }
}

fn source_impls(input: &MappableInput, fields: &[FieldSpec], krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let readable = fields.iter().filter(|field| field.is_accessible());
    let names = readable.clone().map(FieldSpec::name);
    let idents = readable.map(|field| &field.ident);
    let method_names = input
        .attrs
        .methods
        .iter()
        .map(|method| method.unraw().to_string());
    let methods = &input.attrs.methods;
    let ImplGenerics { params, args, bounds } =
        impl_generics(&input.generics, &accessible_types(fields), &quote!(#krate::Reflect));
    quote! {
        impl #params #krate::RecordSource for #ident #args #bounds {
            fn descriptor(&self) -> &'static #krate::RecordDescriptor {
                &DESCRIPTOR
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn #krate::Reflect> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn call_method(
                &self,
                name: &str,
            ) -> ::core::option::Option<::std::boxed::Box<dyn #krate::Reflect>> {
                match name {
                    #(#method_names => #krate::MethodOutput::into_output(self.#methods()),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn target_impls(input: &MappableInput, fields: &[FieldSpec], krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (indices, idents): (Vec<usize>, Vec<_>) = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_accessible())
        .map(|(index, field)| (index, &field.ident))
        .unzip();
    let ImplGenerics { params, args, bounds } =
        impl_generics(&input.generics, &accessible_types(fields), &quote!(#krate::ReflectMut));
    quote! {
        impl #params #krate::ReflectMut for #ident #args #bounds {
            fn reflect_mut(&mut self) -> #krate::ReflectedMut<'_> {
                #krate::ReflectedMut::Record(self)
            }

            fn assign_boxed(
                &mut self,
                value: ::std::boxed::Box<dyn ::core::any::Any>,
            ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
                #krate::reflect::assign_downcast(self, value)
            }
        }

        impl #params #krate::RecordTarget for #ident #args #bounds {
            fn descriptor(&self) -> &'static #krate::RecordDescriptor {
                &DESCRIPTOR
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #krate::ReflectMut> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
