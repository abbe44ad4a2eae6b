//! Implementations for single-field tuple structs.
//!
//! Plain newtypes are transparent: they reflect their inner value but keep
//! their own type key, so converters can still target them. Opaque
//! newtypes can only be filled by a converter.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Type, parse_quote};

use super::{ImplGenerics, impl_generics};
use crate::derive::parse::MappableInput;

pub(super) fn emit(input: &MappableInput, inner: &Type, krate: &TokenStream) -> TokenStream {
    if input.attrs.opaque {
        opaque(input, krate)
    } else {
        transparent(input, inner, krate)
    }
}

fn transparent(input: &MappableInput, inner: &Type, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let read = impl_generics(&input.generics, &[inner], &quote!(#krate::Reflect));
    let target = if input.attrs.read_only {
        TokenStream::new()
    } else {
        let ImplGenerics { params, args, bounds } =
            impl_generics(&input.generics, &[inner], &quote!(#krate::ReflectMut));
        quote! {
            impl #params #krate::ReflectMut for #ident #args #bounds {
                fn reflect_mut(&mut self) -> #krate::ReflectedMut<'_> {
                    #krate::ReflectMut::reflect_mut(&mut self.0)
                }

                fn assign_boxed(
                    &mut self,
                    value: ::std::boxed::Box<dyn ::core::any::Any>,
                ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
                    match value.downcast::<Self>() {
                        ::core::result::Result::Ok(whole) => {
                            *self = *whole;
                            ::core::result::Result::Ok(())
                        }
                        ::core::result::Result::Err(inner) => {
                            #krate::ReflectMut::assign_boxed(&mut self.0, inner)
                        }
                    }
                }
            }
        }
    };
    let ImplGenerics { params, args, bounds } = read;
    quote! {
        impl #params #krate::Reflect for #ident #args #bounds {
            fn type_key(&self) -> #krate::TypeKey {
                #krate::TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                #krate::Reflect::as_any(&self.0)
            }

            fn reflect(&self) -> #krate::Reflected<'_> {
                #krate::Reflect::reflect(&self.0)
            }
        }

        #target
    }
}

fn opaque(input: &MappableInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (_, type_args, _) = input.generics.split_for_impl();
    let self_ty: Type = parse_quote!(#ident #type_args);
    let ImplGenerics { params, args, bounds } =
        impl_generics(&input.generics, &[&self_ty], &quote!(::core::fmt::Display));
    let target = if input.attrs.read_only {
        TokenStream::new()
    } else {
        quote! {
            impl #params #krate::ReflectMut for #ident #args #bounds {
                fn reflect_mut(&mut self) -> #krate::ReflectedMut<'_> {
                    #krate::ReflectedMut::Opaque
                }

                fn assign_boxed(
                    &mut self,
                    value: ::std::boxed::Box<dyn ::core::any::Any>,
                ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
                    #krate::reflect::assign_downcast(self, value)
                }
            }
        }
    };
    quote! {
        impl #params #krate::OpaqueValue for #ident #args #bounds {}

        impl #params #krate::Reflect for #ident #args #bounds {
            fn type_key(&self) -> #krate::TypeKey {
                #krate::TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn reflect(&self) -> #krate::Reflected<'_> {
                #krate::Reflected::Opaque(self)
            }
        }

        #target
    }
}
