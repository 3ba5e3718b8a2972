use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a three channel color model. The fields are made public and the
/// model gets a `new` constructor along with conversions to and from the
/// crate's `Vector3`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new model from channels in the 0..255 range.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the channels of this model as a vector.
            pub fn to_vector(&self) -> crate::math::Vector3 {
                crate::math::Vector3::new(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::math::Vector3> for #struct_name {
            fn from(value: crate::math::Vector3) -> Self {
                Self::new(value.x, value.y, value.z)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
