//! `#[content_entity]` — shared column set for every content table.
//!
//! Prepends `id: Uuid` (primary key), `created_at` and `updated_at`
//! (defaulting to the database clock) to an entity `Model`, and implements
//! the DAO base traits so `DaoBase::create`/`update` can stamp them without
//! knowing the concrete entity.

use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{Fields, ItemStruct, parse_macro_input};

#[proc_macro_attribute]
pub fn content_entity(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemStruct);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "content_entity requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect();

    let mut new_fields = syn::punctuated::Punctuated::new();

    if !existing.contains("id") {
        let id_field: syn::Field = syn::parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: uuid::Uuid
        };
        new_fields.push(id_field);
    }

    if !existing.contains("created_at") {
        let created_field: syn::Field = syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub created_at: sea_orm::entity::prelude::DateTimeWithTimeZone
        };
        new_fields.push(created_field);
    }

    if !existing.contains("updated_at") {
        let updated_field: syn::Field = syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub updated_at: sea_orm::entity::prelude::DateTimeWithTimeZone
        };
        new_fields.push(updated_field);
    }

    for field in fields.named.iter().cloned() {
        new_fields.push(field);
    }

    fields.named = new_fields;

    let expanded = quote! {
        #input

        impl crate::db::dao::base_traits::HasIdActiveModel for ActiveModel {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.id = sea_orm::ActiveValue::Set(id);
            }
        }

        impl crate::db::dao::base_traits::TimestampedActiveModel for ActiveModel {
            fn set_created_at(
                &mut self,
                ts: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.created_at = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(
                &mut self,
                ts: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.updated_at = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl crate::db::dao::base_traits::HasCreatedAtColumn for Entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }
        }
    };

    expanded.into()
}
