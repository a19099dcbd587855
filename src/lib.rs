//! # accessor-sig
//!
//! Generate accessor-method interface signatures from declarative model
//! definitions.
//!
//! Models declared through the attribute DSL implicitly create a family of
//! accessor, mutator, predicate and dirty-tracking methods per attribute.
//! This crate inspects a model's declarations (backing columns, custom
//! type casters, aliases, the strong-typing capability marker) and emits
//! a sorted, byte-stable declaration block describing those methods.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use accessor_sig::{
//!     CasterRegistry, Generator, GeneratorConfig, Schema, StorageType, TableDef, parse_models,
//!     processable
//! };
//!
//! let source = r#"
//!     #[model(table = "posts")]
//!     #[strong_types]
//!     #[alias("author" => "name")]
//!     struct Post;
//! "#;
//!
//! let schema = Schema::new().table(TableDef::new("posts").column("name", StorageType::String));
//! let casters = CasterRegistry::new();
//! let generator = Generator::new(&schema, &casters, GeneratorConfig::new());
//!
//! let models = parse_models(source)?;
//! for model in processable(&models) {
//!     println!("{}", generator.render(model));
//! }
//! ```
//!
//! Produces `Post::GeneratedAttributeMethods` with the full method family
//! for `name` and its `author` alias, sorted by method name.

mod caster;
mod config;
mod error;
mod generate;
mod model;
mod render;
mod schema;
mod typing;

pub use caster::{CasterRegistry, CasterSig, MethodSig};
pub use config::GeneratorConfig;
pub use error::Error;
pub use generate::{
    Generator,
    emit::Decoration,
    methods::{MethodKind, MethodSignature},
    resolve::AttributeDescriptor
};
pub use model::{AliasSpec, AttributeOverride, ModelDef, parse_models, processable};
pub use render::render;
pub use schema::{ColumnSpec, Schema, StorageType, TableDef};
pub use typing::SemanticType;
