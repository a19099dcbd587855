// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decoration: literal expected-output fixtures for the generator.

use accessor_sig::{
    CasterRegistry, CasterSig, ColumnSpec, Generator, GeneratorConfig, MethodSig, Schema,
    StorageType, TableDef, parse_models, processable
};
use pretty_assertions::assert_eq;

/// Render the generated declaration for the model named `name`.
fn sig_for(
    name: &str,
    source: &str,
    schema: &Schema,
    casters: &CasterRegistry,
    config: GeneratorConfig
) -> String {
    let models = parse_models(source).expect("model source should parse");
    let generator = Generator::new(schema, casters, config);
    let model = processable(&models)
        .into_iter()
        .find(|model| model.name_str() == name)
        .unwrap_or_else(|| panic!("no processable model named {name}"));
    generator.render(model)
}

/// Render `Post` with no casters and default configuration.
fn sig_for_post(source: &str, schema: &Schema) -> String {
    sig_for(
        "Post",
        source,
        schema,
        &CasterRegistry::new(),
        GeneratorConfig::new()
    )
}

/// Indent every non-empty line by `indent` spaces.
fn indented(text: &str, indent: usize) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{line}", " ".repeat(indent))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that `expected` appears verbatim in `output`.
fn assert_has(output: &str, expected: &str) {
    assert!(
        output.contains(expected),
        "expected output to contain:\n{expected}\n\nfull output:\n{output}"
    );
}

const STRONG_POST: &str = r#"
    #[model(table = "posts")]
    #[strong_types]
    struct Post;
"#;

#[test]
fn generates_full_declaration_with_strong_types() {
    let schema = Schema::new().table(TableDef::new("posts").column("id", StorageType::Integer));

    let expected = r#"class Post
  include Post::GeneratedAttributeMethods
end

module Post::GeneratedAttributeMethods
  def id() -> Option<i64>

  def id=(value: Option<i64>) -> Option<i64>

  def id?() -> bool

  def id_before_last_save() -> Option<i64>

  def id_before_type_cast() -> Value

  def id_came_from_user?() -> bool

  def id_change() -> Option<(Option<i64>, Option<i64>)>

  def id_change_to_be_saved() -> Option<(Option<i64>, Option<i64>)>

  def id_changed?() -> bool

  def id_in_database() -> Option<i64>

  def id_previous_change() -> Option<(Option<i64>, Option<i64>)>

  def id_previously_changed?() -> bool

  def id_previously_was() -> Option<i64>

  def id_was() -> Option<i64>

  def id_will_change!() -> ()

  def restore_id!() -> ()

  def saved_change_to_id() -> Option<(Option<i64>, Option<i64>)>

  def saved_change_to_id?() -> bool

  def will_save_change_to_id?() -> bool
end
"#;

    assert_eq!(sig_for_post(STRONG_POST, &schema), expected);
}

#[test]
fn generates_declaration_for_empty_table() {
    let schema = Schema::new().table(TableDef::new("posts"));

    let expected = r#"class Post
  include Post::GeneratedAttributeMethods
end

module Post::GeneratedAttributeMethods
end
"#;

    assert_eq!(sig_for_post(STRONG_POST, &schema), expected);
}

#[test]
fn generates_accessors_with_strong_types() {
    let schema = Schema::new().table(TableDef::new("posts").column("body", StorageType::String));

    let output = sig_for_post(STRONG_POST, &schema);
    assert_has(
        &output,
        &indented(
            "def body() -> Option<String>\n\ndef body=(value: Option<String>) -> Option<String>\n\ndef body?() -> bool",
            2
        )
    );
}

#[test]
fn generates_untyped_accessors_without_strong_types() {
    let source = r#"
        #[model(table = "posts")]
        struct Post;
    "#;
    let schema = Schema::new().table(TableDef::new("posts").column("body", StorageType::String));

    let output = sig_for_post(source, &schema);
    assert_has(
        &output,
        &indented(
            "def body() -> Value\n\ndef body=(value: Value) -> Value\n\ndef body?() -> bool",
            2
        )
    );
    assert_has(&output, "def body_change() -> Value");
    assert_has(&output, "def body?() -> bool");
}

#[test]
fn respects_column_nullability() {
    let schema = Schema::new().table(
        TableDef::new("posts")
            .with(ColumnSpec::new("title", StorageType::String).not_null())
            .column("body", StorageType::String)
            .column("created_at", StorageType::DateTime)
            .column("updated_at", StorageType::DateTime)
    );

    let output = sig_for_post(STRONG_POST, &schema);

    assert_has(
        &output,
        &indented(
            "def body() -> Option<String>\n\ndef body=(value: Option<String>) -> Option<String>\n\ndef body?() -> bool",
            2
        )
    );
    assert_has(
        &output,
        &indented(
            "def title() -> String\n\ndef title=(value: String) -> String\n\ndef title?() -> bool",
            2
        )
    );
}

#[test]
fn maps_every_column_type() {
    let schema = Schema::new().table(
        TableDef::new("posts")
            .column("integer_column", StorageType::Integer)
            .column("string_column", StorageType::String)
            .column("date_column", StorageType::Date)
            .column("decimal_column", StorageType::Decimal)
            .column("float_column", StorageType::Float)
            .column("boolean_column", StorageType::Boolean)
            .column("datetime_column", StorageType::DateTime)
    );

    let output = sig_for_post(STRONG_POST, &schema);

    assert_has(
        &output,
        "def integer_column=(value: Option<i64>) -> Option<i64>"
    );
    assert_has(
        &output,
        "def string_column=(value: Option<String>) -> Option<String>"
    );
    assert_has(
        &output,
        "def date_column=(value: Option<NaiveDate>) -> Option<NaiveDate>"
    );
    assert_has(
        &output,
        "def decimal_column=(value: Option<BigDecimal>) -> Option<BigDecimal>"
    );
    assert_has(&output, "def float_column=(value: Option<f64>) -> Option<f64>");
    assert_has(
        &output,
        "def boolean_column=(value: Option<bool>) -> Option<bool>"
    );
    assert_has(
        &output,
        "def datetime_column=(value: Option<NaiveDateTime>) -> Option<NaiveDateTime>"
    );
}

#[test]
fn unknown_column_type_degrades_to_untyped() {
    let schema = Schema::new().table(
        TableDef::new("posts")
            .column("position", StorageType::Other("geography".to_string()))
            .column("title", StorageType::String)
    );

    let output = sig_for_post(STRONG_POST, &schema);
    assert_has(&output, "def position() -> Value");
    assert_has(&output, "def title() -> Option<String>");
}

#[test]
fn time_zone_aware_mode_maps_date_time_variants_uniformly() {
    let schema = Schema::new().table(
        TableDef::new("posts")
            .column("timestamp_column", StorageType::Timestamp)
            .column("datetime_column", StorageType::DateTime)
            .column("time_column", StorageType::Time)
    );

    let output = sig_for(
        "Post",
        STRONG_POST,
        &schema,
        &CasterRegistry::new(),
        GeneratorConfig::new().time_zone_aware(true)
    );

    assert_has(
        &output,
        "def timestamp_column=(value: Option<DateTime<Utc>>) -> Option<DateTime<Utc>>"
    );
    assert_has(
        &output,
        "def datetime_column=(value: Option<DateTime<Utc>>) -> Option<DateTime<Utc>>"
    );
    assert_has(
        &output,
        "def time_column=(value: Option<DateTime<Utc>>) -> Option<DateTime<Utc>>"
    );
}

#[test]
fn generates_full_family_for_aliases() {
    let source = r#"
        #[model(table = "posts")]
        #[strong_types]
        #[alias("author" => "name")]
        struct Post;
    "#;
    let schema = Schema::new().table(TableDef::new("posts").column("name", StorageType::String));

    let output = sig_for_post(source, &schema);

    let expected = r#"module Post::GeneratedAttributeMethods
  def author() -> Option<String>

  def author=(value: Option<String>) -> Option<String>

  def author?() -> bool

  def author_before_last_save() -> Option<String>

  def author_before_type_cast() -> Value

  def author_came_from_user?() -> bool

  def author_change() -> Option<(Option<String>, Option<String>)>

  def author_change_to_be_saved() -> Option<(Option<String>, Option<String>)>

  def author_changed?() -> bool

  def author_in_database() -> Option<String>

  def author_previous_change() -> Option<(Option<String>, Option<String>)>

  def author_previously_changed?() -> bool

  def author_was() -> Option<String>

  def author_will_change!() -> ()"#;
    assert_has(&output, expected);

    // _previously_was is canonical-only.
    assert!(!output.contains("author_previously_was"));
    assert_has(&output, "def name_previously_was() -> Option<String>");

    assert_has(&output, &indented("def restore_author!() -> ()", 2));
    assert_has(
        &output,
        &indented(
            "def saved_change_to_author() -> Option<(Option<String>, Option<String>)>\n\ndef saved_change_to_author?() -> bool",
            2
        )
    );
    assert_has(&output, &indented("def will_save_change_to_author?() -> bool", 2));
}

#[test]
fn ignores_conflicting_aliases() {
    let source = r#"
        #[model(table = "posts")]
        #[strong_types]
        #[alias("body?" => "body")]
        struct Post;
    "#;
    let schema = Schema::new().table(TableDef::new("posts").column("body", StorageType::String));

    let expected = r#"class Post
  include Post::GeneratedAttributeMethods
end

module Post::GeneratedAttributeMethods
  def body() -> Option<String>

  def body=(value: Option<String>) -> Option<String>

  def body?() -> bool

  def body_before_last_save() -> Option<String>

  def body_before_type_cast() -> Value

  def body_came_from_user?() -> bool

  def body_change() -> Option<(Option<String>, Option<String>)>

  def body_change_to_be_saved() -> Option<(Option<String>, Option<String>)>

  def body_changed?() -> bool

  def body_in_database() -> Option<String>

  def body_previous_change() -> Option<(Option<String>, Option<String>)>

  def body_previously_changed?() -> bool

  def body_previously_was() -> Option<String>

  def body_was() -> Option<String>

  def body_will_change!() -> ()

  def restore_body!() -> ()

  def saved_change_to_body() -> Option<(Option<String>, Option<String>)>

  def saved_change_to_body?() -> bool

  def will_save_change_to_body?() -> bool
end
"#;

    assert_eq!(sig_for_post(source, &schema), expected);
}

#[test]
fn alias_with_missing_target_is_dropped() {
    let source = r#"
        #[model(table = "posts")]
        #[strong_types]
        #[alias("author" => "name")]
        struct Post;
    "#;
    let schema = Schema::new().table(TableDef::new("posts").column("body", StorageType::String));

    let output = sig_for_post(source, &schema);
    assert!(!output.contains("author"));
    assert_has(&output, "def body() -> Option<String>");
}

const COST_POST: &str = r#"
    #[model(table = "posts")]
    #[strong_types]
    #[attribute(name = "cost", caster = "Money::Type")]
    struct Post;
"#;

fn posts_with_cost() -> Schema {
    Schema::new().table(TableDef::new("posts").column("cost", StorageType::Decimal))
}

#[test]
fn custom_type_with_deserialize_signature() {
    let casters = CasterRegistry::new().with(
        "Money::Type",
        CasterSig::new().with_deserialize(MethodSig::parse("(value: Numeric) -> Money").unwrap())
    );

    let output = sig_for(
        "Post",
        COST_POST,
        &posts_with_cost(),
        &casters,
        GeneratorConfig::new()
    );

    assert_has(
        &output,
        &indented(
            "def cost() -> Option<Money>\n\ndef cost=(value: Option<Money>) -> Option<Money>",
            2
        )
    );
}

#[test]
fn custom_type_with_cast_signature() {
    let casters = CasterRegistry::new().with(
        "Money::Type",
        CasterSig::new().with_cast(MethodSig::parse("(value: Numeric) -> Money | Numeric").unwrap())
    );

    let output = sig_for(
        "Post",
        COST_POST,
        &posts_with_cost(),
        &casters,
        GeneratorConfig::new()
    );

    assert_has(
        &output,
        &indented(
            "def cost() -> Option<Money | Numeric>\n\ndef cost=(value: Option<Money | Numeric>) -> Option<Money | Numeric>",
            2
        )
    );
}

#[test]
fn custom_type_with_serialize_signature_uses_parameter_type() {
    let casters = CasterRegistry::new().with(
        "Money::Type",
        CasterSig::new().with_serialize(MethodSig::parse("(money: Money) -> Numeric").unwrap())
    );

    let output = sig_for(
        "Post",
        COST_POST,
        &posts_with_cost(),
        &casters,
        GeneratorConfig::new()
    );

    assert_has(
        &output,
        &indented(
            "def cost() -> Option<Money>\n\ndef cost=(value: Option<Money>) -> Option<Money>",
            2
        )
    );
}

#[test]
fn custom_type_with_generic_signature_is_untyped() {
    let casters = CasterRegistry::new().with(
        "Money::Type",
        CasterSig::new()
            .with_serialize(MethodSig::parse("(value: ValueType<i64>) -> Numeric").unwrap())
    );

    let output = sig_for(
        "Post",
        COST_POST,
        &posts_with_cost(),
        &casters,
        GeneratorConfig::new()
    );

    assert_has(
        &output,
        &indented("def cost() -> Value\n\ndef cost=(value: Value) -> Value", 2)
    );
}

#[test]
fn custom_type_without_signatures_is_untyped() {
    let casters = CasterRegistry::new().with("Money::Type", CasterSig::new());

    let output = sig_for(
        "Post",
        COST_POST,
        &posts_with_cost(),
        &casters,
        GeneratorConfig::new()
    );

    assert_has(
        &output,
        &indented("def cost() -> Value\n\ndef cost=(value: Value) -> Value", 2)
    );
}

#[test]
fn output_is_byte_stable_across_runs() {
    let source = r#"
        #[model(table = "posts")]
        #[strong_types]
        #[alias("author" => "name")]
        struct Post;
    "#;
    let schema = Schema::new().table(
        TableDef::new("posts")
            .with(ColumnSpec::new("title", StorageType::String).not_null())
            .column("name", StorageType::String)
    );

    let first = sig_for_post(source, &schema);
    let second = sig_for_post(source, &schema);
    assert_eq!(first, second);
}
