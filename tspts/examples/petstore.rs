//! Example emitting TypeScript declarations for a small pet store schema.
//!
//! Run with: `cargo run --example petstore [output-dir]`
//!
//! Without an output directory the generated file is printed to stdout.

use std::path::PathBuf;
use tspts::prelude::*;

fn pet_store() -> Result<SchemaGraph, SchemaError> {
    let mut schema = SchemaBuilder::new();
    let string = schema.scalar("string");
    let int64 = schema.scalar("int64");
    let boolean = schema.scalar("boolean");
    let email = schema.scalar_extends("email", string)?;
    let null = schema.null();

    let owner = schema.model("Owner");
    let pet = schema.model("Pet");
    let cat = schema.model("Cat");
    let tags = schema.model("Tags");

    let pets = schema.array(pet);
    let friend = schema.union([pet, null]);

    schema.add_property(owner, Property::new("name", string))?;
    schema.add_property(owner, Property::optional("email", email))?;
    schema.add_property(owner, Property::new("pets", pets))?;

    schema.add_property(pet, Property::new("id", int64))?;
    schema.add_property(pet, Property::new("name", string))?;
    schema.add_property(pet, Property::optional("owner", owner))?;
    schema.add_property(pet, Property::new("tags", tags))?;

    schema.set_base(cat, pet)?;
    schema.add_property(cat, Property::new("indoor", boolean))?;
    schema.add_property(cat, Property::new("bestFriend", friend))?;

    schema.set_indexer(tags, string)?;

    schema.build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let graph = pet_store()?;
    let options = EmitterOptions::new().export_declarations(true);

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(dir) => {
            generate_to_dir(&graph, options, &dir)?;
            println!("Wrote declarations to {}", dir.display());
        }
        None => {
            for file in generate(&graph, options)? {
                println!("// {}", file.path.display());
                print!("{}", file.contents);
            }
        }
    }

    Ok(())
}
