//! Demonstrates loading a JSON-LD vocabulary and summarising it.
//!
//! Run with: `cargo run --example dump_vocabulary -p schemagen-vocab -- schemaorg.jsonld`

use std::path::PathBuf;

use schemagen_vocab::{is_enumeration_marker, CardinalityIndex, GoodRelationsBridge, Ontology};

fn main() {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: dump_vocabulary <file.jsonld>");
        return;
    };

    let graph = match schemagen_vocab::jsonld::load(&path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let ontology = Ontology::new(vec![graph]);

    println!("Vocabulary {}", path.display());
    println!("  Types:        {}", ontology.type_count());
    println!("  Properties:   {}", ontology.property_count());
    println!("  Instances:    {}", ontology.instance_count());

    let enums: Vec<&str> = ontology
        .types()
        .filter(|t| t.subclass_of.len() == 1 && is_enumeration_marker(&t.subclass_of[0]))
        .map(|t| t.name.as_str())
        .collect();
    println!("  Enumerations: {}", enums.len());

    let cardinalities = CardinalityIndex::build(&ontology, &GoodRelationsBridge::default());
    println!("  Cardinalities indexed: {}", cardinalities.len());

    // Show the first few enumerations with their member counts.
    for name in enums.iter().take(10) {
        let Some(ty) = ontology.find_type_by_name(name) else {
            continue;
        };
        println!(
            "    {:30} {:>3} members",
            name,
            ontology.instances_of(&ty.id).count()
        );
    }
}
