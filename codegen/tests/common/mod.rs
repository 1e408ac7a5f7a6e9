//! Shared vocabulary fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use schemagen_codegen::{Config, Diagnostics, GeneratorRegistry, Run};
use schemagen_codegen::{ClassMap, GenerationReport};
use schemagen_vocab::{jsonld, CardinalityIndex, GoodRelationsBridge, Ontology};

/// A small bookstore slice of schema.org.
pub const BOOKSTORE: &str = r#"{
  "@context": {
    "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
    "schema": "https://schema.org/"
  },
  "@graph": [
    { "@id": "schema:Thing", "@type": "rdfs:Class",
      "rdfs:comment": "The most generic type of item." },
    { "@id": "schema:CreativeWork", "@type": "rdfs:Class",
      "rdfs:comment": "The most generic kind of creative work.",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Book", "@type": "rdfs:Class",
      "rdfs:comment": "A book.",
      "rdfs:subClassOf": { "@id": "schema:CreativeWork" } },
    { "@id": "schema:Person", "@type": "rdfs:Class",
      "rdfs:comment": "A person (alive, dead, undead, or fictional).",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Organization", "@type": "rdfs:Class",
      "rdfs:comment": "An organization such as a school, NGO, corporation, club, etc.",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Intangible", "@type": "rdfs:Class",
      "rdfs:comment": "A utility class that serves as the umbrella for a number of 'intangible' things.",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Enumeration", "@type": "rdfs:Class",
      "rdfs:comment": "Lists or enumerations.",
      "rdfs:subClassOf": { "@id": "schema:Intangible" } },
    { "@id": "schema:BookFormatType", "@type": "rdfs:Class",
      "rdfs:comment": "The publication format of the book.",
      "rdfs:subClassOf": { "@id": "schema:Enumeration" } },
    { "@id": "schema:Text", "@type": ["schema:DataType", "rdfs:Class"],
      "rdfs:comment": "Data type: Text." },
    { "@id": "schema:URL", "@type": "rdfs:Class",
      "rdfs:comment": "Data type: URL.",
      "rdfs:subClassOf": { "@id": "schema:Text" } },

    { "@id": "schema:EBook", "@type": "schema:BookFormatType",
      "rdfs:comment": "Book format: Ebook." },
    { "@id": "schema:Hardcover", "@type": "schema:BookFormatType",
      "rdfs:comment": "Book format: Hardcover." },
    { "@id": "schema:GraphicNovel", "@type": "schema:BookFormatType",
      "rdfs:comment": "Book format: GraphicNovel. May represent a bound collection of ComicIssue instances." },

    { "@id": "schema:name", "@type": "rdf:Property",
      "rdfs:comment": "The name of the item.",
      "schema:domainIncludes": { "@id": "schema:Thing" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:url", "@type": "rdf:Property",
      "rdfs:comment": "URL of the item.",
      "schema:domainIncludes": { "@id": "schema:Thing" },
      "schema:rangeIncludes": { "@id": "schema:URL" } },
    { "@id": "schema:sameAs", "@type": "rdf:Property",
      "rdfs:comment": "URL(s) of a reference Web page that unambiguously indicates the item's identity.",
      "schema:domainIncludes": { "@id": "schema:Thing" },
      "schema:rangeIncludes": { "@id": "schema:URL" } },
    { "@id": "schema:author", "@type": "rdf:Property",
      "rdfs:comment": "The author of this content or rating.",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": [ { "@id": "schema:Person" }, { "@id": "schema:Organization" } ] },
    { "@id": "schema:isbn", "@type": "rdf:Property",
      "rdfs:comment": "The ISBN of the book.",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:numberOfPages", "@type": "rdf:Property",
      "rdfs:comment": "The number of pages in the book.",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": { "@id": "schema:Integer" } },
    { "@id": "schema:bookFormat", "@type": "rdf:Property",
      "rdfs:comment": "The format of the book.",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": { "@id": "schema:BookFormatType" } },
    { "@id": "schema:email", "@type": "rdf:Property",
      "rdfs:comment": "Email address.",
      "schema:domainIncludes": [ { "@id": "schema:Person" }, { "@id": "schema:Organization" } ],
      "schema:rangeIncludes": { "@id": "schema:Text" } }
  ]
}"#;

/// `Thing ← Book`, with `author` ranging over `Person` and `Organization`.
pub const AMBIGUOUS_AUTHOR: &str = r#"{
  "@context": {
    "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
    "schema": "https://schema.org/"
  },
  "@graph": [
    { "@id": "schema:Thing", "@type": "rdfs:Class" },
    { "@id": "schema:Book", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Person", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Organization", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:author", "@type": "rdf:Property",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": [ { "@id": "schema:Person" }, { "@id": "schema:Organization" } ] },
    { "@id": "schema:title", "@type": "rdf:Property",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:isbn", "@type": "rdf:Property",
      "schema:domainIncludes": { "@id": "schema:Book" },
      "schema:rangeIncludes": { "@id": "schema:Text" } }
  ]
}"#;

/// Shapes that need care when rendered: an entity under an enumeration, an
/// entity under a datatype, properties named after Rust keywords, and a range
/// the vocabulary never declares.
pub const EDGE_CASES: &str = r#"{
  "@context": {
    "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
    "schema": "https://schema.org/"
  },
  "@graph": [
    { "@id": "schema:Thing", "@type": "rdfs:Class",
      "rdfs:comment": "The most generic type of item." },
    { "@id": "schema:CreativeWork", "@type": "rdfs:Class",
      "rdfs:comment": "The most generic kind of creative work.",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Intangible", "@type": "rdfs:Class",
      "rdfs:subClassOf": { "@id": "schema:Thing" } },
    { "@id": "schema:Enumeration", "@type": "rdfs:Class",
      "rdfs:subClassOf": { "@id": "schema:Intangible" } },
    { "@id": "schema:MedicalEnumeration", "@type": "rdfs:Class",
      "rdfs:comment": "Enumerations related to health and the practice of medicine.",
      "rdfs:subClassOf": { "@id": "schema:Enumeration" } },
    { "@id": "schema:DrugCostCategory", "@type": "rdfs:Class",
      "rdfs:comment": "Enumerated categories of medical drug costs.",
      "rdfs:subClassOf": { "@id": "schema:MedicalEnumeration" } },
    { "@id": "schema:Text", "@type": ["schema:DataType", "rdfs:Class"],
      "rdfs:comment": "Data type: Text." },
    { "@id": "schema:PronounceableText", "@type": "rdfs:Class",
      "rdfs:comment": "Data type: PronounceableText.",
      "rdfs:subClassOf": { "@id": "schema:Text" } },

    { "@id": "schema:Dermatologic", "@type": "schema:MedicalEnumeration",
      "rdfs:comment": "Something relating to or practicing dermatology." },

    { "@id": "schema:abstract", "@type": "rdf:Property",
      "rdfs:comment": "An abstract is a short description that summarizes a [[CreativeWork]].",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:yield", "@type": "rdf:Property",
      "rdfs:comment": "The quantity that results by performing instructions.",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:box", "@type": "rdf:Property",
      "rdfs:comment": "One or more boxes, each the area enclosed by two points.",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": { "@id": "schema:Text" } },
    { "@id": "schema:costCategory", "@type": "rdf:Property",
      "rdfs:comment": "The category of cost, such as wholesale or retail.",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": { "@id": "schema:DrugCostCategory" } },
    { "@id": "schema:height", "@type": "rdf:Property",
      "rdfs:comment": "The height of the item.",
      "schema:domainIncludes": { "@id": "schema:CreativeWork" },
      "schema:rangeIncludes": { "@id": "schema:Distance" } },
    { "@id": "schema:phoneticText", "@type": "rdf:Property",
      "rdfs:comment": "Representation of the text as a phonetic string.",
      "schema:domainIncludes": { "@id": "schema:PronounceableText" },
      "schema:rangeIncludes": { "@id": "schema:Text" } }
  ]
}"#;

/// Parses a JSON-LD fixture into a single-source ontology.
pub fn ontology(json: &str) -> Ontology {
    Ontology::new(vec![jsonld::from_json_ld_str(json).unwrap()])
}

/// Everything a run borrows, owned in one place.
pub struct Harness {
    pub ontology: Ontology,
    pub cardinalities: CardinalityIndex,
    pub bridge: GoodRelationsBridge,
    pub config: Config,
    pub registry: GeneratorRegistry,
    pub diagnostics: Diagnostics,
}

impl Harness {
    pub fn new(json: &str, config: Config) -> Self {
        let ontology = ontology(json);
        let bridge = GoodRelationsBridge::from_names(["name", "url", "isbn"]);
        let cardinalities = CardinalityIndex::build(&ontology, &bridge);
        Self {
            ontology,
            cardinalities,
            bridge,
            config,
            registry: GeneratorRegistry::builtin(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn run(&self) -> Run<'_> {
        Run {
            ontology: &self.ontology,
            cardinalities: &self.cardinalities,
            bridge: &self.bridge,
            config: &self.config,
            registry: &self.registry,
        }
    }

    pub fn resolve(&self) -> ClassMap {
        self.run().resolve(&self.diagnostics).unwrap()
    }

    pub fn generate(&self) -> GenerationReport {
        self.run().generate(&self.diagnostics).unwrap()
    }
}
