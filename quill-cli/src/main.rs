//! Command-line interface for quill
//! This binary parses quill post files and prints the document tree in a
//! chosen format. It is a consumer of the parser, handy for inspecting how
//! a post will segment and nest before a renderer touches it.
//!
//! Usage:
//!   quill `<path>` [--format `<format>`]    - Parse a file (or - for stdin)
//!
//! Formats: treeviz (default), sexpr, json, yaml

use std::io::Read;

use clap::{Arg, Command};

use quill_parser::quill::formats::{sexpr, treeviz};
use quill_parser::quill::pipeline::parse_document;

fn main() {
    let matches = Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting parsed quill documents")
        .arg(
            Arg::new("path")
                .help("Path to the quill file, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: treeviz, sexpr, json, yaml")
                .default_value("treeviz"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches.get_one::<String>("format").expect("has a default");

    let source = read_source(path).unwrap_or_else(|err| {
        eprintln!("Cannot read {}: {}", path, err);
        std::process::exit(1);
    });

    let doc = parse_document(&source).unwrap_or_else(|err| {
        eprintln!("Parse error: {}", err);
        std::process::exit(1);
    });

    let formatted = match format.as_str() {
        "treeviz" => treeviz::to_treeviz(&doc),
        "sexpr" => sexpr::to_document_sexpr(&doc),
        "json" => serde_json::to_string_pretty(&doc).unwrap_or_else(|err| {
            eprintln!("Serialization error: {}", err);
            std::process::exit(1);
        }),
        "yaml" => serde_yaml::to_string(&doc).unwrap_or_else(|err| {
            eprintln!("Serialization error: {}", err);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Unknown format: {}", other);
            eprintln!("Available formats: treeviz, sexpr, json, yaml");
            std::process::exit(1);
        }
    };

    println!("{}", formatted);
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
