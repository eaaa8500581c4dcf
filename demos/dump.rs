use ini_core::{parse_file, IniSection};
use miette::Report;
use std::env;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| ".editorconfig".to_string());

    let document = match parse_file(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            std::process::exit(1);
        }
    };

    println!("Parsed {path}");
    println!("=====================================");
    println!("Global section:");
    println!("=====================================");
    print_section(document.global());

    println!("=====================================");
    println!("Sections:");
    println!("=====================================");
    for section in document.sections() {
        print_section(section);
    }

    let duplicates: Vec<_> = document.duplicate_sections().collect();
    if duplicates.is_empty() {
        println!("No duplicate sections found.");
        return;
    }

    // Repeated headers are merged, so each name is listed once with its combined contents.
    println!("Duplicate sections found:");
    for (name, section) in duplicates {
        println!("***** Duplicate section [{name}] *****");
        print_section(section);
    }
}

fn print_section(section: &IniSection) {
    println!("***** Section [{}] *****", section.name());
    println!("Section comments:");
    for comment in section.section_comments() {
        println!("  {comment}");
    }
    println!("All comments in the section:");
    for comment in section.comments() {
        println!("  {comment}");
    }

    println!("***** Entries *****");
    for entry in section.entries() {
        for comment in entry.comments() {
            println!("  # {comment}");
        }
        println!("  {} = {}", entry.key(), entry.value());
    }

    println!("***** Duplicate entries *****");
    for entry in section.duplicate_entries() {
        println!("  {} = {}", entry.key(), entry.value());
    }
    println!("-------------------------------------");
}
