// Integration tests for ini-core using fixture files
use ini_core::{parse_file, parse_str, Entry, IniDocument};
use std::fs;
use std::path::PathBuf;

fn get_test_file_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn read_test_file(filename: &str) -> String {
    let path = get_test_file_path(filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}

fn parse_fixture(filename: &str) -> IniDocument {
    parse_file(get_test_file_path(filename))
        .unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn assert_entry(entry: &Entry, key: &str, value: &str, comments: &[&str]) {
    assert_eq!(entry.key(), key);
    assert_eq!(entry.value(), value);
    assert_eq!(entry.comments(), strings(comments).as_slice(), "comments of `{key}`");
}

mod simple_editorconfig {
    use super::*;

    #[test]
    fn test_global_section() {
        let doc = parse_fixture("simple.editorconfig");
        let global = doc.global();

        assert_eq!(global.name(), "");
        assert_eq!(global.len(), 2);
        assert_eq!(
            global.comments(),
            strings(&[
                "global_option_1_above_comment",
                "global_comment_above_section"
            ])
            .as_slice()
        );

        let mut entries = global.entries();
        assert_entry(
            entries.next().unwrap(),
            "global_option_1",
            "value1",
            &["global_option_1_side_comment", "global_option_1_above_comment"],
        );
        assert_entry(entries.next().unwrap(), "global_option_2", "value2", &[]);
    }

    #[test]
    fn test_sections_in_file_order() {
        let doc = parse_fixture("simple.editorconfig");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["*.ext1", "*.{ ext2,ext3,ext4}", "*.md"]);
        assert_eq!(doc.duplicate_section_names().count(), 0);
    }

    #[test]
    fn test_first_section() {
        let doc = parse_fixture("simple.editorconfig");
        let section = doc.try_section("*.ext1").unwrap();

        assert_eq!(section.len(), 6);
        assert_eq!(
            section.section_comments(),
            strings(&["global_comment_above_section"]).as_slice()
        );
        assert_eq!(
            section.comments(),
            strings(&["group1.option1 comment 1"]).as_slice()
        );

        assert_entry(
            section.entry("group1.option1").unwrap(),
            "group1.option1",
            "value1",
            &["group1.option1 comment 2", "group1.option1 comment 1"],
        );
        assert_entry(section.entry("group1.option2").unwrap(), "group1.option2", "value2", &[]);
        assert_entry(section.entry("group1.option3").unwrap(), "group1.option3", "value3", &[]);
    }

    #[test]
    fn test_section_name_keeps_inner_whitespace() {
        let doc = parse_fixture("simple.editorconfig");
        let section = doc.section("*.{ ext2,ext3,ext4}").unwrap();

        assert_eq!(section.len(), 6);
        assert!(section.section_comments().is_empty());
        assert_entry(
            section.entry("customkey_with_comment").unwrap(),
            "customkey_with_comment",
            "true",
            &["Comment here"],
        );
        // The comment above the next header was read while this section was current.
        assert_eq!(
            section.comments(),
            strings(&["Comment here", "Markdown keeps trailing whitespace"]).as_slice()
        );
    }

    #[test]
    fn test_last_section() {
        let doc = parse_fixture("simple.editorconfig");
        let md = doc.section("*.md").unwrap();
        assert_eq!(
            md.section_comments(),
            strings(&["Markdown keeps trailing whitespace"]).as_slice()
        );
        assert_eq!(md.value("trim_trailing_whitespace"), Some("false"));
    }

    #[test]
    fn test_file_and_string_agree() {
        let from_file = parse_fixture("simple.editorconfig");
        let from_str = parse_str(&read_test_file("simple.editorconfig"));
        assert_eq!(from_file, from_str);
    }
}

mod duplicates_editorconfig {
    use super::*;

    #[test]
    fn test_duplicate_sections_are_merged() {
        let doc = parse_fixture("duplicates.editorconfig");

        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.duplicate_section_names().collect::<Vec<_>>(),
            vec!["*.cs", "*.json"]
        );
        for (name, section) in doc.duplicate_sections() {
            assert!(std::ptr::eq(section, doc.section(name).unwrap()));
        }
    }

    #[test]
    fn test_merged_section_contents() {
        let doc = parse_fixture("duplicates.editorconfig");
        let cs = doc.section("*.cs").unwrap();

        assert_eq!(
            cs.section_comments(),
            strings(&["C# files", "Test projects overrides"]).as_slice()
        );
        assert_eq!(
            cs.keys().collect::<Vec<_>>(),
            vec![
                "indent_size",
                "dotnet_sort_system_directives_first",
                "dotnet_diagnostic.ca1707.severity",
                "dotnet_diagnostic.sa0001.severity",
            ]
        );
        assert_entry(
            cs.entry("dotnet_diagnostic.ca1707.severity").unwrap(),
            "dotnet_diagnostic.ca1707.severity",
            "none",
            &["Identifiers should not contain underscores"],
        );
        assert_entry(
            cs.entry("dotnet_diagnostic.sa0001.severity").unwrap(),
            "dotnet_diagnostic.sa0001.severity",
            "none",
            &["XML comment analysis disabled"],
        );
        assert_eq!(
            cs.duplicate_entries(),
            &[Entry::new("dotnet_diagnostic.ca1707.severity", "warning", Vec::new())]
        );
    }

    #[test]
    fn test_duplicate_entries_in_replacement_order() {
        let doc = parse_fixture("duplicates.editorconfig");
        let json = doc.section("*.json").unwrap();

        assert_eq!(json.value("indent_size"), Some("8"));
        let previous: Vec<&str> = json.duplicates_of("indent_size").map(Entry::value).collect();
        assert_eq!(previous, vec!["2", "4"]);
        assert_eq!(json.duplicate_entries().last().unwrap().value(), "4");
        assert_eq!(
            json.comments(),
            strings(&["Test projects overrides"]).as_slice()
        );
    }

    #[test]
    fn test_global_entry() {
        let doc = parse_fixture("duplicates.editorconfig");
        assert_eq!(doc.global().value("root"), Some("true"));
    }
}

mod malformed {
    use super::*;

    #[test]
    fn test_prose_yields_empty_document() {
        let doc = parse_fixture("malformed.txt");
        assert!(doc.is_empty());
        assert!(doc.global().is_empty());
        assert!(doc.global().comments().is_empty());
    }
}
