//! Import declaration scenarios: which imports the engine reformats,
//! which it leaves alone, and the exact replacement text it produces.

use impexfmt::{DiagnosticKind, ImportExportLinter};

fn long_name() -> String {
    format!("some_{}", "q".repeat(80))
}

fn padded(text: &str) -> String {
    format!("    {text}")
}

fn linter() -> ImportExportLinter {
    ImportExportLinter::new().expect("Failed to create linter")
}

#[test]
fn test_short_one_liner_bails() {
    let mut linter = linter();
    for code in [
        "import { some1 as some3, some2 } from 'module';",
        "import defaultImport, { some1, some2 } from 'module';",
    ] {
        let fixes = linter.check(code).expect("check should succeed");
        assert!(fixes.is_empty(), "short one-liner is already canonical: {code}");
    }
}

#[test]
fn test_long_one_liner_expands_to_multiline() {
    let name = long_name();
    let code = format!("import {{ some1 as some3, {name} }} from 'module';");

    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1, "exactly one fix for one declaration");

    let fix = &fixes[0];
    assert_eq!(fix.kind, DiagnosticKind::LongOneLiner);
    assert_eq!(
        fix.replacement,
        [
            "import {".to_string(),
            padded("some1 as some3,"),
            padded(&format!("{name},")),
            "} from 'module';".to_string(),
        ]
        .join("\n")
    );
    assert_eq!(fix.start_byte, 0);
    assert_eq!(fix.end_byte, code.len());
}

#[test]
fn test_short_multiline_collapses_to_one_line() {
    let code = ["import {", &padded("some1,"), "} from 'some';"].join("\n");

    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].kind, DiagnosticKind::ShortMultiline);
    assert_eq!(fixes[0].replacement, "import { some1 } from 'some';");
}

#[test]
fn test_long_multiline_bails() {
    let name = long_name();
    let code = ["import {", &padded(&format!("{name},")), "} from 'module';"].join("\n");

    let fixes = linter().check(&code).expect("check should succeed");
    assert!(
        fixes.is_empty(),
        "multi-line form is canonical when the one-liner would exceed the limit"
    );
}

#[test]
fn test_default_binding_stays_inline_on_opening_line() {
    let name = long_name();
    let code = format!("import defaultImport, {{ {name} }} from 'module';");

    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1);
    assert_eq!(
        fixes[0].replacement,
        [
            "import defaultImport, {".to_string(),
            padded(&format!("{name},")),
            "} from 'module';".to_string(),
        ]
        .join("\n")
    );
}

#[test]
fn test_imports_without_named_specifiers_pass_through() {
    let name = long_name();
    let untouched = [
        "import defaultImport from 'module';".to_string(),
        format!("import {name} from 'module';"),
        "import * as namespace from 'module';".to_string(),
        format!("import * as {name} from 'module';"),
        "import 'module';".to_string(),
        "import {} from 'module';".to_string(),
    ];

    let mut linter = linter();
    for code in &untouched {
        let fixes = linter.check(code).expect("check should succeed");
        assert!(fixes.is_empty(), "should pass through untouched: {code}");
    }
}

#[test]
fn test_threshold_boundary_at_80_characters() {
    // "import { " + name + " } from 'module';" is 26 + name.len() chars.
    let name_at_80 = "a".repeat(54);
    let name_at_81 = "a".repeat(55);

    let exactly_80 = format!("import {{ {name_at_80} }} from 'module';");
    assert_eq!(exactly_80.chars().count(), 80);
    let fixes = linter().check(&exactly_80).expect("check should succeed");
    assert!(fixes.is_empty(), "exactly 80 characters never expands");

    let at_81 = format!("import {{ {name_at_81} }} from 'module';");
    assert_eq!(at_81.chars().count(), 81);
    let fixes = linter().check(&at_81).expect("check should succeed");
    assert_eq!(fixes.len(), 1, "81 characters always expands");
    assert_eq!(fixes[0].kind, DiagnosticKind::LongOneLiner);
}

#[test]
fn test_generated_quotes_are_single_style() {
    let code = ["import {", "    some1,", "} from \"some\";"].join("\n");
    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].replacement, "import { some1 } from 'some';");
}

#[test]
fn test_type_only_import_keeps_type_keyword() {
    let code = ["import type {", "    Foo,", "} from 'module';"].join("\n");
    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].replacement, "import type { Foo } from 'module';");
}

#[test]
fn test_string_literal_specifier_renders_as_plain_token() {
    let code = ["import {", "    \"some-name\" as ok,", "} from 'module';"].join("\n");
    let fixes = linter().check(&code).expect("check should succeed");
    assert_eq!(fixes.len(), 1);
    assert_eq!(
        fixes[0].replacement,
        "import { some-name as ok } from 'module';"
    );
}
