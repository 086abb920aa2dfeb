//! Diagnostics collection tests.

use crate::diagnostics::{DiagnosticKind, Diagnostics, Severity};

#[test]
fn kinds_carry_default_severity() {
    assert_eq!(
        DiagnosticKind::MissingNativeName.default_severity(),
        Severity::Error
    );
    assert_eq!(
        DiagnosticKind::VarargNotSupported.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        DiagnosticKind::VirtualCallNotScripted.default_severity(),
        Severity::Warning
    );
}

#[test]
fn report_uses_fallback_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::VarargNotSupported, "NodeEntity", "emit_all")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    let d = diagnostics.iter().next().unwrap();
    assert_eq!(d.class, "NodeEntity");
    assert_eq!(d.member, "emit_all");
    assert_eq!(d.message, DiagnosticKind::VarargNotSupported.fallback_message());
}

#[test]
fn message_override() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingNativeName, "NodeEntity", "<method>")
        .message("third method descriptor has no native name")
        .emit();

    let d = diagnostics.iter().next().unwrap();
    assert_eq!(d.message, "third method descriptor has no native name");
}

#[test]
fn counts_split_by_severity() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert!(!diagnostics.has_errors());

    diagnostics
        .report(DiagnosticKind::VarargNotSupported, "A", "x")
        .emit();
    diagnostics
        .report(DiagnosticKind::VirtualCallNotScripted, "A", "y")
        .emit();
    diagnostics
        .report(DiagnosticKind::MissingNativeName, "A", "<signal>")
        .emit();

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 2);
    assert!(diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
}

#[test]
fn render_one_line_per_diagnostic() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::VirtualCallNotScripted, "Component", "_process")
        .emit();

    let rendered = diagnostics.render();
    assert_eq!(
        rendered,
        "warning: Component._process: virtual override synthesis is not supported; emitting a plain call\n"
    );
}

#[test]
fn extend_merges_collections() {
    let mut left = Diagnostics::new();
    left.report(DiagnosticKind::VarargNotSupported, "A", "x").emit();

    let mut right = Diagnostics::new();
    right
        .report(DiagnosticKind::MissingNativeName, "B", "<method>")
        .emit();

    left.extend(right);
    assert_eq!(left.len(), 2);
    assert_eq!(left.error_count(), 1);
    assert_eq!(left.warning_count(), 1);
}
