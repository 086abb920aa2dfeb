//! Per-class generation diagnostics.
//!
//! Reflected metadata has no source text, so diagnostics carry class and
//! member context instead of spans. Unsupported-feature conditions are
//! surfaced here rather than silently emitting a plausible-looking but
//! incomplete trampoline.

/// Diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Member descriptor has no native name; the member cannot be emitted
    /// and is skipped.
    MissingNativeName,
    /// Variadic dispatch is not generated; the declared arguments are
    /// still forwarded, never silently dropped.
    VarargNotSupported,
    /// Virtual methods get the ordinary trampoline; override synthesis is
    /// not generated.
    VirtualCallNotScripted,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MissingNativeName => Severity::Error,
            Self::VarargNotSupported | Self::VirtualCallNotScripted => Severity::Warning,
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingNativeName => "member descriptor has no native name; member skipped",
            Self::VarargNotSupported => {
                "vararg dispatch is not supported; only the declared arguments are forwarded"
            }
            Self::VirtualCallNotScripted => {
                "virtual override synthesis is not supported; emitting a plain call"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One diagnostic, anchored to a class member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Host type name of the class being emitted.
    pub class: String,
    /// Native name of the member involved, when known.
    pub member: String,
    pub message: String,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}.{}: {}",
            self.severity(),
            self.class,
            self.member,
            self.message
        )
    }
}

/// Diagnostics collected while emitting one class.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not recorded, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    diagnostic: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the kind's default message.
    ///
    /// Call `.message()` on the builder to override, `.emit()` to record.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        class: impl Into<String>,
        member: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostic: Diagnostic {
                kind,
                class: class.into(),
                member: member.into(),
                message: kind.fallback_message().to_string(),
            },
            diagnostics: self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    /// Render all diagnostics, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&message.to_string());
            out.push('\n');
        }
        out
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl DiagnosticBuilder<'_> {
    /// Override the kind's default message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.diagnostic.message = msg.into();
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.diagnostic);
    }
}
