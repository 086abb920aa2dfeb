/// Convert snake_case or kebab-case to PascalCase.
///
/// Normalizes words separated by `_`, `-`, or `.`. Leading separators are
/// dropped, so engine-internal names like `_process` become `Process`. If
/// the input is already PascalCase (starts uppercase, no separators), it is
/// returned unchanged.
///
/// # Examples
/// ```
/// use gdwrap_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("get_node"), "GetNode");
/// assert_eq!(to_pascal_case("_entity_changed"), "EntityChanged");
/// assert_eq!(to_pascal_case("NodeEntity"), "NodeEntity");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    // Already PascalCase: starts uppercase, has lowercase, no separators
    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Convert snake_case or PascalCase to camelCase.
///
/// Pascal-cases the input, then lowercases the leading character. Used for
/// the private backing identifiers the emitters derive from an exposed
/// member name.
///
/// # Examples
/// ```
/// use gdwrap_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("component_changed"), "componentChanged");
/// assert_eq!(to_camel_case("ComponentChanged"), "componentChanged");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = to_pascal_case(s);
    if let Some(first) = result.get(..1) {
        let lowered = first.to_ascii_lowercase();
        result.replace_range(..1, &lowered);
    }
    result
}

/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use gdwrap_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("GetNode"), "get_node");
/// assert_eq!(to_snake_case("getNode"), "get_node");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// C# keywords that cannot appear as bare identifiers.
///
/// Sorted for binary search. Contextual keywords (`value`, `var`, `async`)
/// are included where they would be illegal or misleading as parameter
/// names in the emitted accessor bodies.
const CSHARP_RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "value",
    "virtual", "void", "volatile", "while",
];

/// Escape a C# reserved word with the `@` verbatim-identifier prefix.
///
/// # Examples
/// ```
/// use gdwrap_core::utils::escape_reserved;
/// assert_eq!(escape_reserved("object"), "@object");
/// assert_eq!(escape_reserved("node"), "node");
/// ```
pub fn escape_reserved(name: &str) -> String {
    if CSHARP_RESERVED.binary_search(&name).is_ok() {
        format!("@{name}")
    } else {
        name.to_string()
    }
}
