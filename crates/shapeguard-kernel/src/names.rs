//! Type-name defaults and composition helpers.

/// Default names, one per asserter kind.
pub const UNNAMED_TYPE: &str = "UnnamedType";
pub const UNNAMED_NUMBER: &str = "UnnamedNumber";
pub const UNNAMED_STRING: &str = "UnnamedString";
pub const UNNAMED_ARRAY: &str = "UnnamedArray";
pub const UNNAMED_RECORD: &str = "UnnamedRecord";
pub const UNNAMED_OBJECT: &str = "UnnamedObject";
pub const UNNAMED_UNION: &str = "UnnamedUnion";
pub const UNNAMED_OPTION: &str = "UnnamedOption";
pub const UNNAMED_ENUM: &str = "UnnamedEnum";
pub const UNNAMED_LITERAL_UNION: &str = "UnnamedLiteralUnion";

/// Use `type_name` unless it is blank.
pub(crate) fn resolve(type_name: impl Into<String>, default: &str) -> String {
    let type_name = type_name.into();
    if type_name.trim().is_empty() {
        default.to_string()
    } else {
        type_name
    }
}

/// True when `type_name` has a `|` or `&` outside any `<>` / `()` nesting.
///
/// ```
/// use shapeguard_kernel::is_open_type_name;
///
/// assert!(is_open_type_name("A | B"));
/// assert!(!is_open_type_name("Array<A | B>"));
/// assert!(!is_open_type_name("(A & B)"));
/// ```
pub fn is_open_type_name(type_name: &str) -> bool {
    let mut depth: i32 = 0;
    for c in type_name.chars() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            '|' | '&' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Wrap an open type name in parentheses so it can be composed further.
pub fn parenthesize_open(type_name: &str) -> String {
    if is_open_type_name(type_name) {
        format!("({type_name})")
    } else {
        type_name.to_string()
    }
}
