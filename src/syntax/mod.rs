// Canonical member references shared by both grammars
pub mod member;

pub use member::{ClassKey, MemberReference, NameKey, PARAMETER_SEPARATOR};

/// Split `a.b.C` on the last `.` into `("a.b", "C")`.
///
/// A name without a dot lives in the unnamed package: `("", "C")`.
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => ("", name),
    }
}
