//! Canonical member reference shared by both grammars.
//!
//! A [`MemberReference`] is produced either from a packed member descriptor
//! (`Lfoo/Bar;->baz(I)V`) or from a documentation link body (`foo.Bar#baz(int)`).
//! Both land in the same dotted form so they can be compared directly.

use smol_str::SmolStr;
use std::fmt;

/// Separator used when rendering a parameter list.
pub const PARAMETER_SEPARATOR: &str = ", ";

/// `{package, class, member, parameters}` in display form.
///
/// - `member` is empty for a whole-class reference.
/// - `parameters` is the rendered parameter list (`"int, foo.Bar[]"`), empty for
///   fields, whole-class references and links that omitted the list.
///
/// The derived `Eq`/`Hash` are structural and exist so references can live in
/// hash sets. Call sites that compare references should pick a policy
/// explicitly through [`MemberReference::matches_exact`] or
/// [`MemberReference::matches_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberReference {
    package: SmolStr,
    class: SmolStr,
    member: SmolStr,
    parameters: String,
}

impl MemberReference {
    pub fn new(
        package: impl Into<SmolStr>,
        class: impl Into<SmolStr>,
        member: impl Into<SmolStr>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
            member: member.into(),
            parameters: parameters.into(),
        }
    }

    /// A reference to a class as a whole.
    pub fn class(package: impl Into<SmolStr>, class: impl Into<SmolStr>) -> Self {
        Self::new(package, class, SmolStr::default(), String::new())
    }

    /// Build a reference from individually rendered parameter types.
    pub fn with_parameter_types<I, S>(
        package: impl Into<SmolStr>,
        class: impl Into<SmolStr>,
        member: impl Into<SmolStr>,
        parameter_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parameters = String::new();
        for (i, ty) in parameter_types.into_iter().enumerate() {
            if i > 0 {
                parameters.push_str(PARAMETER_SEPARATOR);
            }
            parameters.push_str(ty.as_ref());
        }
        Self::new(package, class, member, parameters)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    /// Rendered parameter list, exactly as it will be compared.
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Individual parameter types, split on the rendering separator.
    pub fn parameter_types(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .split(PARAMETER_SEPARATOR)
            .filter(|ty| !ty.is_empty())
    }

    pub fn is_class_reference(&self) -> bool {
        self.member.is_empty()
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// `package.Class`, or just `Class` in the unnamed package.
    pub fn qualified_class_name(&self) -> String {
        if self.package.is_empty() {
            self.class.to_string()
        } else {
            format!("{}.{}", self.package, self.class)
        }
    }

    /// Key identifying the owning class.
    pub fn class_key(&self) -> ClassKey {
        ClassKey {
            package: self.package.clone(),
            class: self.class.clone(),
        }
    }

    /// Key identifying the member while ignoring parameters.
    pub fn name_key(&self) -> NameKey {
        NameKey {
            package: self.package.clone(),
            class: self.class.clone(),
            member: self.member.clone(),
        }
    }

    /// All four components are equal.
    pub fn matches_exact(&self, other: &MemberReference) -> bool {
        self.matches_name(other) && self.parameters == other.parameters
    }

    /// Package, class and member are equal; parameters are ignored.
    pub fn matches_name(&self, other: &MemberReference) -> bool {
        self.package == other.package && self.class == other.class && self.member == other.member
    }
}

impl fmt::Display for MemberReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.class)?;
        if !self.member.is_empty() {
            write!(f, "#{}", self.member)?;
            if !self.parameters.is_empty() {
                write!(f, "({})", self.parameters)?;
            }
        }
        Ok(())
    }
}

/// `(package, class)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassKey {
    pub package: SmolStr,
    pub class: SmolStr,
}

/// `(package, class, member)` triple used for name-only matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameKey {
    pub package: SmolStr,
    pub class: SmolStr,
    pub member: SmolStr,
}
