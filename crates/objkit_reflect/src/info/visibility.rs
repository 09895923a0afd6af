use core::fmt;

/// Declared visibility of a field.
///
/// `#[derive(Reflect)]` maps Rust visibility onto it:
///
/// | Rust | `Visibility` |
/// |---|---|
/// | `pub` | `Public` |
/// | `pub(crate)`, `pub(super)`, `pub(in path)` | `Restricted` |
/// | (none) | `Private` |
///
/// Generic array conversion works on `Restricted` fields only. Generic
/// get/set accepts `Public` and `Restricted`, and always refuses `Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible everywhere.
    Public,
    /// Visible to the defining crate or module tree only.
    Restricted,
    /// Visible to the defining module only; never reachable generically.
    Private,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Private`].
    #[inline]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    /// Returns `true` for [`Visibility::Restricted`].
    #[inline]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Restricted)
    }

    /// Parses the names accepted by `#[reflect(visibility = "...")]`.
    ///
    /// ```
    /// use objkit_reflect::info::Visibility;
    ///
    /// assert_eq!(Visibility::from_name("protected"), Some(Visibility::Restricted));
    /// assert_eq!(Visibility::from_name("internal"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "public" => Some(Self::Public),
            "restricted" | "protected" => Some(Self::Restricted),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
            Self::Private => "private",
        })
    }
}
