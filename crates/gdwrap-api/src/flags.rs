//! Flag words carried by reflected members.
//!
//! Numeric values match the engine's reflection constants so dumps can be
//! ingested without translation.

/// Method-level flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct MethodFlags(pub u32);

impl MethodFlags {
    pub const NORMAL: Self = Self(1);
    pub const EDITOR: Self = Self(2);
    pub const CONST: Self = Self(4);
    pub const VIRTUAL: Self = Self(8);
    pub const VARARG: Self = Self(16);
    pub const STATIC: Self = Self(32);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for MethodFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Property-usage flags on parameters, return slots, and properties.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyUsage(pub u32);

impl PropertyUsage {
    pub const NONE: Self = Self(0);
    pub const STORAGE: Self = Self(2);
    pub const EDITOR: Self = Self(4);
    /// STORAGE | EDITOR, the engine's default for plain properties.
    pub const DEFAULT: Self = Self(6);
    pub const CLASS_IS_ENUM: Self = Self(65536);
    /// A void slot with this bit accepts nil as a valid boxed value.
    pub const NIL_IS_VARIANT: Self = Self(131072);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for PropertyUsage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
