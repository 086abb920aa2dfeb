//! Member-name collision policy and native-name interning.

use gdwrap_core::utils::to_pascal_case;

use crate::Error;

use super::context::ClassEmitter;

/// Which kind of member claimed a host-exposed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Property,
    Method,
    Signal,
}

impl MemberRole {
    /// Literal appended when this role loses a name collision.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::Method => "Method",
            Self::Signal => "Signal",
        }
    }

    /// Lowercase noun for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Method => "method",
            Self::Signal => "signal",
        }
    }
}

/// Record of who claimed a host-exposed name.
#[derive(Debug, Clone)]
pub(super) struct Claim {
    pub(super) role: MemberRole,
    pub(super) native_name: String,
}

impl Claim {
    fn describe(&self) -> String {
        format!("{} `{}`", self.role.describe(), self.native_name)
    }
}

impl ClassEmitter<'_> {
    /// Resolve the host-exposed name for a member.
    ///
    /// Deterministic and order-dependent: the first claimant of a bare
    /// name keeps it, a later claimant gets its role suffix appended. A
    /// collision that survives suffixing fails the whole class - emitting
    /// duplicate member definitions is never an option.
    pub(super) fn claim_name(&mut self, native_name: &str, role: MemberRole) -> Result<String, Error> {
        let bare = to_pascal_case(native_name);
        let name = if self.occupied_names.contains_key(&bare) {
            format!("{bare}{}", role.suffix())
        } else {
            bare
        };
        let claim = Claim {
            role,
            native_name: native_name.to_string(),
        };
        if let Some(previous) = self.occupied_names.get(&name) {
            return Err(Error::DuplicateMemberName {
                class: self.class.host_type_name().to_string(),
                name,
                first: previous.describe(),
                second: claim.describe(),
            });
        }
        self.occupied_names.insert(name.clone(), claim);
        Ok(name)
    }

    /// Intern a native member name, returning the `_cached_*` identifier.
    ///
    /// Resolving a StringName is comparatively expensive and generated
    /// members may be hit every frame; each distinct native name becomes
    /// one static readonly constant reused by every call.
    pub(super) fn intern_native_name(&mut self, native_name: &str) -> String {
        self.name_cache.insert(native_name.to_string());
        cached_name(native_name)
    }
}

/// The `_cached_*` identifier for a native name.
pub(super) fn cached_name(native_name: &str) -> String {
    format!("_cached_{native_name}")
}
