//! Property accessor emission.
//!
//! Properties wrap the engine's Get/Set surface through the same interned
//! StringName cache the other members use. The getter casts the boxed
//! value to the declared host type, the setter boxes the host value back.

use gdwrap_api::ParamInfo;

use crate::classify::host_type;
use crate::diagnostics::DiagnosticKind;

use super::context::ClassEmitter;
use super::naming::MemberRole;
use super::{TAB1, TAB2};

impl ClassEmitter<'_> {
    pub(super) fn emit_properties(&mut self) -> Result<(), crate::Error> {
        let class = self.class;
        if class.properties.is_empty() {
            return Ok(());
        }
        self.begin_region("Properties");
        for property in &class.properties {
            self.emit_property(property)?;
        }
        self.end_region();
        Ok(())
    }

    fn emit_property(&mut self, property: &ParamInfo) -> Result<(), crate::Error> {
        if property.name.is_empty() {
            self.diagnostics
                .report(
                    DiagnosticKind::MissingNativeName,
                    self.class.host_type_name(),
                    "<property>",
                )
                .emit();
            return Ok(());
        }

        let name = self.claim_name(&property.name, MemberRole::Property)?;
        let cached = self.intern_native_name(&property.name);
        let host = host_type(property, self.tables);

        self.output.push_str(&format!(
            "{TAB1}public {host} {name}\n\
             {TAB1}{{\n\
             {TAB2}get => ({host})Get({cached});\n\
             {TAB2}set => Set({cached}, Variant.From(value));\n\
             {TAB1}}}\n\n"
        ));
        Ok(())
    }
}
