//! Class-unit assembly: scaffolding, member regions, interned-name trailer.

use super::context::ClassEmitter;
use super::naming::cached_name;
use super::{STATIC_HELPER, TAB1, TAB2};

impl ClassEmitter<'_> {
    pub(super) fn emit_unit(&mut self) -> Result<(), crate::Error> {
        let type_name = self.class.host_type_name().to_string();
        let base = self.tables.engine_base_type(self.class).to_string();

        self.emit_file_header(&type_name, &base);
        if self.config.ctor_guard {
            self.emit_ctor_guard(&type_name, &base);
        }
        if self.config.instantiate_helpers {
            self.emit_instantiate_helpers(&type_name);
        }

        // Claim order is fixed: properties, methods, signals. Re-running on
        // the same metadata must reproduce the same suffix assignments.
        self.emit_properties()?;
        self.emit_methods()?;
        self.emit_signals()?;

        self.emit_name_cache();
        self.output.push_str("}\n");
        Ok(())
    }

    fn emit_file_header(&mut self, type_name: &str, base: &str) {
        self.output.push_str(&format!(
            "#nullable disable\n\
             \n\
             using System;\n\
             using Godot;\n\
             using Godot.Collections;\n\
             \n\
             namespace {};\n\
             \n\
             public partial class {type_name} : {base}\n\
             {{\n\
             {TAB1}public static readonly StringName GDExtensionName = \"{}\";\n\
             \n",
            self.config.namespace, self.class.name,
        ));
    }

    fn emit_ctor_guard(&mut self, type_name: &str, base: &str) {
        self.output.push_str(&format!(
            "{TAB1}[Obsolete(\"Wrapper classes cannot be constructed with Ctor (it only instantiate the underlying {base}), please use the Instantiate() method instead.\")]\n\
             {TAB1}protected {type_name}() {{ }}\n\
             \n"
        ));
    }

    fn emit_instantiate_helpers(&mut self, type_name: &str) {
        self.output.push_str(&format!(
            "{TAB1}/// <summary>\n\
             {TAB1}///     Creates an instance of the GDExtension <see cref=\"{type_name}\" /> type, and attaches the wrapper script to it.\n\
             {TAB1}/// </summary>\n\
             {TAB1}/// <returns>The wrapper instance linked to the underlying GDExtension type.</returns>\n\
             {TAB1}public static {type_name} Instantiate()\n\
             {TAB1}{{\n\
             {TAB2}return {STATIC_HELPER}.Instantiate<{type_name}>(GDExtensionName);\n\
             {TAB1}}}\n\
             \n\
             {TAB1}/// <summary>\n\
             {TAB1}///     Try to cast the script on the supplied <paramref name=\"godotObject\" /> to the <see cref=\"{type_name}\" /> wrapper type,\n\
             {TAB1}///     if no script has attached to the type, or the script attached to the type does not inherit the <see cref=\"{type_name}\" /> wrapper type,\n\
             {TAB1}///     a new instance of the <see cref=\"{type_name}\" /> wrapper script will get attaches to the <paramref name=\"godotObject\" />.\n\
             {TAB1}/// </summary>\n\
             {TAB1}/// <remarks>\n\
             {TAB1}///     The developer should only supply the <paramref name=\"godotObject\" /> that represents the correct underlying GDExtension type.\n\
             {TAB1}/// </remarks>\n\
             {TAB1}/// <param name=\"godotObject\">The <paramref name=\"godotObject\" /> that represents the correct underlying GDExtension type.</param>\n\
             {TAB1}/// <returns>\n\
             {TAB1}///     The existing or a new instance of the <see cref=\"{type_name}\" /> wrapper script attached to the supplied <paramref name=\"godotObject\" />.\n\
             {TAB1}/// </returns>\n\
             {TAB1}public static {type_name} Bind(GodotObject godotObject)\n\
             {TAB1}{{\n\
             {TAB2}return godotObject is not null\n\
             {TAB2}    ? {STATIC_HELPER}.Bind<{type_name}>(godotObject)\n\
             {TAB2}    : null;\n\
             {TAB1}}}\n\
             \n"
        ));
    }

    pub(super) fn begin_region(&mut self, title: &str) {
        self.output.push_str(&format!("{TAB1}#region {title}\n\n"));
    }

    pub(super) fn end_region(&mut self) {
        self.output.push_str(&format!("{TAB1}#endregion\n\n"));
    }

    /// One static readonly StringName per interned native name, in
    /// first-use order.
    fn emit_name_cache(&mut self) {
        let trailer: String = self
            .name_cache
            .iter()
            .map(|native| {
                format!(
                    "{TAB1}private static readonly StringName {} = \"{native}\";\n",
                    cached_name(native)
                )
            })
            .collect();
        self.output.push_str(&trailer);
    }
}
