//! Rust source emission for the frozen translation table.
//!
//! The artifact is one module holding two enums (resource keys in table
//! order, languages in discovery order), the language-code lookup, the
//! nested translation lookup, and the four accessors. Rendering is fully
//! deterministic: identical tables produce byte-identical output.

mod writer;

pub use writer::{CodeWriter, escape_str};

use crate::{table::TranslationTable, utils::sanitize_language_token};

/// Name of the generated resource-key enum.
pub const RESOURCE_ENUM: &str = "Resource";

/// Name of the generated language enum.
pub const LANGUAGE_ENUM: &str = "Language";

/// Render the generated module for `table`, namespaced under `module_name`.
pub fn render(table: &TranslationTable, module_name: &str) -> String {
    let mut w = CodeWriter::new();

    w.line("// Generated by locgen. Do not edit by hand.");
    w.line("//");
    w.line("// The enclosing crate must depend on `sys-locale` for ambient locale");
    w.line("// resolution.");
    w.blank();
    w.line("/// Strongly typed lookup over the translations discovered from the");
    w.line("/// message files.");
    w.line("#[allow(non_camel_case_types)]");
    w.line(&format!("pub mod {} {{", module_name));
    w.indent();

    render_resource_enum(&mut w, table);
    w.blank();
    render_language_enum(&mut w, table);
    w.blank();
    render_language_codes(&mut w, table);
    w.blank();
    render_supported_languages(&mut w, table);
    w.blank();
    render_translations(&mut w, table);
    w.blank();
    render_accessors(&mut w);

    w.dedent();
    w.line("}");
    w.finish()
}

fn render_resource_enum(w: &mut CodeWriter, table: &TranslationTable) {
    w.line("/// Resource keys discovered in the message files.");
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.line(&format!("pub enum {} {{", RESOURCE_ENUM));
    w.indent();
    for (key, _) in table.entries() {
        w.line(&format!("{},", key));
    }
    w.dedent();
    w.line("}");
}

fn render_language_enum(w: &mut CodeWriter, table: &TranslationTable) {
    w.line("/// Languages discovered in the message files.");
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.line(&format!("pub enum {} {{", LANGUAGE_ENUM));
    w.indent();
    for language in table.languages() {
        w.line(&format!("{},", sanitize_language_token(language)));
    }
    w.dedent();
    w.line("}");
}

fn render_language_codes(w: &mut CodeWriter, table: &TranslationTable) {
    w.line(&format!("impl {} {{", LANGUAGE_ENUM));
    w.indent();
    w.line("/// The locale code this language was discovered under.");
    w.line("pub const fn code(self) -> &'static str {");
    w.indent();
    w.line("match self {");
    w.indent();
    for language in table.languages() {
        w.line(&format!(
            "{}::{} => \"{}\",",
            LANGUAGE_ENUM,
            sanitize_language_token(language),
            escape_str(language)
        ));
    }
    w.dedent();
    w.line("}");
    w.dedent();
    w.line("}");
    w.dedent();
    w.line("}");
}

fn render_supported_languages(w: &mut CodeWriter, table: &TranslationTable) {
    let codes: Vec<String> = table
        .languages()
        .iter()
        .map(|language| format!("\"{}\"", escape_str(language)))
        .collect();
    w.line("/// Locale codes found in the message files, in discovery order.");
    w.line(&format!(
        "pub const SUPPORTED_LANGUAGES: &[&str] = &[{}];",
        codes.join(", ")
    ));
}

fn render_translations(w: &mut CodeWriter, table: &TranslationTable) {
    w.line(&format!(
        "fn translations(resource: {}) -> &'static [(&'static str, &'static str)] {{",
        RESOURCE_ENUM
    ));
    w.indent();
    w.line("match resource {");
    w.indent();
    for (key, translations) in table.entries() {
        let pairs: Vec<String> = translations
            .iter()
            .map(|(code, text)| format!("(\"{}\", \"{}\")", escape_str(code), escape_str(text)))
            .collect();
        w.line(&format!(
            "{}::{} => &[{}],",
            RESOURCE_ENUM,
            key,
            pairs.join(", ")
        ));
    }
    w.dedent();
    w.line("}");
    w.dedent();
    w.line("}");
}

fn render_accessors(w: &mut CodeWriter) {
    w.line("/// Translate `resource` into the language identified by `code`.");
    w.line("///");
    w.line("/// Unknown codes degrade to an empty string.");
    w.line("pub fn get(resource: Resource, code: &str) -> &'static str {");
    w.indent();
    w.line("translations(resource)");
    w.indent();
    w.line(".iter()");
    w.line(".find(|(candidate, _)| *candidate == code)");
    w.line(".map_or(\"\", |(_, text)| *text)");
    w.dedent();
    w.dedent();
    w.line("}");
    w.blank();
    w.line("/// Translate `resource` into `language`, falling back to the ambient");
    w.line("/// locale when the resource has no entry for that language.");
    w.line("pub fn get_in(resource: Resource, language: Language) -> &'static str {");
    w.indent();
    w.line("let code = language.code();");
    w.line("if translations(resource).iter().any(|(candidate, _)| *candidate == code) {");
    w.indent();
    w.line("get(resource, code)");
    w.dedent();
    w.line("} else {");
    w.indent();
    w.line("get_ambient(resource)");
    w.dedent();
    w.line("}");
    w.dedent();
    w.line("}");
    w.blank();
    w.line("/// Translate `resource` into the caller's ambient locale.");
    w.line("pub fn get_ambient(resource: Resource) -> &'static str {");
    w.indent();
    w.line("match sys_locale::get_locale() {");
    w.indent();
    w.line("Some(code) => get(resource, &code),");
    w.line("None => \"\",");
    w.dedent();
    w.line("}");
    w.dedent();
    w.line("}");
    w.blank();
    w.line("/// Translate `resource` using any locale value that carries a code,");
    w.line("/// such as the one returned by `sys_locale::get_locale()`.");
    w.line("pub fn get_for(resource: Resource, locale: impl AsRef<str>) -> &'static str {");
    w.indent();
    w.line("get(resource, locale.as_ref())");
    w.dedent();
    w.line("}");
}
