//! Minimal `$name$` placeholder substitution for the bundled descriptor
//! template. The template surface is small enough that straight string
//! substitution beats pulling in a template engine.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// The bundled aggregate descriptor template.
const GWT_XML_TEMPLATE: &str = include_str!("../templates/gwt.xml.template");

/// A textual template with `$name$` placeholders. `$$` renders a literal
/// dollar sign.
pub struct Template<'a> {
    source: &'a str,
}

impl<'a> Template<'a> {
    /// The descriptor template shipped with this crate.
    pub fn bundled() -> Template<'static> {
        Template {
            source: GWT_XML_TEMPLATE,
        }
    }

    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Substitute every placeholder with its binding. A placeholder with
    /// no binding, or an unterminated `$`, means the template itself is
    /// broken and renders the whole generation unusable.
    pub fn render(&self, bindings: &BTreeMap<&str, String>) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source;
        while let Some(start) = rest.find('$') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('$') else {
                return Err(Error::TemplateUnavailable {
                    reason: "unterminated placeholder".to_string(),
                });
            };
            let name = &after[..end];
            if name.is_empty() {
                out.push('$');
            } else {
                let value = bindings.get(name).ok_or_else(|| Error::TemplateUnavailable {
                    reason: format!("template references unknown variable '{name}'"),
                })?;
                out.push_str(value);
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
