//! JSX pretty-printing
//!
//! Prints a [`JsxElement`] the way prettier lays out JSX: two-space indent,
//! attributes kept on the tag line while it fits, one attribute per line
//! otherwise.

use crate::jsx::{JsxAttr, JsxChild, JsxElement};
use std::fmt::Write;

/// Layout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Spaces per indentation level
    pub indent_size: usize,
    /// Column at which a tag's attributes are broken onto separate lines
    pub line_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            line_width: 80,
        }
    }
}

/// JSX printer
#[derive(Debug, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Print `element` starting at indentation `level`, newline-terminated
    #[must_use]
    pub fn format(&self, element: &JsxElement, level: usize) -> String {
        let mut out = String::new();
        self.write_element(&mut out, element, level);
        out
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.indent_size)
    }

    fn write_element(&self, out: &mut String, element: &JsxElement, level: usize) {
        let indent = self.indent(level);
        let attrs: Vec<String> = element.attrs.iter().map(render_attr).collect();
        let self_closing = element.children.is_empty();
        let close = if self_closing { " />" } else { ">" };

        let inline = if attrs.is_empty() {
            format!("{indent}<{}{close}", element.tag)
        } else {
            format!("{indent}<{} {}{close}", element.tag, attrs.join(" "))
        };

        if attrs.is_empty() || inline.chars().count() <= self.config.line_width {
            out.push_str(&inline);
            out.push('\n');
        } else {
            let inner = self.indent(level + 1);
            let _ = writeln!(out, "{indent}<{}", element.tag);
            for attr in &attrs {
                let _ = writeln!(out, "{inner}{attr}");
            }
            let _ = writeln!(out, "{indent}{}", close.trim_start());
        }

        if self_closing {
            return;
        }
        for child in &element.children {
            match child {
                JsxChild::Element(child) => self.write_element(out, child, level + 1),
                JsxChild::Text(text) => {
                    let _ = writeln!(out, "{}{}", self.indent(level + 1), render_text(text));
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", element.tag);
    }
}

fn render_attr(attr: &JsxAttr) -> String {
    match attr {
        JsxAttr::Literal { name, value } => format!("{name}=\"{}\"", escape_attr(value)),
        JsxAttr::Object { name, entries } => {
            let body = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", render_key(key), quote(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{name}={{{{ {body} }}}}")
        }
        JsxAttr::Spread(expr) => format!("{{...{expr}}}"),
    }
}

fn render_key(key: &str) -> String {
    if key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn render_text(text: &str) -> String {
    if text.contains(|c: char| matches!(c, '{' | '}' | '<' | '>')) {
        format!("{{{}}}", quote(text))
    } else {
        text.to_string()
    }
}
