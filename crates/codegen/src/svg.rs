//! SVG to JSX transform
//!
//! Parses exported SVG markup and rewrites it into a [`JsxElement`] tree ready
//! for the component template. Optimization passes applied on the way:
//!
//! - comments, `<title>`, `<desc>`, `<metadata>` and editor-namespaced
//!   nodes/attributes are dropped
//! - empty `<defs>` are dropped and attribute-less `<g>` are unwrapped
//! - root `width`/`height` are removed; `viewBox` is kept (or synthesized)
//! - every `id` is prefixed so several icons can share a page, and
//!   `url(#id)` / `#id` references follow
//! - black in any spelling (`black`, `#000000`, `rgb(0,0,0)`) is shortened to
//!   `#000`, then attribute values are substituted (`#000` becomes
//!   `currentColor`)
//! - attribute names are converted to their JSX spelling

use crate::jsx::{JsxAttr, JsxChild, JsxElement};
use heck::ToLowerCamelCase;
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashMap;
use thiserror::Error;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

const DROPPED_ELEMENTS: &[&str] = &["title", "desc", "metadata"];
const EDITOR_NAMESPACE_MARKERS: &[&str] = &["sodipodi", "inkscape", "sketch", "figma"];

/// Separator between prefix and source id
pub const ID_PREFIX_SEPARATOR: &str = "__";

/// Markup that cannot be turned into a component
#[derive(Debug, Error)]
pub enum SvgError {
    /// Not well-formed XML
    #[error("invalid SVG markup: {0}")]
    Parse(#[from] roxmltree::Error),
    /// Well-formed, but the root is not `<svg>`
    #[error("root element is <{0}>, expected <svg>")]
    UnexpectedRoot(String),
}

/// Transform settings for one icon
#[derive(Debug, Clone)]
pub struct SvgTransform {
    id_prefix: String,
    replace_attr_values: Vec<(String, String)>,
    svg_props: Vec<(String, String)>,
    props_spread: Option<String>,
}

impl SvgTransform {
    /// Settings used for generated icon components: ids prefixed with the
    /// file name, black mapped to `currentColor`, hidden from assistive tech.
    #[must_use]
    pub fn for_icon(file_name: &str) -> Self {
        Self {
            id_prefix: file_name.to_string(),
            replace_attr_values: vec![("#000".to_string(), "currentColor".to_string())],
            svg_props: vec![
                ("focusable".to_string(), "false".to_string()),
                ("aria-hidden".to_string(), "true".to_string()),
            ],
            props_spread: Some("props".to_string()),
        }
    }

    /// Transform SVG markup into a JSX tree.
    ///
    /// # Errors
    ///
    /// Returns [`SvgError`] when the markup is not well-formed XML or its root
    /// is not `<svg>`
    pub fn transform(&self, svg: &str) -> Result<JsxElement, SvgError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(svg, options)?;

        let root = document.root_element();
        if root.tag_name().name() != "svg" {
            return Err(SvgError::UnexpectedRoot(root.tag_name().name().to_string()));
        }

        let ids = document
            .descendants()
            .filter_map(|node| node.attribute("id"))
            .map(|id| (id.to_string(), self.prefixed(id)))
            .collect();
        let context = Context {
            transform: self,
            ids,
        };

        let mut element = JsxElement::new("svg");
        element.attrs = context.root_attrs(root, &document);
        element.children = context.children(root);
        Ok(element)
    }

    fn prefixed(&self, id: &str) -> String {
        format!("{}{ID_PREFIX_SEPARATOR}{id}", self.id_prefix)
    }

    fn substitute<'a>(&'a self, value: &'a str) -> &'a str {
        let value = convert_color(value);
        self.replace_attr_values
            .iter()
            .find(|(from, _)| from.eq_ignore_ascii_case(value.trim()))
            .map_or(value, |(_, to)| to.as_str())
    }
}

struct Context<'t> {
    transform: &'t SvgTransform,
    ids: HashMap<String, String>,
}

impl Context<'_> {
    fn root_attrs(&self, root: Node<'_, '_>, document: &Document<'_>) -> Vec<JsxAttr> {
        let mut attrs = Vec::new();
        if root.tag_name().namespace() == Some(SVG_NS) {
            attrs.push(JsxAttr::literal("xmlns", SVG_NS));
        }
        let uses_xlink = document
            .descendants()
            .any(|node| node.attributes().any(|a| a.namespace() == Some(XLINK_NS)));
        if uses_xlink {
            attrs.push(JsxAttr::literal("xmlnsXlink", XLINK_NS));
        }

        let has_view_box = root.attribute("viewBox").is_some();
        for attribute in root.attributes() {
            if attribute.namespace().is_none() && matches!(attribute.name(), "width" | "height") {
                continue;
            }
            if let Some(attr) = self.attr(attribute) {
                attrs.push(attr);
            }
        }

        if !has_view_box {
            let width = root.attribute("width").and_then(parse_length);
            let height = root.attribute("height").and_then(parse_length);
            if let (Some(width), Some(height)) = (width, height) {
                attrs.push(JsxAttr::literal("viewBox", format!("0 0 {width} {height}")));
            }
        }

        for (name, value) in &self.transform.svg_props {
            attrs.retain(|attr| attr.name() != Some(name.as_str()));
            attrs.push(JsxAttr::literal(name.clone(), value.clone()));
        }
        if let Some(spread) = &self.transform.props_spread {
            attrs.push(JsxAttr::Spread(spread.clone()));
        }
        attrs
    }

    fn children(&self, node: Node<'_, '_>) -> Vec<JsxChild> {
        let mut children = Vec::new();
        for child in node.children() {
            if child.is_text() {
                let text = child.text().unwrap_or_default().trim();
                if !text.is_empty() {
                    children.push(JsxChild::Text(text.to_string()));
                }
            } else if child.is_element() {
                self.element(child, &mut children);
            }
        }
        children
    }

    fn element(&self, node: Node<'_, '_>, out: &mut Vec<JsxChild>) {
        let tag = node.tag_name();
        if DROPPED_ELEMENTS.contains(&tag.name()) || is_editor_namespace(tag.namespace()) {
            return;
        }

        let children = self.children(node);
        let attrs: Vec<JsxAttr> = node.attributes().filter_map(|a| self.attr(a)).collect();

        match tag.name() {
            "defs" if children.is_empty() => {}
            "g" if attrs.is_empty() => out.extend(children),
            name => out.push(JsxChild::Element(JsxElement {
                tag: name.to_string(),
                attrs,
                children,
            })),
        }
    }

    fn attr(&self, attribute: roxmltree::Attribute<'_, '_>) -> Option<JsxAttr> {
        if is_editor_namespace(attribute.namespace()) {
            return None;
        }
        let name = jsx_attr_name(attribute.namespace(), attribute.name());
        let raw = attribute.value();

        if name == "style" {
            let entries = parse_style(raw);
            return (!entries.is_empty()).then_some(JsxAttr::Object { name, entries });
        }

        let value = match attribute.name() {
            "id" => self.ids.get(raw).cloned().unwrap_or_else(|| raw.to_string()),
            "href" => self.rewrite_fragment(raw),
            _ => self.rewrite_urls(self.transform.substitute(raw)),
        };
        Some(JsxAttr::Literal { name, value })
    }

    fn rewrite_fragment(&self, value: &str) -> String {
        value
            .strip_prefix('#')
            .and_then(|id| self.ids.get(id))
            .map_or_else(|| value.to_string(), |prefixed| format!("#{prefixed}"))
    }

    fn rewrite_urls(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut rest = value;
        while let Some(start) = rest.find("url(#") {
            let (before, tail) = rest.split_at(start);
            out.push_str(before);
            let inner = &tail["url(#".len()..];
            let Some(end) = inner.find(')') else {
                out.push_str(tail);
                return out;
            };
            let id = inner[..end].trim_matches(|c| c == '"' || c == '\'');
            match self.ids.get(id) {
                Some(prefixed) => out.push_str(&format!("url(#{prefixed})")),
                None => out.push_str(&tail[.."url(#".len() + end + 1]),
            }
            rest = &inner[end + 1..];
        }
        out.push_str(rest);
        out
    }
}

/// Shortest spelling of black, as svgo's `convertColors`
fn convert_color(value: &str) -> &str {
    let compact = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    match compact.as_str() {
        "black" | "#000" | "#000000" | "rgb(0,0,0)" => "#000",
        _ => value,
    }
}

fn is_editor_namespace(namespace: Option<&str>) -> bool {
    namespace.is_some_and(|ns| EDITOR_NAMESPACE_MARKERS.iter().any(|m| ns.contains(m)))
}

/// JSX spelling of an SVG attribute name
fn jsx_attr_name(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(XLINK_NS) => return format!("xlink{}", capitalize(name)),
        Some(XML_NS) => return format!("xml{}", capitalize(name)),
        _ => {}
    }
    match name {
        "class" => "className".to_string(),
        _ if name.starts_with("aria-") || name.starts_with("data-") => name.to_string(),
        _ if name.contains('-') || name.contains(':') => name.to_lower_camel_case(),
        _ => name.to_string(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            let key = if property.starts_with("--") {
                property.to_string()
            } else {
                property.to_lower_camel_case()
            };
            Some((key, value.to_string()))
        })
        .collect()
}

fn parse_length(value: &str) -> Option<String> {
    let number = value.trim().trim_end_matches("px");
    number.parse::<f64>().ok().map(|_| number.to_string())
}
