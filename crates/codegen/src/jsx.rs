//! Minimal JSX tree produced by the SVG transform

/// One JSX attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttr {
    /// `name="value"`
    Literal {
        /// Attribute name, already in JSX form
        name: String,
        /// Unescaped value
        value: String,
    },
    /// `name={{ key: 'value', ... }}`, used for inline styles
    Object {
        /// Attribute name
        name: String,
        /// Property names and unescaped string values
        entries: Vec<(String, String)>,
    },
    /// `{...expr}`
    Spread(String),
}

impl JsxAttr {
    /// Build a literal attribute
    #[must_use]
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Literal {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name, `None` for spreads
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Literal { name, .. } | Self::Object { name, .. } => Some(name),
            Self::Spread(_) => None,
        }
    }

    /// Literal value, if this is a literal attribute
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Child of a JSX element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxChild {
    /// Nested element
    Element(JsxElement),
    /// Text content, trimmed
    Text(String),
}

/// A JSX element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    /// Tag name (`svg`, `path`, `linearGradient`, ...)
    pub tag: String,
    /// Attributes in output order
    pub attrs: Vec<JsxAttr>,
    /// Children in output order
    pub children: Vec<JsxChild>,
}

impl JsxElement {
    /// Element without attributes or children
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up a literal attribute value by JSX name
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name() == Some(name))
            .and_then(JsxAttr::value)
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &JsxElement> {
        self.children.iter().filter_map(|child| match child {
            JsxChild::Element(element) => Some(element),
            JsxChild::Text(_) => None,
        })
    }
}
