//! Figma document tree model
//!
//! Only the node types the icon pipeline cares about are modelled. Anything
//! else (text, groups, rectangles, ...) deserializes to [`Node::Other`] and is
//! treated as an opaque leaf.

use figsync_core::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Name of the registry component used as a frame caption
pub const TITLE_MARKER_NAME: &str = "Title";

/// Fields shared by every modelled node
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Node identifier (e.g. `12:34`)
    pub id: String,
    /// Display name in the design tool
    pub name: String,
    /// Ordered child nodes
    #[serde(default)]
    pub children: Vec<Node>,
    /// Originating component, set on instances
    #[serde(default)]
    pub component_id: Option<String>,
}

/// A node of the design document, keyed on the Figma `type` tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Document root
    #[serde(rename = "DOCUMENT")]
    Document(NodeData),
    /// Page (`CANVAS` in the API)
    #[serde(rename = "CANVAS")]
    Page(NodeData),
    /// Frame; one icon category
    #[serde(rename = "FRAME")]
    Frame(NodeData),
    /// Main component
    #[serde(rename = "COMPONENT")]
    Component(NodeData),
    /// Component instance
    #[serde(rename = "INSTANCE")]
    Instance(NodeData),
    /// Vector path
    #[serde(rename = "VECTOR")]
    Vector(NodeData),
    /// Any node type the pipeline ignores
    #[serde(other)]
    Other,
}

impl Node {
    /// Shared fields, absent for [`Node::Other`]
    #[must_use]
    pub const fn data(&self) -> Option<&NodeData> {
        match self {
            Self::Document(data)
            | Self::Page(data)
            | Self::Frame(data)
            | Self::Component(data)
            | Self::Instance(data)
            | Self::Vector(data) => Some(data),
            Self::Other => None,
        }
    }

    /// Ordered children; empty for leaves and ignored node types
    #[must_use]
    pub fn children(&self) -> &[Node] {
        self.data().map_or(&[], |data| data.children.as_slice())
    }

    /// Node name, if modelled
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data().map(|data| data.name.as_str())
    }

    /// Originating component identifier, if any
    #[must_use]
    pub fn component_id(&self) -> Option<&str> {
        self.data().and_then(|data| data.component_id.as_deref())
    }

    /// Components and instances are the only nodes exported as icons
    #[must_use]
    pub const fn is_icon_shape(&self) -> bool {
        matches!(self, Self::Component(_) | Self::Instance(_))
    }

    /// A single vector child is the only shape an icon font can take
    #[must_use]
    pub fn is_font_compatible(&self) -> bool {
        matches!(self.children(), [Self::Vector(_)])
    }
}

/// Registry entry of a published component
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentMeta {
    /// Component name
    pub name: String,
    /// Component description
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /v1/files/{key}`
#[derive(Debug, Clone, Deserialize)]
pub struct FileResponse {
    /// File name
    #[serde(default)]
    pub name: String,
    /// Document root node
    pub document: Node,
    /// Flat component registry, in response order
    #[serde(default)]
    pub components: IndexMap<String, ComponentMeta>,
}

impl FileResponse {
    /// Find a top-level page by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no page has that name
    pub fn find_page(&self, page_name: &str) -> Result<&Node> {
        self.document
            .children()
            .iter()
            .find(|node| matches!(node, Node::Page(data) if data.name == page_name))
            .ok_or_else(|| Error::not_found("page", page_name))
    }

    /// Identifier of the component used as frame caption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the registry has no such component
    pub fn find_title_marker_id(&self) -> Result<&str> {
        self.components
            .iter()
            .find(|(_, meta)| meta.name == TITLE_MARKER_NAME)
            .map(|(id, _)| id.as_str())
            .ok_or_else(|| Error::not_found("title component", TITLE_MARKER_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"{
        "name": "UI Kit",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                { "id": "0:1", "name": "Cover", "type": "CANVAS", "children": [] },
                {
                    "id": "0:2",
                    "name": "05 - Icons",
                    "type": "CANVAS",
                    "backgroundColor": { "r": 1, "g": 1, "b": 1, "a": 1 },
                    "children": [
                        {
                            "id": "1:1",
                            "name": "Arrows",
                            "type": "FRAME",
                            "children": [
                                { "id": "1:9", "name": "Label", "type": "TEXT", "characters": "Arrows" }
                            ]
                        }
                    ]
                }
            ]
        },
        "components": {
            "9:1": { "key": "abc", "name": "Button", "description": "" },
            "9:2": { "key": "def", "name": "Title", "description": "Frame caption" }
        }
    }"#;

    fn file() -> FileResponse {
        serde_json::from_str(FILE).unwrap()
    }

    #[test]
    fn test_deserialize_tree() {
        let file = file();
        assert_eq!(file.name, "UI Kit");
        assert!(matches!(file.document, Node::Document(_)));
        assert_eq!(file.document.children().len(), 2);
        assert_eq!(file.components.len(), 2);
    }

    #[test]
    fn test_unknown_node_type_is_other() {
        let file = file();
        let page = file.find_page("05 - Icons").unwrap();
        let frame = &page.children()[0];
        assert!(matches!(frame, Node::Frame(_)));
        assert_eq!(frame.children(), &[Node::Other]);
        assert!(frame.children()[0].children().is_empty());
    }

    #[test]
    fn test_find_page_is_exact() {
        let file = file();
        assert_eq!(file.find_page("05 - Icons").unwrap().name(), Some("05 - Icons"));

        let err = file.find_page("05 - icons").unwrap_err();
        assert!(matches!(err, Error::NotFound { ref name, .. } if name == "05 - icons"));
    }

    #[test]
    fn test_find_title_marker_id() {
        assert_eq!(file().find_title_marker_id().unwrap(), "9:2");
    }

    #[test]
    fn test_missing_title_marker() {
        let mut file = file();
        file.components.shift_remove("9:2");
        assert!(matches!(
            file.find_title_marker_id(),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_font_compatibility() {
        let vector = Node::Vector(NodeData {
            id: "3:1".into(),
            name: "Vector".into(),
            children: vec![],
            component_id: None,
        });
        let component = |children: Vec<Node>| {
            Node::Component(NodeData {
                id: "2:1".into(),
                name: "Left".into(),
                children,
                component_id: None,
            })
        };

        assert!(component(vec![vector.clone()]).is_font_compatible());
        assert!(!component(vec![]).is_font_compatible());
        assert!(!component(vec![vector.clone(), vector]).is_font_compatible());
        assert!(!component(vec![Node::Other]).is_font_compatible());
    }
}
