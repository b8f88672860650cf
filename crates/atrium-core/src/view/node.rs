use std::fmt::Write;

/// A node in the rendered tree: an element or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text leaf
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Serialize the tree to HTML text.
    ///
    /// With `preserve_whitespace` set, sibling nodes are separated by
    /// newlines instead of being packed together.
    pub fn to_html(&self, preserve_whitespace: bool) -> String {
        let mut out = String::new();
        write_node(&mut out, self, preserve_whitespace);
        out
    }
}

/// An element with a tag, attributes, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a child node
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append a text child
    pub fn text(self, content: &str) -> Self {
        self.child(Node::text(content))
    }

    /// Finish the element as a node
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

fn write_node(out: &mut String, node: &Node, preserve_whitespace: bool) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                // Attribute values share the text escaping; quotes are the
                // only extra character that matters here.
                let _ = write!(out, " {}=\"{}\"", name, escape(value).replace('"', "&quot;"));
            }
            if element.children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for (index, childnode) in element.children.iter().enumerate() {
                if preserve_whitespace && index > 0 {
                    out.push('\n');
                }
                write_node(out, childnode, preserve_whitespace);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
