use crate::ast::{ParsedTag, TagProperty};

impl TagProperty {
    /// Create a joined property `name=value`.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Create a bare flag property.
    #[must_use]
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }
}

impl ParsedTag {
    /// Create a tag with no properties and no children.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a `name=value` property.
    #[must_use]
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.properties.push(TagProperty::new(name, value));
        self
    }

    /// Append a bare flag property.
    #[must_use]
    pub fn with_flag(mut self, name: &str) -> Self {
        self.properties.push(TagProperty::flag(name));
        self
    }

    /// Append an already built property.
    #[must_use]
    pub fn with_property(mut self, property: TagProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a child tag.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child tags.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}
