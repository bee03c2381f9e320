/// A property attached to a tag: a bare flag (`foo`) or a joined
/// pair (`foo=bar`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagProperty {
    pub name: String,
    pub value: Option<String>,
}

impl TagProperty {
    /// `true` when the property has no `=value` part.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

/// A tag node. Properties and children keep source order; property
/// names may repeat.
///
/// Queries, rendering and dropping walk the tree without recursion. The
/// derived `Clone`, `PartialEq` and `Debug` impls do recurse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub name: String,
    pub properties: Vec<TagProperty>,
    pub children: Vec<Self>,
}

impl ParsedTag {
    /// First property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&TagProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Every property with the given name, in source order.
    pub fn properties_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a TagProperty> + 'a {
        self.properties.iter().filter(move |p| p.name == name)
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Value of the first property with the given name. `None` both
    /// when the property is missing and when it is a bare flag.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(|p| p.value.as_deref())
    }

    /// First direct child with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Number of tags in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tag) = stack.pop() {
            count += 1;
            stack.extend(&tag.children);
        }
        count
    }

    /// Nesting depth of this subtree; a tag without children has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((tag, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(tag.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

// Deep trees would otherwise be dropped one stack frame per level.
impl Drop for ParsedTag {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut tag) = stack.pop() {
            stack.append(&mut tag.children);
        }
    }
}
