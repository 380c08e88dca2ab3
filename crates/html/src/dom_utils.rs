use crate::{Id, Node};

/// A compound selector made of an optional tag name, an optional `#id`
/// and any number of `.class` parts, e.g. `div.grip.left` or `#bar`.
///
/// Combinators, attribute selectors and pseudo-classes are not supported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    /// Returns `None` when `input` is empty or uses unsupported syntax.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut sel = SimpleSelector::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            let tag = &rest[..tag_end];
            if !is_ident(tag) {
                return None;
            }
            sel.tag = Some(tag.to_ascii_lowercase());
            rest = &rest[tag_end..];
        }

        while let Some(prefix) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let part = &body[..end];
            if !is_ident(part) {
                return None;
            }
            match prefix {
                '.' => sel.classes.push(part.to_string()),
                '#' if sel.id.is_none() => sel.id = Some(part.to_string()),
                _ => return None,
            }
            rest = &body[end..];
        }

        Some(sel)
    }

    pub fn matches(&self, node: &Node) -> bool {
        let Node::Element { name, .. } = node else {
            return false;
        };
        if let Some(tag) = &self.tag
            && !name.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && node.attr("id") != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|c| node.has_class(c))
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// First descendant of `root` (document order, `root` excluded) matching `selector`.
///
/// Unparseable selectors match nothing.
pub fn query_descendant(root: &Node, selector: &str) -> Option<Id> {
    fn walk(node: &Node, sel: &SimpleSelector) -> Option<Id> {
        for c in node.children() {
            if sel.matches(c) {
                return Some(c.id());
            }
            if let Some(found) = walk(c, sel) {
                return Some(found);
            }
        }
        None
    }

    let sel = SimpleSelector::parse(selector)?;
    walk(root, &sel)
}
