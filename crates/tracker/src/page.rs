//! Page context and the trackable-element classifier for click events.
//!
//! The UI shell reports clicks as a chain of element descriptions from the
//! click target up to the document root; the classifier walks the chain
//! until it finds a hyperlink, a button, or an explicitly marked element.

/// Snapshot of the page a navigation landed on, supplied by the UI shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: String,
    pub title: String,
    pub referrer: String,
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub language: String,
}

impl PageContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn screen_resolution(&self) -> String {
        format!("{}x{}", self.screen_width, self.screen_height)
    }
}

/// One element in a click's ancestor chain, target first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Lower-case tag name (`a`, `button`, `span`, ...).
    pub tag: String,
    pub id: Option<String>,
    /// Value of the explicit tracking marker, when present.
    pub track_marker: Option<String>,
    pub href: Option<String>,
    pub text: Option<String>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_track_marker(mut self, marker: impl Into<String>) -> Self {
        self.track_marker = Some(marker.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Why an element qualifies for click tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trackable {
    Link,
    Button,
    Marked,
}

/// Classify a single element. Tag checks take precedence over the marker,
/// so a marked hyperlink still classifies as a link.
pub fn classify(node: &ElementNode) -> Option<Trackable> {
    match node.tag.as_str() {
        "a" => Some(Trackable::Link),
        "button" => Some(Trackable::Button),
        _ if node.track_marker.is_some() => Some(Trackable::Marked),
        _ => None,
    }
}

/// The resolved click target: identifier and value for a `ClickEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub component_id: String,
    pub event_value: String,
    pub kind: Trackable,
}

/// Walk the ancestor chain from the click target outward and resolve the
/// first trackable element. Returns `None` when the chain is exhausted.
///
/// The component id falls back from element id, to the tracking marker
/// value, to the tag name. The event value is the link target when the
/// element is a hyperlink with an href, otherwise its trimmed text.
pub fn resolve_click(chain: &[ElementNode]) -> Option<ClickTarget> {
    let (node, kind) = chain
        .iter()
        .find_map(|node| classify(node).map(|kind| (node, kind)))?;

    let component_id = node
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| node.track_marker.clone().filter(|m| !m.is_empty()))
        .unwrap_or_else(|| node.tag.clone());

    let mut event_value = String::new();
    if kind == Trackable::Link {
        if let Some(href) = &node.href {
            event_value = href.clone();
        }
    }
    if event_value.is_empty() {
        event_value = node
            .text
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
    }

    Some(ClickTarget {
        component_id,
        event_value,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_element_resolves_to_enclosing_link() {
        // <a id="gh" href="..."> <span>GitHub</span> </a>, click on the span
        let chain = vec![
            ElementNode::new("span").with_text("GitHub"),
            ElementNode::new("a")
                .with_id("gh")
                .with_href("https://github.com/ismatsamadov"),
            ElementNode::new("div"),
        ];

        let target = resolve_click(&chain).unwrap();
        assert_eq!(target.kind, Trackable::Link);
        assert_eq!(target.component_id, "gh");
        assert_eq!(target.event_value, "https://github.com/ismatsamadov");
    }

    #[test]
    fn test_button_falls_back_to_text() {
        // <button id="cta">Submit</button>
        let chain = vec![ElementNode::new("button")
            .with_id("cta")
            .with_text("  Submit  ")];

        let target = resolve_click(&chain).unwrap();
        assert_eq!(target.kind, Trackable::Button);
        assert_eq!(target.component_id, "cta");
        assert_eq!(target.event_value, "Submit");
    }

    #[test]
    fn test_marker_value_used_as_component_id() {
        let chain = vec![
            ElementNode::new("span").with_text("open"),
            ElementNode::new("div")
                .with_track_marker("resume-download")
                .with_text("Download resume"),
        ];

        let target = resolve_click(&chain).unwrap();
        assert_eq!(target.kind, Trackable::Marked);
        assert_eq!(target.component_id, "resume-download");
        assert_eq!(target.event_value, "Download resume");
    }

    #[test]
    fn test_anonymous_link_uses_tag_name() {
        let chain = vec![ElementNode::new("a").with_text("home")];

        let target = resolve_click(&chain).unwrap();
        assert_eq!(target.component_id, "a");
        // No href, so the text is the value
        assert_eq!(target.event_value, "home");
    }

    #[test]
    fn test_untrackable_chain_resolves_nothing() {
        let chain = vec![
            ElementNode::new("span").with_text("plain"),
            ElementNode::new("p"),
            ElementNode::new("div"),
        ];

        assert!(resolve_click(&chain).is_none());
    }

    #[test]
    fn test_marked_link_classifies_as_link() {
        let node = ElementNode::new("a").with_track_marker("nav-home");
        assert_eq!(classify(&node), Some(Trackable::Link));
    }

    #[test]
    fn test_screen_resolution_format() {
        let ctx = PageContext {
            screen_width: 1920,
            screen_height: 1080,
            ..PageContext::new("/")
        };
        assert_eq!(ctx.screen_resolution(), "1920x1080");
    }
}
