/// Elements whose load failure means the page references assets that no
/// longer exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<script>`
    Script,
    /// `<link>` (stylesheets, preloads)
    Stylesheet,
}

impl ElementKind {
    /// Match a DOM tag name, case-insensitively. Other elements return `None`.
    pub fn from_tag_name(tag_name: &str) -> Option<Self> {
        if tag_name.eq_ignore_ascii_case("script") {
            Some(Self::Script)
        } else if tag_name.eq_ignore_ascii_case("link") {
            Some(Self::Stylesheet)
        } else {
            None
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Stylesheet => "link",
        }
    }
}

/// A request to run a check now, independent of the poll timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The poll timer fired.
    TimerElapsed,
    /// Some element failed to load. Only script and link failures request a check.
    ResourceLoadFailed {
        tag_name: String,
        source: Option<String>,
    },
}

impl Trigger {
    pub fn load_failed(element: ElementKind, source: impl Into<String>) -> Self {
        Self::ResourceLoadFailed {
            tag_name: element.tag_name().to_string(),
            source: Some(source.into()),
        }
    }

    pub fn requests_check(&self) -> bool {
        match self {
            Self::TimerElapsed => true,
            Self::ResourceLoadFailed { tag_name, .. } => {
                ElementKind::from_tag_name(tag_name).is_some()
            }
        }
    }
}
