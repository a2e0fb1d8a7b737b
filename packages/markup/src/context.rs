//! Context threaded down the transformation walk.

/// The two container levels above sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Chapter,
    Part,
}

impl ContainerKind {
    /// Element name and identifier prefix.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Part => "part",
        }
    }

    /// The kind that may nest inside (or around) this one.
    #[must_use]
    pub fn complement(&self) -> Self {
        match self {
            Self::Chapter => Self::Part,
            Self::Part => Self::Chapter,
        }
    }
}

/// Kind and number of a container above the current node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub kind: ContainerKind,

    /// `None` for heading-less containers.
    pub num: Option<String>,
}

/// Call-local context for one step of the walk.
///
/// Values are never shared between walks; each recursive call receives a
/// derived copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorContext {
    /// Accumulated identifier prefix, ending in `.` when non-empty.
    pub id_prefix: String,

    /// Position of the current node among its siblings.
    pub ordinal: usize,

    /// Innermost enclosing container.
    pub parent: Option<Ancestor>,

    /// The container around `parent`.
    pub grandparent: Option<Ancestor>,
}

impl AncestorContext {
    /// Context at the document body.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a context for the children of a container.
    #[must_use]
    pub fn within(&self, kind: ContainerKind, num: Option<&str>) -> Self {
        let mut new = self.clone();
        new.grandparent = new.parent.take();
        new.parent = Some(Ancestor {
            kind,
            num: num.map(String::from),
        });
        new.ordinal = 0;
        new
    }

    /// Create a context whose children are identified under `id`.
    #[must_use]
    pub fn with_prefix(&self, id: &str) -> Self {
        let mut new = self.clone();
        new.id_prefix = crate::ids::child_prefix(id);
        new
    }

    /// Create a context for the sibling at `ordinal`.
    #[must_use]
    pub fn at(&self, ordinal: usize) -> Self {
        let mut new = self.clone();
        new.ordinal = ordinal;
        new
    }

    /// Short description of the position, for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.parent {
            None => "document body".to_string(),
            Some(Ancestor { kind, num: Some(num) }) => format!("{} {num}", kind.as_str()),
            Some(Ancestor { kind, num: None }) => format!("unnumbered {}", kind.as_str()),
        }
    }
}
