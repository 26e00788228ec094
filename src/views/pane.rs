use crate::nav::Screen;

/// The single content region views draw into.
///
/// Mounting replaces whatever the previous view left behind, so only one
/// screen is ever visible in the body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentPane {
    owner: Option<Screen>,
    title: String,
    lines: Vec<String>,
    mounts: u64,
}

impl ContentPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the pane and hand it to `screen`.
    pub fn mount(&mut self, screen: Screen, title: impl Into<String>) {
        self.owner = Some(screen);
        self.title = title.into();
        self.lines.clear();
        self.mounts += 1;
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn owner(&self) -> Option<Screen> {
        self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Total number of mounts since startup.
    pub fn mounts(&self) -> u64 {
        self.mounts
    }
}
