use crate::browse::BrowseError;

/// The visited-vertex trail. The first entry is the session root, the last
/// is the current vertex; "current" is always derived from the trail, never
/// stored on the side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationState {
    history: Vec<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        !self.history.is_empty()
    }

    /// Begin browsing at `root`.
    pub fn start(&mut self, root: impl Into<String>) -> Result<(), BrowseError> {
        if self.is_started() {
            return Err(BrowseError::AlreadyStarted);
        }
        self.history.push(root.into());
        Ok(())
    }

    /// The vertex the user is standing on.
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// The protected session root.
    pub fn root(&self) -> Option<&str> {
        self.history.first().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Step onto `target`. The caller vouches that `target` came from the
    /// current neighbour menu; there is no re-validation here.
    pub fn advance(&mut self, target: impl Into<String>) {
        self.history.push(target.into());
    }

    /// Step back one entry. At the root there is nowhere to go; returns
    /// whether the position changed.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    /// Drop every occurrence of `label` from the trail (revisits repeat).
    /// Returns whether the current vertex was among the dropped, i.e. the
    /// position itself moved.
    ///
    /// Root deletion is rejected long before this point, but the front
    /// entry is skipped regardless so the trail can never empty out from
    /// under the session.
    pub fn scrub(&mut self, label: &str) -> bool {
        let was_current = self.current() == Some(label);
        let mut idx = 0;
        self.history.retain(|entry| {
            let keep = idx == 0 || entry != label;
            idx += 1;
            keep
        });
        was_current && self.current() != Some(label)
    }
}
