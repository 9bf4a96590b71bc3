use serde::Deserialize;

/// Optional filters for a game search. Absent and empty filters match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

impl SearchFilter {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref().filter(|platform| !platform.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.platform().is_none()
    }
}
