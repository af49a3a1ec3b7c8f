use serde::Deserialize;

/// Visibility toggle on a saved trip's detail page.
#[derive(Deserialize)]
pub struct SetVisibilityForm {
    #[serde(default)]
    pub is_public: Option<String>,
}

impl SetVisibilityForm {
    pub fn is_public(&self) -> bool {
        self.is_public.is_some()
    }
}
