use crate::scene::Target;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// One or more required surfaces are absent from the document.
    #[error("required elements not found: {}", surface_list(.0))]
    MissingSurfaces(Vec<Target>),
}

fn surface_list(targets: &[Target]) -> String {
    targets
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Target {
    /// Human-readable surface name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Target::Container => "container",
            Target::Left => "left element",
            Target::Right => "right element",
            Target::Affordance => "enter button",
            Target::Message => "welcome message",
            Target::Content => "hidden content",
        }
    }
}

/// Collect every absent surface into one error, so a diagnostic names all
/// of them at once.
pub fn missing_surfaces(present: impl IntoIterator<Item = (Target, bool)>) -> SetupError {
    SetupError::MissingSurfaces(
        present
            .into_iter()
            .filter(|(_, found)| !found)
            .map(|(target, _)| target)
            .collect(),
    )
}
