pub mod history;
pub mod upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Upload,
    History,
}

impl Page {
    pub fn caption(self) -> &'static str {
        match self {
            Page::Upload => "Téléversement",
            Page::History => "Historique",
        }
    }
}
