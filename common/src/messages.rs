//! User-facing strings. The interface is French-only.

pub const SELECTION_REQUIRED: &str = "Veuillez sélectionner un fichier.";
pub const UPLOAD_FAILED: &str = "Échec de l'ajout à l'historique.";
pub const CLEAR_CONFIRMATION: &str = "Effacer l'historique des documents ?";
pub const EMPTY_HISTORY: &str = "Aucun document n'a encore été téléversé.";
pub const NOT_AVAILABLE: &str = "-";

pub fn upload_succeeded(name: &str) -> String {
    format!("“{}” ajouté à l'historique.", name)
}

pub fn record_removed(name: &str) -> String {
    format!("Supprimé : {}", name)
}
