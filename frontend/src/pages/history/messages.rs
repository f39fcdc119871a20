pub enum Msg {
    /// Re-read the store.
    Refresh,
    /// Open the clear confirmation dialog.
    RequestClear,
    /// Answer from the confirmation dialog.
    ClearDecision(bool),
    Remove { id: String, name: String },
}
