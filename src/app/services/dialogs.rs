/// Blocking modal interactions the application needs from the toolkit.
pub trait DialogHost {
    /// Native open-file picker. `None` when cancelled.
    fn pick_open_path(&mut self) -> Option<String>;

    /// Native save-file picker. Asking before overwriting an existing file
    /// is the picker's job. `None` when cancelled.
    fn pick_save_path(&mut self) -> Option<String>;

    /// Yes/no question. Returns true only for an explicit "yes".
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show the About box and block until it is acknowledged.
    fn show_about(&mut self);

    fn alert(&mut self, message: &str);
}
