/// The text-editing widget as seen by the session and the dispatcher.
///
/// The widget owns the live text. Callers only read or replace it through
/// these methods and never keep a copy across frames.
pub trait EditorWidget {
    fn text(&self) -> String;

    /// Replace the whole content. Does not count as a user edit.
    fn set_text(&mut self, text: &str);

    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
    fn delete(&mut self);
    fn select_all(&mut self);

    fn set_show_whitespace(&mut self, show: bool);

    /// Returns true if the live text was edited since the previous call,
    /// and resets the indicator.
    fn take_text_changed(&mut self) -> bool;
}
