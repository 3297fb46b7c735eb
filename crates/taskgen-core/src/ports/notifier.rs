//! Notifier port - ホスト UI への通知の抽象化

/// Outbound signals from the engine to the hosting UI.
///
/// The engine never touches a concrete widget type; the host implements
/// this trait and decides how each signal is rendered (dashboard text,
/// chat line, sound effect, ...). Every call is synchronous and must not
/// re-enter the engine.
pub trait Notifier {
    /// A task is active; show its description and item icon.
    fn on_task_assigned(&mut self, description: &str, item_icon_id: i32);

    /// No task is active; show the placeholder.
    fn on_no_task(&mut self);

    /// The generate action is unavailable (a task is already active).
    fn on_generation_disabled(&mut self);

    /// The generate action is available again.
    fn on_generation_enabled(&mut self);

    /// Every catalog task is completed; nothing left to assign.
    /// Distinct from the ordinary no-task state.
    fn on_tasks_exhausted(&mut self);

    /// Feedback trigger for a successful generate/complete action.
    fn on_acknowledge(&mut self);
}

/// NoopNotifier discards every signal (headless use, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn on_task_assigned(&mut self, _description: &str, _item_icon_id: i32) {}
    fn on_no_task(&mut self) {}
    fn on_generation_disabled(&mut self) {}
    fn on_generation_enabled(&mut self) {}
    fn on_tasks_exhausted(&mut self) {}
    fn on_acknowledge(&mut self) {}
}
