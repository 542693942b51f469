/// User intents produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Quit,
}
