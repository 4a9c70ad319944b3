/// Side effects the event loop performs after a handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Bell,
    Quit,
}
