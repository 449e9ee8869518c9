use super::actions::Action;

/// Services a saga may ask the driver to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCall {
    FetchArticles,
}

/// A side effect described as data.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Call a service and resume with its result.
    Call(ServiceCall),
    /// Dispatch an action.
    Put(Action),
}

pub fn call(service: ServiceCall) -> Effect {
    Effect::Call(service)
}

pub fn put(action: Action) -> Effect {
    Effect::Put(action)
}
