use blockquiz_engine::{Node, NodeId, Observers};
use dioxus::prelude::*;

/// Call `listener` whenever the document reports an attribute change on `id`.
///
/// The subscription is registered on first render and removed when the
/// calling component unmounts. Without an `Observers` context (such as in
/// isolated rendering) nothing is registered.
pub fn use_node_observer(id: NodeId, listener: impl FnMut(&Node) + 'static) {
    let observers = try_use_context::<Signal<Observers>>();

    let subscription = use_hook(move || {
        observers.map(|mut observers| observers.write().subscribe(id, listener))
    });

    use_drop(move || {
        if let (Some(mut observers), Some(subscription)) = (observers, subscription)
            && let Ok(mut observers) = observers.try_write()
        {
            observers.unsubscribe(subscription);
        }
    });
}
