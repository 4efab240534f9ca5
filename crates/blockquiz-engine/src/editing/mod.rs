/*!
 * # Editing Core
 *
 * The host document the custom blocks live in.
 *
 * - **`document`**: `Document`, an ordered list of top-level nodes with a
 *   cursor and a global mode. Parses from and serializes to markup.
 * - **`commands`**: `Cmd`, every mutation the shell or a block view can
 *   request. `Document::apply` is the only way to change a document.
 * - **`patch`**: which nodes a command touched.
 * - **`observe`**: per-node subscriptions notified after each patch.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use blockquiz_engine::editing::*;
 * use blockquiz_engine::McqDialect;
 *
 * let mut doc = Document::from_markup("<p>?</p>", McqDialect::Learnr).unwrap();
 * let id = doc.nodes()[0].id;
 *
 * // Typing "/" after "?" triggers the AI shortcut
 * let patch = doc.apply(Cmd::SetText { id, text: "?/".to_string() });
 * assert_eq!(patch.changed, vec![id]);
 * assert!(doc.to_markup().unwrap().contains(r#"data-type="ai""#));
 * ```
 */

pub mod commands;
pub mod document;
pub mod observe;
pub mod patch;

pub use commands::{AiUpdate, AttrUpdate, Cmd, McqUpdate};
pub use document::Document;
pub use observe::{Observers, SubscriptionId};
pub use patch::Patch;
