//! Note access decision rule.
//!
//! A note lives under two independent visibility scopes: its own and its
//! collection's. Collection membership gates entry to the space, note
//! visibility gates content within it. Access requires both scopes to
//! agree, with two carve-outs:
//!
//! - the owner always has access, regardless of any visibility setting;
//! - when only one scope is restrictive, that scope's collaborator list is
//!   the sole gate (a public note in a private collection is checked
//!   against the *collection's* collaborators, not the note's).
//!
//! The decision is a pure function of the supplied snapshot. Callers must
//! re-evaluate per request; visibility and collaborator grants can change
//! between requests, so results must never be cached.

use uuid::Uuid;

use crate::models::{CollectionAccess, NoteAccess, Visibility};

/// Decide whether `requester` may view a note.
///
/// `requester` is `None` for anonymous visitors, who can only ever see
/// public notes in public collections. `owner_id` is supplied explicitly
/// by the caller rather than read off the note snapshot, so a partially
/// loaded note cannot spoof ownership.
///
/// The match over `(collection, note)` visibility is exhaustive: extending
/// [`Visibility`] with a new tier is a compile error here until the new
/// combinations are given explicit semantics.
pub fn can_access_note(
    requester: Option<Uuid>,
    owner_id: Uuid,
    note: &NoteAccess,
    collection: &CollectionAccess,
) -> bool {
    if requester == Some(owner_id) {
        return true;
    }

    match (collection.visibility, note.visibility) {
        (Visibility::Public, Visibility::Public) => true,
        (Visibility::Public, Visibility::Private) => {
            requester.is_some_and(|id| note.collaborators.contains(&id))
        }
        (Visibility::Private, Visibility::Public) => {
            requester.is_some_and(|id| collection.collaborators.contains(&id))
        }
        (Visibility::Private, Visibility::Private) => requester.is_some_and(|id| {
            note.collaborators.contains(&id) && collection.collaborators.contains(&id)
        }),
    }
}
