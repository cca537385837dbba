//! Note serving handlers.
//!
//! The access decision runs here, per request, against snapshots loaded
//! from the store. Nothing about a decision is cached: grants and
//! visibility can change between requests.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{ApiError, AppState};
use notehub_core::{can_access_note, CollectionStore, Error, NoteStore};

/// Header carrying the authenticated requester's user id.
///
/// Session/token handling lives upstream; by the time a request reaches
/// this service the gateway has resolved the session to a user id (or
/// stripped the header for anonymous visitors).
pub const USER_ID_HEADER: &str = "x-user-id";

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NoteResponse {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub title: String,
    pub content: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Extract the optional requester identity from the id header.
pub(crate) fn requester_from_headers(headers: &HeaderMap) -> Result<Option<Uuid>, ApiError> {
    let Some(value) = headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let parsed = value
        .to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| {
            ApiError::BadRequest(format!("Invalid {} header: expected a UUID", USER_ID_HEADER))
        })?;

    Ok(Some(parsed))
}

/// Serve a note, subject to the access policy.
///
/// GET /api/v1/notes/:id
#[utoipa::path(get, path = "/api/v1/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note content", body = NoteResponse),
        (status = 403, description = "Requester may not view this note"),
        (status = 404, description = "No such note")))]
pub async fn view_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<NoteResponse>, ApiError> {
    let requester = requester_from_headers(&headers)?;

    let note = state
        .store
        .fetch_note(id)
        .await?
        .ok_or(Error::NoteNotFound(id))?;

    // A note always belongs to a collection; a dangling reference means the
    // caller handed us an inconsistent snapshot, so fail fast rather than
    // guess at a default scope.
    let collection = state
        .store
        .fetch_collection(note.collection_id)
        .await?
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Note {} references missing collection {}",
                id, note.collection_id
            ))
        })?;

    if !can_access_note(requester, note.owner_id, &note.access, &collection) {
        tracing::debug!(
            op = "view_note",
            user_id = ?requester,
            note_id = %id,
            collection_id = %note.collection_id,
            outcome = "denied",
            "note access denied"
        );
        return Err(ApiError::Forbidden("Access denied".to_string()));
    }

    tracing::debug!(
        op = "view_note",
        user_id = ?requester,
        note_id = %id,
        outcome = "allowed",
        "note access granted"
    );

    Ok(Json(NoteResponse {
        id: note.id,
        collection_id: note.collection_id,
        title: note.title,
        content: note.content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use notehub_core::{CollectionAccess, NoteAccess, StoredNote};
    use tower::ServiceExt;

    async fn seed_note(
        store: &MemoryStore,
        owner_id: Uuid,
        access: NoteAccess,
        collection: CollectionAccess,
    ) -> Uuid {
        let collection_id = Uuid::new_v4();
        store.insert_collection(collection_id, collection).await;

        let note = StoredNote {
            id: Uuid::new_v4(),
            owner_id,
            collection_id,
            title: "Meeting notes".to_string(),
            content: "Agenda and follow-ups".to_string(),
            access,
        };
        let note_id = note.id;
        store.insert_note(note).await;
        note_id
    }

    fn get_note(id: Uuid, requester: Option<Uuid>) -> Request<Body> {
        let builder = Request::builder().uri(format!("/api/v1/notes/{}", id));
        let builder = match requester {
            Some(user_id) => builder.header(USER_ID_HEADER, user_id.to_string()),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_reads_public_note_in_public_collection() {
        let state = AppState::for_tests();
        let owner = Uuid::new_v4();
        let note_id = seed_note(
            &state.store,
            owner,
            NoteAccess::public(),
            CollectionAccess::public(),
        )
        .await;

        let response = router(state).oneshot(get_note(note_id, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "Meeting notes");
    }

    #[tokio::test]
    async fn test_stranger_denied_on_private_note() {
        let state = AppState::for_tests();
        let owner = Uuid::new_v4();
        let note_id = seed_note(
            &state.store,
            owner,
            NoteAccess::private(),
            CollectionAccess::public(),
        )
        .await;

        let response = router(state)
            .oneshot(get_note(note_id, Some(Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Access denied");
    }

    #[tokio::test]
    async fn test_owner_reads_private_note_in_private_collection() {
        let state = AppState::for_tests();
        let owner = Uuid::new_v4();
        let note_id = seed_note(
            &state.store,
            owner,
            NoteAccess::private(),
            CollectionAccess::private(),
        )
        .await;

        let response = router(state)
            .oneshot(get_note(note_id, Some(owner)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_collection_collaborator_reads_public_note_in_private_collection() {
        let state = AppState::for_tests();
        let owner = Uuid::new_v4();
        let invited = Uuid::new_v4();
        let note_id = seed_note(
            &state.store,
            owner,
            NoteAccess::public(),
            CollectionAccess::private().with_collaborator(invited),
        )
        .await;

        let app = router(state);
        let response = app
            .clone()
            .oneshot(get_note(note_id, Some(invited)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_note(note_id, Some(Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_note_is_404() {
        let state = AppState::for_tests();
        let response = router(state)
            .oneshot(get_note(Uuid::new_v4(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dangling_collection_reference_is_400() {
        let state = AppState::for_tests();
        let note = StoredNote {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            collection_id: Uuid::new_v4(), // never inserted
            title: "Orphan".to_string(),
            content: String::new(),
            access: NoteAccess::public(),
        };
        let note_id = note.id;
        state.store.insert_note(note).await;

        let response = router(state)
            .oneshot(get_note(note_id, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_user_header_is_400() {
        let state = AppState::for_tests();
        let request = Request::builder()
            .uri(format!("/api/v1/notes/{}", Uuid::new_v4()))
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = router(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
