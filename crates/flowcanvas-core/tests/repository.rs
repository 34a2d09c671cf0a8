//! Repository port behavior, exercised through the in-memory adapter.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use flowcanvas_core::{
    ComponentKind, ComponentTemplate, EditorSession, GraphSnapshot, InMemoryWorkflowRepository,
    NodeId, Notice, PersistenceError, Position, WorkflowId, WorkflowRepository,
};

fn sample(name: &str) -> GraphSnapshot {
    let mut store = flowcanvas_core::GraphStore::new();
    store.add_node(
        ComponentTemplate::for_kind(ComponentKind::Input)
            .instantiate(NodeId::new("a").unwrap(), Position::new(10.0, 10.0)),
    );
    store.to_snapshot(name)
}

#[tokio::test]
async fn save_new_then_update_in_place() {
    let repo = InMemoryWorkflowRepository::new();
    let saved = repo.save(None, &sample("First")).await.unwrap();
    assert_eq!(repo.len(), 1);

    let again = repo.save(Some(&saved.id), &sample("Renamed")).await.unwrap();
    assert_eq!(again.id, saved.id);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.load(&saved.id).await.unwrap().name, "Renamed");
}

#[tokio::test]
async fn list_returns_names() {
    let repo = InMemoryWorkflowRepository::new();
    repo.save(None, &sample("One")).await.unwrap();
    repo.save(None, &sample("")).await.unwrap();

    let list = repo.list().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].display_name(), "One");
    assert_eq!(list[1].display_name(), format!("Workflow #{}", list[1].id));
}

#[tokio::test]
async fn missing_workflow_is_not_found() {
    let repo = InMemoryWorkflowRepository::new();
    let id = WorkflowId::new("404").unwrap();
    assert_eq!(
        repo.load(&id).await.unwrap_err(),
        PersistenceError::NotFound(id.clone())
    );
    let deleted = repo.delete(&id).await;
    assert!(Notice::deleted(&deleted).is_failure());
}

#[tokio::test]
async fn rename_changes_only_the_name() {
    let repo = InMemoryWorkflowRepository::new();
    let saved = repo.save(None, &sample("Old")).await.unwrap();
    repo.rename(&saved.id, "New").await.unwrap();
    let loaded = repo.load(&saved.id).await.unwrap();
    assert_eq!(loaded.name, "New");
    assert_eq!(loaded.components.len(), 1);
}

#[tokio::test]
async fn editor_round_trip_through_repository() {
    let repo = InMemoryWorkflowRepository::new();
    let mut editor = EditorSession::default();
    editor.load_snapshot(None, sample("Editor"));

    let result = repo.save(editor.workflow_id(), &editor.snapshot()).await;
    assert_eq!(Notice::saved(&result).message(), "Workflow saved!");
    assert!(editor.saved(result.unwrap()));

    let mut reopened = EditorSession::default();
    reopened.begin_loading();
    let id = editor.workflow_id().cloned().unwrap();
    match repo.load(&id).await {
        Ok(snapshot) => reopened.load_snapshot(Some(id), snapshot),
        Err(err) => reopened.load_failed(err.to_string()),
    }
    assert_eq!(reopened.graph(), editor.graph());

    repo.delete(editor.workflow_id().unwrap()).await.unwrap();
    assert!(repo.is_empty());
}
