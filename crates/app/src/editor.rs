//! Template editing workflow.
//!
//! Drives the create/edit/delete lifecycle for a single template within the
//! collection owned by the `SettingsStore`. The editor holds the edit
//! buffer, the mode state machine, the pending-delete confirmation gate, and
//! the transient validation banner; the store stays the single source of
//! truth for the collection itself.

use domain::models::{Template, TemplateDraft, ValidationError};
use persistence::{PersistenceAdapter, PersistenceError, SettingsStore};
use tracing::{debug, error, warn};

use crate::banner::ErrorBanner;

/// The editor's current state.
///
/// `Idle -> Creating -> Idle` on save or cancel, and
/// `Idle -> Editing(id) -> Idle` likewise. Deletion is orthogonal and only
/// changes the mode when it removes the in-flight edit target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Idle,
    Creating,
    Editing(i64),
}

/// Result of a save attempt that reached the collection (or was rejected
/// by validation before touching it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft passed validation and the collection was updated.
    Saved { id: i64 },
    /// The draft failed validation; the collection is untouched and the
    /// message is showing in the banner.
    Rejected(ValidationError),
}

/// CRUD workflow for templates, with transient validation feedback.
#[derive(Debug, Default)]
pub struct TemplateEditor {
    mode: EditorMode,
    draft: TemplateDraft,
    pending_delete: Option<i64>,
    banner: ErrorBanner,
}

impl TemplateEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &TemplateDraft {
        &self.draft
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut ErrorBanner {
        &mut self.banner
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Loads an existing template into the edit buffer.
    pub fn begin_edit(&mut self, template: &Template) {
        self.mode = EditorMode::Editing(template.id);
        self.draft.name = template.name.clone();
        self.draft.content = template.content.clone();
    }

    /// Clears the buffer for a new template; the next save is an insert.
    pub fn begin_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.draft.clear();
    }

    /// Abandons the current edit without touching the collection.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Idle;
        self.draft.clear();
    }

    /// Validates the draft and, if valid, applies it to the collection and
    /// persists the whole collection as one unit.
    ///
    /// In `Editing(id)` mode the matching entry is replaced in place,
    /// keeping its id and ordinal position. If the edit target has vanished
    /// (deleted externally or dropped by a reload), the draft is inserted as
    /// a new entry instead so the user's work is not lost. Otherwise a new
    /// entry is appended with a fresh unique id.
    ///
    /// A persistence failure leaves the in-memory edit applied and is
    /// reported both through the banner and to the caller; the buffer is
    /// kept and the editor retargets the already-applied entry, so a retry
    /// replaces it in place rather than appending a duplicate.
    pub fn save<A: PersistenceAdapter>(
        &mut self,
        store: &mut SettingsStore<A>,
    ) -> Result<SaveOutcome, PersistenceError> {
        // Any save attempt cancels a stale pending auto-clear.
        self.banner.dismiss();

        if let Err(err) = self.draft.validate() {
            self.banner.show(err.to_string());
            return Ok(SaveOutcome::Rejected(err));
        }

        let mut templates = store.templates().to_vec();
        let id = match self.mode {
            EditorMode::Editing(id) if templates.iter().any(|t| t.id == id) => {
                for template in &mut templates {
                    if template.id == id {
                        template.name = self.draft.name.clone();
                        template.content = self.draft.content.clone();
                    }
                }
                id
            }
            EditorMode::Editing(stale) => {
                let id = Template::next_id(&templates);
                warn!(stale_id = stale, id, "edit target no longer exists, saving as new template");
                templates.push(Template {
                    id,
                    name: self.draft.name.clone(),
                    content: self.draft.content.clone(),
                });
                id
            }
            EditorMode::Idle | EditorMode::Creating => {
                let id = Template::next_id(&templates);
                templates.push(Template {
                    id,
                    name: self.draft.name.clone(),
                    content: self.draft.content.clone(),
                });
                id
            }
        };

        if let Err(err) = store.save_templates(templates) {
            error!(error = %err, "failed to persist templates");
            self.banner.show("Failed to save template. Please try again.");
            // The entry already sits in the in-memory collection; point the
            // editor at it so a retry replaces instead of appending again.
            self.mode = EditorMode::Editing(id);
            return Err(err);
        }

        debug!(id, "template saved");
        self.mode = EditorMode::Idle;
        self.draft.clear();
        Ok(SaveOutcome::Saved { id })
    }

    /// Marks a template for deletion; nothing is removed until
    /// [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// The id awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Abandons a requested deletion.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Carries out a confirmed deletion and persists the collection.
    ///
    /// Returns whether an entry was actually removed; a non-existent id (or
    /// no pending request) is a no-op. Deleting the template currently being
    /// edited also clears the edit buffer.
    pub fn confirm_delete<A: PersistenceAdapter>(
        &mut self,
        store: &mut SettingsStore<A>,
    ) -> Result<bool, PersistenceError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(false);
        };

        let mut templates = store.templates().to_vec();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            debug!(id, "delete requested for unknown template");
            return Ok(false);
        }

        if let Err(err) = store.save_templates(templates) {
            error!(error = %err, "failed to persist template deletion");
            self.banner.show("Failed to delete template. Please try again.");
            return Err(err);
        }

        if self.mode == EditorMode::Editing(id) {
            self.cancel();
        }
        debug!(id, "template deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use chrono::Utc;
    use domain::models::seed_templates;
    use persistence::{AdapterError, MemoryAdapter};

    fn store() -> SettingsStore<MemoryAdapter> {
        let mut store = SettingsStore::new(MemoryAdapter::new());
        store.load();
        store
    }

    #[test]
    fn test_save_rejects_missing_name_without_mutating_collection() {
        let mut store = store();
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_content("<p>Hi</p>");

        let outcome = editor.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Rejected(ValidationError::MissingName));
        assert_eq!(store.templates().len(), 4);
        assert!(editor.banner().is_visible(Utc::now()));
        // The editor stays in create mode so the user can fix the draft.
        assert_eq!(editor.mode(), EditorMode::Creating);
    }

    #[test]
    fn test_save_rejects_missing_content() {
        let mut store = store();
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("Reminder 2");

        let outcome = editor.save(&mut store).unwrap();
        assert_eq!(
            outcome,
            SaveOutcome::Rejected(ValidationError::MissingContent)
        );
        assert_eq!(store.templates().len(), 4);
    }

    #[test]
    fn test_create_appends_with_unique_id() {
        let mut store = store();
        let existing: Vec<i64> = store.templates().iter().map(|t| t.id).collect();
        assert_eq!(existing, vec![1, 2, 3, 4]);

        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("Reminder 2");
        editor.set_content("<p>Hi</p>");

        let outcome = editor.save(&mut store).unwrap();
        let SaveOutcome::Saved { id } = outcome else {
            panic!("expected save to succeed");
        };

        assert_eq!(store.templates().len(), 5);
        assert!(!existing.contains(&id));
        let created = store.templates().last().unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.name, "Reminder 2");
        assert_eq!(editor.mode(), EditorMode::Idle);
        assert!(editor.draft().name.is_empty());
        assert!(editor.draft().content.is_empty());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut store = store();
        let target = store.templates()[1].clone();
        assert_eq!(target.id, 2);

        let mut editor = TemplateEditor::new();
        editor.begin_edit(&target);
        assert_eq!(editor.draft().name, target.name);
        editor.set_content("<p>Updated body</p>");

        let outcome = editor.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved { id: 2 });

        // Length, ids, and order all unchanged; only the entry changed.
        assert_eq!(store.templates().len(), 4);
        let ids: Vec<i64> = store.templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.templates()[1].content, "<p>Updated body</p>");
        assert_eq!(store.templates()[1].name, target.name);
        assert_eq!(store.templates()[0], seed_templates()[0]);
        assert_eq!(editor.mode(), EditorMode::Idle);
    }

    #[test]
    fn test_save_persists_collection() {
        let mut store = store();
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("Reminder 2");
        editor.set_content("<p>Hi</p>");
        editor.save(&mut store).unwrap();

        // Reloading from the same adapter sees the full updated collection.
        store.load();
        assert_eq!(store.templates().len(), 5);
        assert_eq!(store.templates()[4].name, "Reminder 2");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = store();
        let mut editor = TemplateEditor::new();

        editor.request_delete(3);
        assert_eq!(editor.pending_delete(), Some(3));
        // Not confirmed yet: nothing removed.
        assert_eq!(store.templates().len(), 4);

        editor.cancel_delete();
        assert_eq!(editor.pending_delete(), None);
        assert!(!editor.confirm_delete(&mut store).unwrap());
        assert_eq!(store.templates().len(), 4);
    }

    #[test]
    fn test_confirmed_delete_removes_exactly_one() {
        let mut store = store();
        let mut editor = TemplateEditor::new();

        editor.request_delete(3);
        assert!(editor.confirm_delete(&mut store).unwrap());

        let ids: Vec<i64> = store.templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store();
        let mut editor = TemplateEditor::new();

        editor.request_delete(999);
        assert!(!editor.confirm_delete(&mut store).unwrap());
        assert_eq!(store.templates().len(), 4);
    }

    #[test]
    fn test_deleting_edit_target_clears_buffer() {
        let mut store = store();
        let target = store.templates()[0].clone();
        let mut editor = TemplateEditor::new();
        editor.begin_edit(&target);

        editor.request_delete(target.id);
        assert!(editor.confirm_delete(&mut store).unwrap());

        assert_eq!(editor.mode(), EditorMode::Idle);
        assert!(editor.draft().name.is_empty());
    }

    #[test]
    fn test_deleting_other_template_keeps_edit_in_flight() {
        let mut store = store();
        let target = store.templates()[0].clone();
        let mut editor = TemplateEditor::new();
        editor.begin_edit(&target);
        editor.set_content("<p>wip</p>");

        editor.request_delete(4);
        assert!(editor.confirm_delete(&mut store).unwrap());

        assert_eq!(editor.mode(), EditorMode::Editing(target.id));
        assert_eq!(editor.draft().content, "<p>wip</p>");
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("half-typed");
        editor.cancel();

        assert_eq!(editor.mode(), EditorMode::Idle);
        assert!(editor.draft().name.is_empty());
    }

    #[test]
    fn test_second_failure_shows_newer_message() {
        let mut store = store();
        let mut editor = TemplateEditor::new();
        editor.begin_create();

        editor.save(&mut store).unwrap(); // missing name
        assert_eq!(
            editor.banner().message_at(Utc::now()),
            Some("Please provide a template name.")
        );

        // Fix the name but not the content; the second failure replaces the
        // message and re-arms the auto-clear deadline.
        editor.set_name("Reminder 2");
        editor.save(&mut store).unwrap();
        assert_eq!(
            editor.banner().message_at(Utc::now()),
            Some("Please provide template content.")
        );
    }

    #[test]
    fn test_stale_edit_target_is_saved_as_new_entry() {
        let mut store = store();
        let target = store.templates()[1].clone();
        let mut editor = TemplateEditor::new();
        editor.begin_edit(&target);
        editor.set_content("<p>rescued</p>");

        // The target disappears underneath the editor.
        let remaining: Vec<Template> = store
            .templates()
            .iter()
            .filter(|t| t.id != target.id)
            .cloned()
            .collect();
        store.save_templates(remaining).unwrap();
        assert_eq!(store.templates().len(), 3);

        let SaveOutcome::Saved { id } = editor.save(&mut store).unwrap() else {
            panic!("expected save to succeed");
        };

        // The draft is kept by inserting it as a new entry, not by claiming
        // to have updated the vanished one.
        assert_ne!(id, target.id);
        assert_eq!(store.templates().len(), 4);
        let saved = store.templates().last().unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.name, target.name);
        assert_eq!(saved.content, "<p>rescued</p>");
        assert_eq!(editor.mode(), EditorMode::Idle);
    }

    #[test]
    fn test_retry_after_write_failure_does_not_duplicate() {
        struct FlakyAdapter {
            inner: MemoryAdapter,
            fail_next: Cell<bool>,
        }
        impl PersistenceAdapter for FlakyAdapter {
            fn get(&self, key: &str) -> Result<Option<String>, AdapterError> {
                self.inner.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), AdapterError> {
                if self.fail_next.replace(false) {
                    return Err(AdapterError::Unavailable("disk full".to_string()));
                }
                self.inner.set(key, value)
            }
        }

        let mut store = SettingsStore::new(FlakyAdapter {
            inner: MemoryAdapter::new(),
            fail_next: Cell::new(true),
        });
        store.load();
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("Reminder 2");
        editor.set_content("<p>Hi</p>");

        assert!(editor.save(&mut store).is_err());
        // The failed write left the entry in memory.
        assert_eq!(store.templates().len(), 5);

        // The retry replaces that entry in place instead of appending a
        // second copy.
        let outcome = editor.save(&mut store).unwrap();
        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        assert_eq!(store.templates().len(), 5);
        let names: Vec<&str> = store
            .templates()
            .iter()
            .filter(|t| t.name == "Reminder 2")
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names.len(), 1);
        assert_eq!(editor.mode(), EditorMode::Idle);
    }

    #[test]
    fn test_persistence_failure_surfaces_and_keeps_draft() {
        struct FailingAdapter;
        impl PersistenceAdapter for FailingAdapter {
            fn get(&self, _key: &str) -> Result<Option<String>, AdapterError> {
                Ok(None)
            }
            fn set(&self, _key: &str, _value: &str) -> Result<(), AdapterError> {
                Err(AdapterError::Unavailable("disk full".to_string()))
            }
        }

        let mut store = SettingsStore::new(FailingAdapter);
        store.load();
        let mut editor = TemplateEditor::new();
        editor.begin_create();
        editor.set_name("Reminder 2");
        editor.set_content("<p>Hi</p>");

        let result = editor.save(&mut store);
        assert!(result.is_err());
        // The in-memory collection keeps the edit (no rollback) and the
        // draft is retained for retry.
        assert_eq!(store.templates().len(), 5);
        assert_eq!(editor.draft().name, "Reminder 2");
        assert!(editor.banner().is_visible(Utc::now()));
    }
}
