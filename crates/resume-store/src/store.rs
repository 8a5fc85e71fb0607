//! The document store.

use resume_model::{
    DocumentSettings, ResumeDocument, ResumeSnapshot, SectionKey, SectionOrder, SectionPayload,
};

use crate::error::Result;
use crate::event::{StoreChange, StoreEvent};

type Listener = Box<dyn FnMut(&StoreEvent<'_>)>;

/// Handle returned by [`DocumentStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the live editable state and notifies subscribers on change.
///
/// See the crate docs for notification semantics.
pub struct DocumentStore {
    document: ResumeDocument,
    order: SectionOrder,
    settings: DocumentSettings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// A store holding an empty document with the default order and settings.
    pub fn new() -> Self {
        Self::with_state(
            ResumeDocument::default(),
            SectionOrder::default_order(),
            DocumentSettings::default(),
        )
    }

    /// A store seeded with existing state (e.g. a loaded resume).
    pub fn with_state(
        document: ResumeDocument,
        order: SectionOrder,
        settings: DocumentSettings,
    ) -> Self {
        Self {
            document,
            order,
            settings,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Deep, independent copy of the current state.
    pub fn snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot::new(
            self.document.clone(),
            self.order.clone(),
            self.settings.clone(),
        )
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn order(&self) -> &SectionOrder {
        &self.order
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Whether a section is visible (attached to the order).
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.order.contains(key)
    }

    /// Register a change listener. Listeners fire synchronously inside the
    /// mutating call, in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    /// Replace one section's payload. Notifies once; writing a payload equal
    /// to the current one is a no-op.
    pub fn update_section(&mut self, payload: SectionPayload) {
        let key = payload.key();
        if self.document.section(key) == payload {
            return;
        }
        self.document.apply_section(payload);
        tracing::debug!(section = %key, "section updated");
        self.notify(StoreChange::Section(key));
    }

    /// Replace the whole section order after validating it.
    pub fn update_order(&mut self, order: SectionOrder) -> Result<()> {
        order.validate()?;
        if self.order == order {
            return Ok(());
        }
        self.order = order;
        tracing::debug!("section order replaced");
        self.notify(StoreChange::Order);
        Ok(())
    }

    /// Attach a section to the end of the order (make it visible).
    pub fn attach_section(&mut self, key: SectionKey) {
        if self.order.attach(key) {
            tracing::debug!(section = %key, "section attached");
            self.notify(StoreChange::Order);
        }
    }

    /// Detach a section from the order (hide it; its data is kept).
    pub fn detach_section(&mut self, key: SectionKey) {
        if self.order.detach(key) {
            tracing::debug!(section = %key, "section detached");
            self.notify(StoreChange::Order);
        }
    }

    /// Move an attached section to a new position.
    pub fn move_section(&mut self, key: SectionKey, index: usize) {
        if self.order.move_section(key, index) {
            self.notify(StoreChange::Order);
        }
    }

    /// Rename an attached section's display title.
    pub fn rename_section(&mut self, key: SectionKey, title: impl Into<String>) {
        if self.order.set_title(key, title) {
            self.notify(StoreChange::Order);
        }
    }

    /// Replace the document-level settings.
    pub fn update_settings(&mut self, settings: DocumentSettings) {
        if self.settings == settings {
            return;
        }
        self.settings = settings;
        self.notify(StoreChange::Settings);
    }

    /// Atomically replace the entire state and notify once.
    ///
    /// This is the entry point undo/redo uses to apply a restored snapshot:
    /// subscribers observe the replacement as a single change.
    pub fn replace_all(
        &mut self,
        document: ResumeDocument,
        order: SectionOrder,
        settings: DocumentSettings,
    ) -> Result<()> {
        order.validate()?;
        self.document = document;
        self.order = order;
        self.settings = settings;
        tracing::debug!("document state replaced");
        self.notify(StoreChange::ReplaceAll);
        Ok(())
    }

    /// Convenience for applying a whole [`ResumeSnapshot`].
    pub fn replace_with(&mut self, snapshot: &ResumeSnapshot) -> Result<()> {
        self.replace_all(
            snapshot.document.clone(),
            snapshot.order.clone(),
            snapshot.settings.clone(),
        )
    }

    fn notify(&mut self, change: StoreChange) {
        let snapshot = ResumeSnapshot::new(
            self.document.clone(),
            self.order.clone(),
            self.settings.clone(),
        );
        let event = StoreEvent {
            change,
            snapshot: &snapshot,
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_model::{PersonalInfo, Skill};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn personal_info(name: &str) -> SectionPayload {
        SectionPayload::PersonalInfo(PersonalInfo {
            full_name: Some(name.to_string()),
            ..PersonalInfo::default()
        })
    }

    #[test]
    fn update_section_notifies_once() {
        let mut store = DocumentStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.change));

        store.update_section(personal_info("Ada"));
        assert_eq!(
            *seen.borrow(),
            vec![StoreChange::Section(SectionKey::PersonalInfo)]
        );
    }

    #[test]
    fn identical_payload_does_not_notify() {
        let mut store = DocumentStore::new();
        store.update_section(personal_info("Ada"));

        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.update_section(personal_info("Ada"));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn listener_sees_post_mutation_snapshot() {
        let mut store = DocumentStore::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| {
            *sink.borrow_mut() = event.snapshot.document.personal_info.full_name.clone();
        });

        store.update_section(personal_info("Ada"));
        assert_eq!(seen.borrow().as_deref(), Some("Ada"));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = DocumentStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.update_section(personal_info("Ada"));
        store.unsubscribe(id);
        store.update_section(personal_info("Grace"));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn replace_all_notifies_as_single_change() {
        let mut store = DocumentStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.change));

        let mut document = ResumeDocument::default();
        document.personal_info.full_name = Some("Ada".to_string());
        document.skills.push(Skill {
            name: Some("Rust".to_string()),
            level: None,
            keywords: Vec::new(),
        });
        let mut order = SectionOrder::default_order();
        order.attach(SectionKey::Projects);

        store
            .replace_all(document, order, DocumentSettings::default())
            .expect("valid order");

        // One notification, even though document, order, and settings all moved.
        assert_eq!(*seen.borrow(), vec![StoreChange::ReplaceAll]);
        assert!(store.is_visible(SectionKey::Projects));
    }

    #[test]
    fn detach_keeps_section_data() {
        let mut store = DocumentStore::new();
        store.update_section(SectionPayload::Skills(vec![Skill {
            name: Some("Rust".to_string()),
            level: Some(4),
            keywords: Vec::new(),
        }]));

        store.detach_section(SectionKey::Skills);
        assert!(!store.is_visible(SectionKey::Skills));
        assert_eq!(store.document().skills.len(), 1);

        store.attach_section(SectionKey::Skills);
        assert!(store.is_visible(SectionKey::Skills));
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let mut store = DocumentStore::new();
        store.update_section(personal_info("Ada"));
        let snapshot = store.snapshot();

        store.update_section(personal_info("Grace"));
        assert_eq!(
            snapshot.document.personal_info.full_name.as_deref(),
            Some("Ada")
        );
    }
}
