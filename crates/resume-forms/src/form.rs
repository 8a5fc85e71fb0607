//! The guarded section form binding.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use resume_store::{DocumentStore, StoreChange, StoreEvent, SubscriptionId};

use crate::lens::SectionLens;

/// Lifecycle of a form's draft relative to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Draft matches the store (as far as this form knows).
    Idle,
    /// A local edit is being pushed to the store.
    Dirty,
    /// An external replacement is being re-seeded into the draft.
    Syncing,
}

/// One section form's local draft, synchronized with the store both ways.
///
/// All methods take `&self` so the form can be shared (via `Rc`) between
/// the editing code and the store subscription on a single thread. See the
/// crate docs for the two feedback loops this type breaks.
pub struct SectionForm<L: SectionLens> {
    draft: RefCell<L::Payload>,
    state: Cell<FormState>,
    /// Engaged while this form's own edit is being pushed to the store
    /// (self-echo suppression).
    pushing: Cell<bool>,
    /// How many times the draft has been re-seeded from an external store
    /// change. Diagnostic; lets callers (and tests) observe re-seeds firing.
    external_syncs: Cell<u64>,
    _lens: PhantomData<L>,
}

impl<L: SectionLens> SectionForm<L> {
    /// A form seeded from the store's current payload for this section.
    pub fn seeded(store: &DocumentStore) -> Self {
        Self {
            draft: RefCell::new(L::read(&store.snapshot())),
            state: Cell::new(FormState::Idle),
            pushing: Cell::new(false),
            external_syncs: Cell::new(0),
            _lens: PhantomData,
        }
    }

    /// Seed a form and wire its re-seed handler to the store in one step.
    ///
    /// Returns the shared form and the subscription id (for unmount).
    pub fn mounted(store: &mut DocumentStore) -> (Rc<Self>, SubscriptionId) {
        let form = Rc::new(Self::seeded(store));
        let observer = Rc::clone(&form);
        let id = store.subscribe(move |event| observer.handle_store_change(event));
        (form, id)
    }

    /// Clone of the current draft.
    pub fn draft(&self) -> L::Payload {
        self.draft.borrow().clone()
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Number of external re-seeds this form has observed.
    pub fn external_sync_count(&self) -> u64 {
        self.external_syncs.get()
    }

    /// Apply a local edit to the draft and push it into the store.
    ///
    /// The push completes synchronously (Dirty → Idle within this call);
    /// the store notification it raises is ignored by this form's own
    /// re-seed handler.
    pub fn edit(&self, store: &mut DocumentStore, f: impl FnOnce(&mut L::Payload)) {
        {
            let mut draft = self.draft.borrow_mut();
            f(&mut draft);
        }
        self.state.set(FormState::Dirty);
        let payload = self.draft.borrow().clone();

        {
            let _push = EchoGuard::engage(&self.pushing);
            store.update_section(L::wrap(payload));
        }
        self.state.set(FormState::Idle);
    }

    /// Store subscription handler: re-seed the draft on external changes.
    ///
    /// Ignores this form's own echoes and changes that cannot affect its
    /// section (other sections, order, settings). A whole-state replacement
    /// always re-seeds — even over a dirty draft, the restored document is
    /// the authoritative truth.
    pub fn handle_store_change(&self, event: &StoreEvent<'_>) {
        if self.pushing.get() {
            return;
        }
        let relevant = matches!(event.change, StoreChange::ReplaceAll)
            || event.change == StoreChange::Section(L::KEY);
        if !relevant {
            return;
        }

        let incoming = L::read(event.snapshot);
        if *self.draft.borrow() == incoming {
            return;
        }

        self.state.set(FormState::Syncing);
        *self.draft.borrow_mut() = incoming;
        self.state.set(FormState::Idle);
        self.external_syncs.set(self.external_syncs.get() + 1);
        tracing::debug!(section = %L::KEY, "form re-seeded from store");
    }
}

/// Sets the self-echo flag for the duration of a store push; released on
/// drop so a panicking listener cannot leave the form deaf to the store.
struct EchoGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> EchoGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for EchoGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::{PersonalInfoLens, SkillsLens};
    use resume_model::{DocumentSettings, PersonalInfo, SectionOrder, Skill};

    #[test]
    fn edit_pushes_draft_to_store() {
        let mut store = DocumentStore::new();
        let (form, _) = SectionForm::<PersonalInfoLens>::mounted(&mut store);

        form.edit(&mut store, |draft| {
            draft.full_name = Some("Ada".to_string());
        });

        assert_eq!(
            store.document().personal_info.full_name.as_deref(),
            Some("Ada")
        );
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn own_edit_does_not_echo_back() {
        let mut store = DocumentStore::new();
        let (form, _) = SectionForm::<PersonalInfoLens>::mounted(&mut store);

        form.edit(&mut store, |draft| {
            draft.full_name = Some("Ada".to_string());
        });

        // The push raised a notification, but the form's own handler must
        // have skipped it.
        assert_eq!(form.external_sync_count(), 0);
    }

    #[test]
    fn external_replacement_reseeds_draft() {
        let mut store = DocumentStore::new();
        let (form, _) = SectionForm::<PersonalInfoLens>::mounted(&mut store);

        let mut document = store.document().clone();
        document.personal_info = PersonalInfo {
            full_name: Some("Restored".to_string()),
            ..PersonalInfo::default()
        };
        store
            .replace_all(
                document,
                SectionOrder::default_order(),
                DocumentSettings::default(),
            )
            .expect("valid order");

        assert_eq!(form.draft().full_name.as_deref(), Some("Restored"));
        assert_eq!(form.external_sync_count(), 1);
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn foreign_section_updates_are_ignored() {
        let mut store = DocumentStore::new();
        let (personal, _) = SectionForm::<PersonalInfoLens>::mounted(&mut store);
        let (skills, _) = SectionForm::<SkillsLens>::mounted(&mut store);

        skills.edit(&mut store, |draft| {
            draft.push(Skill {
                name: Some("Rust".to_string()),
                level: None,
                keywords: Vec::new(),
            });
        });

        // The skills edit notified, but the personal-info form's section
        // did not change, so it must not have re-seeded.
        assert_eq!(personal.external_sync_count(), 0);
        assert_eq!(skills.external_sync_count(), 0);
    }

    #[test]
    fn external_replacement_wins_over_dirty_draft() {
        let mut store = DocumentStore::new();
        let (form, _) = SectionForm::<PersonalInfoLens>::mounted(&mut store);

        // A draft-only mutation (not yet pushed) that a replacement races.
        form.draft.borrow_mut().full_name = Some("half-typed".to_string());
        form.state.set(FormState::Dirty);

        let mut document = store.document().clone();
        document.personal_info.full_name = Some("Restored".to_string());
        store
            .replace_all(
                document,
                SectionOrder::default_order(),
                DocumentSettings::default(),
            )
            .expect("valid order");

        assert_eq!(form.draft().full_name.as_deref(), Some("Restored"));
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn unmount_stops_reseeding() {
        let mut store = DocumentStore::new();
        let (form, id) = SectionForm::<PersonalInfoLens>::mounted(&mut store);
        store.unsubscribe(id);

        let mut document = store.document().clone();
        document.personal_info.full_name = Some("Restored".to_string());
        store
            .replace_all(
                document,
                SectionOrder::default_order(),
                DocumentSettings::default(),
            )
            .expect("valid order");

        assert_eq!(form.external_sync_count(), 0);
    }
}
