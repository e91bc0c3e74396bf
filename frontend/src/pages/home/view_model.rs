use super::repository::ContactRepository;
use super::utils::{validate_contact, ContactError, SUCCESS_MESSAGE};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ContactFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
        }
    }
}

impl ContactFormState {
    pub fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.message.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: ContactFormState,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    repository: StoredValue<ContactRepository>,
}

impl ContactViewModel {
    pub fn new(repository: ContactRepository) -> Self {
        Self {
            form: ContactFormState::default(),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            repository: store_value(repository),
        }
    }

    /// Validates and delivers the current form. Exactly one of `error` and
    /// `success` is set afterwards.
    pub fn submit(&self) -> Result<(), ContactError> {
        let result = validate_contact(
            &self.form.name.get_untracked(),
            &self.form.email.get_untracked(),
            &self.form.message.get_untracked(),
        )
        .and_then(|message| self.repository.with_value(|repo| repo.send(&message)));

        match &result {
            Ok(()) => {
                self.error.set(None);
                self.success.set(Some(SUCCESS_MESSAGE.to_string()));
                self.form.clear();
            }
            Err(err) => {
                self.success.set(None);
                self.error.set(Some(err.to_string()));
            }
        }
        result
    }
}

pub fn use_contact_view_model() -> ContactViewModel {
    let repository = use_context::<ContactRepository>().unwrap_or_default();
    ContactViewModel::new(repository)
}
