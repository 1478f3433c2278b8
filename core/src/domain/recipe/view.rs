//! Presentation state for a single user session.
//!
//! The view owns no I/O. A front end feeds it the outcome of each backend
//! call and asks it which call to make next; the view decides what the user
//! sees. Failures never move the state, they only raise a notification.

use crate::domain::{
    authentication::value_objects::Identity,
    recipe::{
        entities::{GeneratedDraft, Recipe},
        value_objects::{GenerateRecipeInput, SaveRecipeInput, parse_ingredient_list},
    },
};

pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate recipe";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save recipe";
pub const SAVE_SUCCEEDED_MESSAGE: &str = "Recipe saved!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Unauthenticated,
    AuthenticatedIdle,
    AuthenticatedWithDraft(GeneratedDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient toast shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn success(message: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    state: ViewState,
    identity: Option<Identity>,
    saved: Vec<Recipe>,
    notification: Option<Notification>,
}

impl Default for RecipeView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Unauthenticated,
            identity: None,
            saved: Vec::new(),
            notification: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn draft(&self) -> Option<&GeneratedDraft> {
        match &self.state {
            ViewState::AuthenticatedWithDraft(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn saved_recipes(&self) -> &[Recipe] {
        &self.saved
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Clears the current toast once it has been shown.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// A different user signing in starts from a clean view; the previous
    /// user's draft and list are never shown to them.
    pub fn sign_in(&mut self, identity: Identity) {
        if self.identity.as_ref() == Some(&identity) {
            return;
        }

        *self = Self::new();
        self.state = ViewState::AuthenticatedIdle;
        self.identity = Some(identity);
    }

    pub fn sign_out(&mut self) {
        *self = Self::new();
    }

    /// Request to issue for the ingredient text typed in the form, if the
    /// form is currently shown.
    pub fn submit_generation(&self, ingredients_text: &str) -> Option<GenerateRecipeInput> {
        if self.state == ViewState::Unauthenticated {
            return None;
        }

        Some(GenerateRecipeInput {
            ingredients: parse_ingredient_list(ingredients_text),
        })
    }

    /// Request to issue when the user confirms the displayed draft.
    pub fn confirm_save(&self) -> Option<SaveRecipeInput> {
        self.draft().cloned().map(SaveRecipeInput::from)
    }

    pub fn generation_succeeded(&mut self, draft: GeneratedDraft) {
        if self.state == ViewState::Unauthenticated {
            return;
        }
        self.state = ViewState::AuthenticatedWithDraft(draft);
    }

    pub fn generation_failed(&mut self) {
        self.notification = Some(Notification::error(GENERATE_FAILED_MESSAGE));
    }

    /// `recipes` is the list re-fetched after the save completed.
    pub fn save_succeeded(&mut self, recipes: Vec<Recipe>) {
        if self.state == ViewState::Unauthenticated {
            return;
        }
        self.state = ViewState::AuthenticatedIdle;
        self.saved = recipes;
        self.notification = Some(Notification::success(SAVE_SUCCEEDED_MESSAGE));
    }

    pub fn save_failed(&mut self) {
        self.notification = Some(Notification::error(SAVE_FAILED_MESSAGE));
    }

    pub fn recipes_loaded(&mut self, recipes: Vec<Recipe>) {
        if self.state == ViewState::Unauthenticated {
            return;
        }
        self.saved = recipes;
    }
}
