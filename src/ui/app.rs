use crate::nav::{normalize_location, NavEvent, NavigationController, Screen};
use crate::ui::location::{LocationIntent, LocationPromptState, LocationReducer};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal host around the navigation controller.
pub struct App {
    should_quit: bool,
    controller: NavigationController,
    /// Last location that matched a route.
    location: String,
    /// Last location that matched nothing, shown in the prompt line.
    unmatched: Option<String>,
    prompt: LocationPromptState,
}

impl App {
    pub fn new(controller: NavigationController) -> Self {
        Self {
            should_quit: false,
            controller,
            location: String::new(),
            unmatched: None,
            prompt: LocationPromptState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a location change to the controller.
    pub fn navigate(&mut self, location: &str) -> Option<Screen> {
        let screen = self.controller.dispatch(location);
        if screen.is_some() {
            self.location = normalize_location(location).to_string();
            self.unmatched = None;
        } else {
            self.unmatched = Some(location.to_string());
        }
        screen
    }

    pub fn on_nav_event(&mut self, event: NavEvent) {
        self.controller.on_event(event);
    }

    pub fn dispatch_location(&mut self, intent: LocationIntent) {
        dispatch_mvi!(self, prompt, LocationReducer, intent);
        if let Some(location) = self.prompt.take_submitted() {
            self.navigate(&location);
        }
    }

    pub fn open_prompt(&mut self) {
        let current = self.location.clone();
        self.dispatch_location(LocationIntent::Open { current });
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn unmatched(&self) -> Option<&str> {
        self.unmatched.as_deref()
    }

    pub fn prompt(&self) -> &LocationPromptState {
        &self.prompt
    }
}
