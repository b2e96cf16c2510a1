// File: src/focus.rs
// Purpose: Bring the first invalid field into view after a failed submission

use crate::validation::ValidationErrors;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// Options passed to [`ScrollTarget::scroll_into_view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll, field centered in the viewport
    pub const FIRST_ERROR: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Center,
    };
}

/// A rendered field that the UI layer can scroll into view
pub trait ScrollTarget {
    fn scroll_into_view(&self, options: ScrollOptions);
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &T {
    fn scroll_into_view(&self, options: ScrollOptions) {
        (**self).scroll_into_view(options)
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for Box<T> {
    fn scroll_into_view(&self, options: ScrollOptions) {
        (**self).scroll_into_view(options)
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for Rc<T> {
    fn scroll_into_view(&self, options: ScrollOptions) {
        (**self).scroll_into_view(options)
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for Arc<T> {
    fn scroll_into_view(&self, options: ScrollOptions) {
        (**self).scroll_into_view(options)
    }
}

/// Field name to handle. `None` is a field whose element is not mounted.
pub type FieldRefs<T> = HashMap<String, Option<T>>;

/// Scroll the first field of `errors` into view.
///
/// Only the first error in iteration order is considered. Nothing happens
/// when `errors` is empty or that field has no mounted handle. Returns
/// whether a scroll was requested.
pub fn scroll_to_first_error<T: ScrollTarget>(errors: &ValidationErrors, refs: &FieldRefs<T>) -> bool {
    let Some((field, _)) = errors.first() else {
        return false;
    };

    match refs.get(field) {
        Some(Some(target)) => {
            debug!(field, "scrolling to first invalid field");
            target.scroll_into_view(ScrollOptions::FIRST_ERROR);
            true
        }
        _ => {
            debug!(field, "first invalid field has no mounted element");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<ScrollOptions>>,
    }

    impl ScrollTarget for Recorder {
        fn scroll_into_view(&self, options: ScrollOptions) {
            self.calls.borrow_mut().push(options);
        }
    }

    #[test]
    fn test_scrolls_only_first_error() {
        let email = Rc::new(Recorder::default());
        let name = Rc::new(Recorder::default());

        let mut refs: FieldRefs<Rc<Recorder>> = HashMap::new();
        refs.insert("email".to_string(), Some(Rc::clone(&email)));
        refs.insert("name".to_string(), Some(Rc::clone(&name)));

        let mut errors = ValidationErrors::new();
        errors.set("email", "email is required");
        errors.set("name", "name is required");

        assert!(scroll_to_first_error(&errors, &refs));
        assert_eq!(*email.calls.borrow(), vec![ScrollOptions::FIRST_ERROR]);
        assert!(name.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_errors_is_noop() {
        let target = Recorder::default();
        let mut refs: FieldRefs<&Recorder> = HashMap::new();
        refs.insert("email".to_string(), Some(&target));

        assert!(!scroll_to_first_error(&ValidationErrors::new(), &refs));
        assert!(target.calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_or_unmounted_ref_is_noop() {
        let target = Recorder::default();
        let mut refs: FieldRefs<&Recorder> = HashMap::new();
        refs.insert("name".to_string(), Some(&target));
        refs.insert("phone".to_string(), None);

        let mut errors = ValidationErrors::new();
        errors.set("email", "email is required");
        errors.set("name", "name is required");
        assert!(!scroll_to_first_error(&errors, &refs));

        let mut errors = ValidationErrors::new();
        errors.set("phone", "Please enter a valid phone number");
        assert!(!scroll_to_first_error(&errors, &refs));

        assert!(target.calls.borrow().is_empty());
    }

    #[test]
    fn test_boxed_trait_objects() {
        let target = Rc::new(Recorder::default());
        let mut refs: FieldRefs<Box<dyn ScrollTarget>> = HashMap::new();
        refs.insert("title".to_string(), Some(Box::new(Rc::clone(&target))));

        let mut errors = ValidationErrors::new();
        errors.set("title", "title is required");

        assert!(scroll_to_first_error(&errors, &refs));
        assert_eq!(target.calls.borrow().len(), 1);
    }
}
