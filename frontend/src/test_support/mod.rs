#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::home::repository::{ContactDelivery, ContactRepository};
    use crate::pages::home::utils::{ContactError, ContactMessage};
    use crate::theme::ThemeToken;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct RecordingDelivery {
        pub sent: RefCell<Vec<ContactMessage>>,
    }

    impl ContactDelivery for RecordingDelivery {
        fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    pub struct FailingDelivery;

    impl ContactDelivery for FailingDelivery {
        fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Delivery("mailbox unavailable".into()))
        }
    }

    pub fn recording_repository() -> (ContactRepository, Rc<RecordingDelivery>) {
        let delivery = Rc::new(RecordingDelivery::default());
        let repository = ContactRepository::new_with_delivery(delivery.clone());
        (repository, delivery)
    }

    const COLOR_PREFIXES: &[&str] = &[
        "bg-",
        "text-",
        "border-",
        "ring-offset-",
        "ring-",
        "divide-",
        "outline-",
        "placeholder-",
        "from-",
        "via-",
        "to-",
        "fill-",
        "stroke-",
        "shadow-",
        "accent-",
        "caret-",
        "decoration-",
    ];

    const FRAMEWORK_COLORS: &[&str] = &[
        "white", "black", "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber",
        "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet",
        "purple", "fuchsia", "pink", "rose",
    ];

    /// Strips variants (`hover:`) and opacity (`/80`), then the utility prefix.
    fn color_operand(class: &str) -> Option<&str> {
        let base = class.rsplit(':').next().unwrap_or(class);
        let base = base.split('/').next().unwrap_or(base);
        COLOR_PREFIXES
            .iter()
            .find_map(|prefix| base.strip_prefix(prefix))
    }

    pub fn is_framework_color(class: &str) -> bool {
        color_operand(class)
            .map(|operand| {
                let family = operand.split('-').next().unwrap_or(operand);
                FRAMEWORK_COLORS.contains(&family)
            })
            .unwrap_or(false)
    }

    pub fn is_token_color(class: &str) -> bool {
        color_operand(class)
            .and_then(ThemeToken::from_name)
            .is_some()
    }

    #[test]
    fn color_class_classification() {
        assert!(is_framework_color("bg-blue-600"));
        assert!(is_framework_color("hover:text-gray-900"));
        assert!(is_framework_color("bg-white/90"));
        assert!(!is_framework_color("text-sm"));
        assert!(!is_framework_color("bg-primary"));
        assert!(is_token_color("hover:bg-primary/90"));
        assert!(is_token_color("focus:ring-ring"));
        assert!(is_token_color("text-primary-foreground"));
        assert!(!is_token_color("border-b"));
    }
}
