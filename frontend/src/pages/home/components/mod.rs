pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod testimonials;
