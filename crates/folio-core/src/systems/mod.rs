pub mod back_to_top;
pub mod contact_form;
pub mod glow;
pub mod images;
pub mod menu;
pub mod navigation;
pub mod ready;
pub mod reveal;
pub mod skills;
pub mod toast;
