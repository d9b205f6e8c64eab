//! One module per page behaviour. Each `install` looks up its elements once,
//! applies the initial state and registers its listeners on the `Page`.

pub mod back_to_top;
pub mod contact_form;
pub mod glow;
pub mod images;
pub mod navigation;
pub mod ready;
pub mod reveal;
pub mod skills;
pub mod toast;
